use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn csvdata() -> Command {
    Command::cargo_bin("csvdata").unwrap()
}

#[test]
fn test_info() {
    let file = write_file("a,b,c\n1,2,none\nx,5.5,z\n");
    csvdata()
        .arg(file.path())
        .arg("--info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fields: a, b, c"))
        .stdout(predicate::str::contains("Rows:   2"));
}

#[test]
fn test_json_field_query() {
    let file = write_file("a,b,c\n1,2,none\nx,5.5,z\n");
    let output = csvdata()
        .arg(file.path())
        .args(["--field", "a", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!([1.0, "x"]));
}

#[test]
fn test_json_sorted_cell() {
    let file = write_file("k,v\n2,b\n1,a\n");
    let output = csvdata()
        .arg(file.path())
        .args(["--sort-by", "k", "-i", "0", "-f", "v", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!("a"));
}

#[test]
fn test_mapped_table_output() {
    let file = write_file("pos x,label\n0.5,p\n");
    csvdata()
        .arg(file.path())
        .args(["--map", "pos x=pos_x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pos_x"))
        .stdout(predicate::str::contains("0.5"));
}

#[test]
fn test_index_out_of_range() {
    let file = write_file("a\n1\n");
    csvdata()
        .arg(file.path())
        .args(["--index", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_negative_index_rejected() {
    let file = write_file("a\n1\n");
    csvdata()
        .arg(file.path())
        .args(["--index", "-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative index"));
}

#[test]
fn test_shape_error() {
    let file = write_file("a,b\n1\n");
    csvdata()
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected 2 fields, found 1"));
}

#[test]
fn test_missing_file() {
    csvdata()
        .arg("does-not-exist.csv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_json_infinity_is_not_null() {
    let file = write_file("a,b\ninf,none\n");
    let output = csvdata()
        .arg(file.path())
        .args(["--index", "0", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"a": "inf", "b": null}));
}
