//! csvdata - Query CSV-like tabular data from the command line

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use csvdata::config::{Config, OutputFormat};
use csvdata::model::FieldMappings;
use csvdata::output::OutputFactory;
use csvdata::query::{Fields, Indices};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Query rows and fields of a CSV-like file
#[derive(Parser, Debug)]
#[command(name = "csvdata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read; the first line holds the field names
    file: PathBuf,

    /// Expose a header under another name (HEADER=NAME, comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    map: Vec<String>,

    /// Row index or indices to select (comma-separated)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    index: Vec<f64>,

    /// Field or fields to select, by exposed name (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    field: Vec<String>,

    /// Sort rows by this field before selecting
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort_by")]
    reverse: bool,

    /// Fail instead of ordering a column that mixes numbers, strings and nulls
    #[arg(long, requires = "sort_by")]
    strict_sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Only print the field names and row count
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new(cli.file.clone())
        .with_mappings(FieldMappings::parse_pairs(&cli.map)?)
        .with_strict_sort(cli.strict_sort)
        .with_output_format(cli.format.into());
    if let Some(field) = cli.sort_by {
        config = config.with_sort_by(field, cli.reverse);
    }

    let table = config
        .open()
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;

    if cli.info {
        println!("File:   {}", cli.file.display());
        println!("Fields: {}", table.fields().join(", "));
        println!("Rows:   {}", table.row_count());
        return Ok(());
    }

    let indices = match cli.index.len() {
        0 => Indices::None,
        1 => Indices::One(cli.index[0]),
        _ => Indices::Many(cli.index),
    };
    let fields = match cli.field.len() {
        0 => Fields::None,
        1 => Fields::from(cli.field[0].as_str()),
        _ => Fields::Many(cli.field),
    };

    let data = table.get_data(indices, fields)?;

    let formatter = OutputFactory::create(config.output_format);
    let mut stdout = std::io::stdout();
    formatter.render(&data, &mut stdout)
}
