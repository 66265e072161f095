//! Error types for loading and querying tabular data

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or querying a [`Table`](crate::model::Table)
#[derive(Error, Debug)]
pub enum CsvDataError {
    /// The source file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    /// A data row has a different number of cells than the header row
    #[error("{}expected {expected} fields, found {found}", line_prefix(.line))]
    ShapeMismatch {
        line: Option<u64>,
        expected: usize,
        found: usize,
    },

    /// Malformed selector passed to a query
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} is out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// No field with this accessor name exists on the row
    #[error("No field named '{0}'")]
    AttributeNotFound(String),

    /// Two values of different kinds were compared during a strict sort
    #[error("Cannot order field '{field}': {left} is not comparable with {right}")]
    Comparison {
        field: String,
        left: &'static str,
        right: &'static str,
    },
}

impl CsvDataError {
    /// Attach the source line to a shape error
    pub fn at_line(self, line: u64) -> Self {
        match self {
            CsvDataError::ShapeMismatch {
                expected, found, ..
            } => CsvDataError::ShapeMismatch {
                line: Some(line),
                expected,
                found,
            },
            other => other,
        }
    }
}

fn line_prefix(line: &Option<u64>) -> String {
    line.map(|l| format!("line {l}: ")).unwrap_or_default()
}

/// Result type alias for csvdata operations
pub type Result<T> = std::result::Result<T, CsvDataError>;
