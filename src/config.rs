//! Configuration handling for csvdata

use std::path::PathBuf;

use crate::error::Result;
use crate::model::{FieldMappings, Table};

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// How a table is loaded and arranged before it is queried
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the source file
    pub file: PathBuf,
    /// Header renames applied to every row
    pub mappings: FieldMappings,
    /// Field to sort by after loading
    pub sort_by: Option<String>,
    /// Sort descending
    pub reverse: bool,
    /// Reject sorting a column that mixes value kinds
    pub strict_sort: bool,
    /// Output format
    pub output_format: OutputFormat,
}

impl Config {
    /// Create a new Config for a file
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            ..Default::default()
        }
    }

    /// Set header renames
    pub fn with_mappings(mut self, mappings: FieldMappings) -> Self {
        self.mappings = mappings;
        self
    }

    /// Set sort field and direction
    pub fn with_sort_by(mut self, field: impl Into<String>, reverse: bool) -> Self {
        self.sort_by = Some(field.into());
        self.reverse = reverse;
        self
    }

    pub fn with_strict_sort(mut self, strict: bool) -> Self {
        self.strict_sort = strict;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Load the configured file and apply the requested sort
    pub fn open(&self) -> Result<Table> {
        let mut table = Table::load_with_mappings(&self.file, &self.mappings)?;

        if let Some(ref field) = self.sort_by {
            if self.strict_sort {
                table.sort_strict(field, self.reverse)?;
            } else {
                table.sort(field, self.reverse)?;
            }
        }

        Ok(table)
    }
}
