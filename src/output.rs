//! Output formatting for query results

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::OutputFormat;
use crate::query::Data;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a query result to a writer
    fn render(&self, data: &Data<'_>, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableOutput),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, data: &Data<'_>, writer: &mut dyn Write) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

/// Box-drawn text table
pub struct TableOutput;

impl OutputFormatter for TableOutput {
    fn render(&self, data: &Data<'_>, writer: &mut dyn Write) -> Result<()> {
        let mut builder = Builder::default();
        if let Some(header) = header_of(data) {
            builder.push_record(header);
        }
        for record in records_of(data) {
            builder.push_record(record);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

/// Row keys become the header when the result holds rows
fn header_of(data: &Data<'_>) -> Option<Vec<String>> {
    let row = match data {
        Data::Row(row) => *row,
        Data::List(items) => items.first().and_then(Data::as_row)?,
        Data::Value(_) => return None,
    };
    Some(row.keys().map(str::to_string).collect())
}

fn records_of(data: &Data<'_>) -> Vec<Vec<String>> {
    match data {
        Data::List(items) => items.iter().map(cells_of).collect(),
        single => vec![cells_of(single)],
    }
}

fn cells_of(data: &Data<'_>) -> Vec<String> {
    match data {
        Data::Value(value) => vec![value.to_string()],
        Data::Row(row) => row.values().map(ToString::to_string).collect(),
        Data::List(items) => items.iter().flat_map(cells_of).collect(),
    }
}
