//! Table loading, row access and sorting

use std::ops::Index;
use std::path::Path;

use tracing::debug;

use super::mapping::FieldMappings;
use super::row::Row;
use super::value::FieldValue;
use crate::error::{CsvDataError, Result};

/// Headers plus typed rows, loaded once from comma-delimited text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Header names exactly as they appear in the first line
    fields: Vec<String>,
    /// Data rows, in file order until sorted
    rows: Vec<Row>,
}

impl Table {
    /// Load a file without remapping any headers
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mappings(path, &FieldMappings::default())
    }

    /// Load a file, exposing each header under its mapped name.
    ///
    /// The whole file is read before parsing; nothing is returned unless every row matches
    /// the header's width.
    pub fn load_with_mappings(path: impl AsRef<Path>, mappings: &FieldMappings) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CsvDataError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_text(&text, mappings)?;
        debug!(
            path = %path.display(),
            fields = table.fields.len(),
            rows = table.rows.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse in-memory text. Every line is one record and is split on every comma; quotes
    /// carry no meaning. A blank line is a record with no cells.
    pub fn from_text(text: &str, mappings: &FieldMappings) -> Result<Self> {
        let mut lines = text.lines().zip(1u64..);

        let fields: Vec<String> = match lines.next() {
            Some((header, _)) => split_cells(header).into_iter().map(str::to_string).collect(),
            None => return Ok(Self::default()),
        };

        let mut rows = Vec::new();
        for (record, line) in lines {
            let cells = split_cells(record);
            let row = Row::new(&cells, &fields, mappings).map_err(|e| e.at_line(line))?;
            rows.push(row);
        }

        Ok(Self { fields, rows })
    }

    /// Original header names
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether `name` is one of the original headers. Mapped accessor names are not
    /// consulted.
    pub fn field_exists(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by 0-based index
    pub fn get_row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(CsvDataError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Every row's value for one field, in row order
    pub fn column(&self, field: &str) -> Result<Vec<&FieldValue>> {
        self.rows.iter().map(|row| row.get_field(field)).collect()
    }

    /// A single cell
    pub fn value(&self, index: usize, field: &str) -> Result<&FieldValue> {
        self.get_row(index)?.get_field(field)
    }

    /// Stable in-place sort on one field.
    ///
    /// Mixed columns are ordered `null < float < string`. With `reverse` the order is
    /// descending and rows with equal keys keep their relative order.
    pub fn sort(&mut self, field: &str, reverse: bool) -> Result<()> {
        self.check_sort_field(field)?;
        self.sort_rows(field, reverse);
        Ok(())
    }

    /// Like [`Table::sort`], but refuses to order a column holding more than one kind of
    /// value.
    pub fn sort_strict(&mut self, field: &str, reverse: bool) -> Result<()> {
        self.check_sort_field(field)?;

        let mut kinds = self.rows.iter().filter_map(|row| row.get(field)).map(FieldValue::kind);
        if let Some(first) = kinds.next() {
            if let Some(other) = kinds.find(|k| *k != first) {
                let (left, right) = if first < other {
                    (first, other)
                } else {
                    (other, first)
                };
                return Err(CsvDataError::Comparison {
                    field: field.to_string(),
                    left: left.name(),
                    right: right.name(),
                });
            }
        }

        self.sort_rows(field, reverse);
        Ok(())
    }

    fn check_sort_field(&self, field: &str) -> Result<()> {
        match self.rows.iter().find(|row| !row.contains(field)) {
            Some(_) => Err(CsvDataError::AttributeNotFound(field.to_string())),
            None => Ok(()),
        }
    }

    fn sort_rows(&mut self, field: &str, reverse: bool) {
        self.rows.sort_by(|a, b| {
            let ord = a
                .get(field)
                .zip(b.get(field))
                .map_or(std::cmp::Ordering::Equal, |(x, y)| x.total_cmp(y));
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        });
        debug!(field, reverse, rows = self.rows.len(), "sorted table");
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    if line.is_empty() {
        Vec::new()
    } else {
        line.split(',').collect()
    }
}

impl Index<usize> for Table {
    type Output = Row;

    /// Shorthand for [`Table::get_row`]; panics when out of range
    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
