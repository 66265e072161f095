//! Index/field selection over a loaded table

use serde::Serialize;
use serde_json::Value;

use crate::error::{CsvDataError, Result};
use crate::model::{FieldValue, Row, Table};

/// Which rows a query selects
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Indices {
    #[default]
    None,
    One(f64),
    Many(Vec<f64>),
}

impl Indices {
    /// Accept a JSON number, an array of numbers, or null
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Indices::None),
            Value::Number(n) => n.as_f64().map(Indices::One).ok_or_else(invalid_indices),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_f64().ok_or_else(invalid_indices))
                .collect::<Result<Vec<_>>>()
                .map(Indices::Many),
            _ => Err(invalid_indices()),
        }
    }

    /// Truncate every index toward zero. Negative and non-finite indices are rejected.
    pub fn normalize(&self) -> Result<Vec<usize>> {
        match self {
            Indices::None => Ok(Vec::new()),
            Indices::One(i) => Ok(vec![truncate_index(*i)?]),
            Indices::Many(items) => items.iter().map(|i| truncate_index(*i)).collect(),
        }
    }
}

fn truncate_index(index: f64) -> Result<usize> {
    if !index.is_finite() {
        return Err(CsvDataError::InvalidArgument(format!(
            "index {index} is not a finite number"
        )));
    }
    let truncated = index.trunc();
    if truncated < 0.0 {
        return Err(CsvDataError::InvalidArgument(format!(
            "negative index {index} is not supported"
        )));
    }
    Ok(truncated as usize)
}

fn invalid_indices() -> CsvDataError {
    CsvDataError::InvalidArgument(
        "indices must be a number or a list of numbers".to_string(),
    )
}

impl From<usize> for Indices {
    fn from(i: usize) -> Self {
        Indices::One(i as f64)
    }
}

impl From<f64> for Indices {
    fn from(i: f64) -> Self {
        Indices::One(i)
    }
}

impl From<Vec<usize>> for Indices {
    fn from(items: Vec<usize>) -> Self {
        Indices::Many(items.into_iter().map(|i| i as f64).collect())
    }
}

impl From<&[usize]> for Indices {
    fn from(items: &[usize]) -> Self {
        Indices::Many(items.iter().map(|&i| i as f64).collect())
    }
}

impl From<Vec<f64>> for Indices {
    fn from(items: Vec<f64>) -> Self {
        Indices::Many(items)
    }
}

/// Which fields a query selects, by accessor name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fields {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Fields {
    /// Accept a JSON string, an array of strings, or null
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Fields::None),
            Value::String(s) => Ok(Fields::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        CsvDataError::InvalidArgument(
                            "fields must be a string or a list of strings".to_string(),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Fields::Many),
            _ => Err(CsvDataError::InvalidArgument(
                "fields must be a string or a list of strings".to_string(),
            )),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Fields::None => &[],
            Fields::One(name) => std::slice::from_ref(name),
            Fields::Many(names) => names,
        }
    }
}

impl From<&str> for Fields {
    fn from(name: &str) -> Self {
        Fields::One(name.to_string())
    }
}

impl From<String> for Fields {
    fn from(name: String) -> Self {
        Fields::One(name)
    }
}

impl From<Vec<String>> for Fields {
    fn from(names: Vec<String>) -> Self {
        Fields::Many(names)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(names: Vec<&str>) -> Self {
        Fields::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Fields {
    fn from(names: &[&str]) -> Self {
        Fields::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Result of [`Table::get_data`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data<'a> {
    Value(&'a FieldValue),
    Row(&'a Row),
    List(Vec<Data<'a>>),
}

impl<'a> Data<'a> {
    /// A one-element list becomes its element
    fn collapse(mut items: Vec<Data<'a>>) -> Self {
        if items.len() == 1 {
            items.remove(0)
        } else {
            Data::List(items)
        }
    }

    pub fn as_value(&self) -> Option<&'a FieldValue> {
        match self {
            Data::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_row(&self) -> Option<&'a Row> {
        match self {
            Data::Row(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Data<'a>]> {
        match self {
            Data::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Table {
    /// Select values by row index, field name, or both.
    ///
    /// - indices and fields: per index, the field's value (one field) or the list of values
    /// - indices only: the rows
    /// - fields only: the same per-row selection over every row
    /// - neither: every row
    ///
    /// A result holding exactly one element is returned as that element.
    pub fn get_data(
        &self,
        indices: impl Into<Indices>,
        fields: impl Into<Fields>,
    ) -> Result<Data<'_>> {
        let indices: Indices = indices.into();
        let indices = indices.normalize()?;
        let fields: Fields = fields.into();
        let fields = fields.as_slice();

        let items = match (indices.is_empty(), fields.is_empty()) {
            (false, false) => indices
                .iter()
                .map(|&i| select_fields(self.get_row(i)?, fields))
                .collect::<Result<Vec<_>>>()?,
            (false, true) => indices
                .iter()
                .map(|&i| self.get_row(i).map(Data::Row))
                .collect::<Result<Vec<_>>>()?,
            (true, false) => self
                .iter()
                .map(|row| select_fields(row, fields))
                .collect::<Result<Vec<_>>>()?,
            (true, true) => self.iter().map(Data::Row).collect(),
        };

        Ok(Data::collapse(items))
    }
}

fn select_fields<'a>(row: &'a Row, fields: &[String]) -> Result<Data<'a>> {
    match fields {
        [single] => row.get_field(single).map(Data::Value),
        _ => fields
            .iter()
            .map(|name| row.get_field(name).map(Data::Value))
            .collect::<Result<Vec<_>>>()
            .map(Data::List),
    }
}
