//! A single typed record

use indexmap::IndexMap;
use serde::Serialize;

use super::mapping::FieldMappings;
use super::value::FieldValue;
use crate::error::{CsvDataError, Result};

/// One data record: field values keyed by accessor name, in header order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: IndexMap<String, FieldValue>,
}

impl Row {
    /// Build a row from raw cells.
    ///
    /// Each cell is coerced with [`FieldValue::coerce`] and stored under the header's mapped
    /// name. Fails with [`CsvDataError::ShapeMismatch`] when the cell count differs from the
    /// header count.
    pub fn new<S: AsRef<str>>(
        cells: &[S],
        headers: &[String],
        mappings: &FieldMappings,
    ) -> Result<Self> {
        if cells.len() != headers.len() {
            return Err(CsvDataError::ShapeMismatch {
                line: None,
                expected: headers.len(),
                found: cells.len(),
            });
        }

        let fields = headers
            .iter()
            .zip(cells)
            .map(|(header, cell)| {
                (
                    mappings.resolve(header).to_string(),
                    FieldValue::coerce(cell.as_ref()),
                )
            })
            .collect();

        Ok(Self { fields })
    }

    /// Look up a field by accessor name
    pub fn get_field(&self, name: &str) -> Result<&FieldValue> {
        self.fields
            .get(name)
            .ok_or_else(|| CsvDataError::AttributeNotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Accessor names in header order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_coerces_cells() {
        let row = Row::new(&["1", "2", "none"], &headers(&["a", "b", "c"]), &FieldMappings::new())
            .unwrap();

        assert_eq!(row.get_field("a").unwrap(), &FieldValue::Float(1.0));
        assert_eq!(row.get_field("b").unwrap(), &FieldValue::Float(2.0));
        assert!(row.get_field("c").unwrap().is_null());
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Row::new(&["1", "2"], &headers(&["a", "b", "c"]), &FieldMappings::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CsvDataError::ShapeMismatch {
                line: None,
                expected: 3,
                found: 2
            }
        ));

        let err = Row::new(&["1", "2", "3", "4"], &headers(&["a", "b", "c"]), &FieldMappings::new())
            .unwrap_err();
        assert!(matches!(err, CsvDataError::ShapeMismatch { found: 4, .. }));
    }

    #[test]
    fn test_mapped_names() {
        let mappings = FieldMappings::new().with("pos x", "pos_x");
        let row = Row::new(&["0.5", "y"], &headers(&["pos x", "label"]), &mappings).unwrap();

        assert_eq!(row.get_field("pos_x").unwrap(), &FieldValue::Float(0.5));
        assert!(!row.contains("pos x"));
        assert_eq!(row.get_field("label").unwrap(), &FieldValue::from("y"));
    }

    #[test]
    fn test_unknown_field() {
        let row = Row::new(&["1"], &headers(&["a"]), &FieldMappings::new()).unwrap();
        let err = row.get_field("missing").unwrap_err();
        assert!(matches!(err, CsvDataError::AttributeNotFound(name) if name == "missing"));
    }

    #[test]
    fn test_serialize_as_object() {
        let row = Row::new(&["1", "x"], &headers(&["b", "a"]), &FieldMappings::new()).unwrap();
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"b":1.0,"a":"x"}"#);
    }
}
