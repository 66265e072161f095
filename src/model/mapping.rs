//! Header-to-accessor name remapping

use rustc_hash::FxHashMap;

use crate::error::{CsvDataError, Result};

/// Renames source headers to the names rows expose them under.
///
/// Headers without an entry keep their original name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMappings {
    names: FxHashMap<String, String>,
}

impl FieldMappings {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `header` to `accessor`
    pub fn with(mut self, header: impl Into<String>, accessor: impl Into<String>) -> Self {
        self.insert(header, accessor);
        self
    }

    pub fn insert(&mut self, header: impl Into<String>, accessor: impl Into<String>) {
        self.names.insert(header.into(), accessor.into());
    }

    /// Parse `header=accessor` pairs
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let mut mappings = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((header, accessor)) if !header.is_empty() && !accessor.is_empty() => {
                    mappings.insert(header, accessor);
                }
                _ => {
                    return Err(CsvDataError::InvalidArgument(format!(
                        "mapping '{pair}' must have the form HEADER=NAME"
                    )));
                }
            }
        }
        Ok(mappings)
    }

    /// The accessor name for a header
    pub fn resolve<'a>(&'a self, header: &'a str) -> &'a str {
        self.names.get(header).map_or(header, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMappings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mappings = Self::new();
        for (header, accessor) in iter {
            mappings.insert(header, accessor);
        }
        mappings
    }
}
