//! csvdata - Typed access to CSV-like tabular data
//!
//! Loads a header row and data rows from comma-delimited text, coerces each cell to a
//! float, a string or null, and offers index/field queries and sorting over the rows.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod query;

pub use config::Config;
pub use error::{CsvDataError, Result};
pub use model::{FieldMappings, FieldValue, Row, Table};
pub use query::{Data, Fields, Indices};
