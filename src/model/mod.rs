//! Data model for typed tabular data

mod mapping;
mod row;
mod table;
mod value;

pub use mapping::FieldMappings;
pub use row::Row;
pub use table::Table;
pub use value::{FieldKind, FieldValue};
