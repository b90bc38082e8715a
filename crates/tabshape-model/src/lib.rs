pub mod catalog;
pub mod error;
pub mod fields;
pub mod processing;
pub mod table;

pub use catalog::FieldCatalog;
pub use error::CatalogError;
pub use fields::{CustomField, FieldKind, FieldSelection, FieldType};
pub use processing::ProcessingResult;
pub use table::{Cell, ProjectedTable, format_numeric};
