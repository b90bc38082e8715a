//! Error types for catalog mutations.

use thiserror::Error;

/// Errors from field catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A field with this name already exists among the original headers or
    /// the custom fields.
    #[error("field name '{name}' already exists")]
    NameCollision { name: String },

    /// Custom field names must be non-empty after trimming.
    #[error("field name must not be empty")]
    EmptyName,
}
