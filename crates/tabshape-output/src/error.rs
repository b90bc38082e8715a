//! Error types for export writing.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while serializing a projected table to disk.
///
/// Callers going through [`crate::write_projection`] never see these; that
/// boundary folds them into a failed `ProcessingResult`.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Underlying filesystem write failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Workbook serialization failed.
    #[error("failed to write workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },
}
