//! Error types for tabular file loading.
//!
//! Nothing lower-level (io, csv, calamine) crosses the crate boundary
//! undecorated: every failure is converted into one of these kinds at the
//! point where it occurs.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised before a table is structurally available.
#[derive(Debug, Error)]
pub enum FileReadError {
    /// Input path does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Input path exists but is not a regular file.
    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Extension outside the supported set.
    #[error("unsupported file extension '{extension}' for {path} (expected .xlsx, .xls or .csv)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// Underlying filesystem read failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Spreadsheet parsing failed.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },
}

/// Structural problems detected after a successful read.
#[derive(Debug, Error)]
pub enum DataValidationError {
    /// The file produced no table at all.
    #[error("no data in {path}")]
    Empty { path: PathBuf },

    /// A table with zero columns.
    #[error("no columns in {path}")]
    NoColumns { path: PathBuf },

    /// A header row with no data rows under it.
    #[error("no data rows in {path}")]
    NoRows { path: PathBuf },

    /// Two or more columns share a name (case-sensitive).
    #[error("duplicate column names in {}: {}", .path.display(), .names.join(", "))]
    DuplicateColumns { path: PathBuf, names: Vec<String> },
}

/// Any failure a load can produce.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] FileReadError),
    #[error(transparent)]
    Validation(#[from] DataValidationError),
}

/// Result type for loading operations.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;
