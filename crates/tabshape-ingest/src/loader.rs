//! Loading session: path checks, validation, header normalization, and
//! accessors over the currently loaded table.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::error::{DataValidationError, FileReadError, Result};
use crate::reader::{read_csv_table, read_spreadsheet_table};
use crate::table::DataTable;

/// File extensions the loader accepts (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Row count used for previews when the caller does not pick one.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Basic shape information about the loaded table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub rows: usize,
    pub columns: usize,
    pub path: Option<PathBuf>,
    pub headers: Vec<String>,
}

/// Holds at most one loaded table at a time and hands out copies of it.
///
/// `full_table` and `preview` return defensive copies: callers may mutate
/// what they receive without corrupting the loader's state.
#[derive(Debug, Default)]
pub struct TabularLoader {
    table: Option<DataTable>,
    path: Option<PathBuf>,
}

impl TabularLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a tabular file, replacing any previously loaded table.
    ///
    /// Returns the normalized header list on success. On failure the
    /// previously loaded table is left in place untouched.
    pub fn load(&mut self, path: &Path) -> Result<Vec<String>> {
        let start = Instant::now();
        if !path.exists() {
            return Err(FileReadError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !path.is_file() {
            return Err(FileReadError::NotAFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let mut table = match extension.as_str() {
            "csv" => read_csv_table(path)?,
            "xlsx" | "xls" => read_spreadsheet_table(path)?,
            _ => {
                return Err(FileReadError::UnsupportedExtension {
                    path: path.to_path_buf(),
                    extension,
                }
                .into());
            }
        };

        normalize_headers(&mut table.headers);
        validate_table(&table, path)?;

        info!(
            path = %path.display(),
            rows = table.height(),
            columns = table.width(),
            duration_ms = start.elapsed().as_millis(),
            "file loaded"
        );
        self.table = Some(table);
        self.path = Some(path.to_path_buf());
        Ok(self.headers())
    }

    /// Normalized headers of the loaded table, empty when nothing is loaded.
    pub fn headers(&self) -> Vec<String> {
        self.table
            .as_ref()
            .map(|t| t.headers.clone())
            .unwrap_or_default()
    }

    /// Copy of the first `rows` rows, `None` when nothing is loaded.
    pub fn preview(&self, rows: usize) -> Option<DataTable> {
        self.table.as_ref().map(|t| t.head(rows))
    }

    /// Defensive copy of the whole table, `None` when nothing is loaded.
    pub fn full_table(&self) -> Option<DataTable> {
        self.table.clone()
    }

    pub fn info(&self) -> TableInfo {
        match &self.table {
            Some(table) => TableInfo {
                rows: table.height(),
                columns: table.width(),
                path: self.path.clone(),
                headers: table.headers.clone(),
            },
            None => TableInfo::default(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.table.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Drop the loaded table and path.
    pub fn clear(&mut self) {
        self.table = None;
        self.path = None;
    }
}

/// Replace blank or placeholder labels with positional `Column<N>` names.
///
/// `Unnamed: N` labels appear in files that were round-tripped through
/// pandas-based tools; they are as meaningless as a blank label.
fn normalize_headers(headers: &mut [String]) {
    for (idx, header) in headers.iter_mut().enumerate() {
        let trimmed = header.trim().to_string();
        *header = if trimmed.is_empty() || trimmed.starts_with("Unnamed:") {
            format!("Column{}", idx + 1)
        } else {
            trimmed
        };
    }
}

fn validate_table(table: &DataTable, path: &Path) -> Result<(), DataValidationError> {
    if table.is_empty() {
        return Err(DataValidationError::Empty {
            path: path.to_path_buf(),
        });
    }
    if table.headers.is_empty() {
        return Err(DataValidationError::NoColumns {
            path: path.to_path_buf(),
        });
    }
    if table.rows.is_empty() {
        return Err(DataValidationError::NoRows {
            path: path.to_path_buf(),
        });
    }
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for header in &table.headers {
        if !seen.insert(header.as_str()) && !duplicates.contains(header) {
            duplicates.push(header.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(DataValidationError::DuplicateColumns {
            path: path.to_path_buf(),
            names: duplicates,
        });
    }
    Ok(())
}
