//! Serialize projected tables to disk.
//!
//! The destination extension picks the format: `.csv` (case-insensitive)
//! writes UTF-8 delimited text with a byte-order marker so spreadsheet
//! tools open CJK content correctly; any other or absent extension writes
//! an xlsx workbook. Neither format carries a row-index column, and the
//! header row is always present.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rust_xlsxwriter::Workbook;
use tracing::info;

use tabshape_model::{Cell, ProcessingResult, ProjectedTable};

use crate::error::WriteError;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write a projected table and report the outcome.
///
/// `warnings` are the coercion notes gathered during projection; they ride
/// along on the successful result. Any write failure is caught here and
/// converted into `ProcessingResult { success: false }`; nothing propagates
/// past this boundary.
pub fn write_projection(
    table: &ProjectedTable,
    warnings: Vec<String>,
    destination: &Path,
) -> ProcessingResult {
    match write_table(table, destination) {
        Ok(()) => ProcessingResult::completed(destination.to_path_buf(), table.height(), warnings),
        Err(error) => ProcessingResult::failed(error.to_string()),
    }
}

/// Write a projected table, dispatching on the destination extension.
pub fn write_table(table: &ProjectedTable, destination: &Path) -> Result<(), WriteError> {
    let start = Instant::now();
    let extension = destination
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if extension == "csv" {
        write_csv(table, destination)?;
    } else {
        write_workbook(table, destination)?;
    }
    info!(
        path = %destination.display(),
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "table written"
    );
    Ok(())
}

fn write_csv(table: &ProjectedTable, destination: &Path) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io {
        path: destination.to_path_buf(),
        source,
    };
    let csv_err = |e: csv::Error| WriteError::Csv {
        path: destination.to_path_buf(),
        message: e.to_string(),
    };

    let mut file = File::create(destination).map_err(io_err)?;
    file.write_all(UTF8_BOM).map_err(io_err)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&table.columns).map_err(csv_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(io_err)?;
    Ok(())
}

fn write_workbook(table: &ProjectedTable, destination: &Path) -> Result<(), WriteError> {
    let book_err = |e: rust_xlsxwriter::XlsxError| WriteError::Workbook {
        path: destination.to_path_buf(),
        message: e.to_string(),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(book_err)?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Number(value) => worksheet
                    .write_number(row_num, col as u16, *value)
                    .map_err(book_err)?,
                Cell::Text(value) => worksheet
                    .write_string(row_num, col as u16, value)
                    .map_err(book_err)?,
            };
        }
    }
    workbook.save(destination).map_err(book_err)?;
    Ok(())
}
