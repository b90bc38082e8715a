//! Structural readers: delimited text and spreadsheet workbooks.
//!
//! Both readers produce a raw [`DataTable`] whose first source row became
//! the header row; validation and header normalization happen in the
//! loader, which knows the originating path.

use std::fs;
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use encoding_rs::{Encoding, GB18030, GBK, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use crate::error::FileReadError;
use crate::table::DataTable;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode raw bytes under the fixed encoding chain.
///
/// The first encoding that decodes the whole file without errors wins.
/// Windows-1252 maps every byte, so the final fallback always produces
/// text; a file that only it can handle is likely mis-decoded, which is
/// preferred over refusing the load, but worth a warning.
fn decode_text(path: &Path, bytes: &[u8]) -> String {
    // Encodings tried strictly, in order, before the lossy fallback.
    let strict: [&'static Encoding; 3] = [UTF_8, GBK, GB18030];
    for encoding in strict {
        let (text, used, had_errors) = encoding.decode(bytes);
        if !had_errors {
            debug!(path = %path.display(), encoding = used.name(), "decoded csv");
            return text.into_owned();
        }
    }
    let (text, used, _) = WINDOWS_1252.decode(bytes);
    warn!(
        path = %path.display(),
        encoding = used.name(),
        "decoded with lossy fallback encoding; text may be garbled"
    );
    text.into_owned()
}

/// Read a delimited text file into a raw table.
pub fn read_csv_table(path: &Path) -> Result<DataTable, FileReadError> {
    let bytes = fs::read(path).map_err(|source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_text(path, &bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FileReadError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    Ok(table_from_rows(raw_rows))
}

/// Read the first worksheet of an `.xlsx`/`.xls` workbook into a raw table.
pub fn read_spreadsheet_table(path: &Path) -> Result<DataTable, FileReadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| FileReadError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FileReadError::Spreadsheet {
            path: path.to_path_buf(),
            message: "no worksheet found".to_string(),
        })?
        .map_err(|e| FileReadError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(cells);
    }

    Ok(table_from_rows(raw_rows))
}

fn cell_to_string(cell: &Data) -> String {
    if cell.is_empty() {
        return String::new();
    }
    let value = cell
        .as_string()
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{cell}"));
    normalize_cell(&value)
}

/// First raw row becomes the header row; data rows are padded or truncated
/// to header width.
fn table_from_rows(mut raw_rows: Vec<Vec<String>>) -> DataTable {
    if raw_rows.is_empty() {
        return DataTable::default();
    }
    let headers = raw_rows.remove(0);
    let rows = raw_rows
        .into_iter()
        .map(|record| {
            (0..headers.len())
                .map(|idx| record.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    DataTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_prefers_utf8() {
        let text = decode_text(Path::new("t.csv"), "名前,年齢".as_bytes());
        assert_eq!(text, "名前,年齢");
    }

    #[test]
    fn decode_falls_through_to_gbk() {
        let (bytes, _, _) = GBK.encode("姓名,年龄");
        let text = decode_text(Path::new("t.csv"), &bytes);
        assert_eq!(text, "姓名,年龄");
    }

    #[test]
    fn decode_never_fails() {
        // 0x81 0xFF is invalid in UTF-8, GBK and GB18030; the fallback
        // still produces text.
        let text = decode_text(Path::new("t.csv"), &[0x41, 0x2c, 0x81, 0xff]);
        assert!(text.starts_with("A,"));
    }

    #[test]
    fn rows_are_padded_to_header_width() {
        let table = table_from_rows(vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string()],
            vec!["2".to_string(), "x".to_string(), "extra".to_string()],
        ]);
        assert_eq!(table.rows[0], vec!["1".to_string(), String::new()]);
        assert_eq!(table.rows[1], vec!["2".to_string(), "x".to_string()]);
    }
}
