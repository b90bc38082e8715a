//! Human-readable rendering of previews and processing results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use tabshape_ingest::TableInfo;
use tabshape_model::{ProcessingResult, ProjectedTable};

pub fn print_info(info: &TableInfo) {
    if let Some(path) = &info.path {
        println!("File: {}", path.display());
    }
    println!("Rows: {}  Columns: {}", info.rows, info.columns);
}

pub fn print_projection(projection: &ProjectedTable) {
    let mut table = Table::new();
    table.set_header(projection.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in &projection.rows {
        table.add_row(row.iter().map(|cell| cell.to_string()));
    }
    println!("{table}");
}

pub fn print_result(result: &ProcessingResult) {
    if result.success {
        println!("Exported {} rows", result.processed_rows);
        if let Some(path) = &result.output_path {
            println!("Output: {}", path.display());
        }
    } else {
        println!(
            "Export failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
    }
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
