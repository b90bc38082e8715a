//! Projection: apply a field catalog to a source table.
//!
//! One algorithm serves both preview and export; preview callers pass a
//! row-bounded source, export callers pass the full table.

use tabshape_ingest::DataTable;
use tabshape_model::{Cell, CustomField, FieldCatalog, FieldType, ProjectedTable};
use tracing::debug;

/// A projected table plus the non-fatal warnings gathered while building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub table: ProjectedTable,
    pub warnings: Vec<String>,
}

/// Project the selected columns of `source` through `catalog`.
///
/// Selected original columns come first, sliced from the source in catalog
/// order; selected custom fields follow as constant columns, their defaults
/// coerced per declared type. With zero selected originals the output still
/// carries one row per source row.
pub fn project(source: &DataTable, catalog: &FieldCatalog) -> Projection {
    let mut columns: Vec<String> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();
    for name in catalog.selected_original_names() {
        // Catalog and source coincide by construction; a name the source
        // does not know is a stale catalog and is skipped.
        if let Some(idx) = source.column_index(name) {
            columns.push(name.to_string());
            indices.push(idx);
        }
    }

    let custom_fields = catalog.selected_custom_fields();
    let mut warnings = Vec::new();
    let constants: Vec<Cell> = custom_fields
        .iter()
        .map(|field| coerce_default(field, &mut warnings))
        .collect();
    columns.extend(custom_fields.iter().map(|field| field.name.clone()));

    let mut rows = Vec::with_capacity(source.height());
    for record in &source.rows {
        let mut row = Vec::with_capacity(columns.len());
        for &idx in &indices {
            row.push(Cell::Text(record.get(idx).cloned().unwrap_or_default()));
        }
        row.extend(constants.iter().cloned());
        rows.push(row);
    }

    debug!(
        columns = columns.len(),
        rows = rows.len(),
        warnings = warnings.len(),
        "projection built"
    );
    Projection {
        table: ProjectedTable { columns, rows },
        warnings,
    }
}

/// Coerce a custom field's default value per its declared type.
///
/// An empty numeric default is a valid "no value" signal and becomes 0.0
/// silently; a malformed non-empty default becomes 0.0 with a warning
/// naming the field. Every other declared type passes through verbatim.
fn coerce_default(field: &CustomField, warnings: &mut Vec<String>) -> Cell {
    match field.field_type {
        FieldType::Number => {
            let raw = field.default_value.trim();
            if raw.is_empty() {
                return Cell::Number(0.0);
            }
            match raw.parse::<f64>() {
                Ok(value) => Cell::Number(value),
                Err(_) => {
                    warnings.push(format!(
                        "custom field '{}': default value '{}' is not numeric, using 0",
                        field.name, field.default_value
                    ));
                    Cell::Number(0.0)
                }
            }
        }
        FieldType::Text | FieldType::Date | FieldType::Formula => {
            Cell::Text(field.default_value.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> DataTable {
        DataTable {
            headers: vec!["Name".to_string(), "Age".to_string(), "City".to_string()],
            rows: vec![
                vec!["Alice".to_string(), "30".to_string(), "Berlin".to_string()],
                vec!["Bob".to_string(), "25".to_string(), "Kyoto".to_string()],
                vec!["Cara".to_string(), "41".to_string(), "Lagos".to_string()],
            ],
        }
    }

    fn catalog_for(table: &DataTable) -> FieldCatalog {
        let mut catalog = FieldCatalog::new();
        catalog.rebuild_from_headers(&table.headers);
        catalog
    }

    #[test]
    fn all_originals_round_trip() {
        let table = source();
        let catalog = catalog_for(&table);
        let projection = project(&table, &catalog);

        assert_eq!(projection.table.columns, table.headers);
        assert_eq!(projection.table.height(), 3);
        assert_eq!(
            projection.table.rows[0],
            vec![
                Cell::text("Alice"),
                Cell::text("30"),
                Cell::text("Berlin")
            ]
        );
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn deselected_columns_are_dropped() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog.set_selected("City", false);
        let projection = project(&table, &catalog);

        assert_eq!(projection.table.columns, vec!["Name", "Age"]);
        assert_eq!(projection.table.rows[1], vec![Cell::text("Bob"), Cell::text("25")]);
    }

    #[test]
    fn custom_columns_follow_originals() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog
            .add_custom_field(
                CustomField::new("Bonus")
                    .with_default("12.5")
                    .with_type(FieldType::Number),
                true,
            )
            .expect("add Bonus");
        catalog
            .add_custom_field(CustomField::new("Note").with_default("n/a"), true)
            .expect("add Note");
        let projection = project(&table, &catalog);

        assert_eq!(
            projection.table.columns,
            vec!["Name", "Age", "City", "Bonus", "Note"]
        );
        for row in &projection.table.rows {
            assert_eq!(row[3], Cell::number(12.5));
            assert_eq!(row[4], Cell::text("n/a"));
        }
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn malformed_numeric_default_warns_once() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog
            .add_custom_field(
                CustomField::new("Bonus")
                    .with_default("abc")
                    .with_type(FieldType::Number),
                true,
            )
            .expect("add Bonus");
        let projection = project(&table, &catalog);

        for row in &projection.table.rows {
            assert_eq!(row[3], Cell::number(0.0));
        }
        assert_eq!(projection.warnings.len(), 1);
        assert!(projection.warnings[0].contains("Bonus"));
    }

    #[test]
    fn empty_numeric_default_is_silent_zero() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog
            .add_custom_field(
                CustomField::new("Bonus").with_type(FieldType::Number),
                true,
            )
            .expect("add Bonus");
        let projection = project(&table, &catalog);

        for row in &projection.table.rows {
            assert_eq!(row[3], Cell::number(0.0));
        }
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn date_and_formula_defaults_pass_through() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog
            .add_custom_field(
                CustomField::new("Joined")
                    .with_default("2024-01-01")
                    .with_type(FieldType::Date),
                true,
            )
            .expect("add Joined");
        catalog
            .add_custom_field(
                CustomField::new("Total")
                    .with_default("=SUM(A1:A3)")
                    .with_type(FieldType::Formula),
                true,
            )
            .expect("add Total");
        let projection = project(&table, &catalog);

        assert_eq!(projection.table.rows[0][3], Cell::text("2024-01-01"));
        assert_eq!(projection.table.rows[0][4], Cell::text("=SUM(A1:A3)"));
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn all_custom_projection_keeps_row_count() {
        let table = source();
        let mut catalog = catalog_for(&table);
        for name in ["Name", "Age", "City"] {
            catalog.set_selected(name, false);
        }
        catalog
            .add_custom_field(
                CustomField::new("Bonus")
                    .with_default("100")
                    .with_type(FieldType::Number),
                true,
            )
            .expect("add Bonus");
        let projection = project(&table, &catalog);

        assert_eq!(projection.table.columns, vec!["Bonus"]);
        assert_eq!(projection.table.height(), 3);
        for row in &projection.table.rows {
            assert_eq!(row, &vec![Cell::number(100.0)]);
        }
    }

    #[test]
    fn deselected_custom_field_projects_nothing() {
        let table = source();
        let mut catalog = catalog_for(&table);
        catalog
            .add_custom_field(CustomField::new("Bonus"), true)
            .expect("add Bonus");
        catalog.set_selected("Bonus", false);
        let projection = project(&table, &catalog);

        assert_eq!(projection.table.columns, vec!["Name", "Age", "City"]);
    }
}
