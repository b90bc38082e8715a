//! Command implementations wiring the CLI to the engine.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use tabshape_engine::{DataController, EngineEvent};
use tabshape_model::{CustomField, FieldType, ProcessingResult};

use crate::cli::{ExportArgs, InspectArgs};
use crate::summary::{print_info, print_projection};

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", file = %args.file.display());
    let _guard = span.enter();

    let mut controller = DataController::new();
    controller
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;

    print_info(&controller.table_info());
    if let Some(projection) = controller.preview(args.rows) {
        print_projection(&projection.table);
        for warning in &projection.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<ProcessingResult> {
    let span = info_span!(
        "export",
        file = %args.file.display(),
        destination = %args.output.display()
    );
    let _guard = span.enter();

    let mut controller = DataController::new();
    controller.on_event(|event| {
        if let EngineEvent::Error(message) = event {
            tracing::debug!(message = %message, "engine error event");
        }
    });
    controller
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;

    for column in &args.drop {
        if !controller.set_selected(column, false) {
            bail!("unknown column '{column}' in --drop");
        }
    }
    for field in &args.field {
        let custom = parse_custom_field(field)?;
        controller
            .add_custom_field(custom)
            .with_context(|| format!("add field '{field}'"))?;
    }

    Ok(controller.export(&args.output))
}

/// Parse a `NAME[=DEFAULT][:TYPE]` custom column description.
///
/// The trailing `:TYPE` is only split off when it names one of the known
/// types, so defaults may contain colons (`=SUM(A1:A3)`).
pub fn parse_custom_field(value: &str) -> Result<CustomField> {
    const TYPE_NAMES: [&str; 4] = ["text", "number", "date", "formula"];

    let (name, rest) = match value.split_once('=') {
        Some((name, rest)) => (name, Some(rest)),
        None => (value, None),
    };

    let (name, default_value, field_type) = match rest {
        Some(rest) => match rest.rsplit_once(':') {
            Some((default, suffix))
                if TYPE_NAMES.contains(&suffix.trim().to_ascii_lowercase().as_str()) =>
            {
                (name, default.to_string(), FieldType::parse(suffix))
            }
            _ => (name, rest.to_string(), FieldType::Text),
        },
        None => match name.rsplit_once(':') {
            Some((bare, suffix))
                if TYPE_NAMES.contains(&suffix.trim().to_ascii_lowercase().as_str()) =>
            {
                (bare, String::new(), FieldType::parse(suffix))
            }
            _ => (name, String::new(), FieldType::Text),
        },
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("custom field '{value}' has no name");
    }
    Ok(CustomField::new(name)
        .with_default(default_value)
        .with_type(field_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_name() {
        let field = parse_custom_field("Note").expect("parse");
        assert_eq!(field.name, "Note");
        assert_eq!(field.default_value, "");
        assert_eq!(field.field_type, FieldType::Text);
    }

    #[test]
    fn parses_name_with_default() {
        let field = parse_custom_field("Note=pending").expect("parse");
        assert_eq!(field.name, "Note");
        assert_eq!(field.default_value, "pending");
        assert_eq!(field.field_type, FieldType::Text);
    }

    #[test]
    fn parses_name_with_type() {
        let field = parse_custom_field("Bonus:number").expect("parse");
        assert_eq!(field.name, "Bonus");
        assert_eq!(field.default_value, "");
        assert_eq!(field.field_type, FieldType::Number);
    }

    #[test]
    fn parses_full_form() {
        let field = parse_custom_field("Bonus=12.5:number").expect("parse");
        assert_eq!(field.name, "Bonus");
        assert_eq!(field.default_value, "12.5");
        assert_eq!(field.field_type, FieldType::Number);
    }

    #[test]
    fn default_may_contain_colons() {
        let field = parse_custom_field("Total==SUM(A1:A3):formula").expect("parse");
        assert_eq!(field.name, "Total");
        assert_eq!(field.default_value, "=SUM(A1:A3)");
        assert_eq!(field.field_type, FieldType::Formula);

        let field = parse_custom_field("When=12:30").expect("parse");
        assert_eq!(field.default_value, "12:30");
        assert_eq!(field.field_type, FieldType::Text);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(parse_custom_field("=1:number").is_err());
        assert!(parse_custom_field("").is_err());
    }
}
