use anyhow::{Context, Result, anyhow};
use forms_core::{FieldValue, FieldValues};
use forms_parser::{parse_schema_file, parse_values_file};
use forms_validator::FormValidator;
use std::path::Path;
use tracing::{info, warn};

use crate::output::{self, FormReport};

pub fn execute(
    schema_path: &str,
    values_path: &str,
    field: Option<&str>,
    overrides: &[String],
    format: &str,
) -> Result<()> {
    info!("Validating values {} against schema {}", values_path, schema_path);
    let text_mode = format != "json";

    let definition = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;
    let schema = definition
        .to_schema()
        .with_context(|| format!("Invalid schema: {}", schema_path))?;

    let mut values = parse_values_file(Path::new(values_path))
        .with_context(|| format!("Failed to parse values file: {}", values_path))?;
    apply_overrides(&mut values, overrides)?;

    if text_mode {
        output::print_info(&format!(
            "Schema loaded: {} ({} fields)",
            definition.display_name(),
            schema.len()
        ));
    }

    let mut unknown: Vec<_> = values
        .keys()
        .filter(|name| !schema.contains(name))
        .cloned()
        .collect();
    unknown.sort();
    if !unknown.is_empty() {
        warn!("Ignoring values with no rule: {}", unknown.join(", "));
    }

    let mut form = FormValidator::new(schema);
    let (passed, fields_checked) = match field {
        Some(name) => {
            if !form.schema().contains(name) {
                return Err(anyhow!("Field '{}' is not declared in the schema", name));
            }
            form.touch(name);
            (form.validate(name, values.get(name)), 1)
        }
        None => {
            form.touch_all();
            (form.validate_all(&values), form.schema().len())
        }
    };

    output::print_form_report(
        &FormReport {
            passed,
            errors: form.errors(),
            fields_checked,
        },
        format,
    );

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

/// Applies `NAME=VALUE` overrides on top of the loaded values.
fn apply_overrides(values: &mut FieldValues, overrides: &[String]) -> Result<()> {
    for entry in overrides {
        let (name, raw) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid override '{}': expected NAME=VALUE", entry))?;
        values.insert(name.to_string(), parse_override_value(raw));
    }
    Ok(())
}

/// Reads an override as a JSON literal, falling back to plain text.
fn parse_override_value(raw: &str) -> FieldValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(FieldValue::from)
        .unwrap_or_else(|_| FieldValue::from(raw))
}
