use anyhow::{Context, Result};
use forms_parser::parse_schema_file;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &str, format: &str) -> Result<()> {
    info!("Checking schema: {}", schema_path);

    let path = Path::new(schema_path);
    let definition = parse_schema_file(path)
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    // Compiling catches bad regexes, unknown names and inverted bounds
    let schema = definition
        .to_schema()
        .with_context(|| format!("Invalid schema: {}", schema_path))?;

    if format == "json" {
        let fields: Vec<_> = schema
            .iter()
            .map(|(name, rule)| {
                json!({
                    "name": name,
                    "field_type": rule.field_type.map(|t| t.to_string()),
                    "constraints": rule.describe(),
                    "has_message": rule.message.is_some(),
                })
            })
            .collect();
        output::print_json(&json!({
            "valid": true,
            "name": definition.name,
            "description": definition.description,
            "fields": fields,
        }));
        return Ok(());
    }

    output::print_info(&format!(
        "Schema loaded: {} ({} fields)",
        definition.display_name(),
        schema.len()
    ));
    output::print_success("Schema is valid");

    println!("\nSchema Summary:");
    println!("  Name:        {}", definition.display_name());
    println!(
        "  Description: {}",
        definition.description.as_deref().unwrap_or("N/A")
    );
    println!("  Fields:      {}", schema.len());

    for (name, rule) in schema.iter() {
        let kind = rule
            .field_type
            .map(|t| format!(" [{}]", t))
            .unwrap_or_default();
        let constraints = if rule.is_empty() {
            "no constraints".to_string()
        } else {
            rule.describe().join(", ")
        };
        println!("    - {}{}: {}", name, kind, constraints);
    }

    Ok(())
}
