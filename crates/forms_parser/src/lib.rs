//! Parser for form schema definitions and value files.
//!
//! Schemas are written in YAML, TOML or JSON and compiled into the
//! strongly-typed `ValidationSchema`. Value files hold one submitted form as a
//! flat mapping from field name to value.
//!
//! # Example
//!
//! ```rust
//! use forms_parser::parse_schema_yaml;
//!
//! let yaml = r#"
//! name: child_profile
//! fields:
//!   - name: name
//!     required: true
//!     min_length: 2
//!     pattern: name
//!   - name: age
//!     required: true
//!     min: 1
//!     max: 18
//! "#;
//!
//! let definition = parse_schema_yaml(yaml).expect("Failed to parse schema");
//! let schema = definition.to_schema().expect("Failed to compile schema");
//! assert_eq!(schema.len(), 2);
//! ```

mod definition;

pub use definition::*;

use forms_core::{FieldValue, FieldValues, SchemaError, ValidationSchema};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during schema or value parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Value file is not a field-to-value mapping
    #[error("Invalid values: {0}")]
    InvalidValues(String),

    /// Definition parsed but does not compile into a schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Detect the file format from a path based on its extension.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "toml" => Ok(FileFormat::Toml),
        "json" => Ok(FileFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema definition from a YAML string.
pub fn parse_schema_yaml(content: &str) -> Result<SchemaDefinition> {
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Parse a schema definition from a TOML string.
///
/// # Example
///
/// ```rust
/// use forms_parser::parse_schema_toml;
///
/// let toml = r#"
/// name = "login"
///
/// [[fields]]
/// name = "code"
/// required = true
/// pattern = "otp"
/// "#;
///
/// let definition = parse_schema_toml(toml).unwrap();
/// assert_eq!(definition.fields[0].name, "code");
/// ```
pub fn parse_schema_toml(content: &str) -> Result<SchemaDefinition> {
    toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))
}

/// Parse a schema definition from a JSON string.
pub fn parse_schema_json(content: &str) -> Result<SchemaDefinition> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a schema definition from a file with automatic format detection.
pub fn parse_schema_file(path: &Path) -> Result<SchemaDefinition> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} schema from {}", format, path.display());

    match format {
        FileFormat::Yaml => parse_schema_yaml(&content),
        FileFormat::Toml => parse_schema_toml(&content),
        FileFormat::Json => parse_schema_json(&content),
    }
}

/// Parse and compile a schema file in one step.
pub fn load_schema(path: &Path) -> Result<ValidationSchema> {
    Ok(parse_schema_file(path)?.to_schema()?)
}

/// Parse form values from a JSON object.
pub fn parse_values_json(content: &str) -> Result<FieldValues> {
    values_from_document(serde_json::from_str(content)?)
}

/// Parse form values from a YAML mapping.
pub fn parse_values_yaml(content: &str) -> Result<FieldValues> {
    if content.trim().is_empty() {
        return Ok(FieldValues::new());
    }
    values_from_document(serde_yaml_ng::from_str(content)?)
}

/// Parse form values from a TOML table.
pub fn parse_values_toml(content: &str) -> Result<FieldValues> {
    let document = toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    values_from_document(document)
}

/// Converts a parsed document into field values. Shared by every value format.
fn values_from_document(document: serde_json::Value) -> Result<FieldValues> {
    match document {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from(value)))
            .collect()),
        other => Err(ParserError::InvalidValues(format!(
            "expected an object of field values, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Parse form values from a file with automatic format detection.
pub fn parse_values_file(path: &Path) -> Result<FieldValues> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} values from {}", format, path.display());

    match format {
        FileFormat::Yaml => parse_values_yaml(&content),
        FileFormat::Toml => parse_values_toml(&content),
        FileFormat::Json => parse_values_json(&content),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
