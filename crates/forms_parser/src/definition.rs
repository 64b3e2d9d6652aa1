//! Declarative schema definitions.
//!
//! The serializable mirror of a `ValidationSchema`. Patterns and predicates
//! are referenced by name or written as raw regexes, since closures cannot
//! live in a file.

use forms_core::{
    FieldType, NamedCheck, NamedPattern, RuleMessage, SchemaBuilder, SchemaError, ValidationRule,
    ValidationSchema,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A form schema as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDefinition {
    /// Form name
    pub name: Option<String>,

    /// Human-readable description of the form
    pub description: Option<String>,

    /// Field rules, one entry per field
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One field's rule as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    #[serde(default)]
    pub required: bool,

    pub min_length: Option<usize>,

    pub max_length: Option<usize>,

    pub min: Option<f64>,

    pub max: Option<f64>,

    /// Named built-in format (`email`, `phone`, `otp`, ...)
    pub pattern: Option<String>,

    /// Raw regular expression
    pub regex: Option<String>,

    /// Named built-in predicate (`strong_password`, `valid_age`, ...)
    pub check: Option<String>,

    /// Message override for every failure on this field
    pub message: Option<String>,

    /// Input kind hint
    pub field_type: Option<FieldType>,
}

impl SchemaDefinition {
    /// Compiles the definition into a validation schema.
    ///
    /// # Errors
    ///
    /// Fails on unknown pattern or check names, bad regexes, a field that
    /// sets both `pattern` and `regex`, and anything [`SchemaBuilder::build`]
    /// rejects.
    pub fn to_schema(&self) -> Result<ValidationSchema, SchemaError> {
        let fields = self
            .fields
            .iter()
            .map(|field| field.to_rule().map(|rule| (field.name.clone(), rule)))
            .collect::<Result<Vec<_>, SchemaError>>()?;

        SchemaBuilder::new().fields(fields).build()
    }

    /// Display name for summaries.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed form)")
    }
}

impl FieldDefinition {
    /// Creates a definition with no constraints.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Compiles this definition into a rule.
    pub fn to_rule(&self) -> Result<ValidationRule, SchemaError> {
        let pattern = match (&self.pattern, &self.regex) {
            (Some(_), Some(_)) => {
                return Err(SchemaError::invalid_field(
                    &self.name,
                    "set either `pattern` or `regex`, not both",
                ));
            }
            (Some(named), None) => Some(named.parse::<NamedPattern>()?.regex().clone()),
            (None, Some(raw)) => {
                Some(Regex::new(raw).map_err(|e| SchemaError::invalid_regex(&self.name, e))?)
            }
            (None, None) => None,
        };

        let custom = self
            .check
            .as_deref()
            .map(|name| name.parse::<NamedCheck>().map(NamedCheck::into_custom))
            .transpose()?;

        Ok(ValidationRule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
            pattern,
            custom,
            message: self.message.as_deref().map(RuleMessage::fixed),
            field_type: self.field_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_pattern_resolves() {
        let field = FieldDefinition {
            pattern: Some("email".to_string()),
            ..FieldDefinition::new("email")
        };

        let rule = field.to_rule().unwrap();
        assert_eq!(
            rule.pattern.unwrap().as_str(),
            NamedPattern::Email.regex().as_str()
        );
    }

    #[test]
    fn test_raw_regex_compiles() {
        let field = FieldDefinition {
            regex: Some(r"^[A-Z]{3}$".to_string()),
            ..FieldDefinition::new("currency")
        };

        let rule = field.to_rule().unwrap();
        assert!(rule.pattern.unwrap().is_match("EUR"));
    }

    #[test]
    fn test_bad_regex_names_the_field() {
        let field = FieldDefinition {
            regex: Some("[invalid(regex".to_string()),
            ..FieldDefinition::new("code")
        };

        let err = field.to_rule().unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRegex { ref field, .. } if field == "code"));
    }

    #[test]
    fn test_pattern_and_regex_conflict() {
        let field = FieldDefinition {
            pattern: Some("email".to_string()),
            regex: Some(".*".to_string()),
            ..FieldDefinition::new("email")
        };

        assert!(matches!(
            field.to_rule(),
            Err(SchemaError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_unknown_names_rejected() {
        let field = FieldDefinition {
            pattern: Some("postcode".to_string()),
            ..FieldDefinition::new("zip")
        };
        assert!(matches!(field.to_rule(), Err(SchemaError::UnknownPattern(_))));

        let field = FieldDefinition {
            check: Some("valid_postcode".to_string()),
            ..FieldDefinition::new("zip")
        };
        assert!(matches!(field.to_rule(), Err(SchemaError::UnknownCheck(_))));
    }

    #[test]
    fn test_named_check_and_message() {
        let field = FieldDefinition {
            required: true,
            check: Some("strong_password".to_string()),
            message: Some("Try a stronger password".to_string()),
            field_type: Some(FieldType::Password),
            ..FieldDefinition::new("password")
        };

        let rule = field.to_rule().unwrap();
        let custom = rule.custom.as_ref().unwrap();
        assert!(custom.check(&FieldValue::from("Dragon$1")));
        assert!(!custom.check(&FieldValue::from("dragon")));
        assert!(matches!(rule.message, Some(RuleMessage::Fixed(ref m)) if m == "Try a stronger password"));
        assert_eq!(rule.field_type, Some(FieldType::Password));
    }

    #[test]
    fn test_duplicate_fields_rejected() {
        let definition = SchemaDefinition {
            fields: vec![FieldDefinition::new("name"), FieldDefinition::new("name")],
            ..Default::default()
        };

        assert!(matches!(
            definition.to_schema(),
            Err(SchemaError::DuplicateField(_))
        ));
        assert_eq!(definition.display_name(), "(unnamed form)");
    }
}
