//! Main validation engine.
//!
//! This module provides the `FormValidator` that evaluates field values
//! against a schema and keeps the resulting error and touched maps for one
//! form session.

use crate::{FormErrors, TouchedFields};
use forms_core::{FieldValue, FieldValues, ValidationRule, ValidationSchema};
use tracing::debug;

/// Validation engine for one form.
///
/// Holds the schema plus the error and touched state derived from it. Create
/// one validator per form; the mutating operations take `&mut self`.
///
/// # Example
///
/// ```rust
/// use forms_core::{FieldValue, RuleBuilder, ValidationSchema};
/// use forms_validator::FormValidator;
///
/// let schema = ValidationSchema::builder()
///     .field("title", RuleBuilder::new().required().length(3, 20).build())
///     .build()
///     .unwrap();
/// let mut form = FormValidator::new(schema);
///
/// assert!(!form.validate("title", Some(&FieldValue::from("Hi"))));
/// assert_eq!(form.errors().get("title"), "Minimum 3 characters required");
///
/// assert!(form.validate("title", Some(&FieldValue::from("Hello World"))));
/// assert_eq!(form.errors().get("title"), "");
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    schema: ValidationSchema,
    errors: FormErrors,
    touched: TouchedFields,
}

impl FormValidator {
    /// Creates a validator with empty error and touched state.
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            schema,
            errors: FormErrors::new(),
            touched: TouchedFields::new(),
        }
    }

    /// The schema this validator evaluates against.
    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    /// Current error messages.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Current touched flags.
    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    /// Returns true if the field has been touched.
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.is_touched(name)
    }

    /// Error to show for a field: its message, once the field is touched.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        let message = self.errors.get(name);
        (self.is_touched(name) && !message.is_empty()).then_some(message)
    }

    /// Evaluates one field without touching any state.
    ///
    /// Returns the failure message, or `None` if the value passes or the
    /// field has no rule. Checks run in a fixed order and the first failure
    /// wins: required, then (only for non-empty values) minimum length,
    /// maximum length, minimum value, maximum value, pattern and custom
    /// predicate. Values that do not read as numbers skip the numeric
    /// bounds.
    pub fn validate_field(&self, name: &str, value: Option<&FieldValue>) -> Option<String> {
        let rule = self.schema.get(name)?;
        evaluate(name, rule, value)
    }

    /// Validates one field and stores the outcome.
    ///
    /// Overwrites the field's previous message (with `""` when the value
    /// passes). Returns true if the value is valid.
    pub fn validate(&mut self, name: &str, value: Option<&FieldValue>) -> bool {
        let error = self.validate_field(name, value);
        let valid = error.is_none();
        if let Some(message) = &error {
            debug!(field = name, %message, "field failed validation");
        }
        self.errors.set(name, error.unwrap_or_default());
        valid
    }

    /// Validates every schema field against a full value set.
    ///
    /// Keys without a rule are ignored and schema fields missing from
    /// `values` are validated as absent. The stored error map is replaced by
    /// one holding only the failing fields. Returns true if all passed.
    pub fn validate_all(&mut self, values: &FieldValues) -> bool {
        let errors: FormErrors = self
            .schema
            .iter()
            .filter_map(|(name, rule)| {
                evaluate(name, rule, values.get(name)).map(|message| (name.to_string(), message))
            })
            .collect();

        let valid = errors.is_empty();
        debug!(
            fields = self.schema.len(),
            failed = errors.len(),
            "validated form"
        );
        self.errors = errors;
        valid
    }

    /// Marks one field as touched.
    pub fn touch(&mut self, name: &str) {
        self.touched.mark(name);
    }

    /// Marks every schema field as touched, replacing the touched map.
    pub fn touch_all(&mut self) {
        self.touched = self.schema.field_names().map(str::to_string).collect();
    }

    /// Clears errors and touched flags. The schema is kept.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }
}

/// Which check rejected a value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Failure {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
    Pattern,
    Custom,
}

impl Failure {
    fn default_message(self, name: &str) -> String {
        match self {
            Failure::Required => format!("{} is required", name),
            Failure::MinLength(n) => format!("Minimum {} characters required", n),
            Failure::MaxLength(n) => format!("Maximum {} characters allowed", n),
            Failure::Min(n) => format!("Minimum value is {}", forms_core::format_number(n)),
            Failure::Max(n) => format!("Maximum value is {}", forms_core::format_number(n)),
            Failure::Pattern => "Invalid format".to_string(),
            Failure::Custom => "Validation failed".to_string(),
        }
    }
}

fn evaluate(name: &str, rule: &ValidationRule, value: Option<&FieldValue>) -> Option<String> {
    let failure = first_failure(rule, value)?;
    Some(match &rule.message {
        Some(message) => message.render(value, rule),
        None => failure.default_message(name),
    })
}

fn first_failure(rule: &ValidationRule, value: Option<&FieldValue>) -> Option<Failure> {
    let value = match value {
        Some(v) if !v.is_falsy() => v,
        _ if rule.required => return Some(Failure::Required),
        _ => return None,
    };

    let text = value.to_string();
    if rule.required && text.trim().is_empty() {
        return Some(Failure::Required);
    }

    let length = value.char_len();
    if let Some(min) = rule.min_length {
        if length < min {
            return Some(Failure::MinLength(min));
        }
    }
    if let Some(max) = rule.max_length {
        if length > max {
            return Some(Failure::MaxLength(max));
        }
    }

    // Unparseable input is not a range failure.
    if let Some(min) = rule.min {
        if value.to_number().is_some_and(|n| n < min) {
            return Some(Failure::Min(min));
        }
    }
    if let Some(max) = rule.max {
        if value.to_number().is_some_and(|n| n > max) {
            return Some(Failure::Max(max));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(&text) {
            return Some(Failure::Pattern);
        }
    }

    if let Some(custom) = &rule.custom {
        if !custom.check(value) {
            return Some(Failure::Custom);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::{RuleBuilder, SchemaBuilder};
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn form(fields: Vec<(&str, ValidationRule)>) -> FormValidator {
        let schema = SchemaBuilder::new()
            .fields(fields.into_iter().map(|(n, r)| (n.to_string(), r)))
            .build()
            .unwrap();
        FormValidator::new(schema)
    }

    fn v(value: impl Into<FieldValue>) -> FieldValue {
        value.into()
    }

    #[test]
    fn test_required_rejects_empty_null_and_absent() {
        let form = form(vec![("name", RuleBuilder::new().required().build())]);

        assert_eq!(
            form.validate_field("name", Some(&v(""))),
            Some("name is required".to_string())
        );
        assert_eq!(
            form.validate_field("name", Some(&FieldValue::Null)),
            Some("name is required".to_string())
        );
        assert_eq!(
            form.validate_field("name", None),
            Some("name is required".to_string())
        );
        assert_eq!(
            form.validate_field("name", Some(&v("   "))),
            Some("name is required".to_string())
        );
        assert_eq!(form.validate_field("name", Some(&v("Ada"))), None);
    }

    #[test]
    fn test_required_rejects_zero_and_false() {
        let form = form(vec![
            ("amount", RuleBuilder::new().required().build()),
            ("agree", RuleBuilder::new().required().build()),
        ]);

        assert!(form.validate_field("amount", Some(&v(0))).is_some());
        assert!(form.validate_field("agree", Some(&v(false))).is_some());
        assert!(form.validate_field("agree", Some(&v(true))).is_none());
    }

    #[test]
    fn test_required_uses_override_message() {
        let form = form(vec![(
            "name",
            RuleBuilder::new()
                .required()
                .message("Please enter a name")
                .build(),
        )]);

        assert_eq!(
            form.validate_field("name", None),
            Some("Please enter a name".to_string())
        );
    }

    #[test]
    fn test_optional_empty_value_skips_all_checks() {
        let form = form(vec![(
            "bio",
            RuleBuilder::new()
                .min_length(10)
                .pattern(Regex::new("^x+$").unwrap())
                .custom(|_| false)
                .build(),
        )]);

        assert_eq!(form.validate_field("bio", Some(&v(""))), None);
        assert_eq!(form.validate_field("bio", None), None);
        assert_eq!(form.validate_field("bio", Some(&FieldValue::Null)), None);
        assert_eq!(form.validate_field("bio", Some(&v(0))), None);
    }

    #[test]
    fn test_unknown_field_is_valid() {
        let form = form(vec![("name", RuleBuilder::new().required().build())]);
        assert_eq!(form.validate_field("nickname", None), None);
    }

    #[test]
    fn test_length_bounds() {
        let form = form(vec![(
            "title",
            RuleBuilder::new().required().length(3, 20).build(),
        )]);

        assert_eq!(
            form.validate_field("title", Some(&v("Hi"))),
            Some("Minimum 3 characters required".to_string())
        );
        assert_eq!(
            form.validate_field("title", Some(&v("The Dragon Who Loved Pancakes"))),
            Some("Maximum 20 characters allowed".to_string())
        );
        assert_eq!(form.validate_field("title", Some(&v("Hello World"))), None);
    }

    #[test]
    fn test_length_counts_display_form_of_numbers() {
        let form = form(vec![("pin", RuleBuilder::new().min_length(4).build())]);
        assert_eq!(
            form.validate_field("pin", Some(&v(123))),
            Some("Minimum 4 characters required".to_string())
        );
        assert_eq!(form.validate_field("pin", Some(&v(1234))), None);
    }

    #[test]
    fn test_numeric_bounds() {
        let form = form(vec![(
            "age",
            RuleBuilder::new().required().range(1.0, 18.0).build(),
        )]);

        assert_eq!(
            form.validate_field("age", Some(&v("25"))),
            Some("Maximum value is 18".to_string())
        );
        assert_eq!(
            form.validate_field("age", Some(&v(-2))),
            Some("Minimum value is 1".to_string())
        );
        assert_eq!(
            form.validate_field("age", Some(&v("0.5"))),
            Some("Minimum value is 1".to_string())
        );
        assert_eq!(form.validate_field("age", Some(&v(7))), None);
    }

    #[test]
    fn test_unparseable_number_skips_bounds() {
        let form = form(vec![(
            "age",
            RuleBuilder::new().required().range(1.0, 18.0).build(),
        )]);

        assert_eq!(form.validate_field("age", Some(&v("abc"))), None);
        assert_eq!(form.validate_field("age", Some(&v(true))), None);
        // Leading numeric prefix is what gets compared.
        assert_eq!(
            form.validate_field("age", Some(&v("42 years"))),
            Some("Maximum value is 18".to_string())
        );
    }

    #[test]
    fn test_non_ascii_digit_suffix_still_compared() {
        let form = form(vec![(
            "age",
            RuleBuilder::new().required().range(1.0, 18.0).build(),
        )]);

        assert_eq!(
            form.validate_field("age", Some(&v("40\u{0661}"))),
            Some("Maximum value is 18".to_string())
        );
        assert_eq!(form.validate_field("age", Some(&v("7\u{0661}"))), None);
    }

    #[test]
    fn test_zero_max_length_is_enforced() {
        let form = form(vec![("nickname", RuleBuilder::new().max_length(0).build())]);

        assert_eq!(
            form.validate_field("nickname", Some(&v("a"))),
            Some("Maximum 0 characters allowed".to_string())
        );
        // Empty optional values never reach the length checks.
        assert_eq!(form.validate_field("nickname", Some(&v(""))), None);
    }

    #[test]
    fn test_fractional_bound_in_message() {
        let form = form(vec![("amount", RuleBuilder::new().min(0.01).build())]);
        assert_eq!(
            form.validate_field("amount", Some(&v("0.001"))),
            Some("Minimum value is 0.01".to_string())
        );
    }

    #[test]
    fn test_pattern_and_custom() {
        let form = form(vec![(
            "code",
            RuleBuilder::new()
                .pattern(Regex::new(r"^\d+$").unwrap())
                .custom(|value| value.to_string() != "000000")
                .build(),
        )]);

        assert_eq!(
            form.validate_field("code", Some(&v("12ab"))),
            Some("Invalid format".to_string())
        );
        assert_eq!(
            form.validate_field("code", Some(&v("000000"))),
            Some("Validation failed".to_string())
        );
        assert_eq!(form.validate_field("code", Some(&v("123456"))), None);
    }

    #[test]
    fn test_first_failure_wins() {
        // Too short, wrong format and failing predicate at once: only the
        // length message is reported.
        let form = form(vec![(
            "code",
            RuleBuilder::new()
                .min_length(6)
                .pattern(Regex::new(r"^\d+$").unwrap())
                .custom(|_| false)
                .build(),
        )]);

        assert_eq!(
            form.validate_field("code", Some(&v("ab"))),
            Some("Minimum 6 characters required".to_string())
        );
    }

    #[test]
    fn test_custom_not_called_when_earlier_check_fails() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let form = form(vec![(
            "name",
            RuleBuilder::new()
                .min_length(5)
                .custom(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                })
                .build(),
        )]);

        form.validate_field("name", Some(&v("abc")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        form.validate_field("name", Some(&v("abcdef")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fixed_message_used_for_every_check() {
        let form = form(vec![(
            "title",
            RuleBuilder::new()
                .required()
                .length(3, 5)
                .pattern(Regex::new("^[a-z]+$").unwrap())
                .message("Check the title")
                .build(),
        )]);

        for input in [None, Some(v("ab")), Some(v("abcdefg")), Some(v("ABC"))] {
            assert_eq!(
                form.validate_field("title", input.as_ref()),
                Some("Check the title".to_string())
            );
        }
    }

    #[test]
    fn test_template_message_receives_value_and_rule() {
        let form = form(vec![(
            "title",
            RuleBuilder::new()
                .required()
                .min_length(3)
                .message_fn(|value, rule| match value {
                    None => "Please enter a title".to_string(),
                    Some(v) => format!("'{}' is shorter than {}", v, rule.min_length.unwrap_or(0)),
                })
                .build(),
        )]);

        assert_eq!(
            form.validate_field("title", None),
            Some("Please enter a title".to_string())
        );
        assert_eq!(
            form.validate_field("title", Some(&v("ab"))),
            Some("'ab' is shorter than 3".to_string())
        );
    }

    #[test]
    fn test_validate_stores_and_overwrites() {
        let mut form = form(vec![
            ("title", RuleBuilder::new().required().length(3, 20).build()),
            ("notes", RuleBuilder::new().max_length(5).build()),
        ]);

        assert!(!form.validate("notes", Some(&v("too long"))));
        assert!(!form.validate("title", Some(&v("Hi"))));
        assert_eq!(form.errors().get("title"), "Minimum 3 characters required");

        assert!(form.validate("title", Some(&v("Hello World"))));
        assert!(form.errors().contains_key("title"));
        assert_eq!(form.errors().get("title"), "");
        assert_eq!(form.errors().get("notes"), "Maximum 5 characters allowed");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut form = form(vec![
            ("title", RuleBuilder::new().required().min_length(3).build()),
            ("notes", RuleBuilder::new().max_length(5).build()),
        ]);
        form.validate("notes", Some(&v("too long")));

        form.validate("title", Some(&v("Hi")));
        let first = form.errors().clone();
        form.validate("title", Some(&v("Hi")));

        assert_eq!(form.errors(), &first);
        assert_eq!(form.errors().get("notes"), "Maximum 5 characters allowed");
    }

    #[test]
    fn test_validate_all_ignores_extra_keys() {
        let mut form = form(vec![(
            "title",
            RuleBuilder::new().required().min_length(3).build(),
        )]);

        let mut values = FieldValues::new();
        values.insert("title".to_string(), v("ok"));
        values.insert("extra".to_string(), v("ignored"));

        assert!(!form.validate_all(&values));
        assert_eq!(form.errors().keys().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn test_validate_all_treats_missing_as_absent() {
        let mut form = form(vec![
            ("name", RuleBuilder::new().required().build()),
            ("bio", RuleBuilder::new().min_length(10).build()),
        ]);

        assert!(!form.validate_all(&FieldValues::new()));
        assert_eq!(form.errors().get("name"), "name is required");
        assert!(!form.errors().contains_key("bio"));
    }

    #[test]
    fn test_validate_all_replaces_previous_errors() {
        let mut form = form(vec![
            ("name", RuleBuilder::new().required().build()),
            ("age", RuleBuilder::new().range(1.0, 18.0).build()),
        ]);
        form.validate("age", Some(&v(40)));
        form.validate("nickname", Some(&v("x")));

        let mut values = FieldValues::new();
        values.insert("name".to_string(), v("Ada"));
        values.insert("age".to_string(), v(7));

        assert!(form.validate_all(&values));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_touch_and_touch_all() {
        let mut form = form(vec![
            ("name", RuleBuilder::new().required().build()),
            ("age", RuleBuilder::new().build()),
        ]);

        form.touch("name");
        form.touch("legacy");
        assert!(form.is_touched("name"));
        assert!(!form.is_touched("age"));

        form.touch_all();
        assert_eq!(form.touched().keys().collect::<Vec<_>>(), vec!["age", "name"]);
    }

    #[test]
    fn test_visible_error_requires_touch() {
        let mut form = form(vec![("name", RuleBuilder::new().required().build())]);
        form.validate("name", None);

        assert_eq!(form.visible_error("name"), None);
        form.touch("name");
        assert_eq!(form.visible_error("name"), Some("name is required"));

        form.validate("name", Some(&v("Ada")));
        assert_eq!(form.visible_error("name"), None);
    }

    #[test]
    fn test_reset_clears_state_but_keeps_schema() {
        let mut form = form(vec![("name", RuleBuilder::new().required().build())]);
        form.validate("name", None);
        form.touch("name");
        form.touch_all();

        form.reset();

        assert!(form.errors().is_empty());
        assert!(form.touched().is_empty());
        assert_eq!(form.schema().len(), 1);
        assert!(!form.validate("name", None));
    }
}
