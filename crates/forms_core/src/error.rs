//! Error types for schema construction.
//!
//! Validation failures are never errors: they are messages in the form's
//! error map. The errors here come from building a schema that cannot be
//! evaluated as written.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building a validation schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The same field name was declared twice
    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    /// A field name is empty or blank
    #[error("Field names cannot be empty")]
    EmptyFieldName,

    /// A pattern failed to compile
    #[error("Invalid regex pattern for field '{field}': {error}")]
    InvalidRegex {
        /// Field name
        field: String,
        /// Compiler message
        error: String,
    },

    /// A named pattern does not exist
    #[error("Unknown named pattern '{0}'")]
    UnknownPattern(String),

    /// A named check does not exist
    #[error("Unknown named check '{0}'")]
    UnknownCheck(String),

    /// Lower bound above upper bound
    #[error("Invalid bounds for field '{field}': {lower} > {upper}")]
    InvertedBounds {
        /// Field name
        field: String,
        /// Lower bound as written
        lower: String,
        /// Upper bound as written
        upper: String,
    },

    /// Field definition is contradictory
    #[error("Invalid definition for field '{field}': {message}")]
    InvalidField {
        /// Field name
        field: String,
        /// Description of the problem
        message: String,
    },
}

impl SchemaError {
    /// Creates a new duplicate field error.
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField(field.into())
    }

    /// Creates a new invalid regex error.
    pub fn invalid_regex(field: impl Into<String>, error: impl ToString) -> Self {
        Self::InvalidRegex {
            field: field.into(),
            error: error.to_string(),
        }
    }

    /// Creates a new unknown pattern error.
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern(name.into())
    }

    /// Creates a new unknown check error.
    pub fn unknown_check(name: impl Into<String>) -> Self {
        Self::UnknownCheck(name.into())
    }

    /// Creates a new inverted bounds error.
    pub fn inverted_bounds(
        field: impl Into<String>,
        lower: impl ToString,
        upper: impl ToString,
    ) -> Self {
        Self::InvertedBounds {
            field: field.into(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    /// Creates a new invalid field error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}
