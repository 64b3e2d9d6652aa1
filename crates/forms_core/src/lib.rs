//! # Forms Core
//!
//! Core data structures for the form validation engine.
//!
//! A form is described by a [`ValidationSchema`]: a read-only mapping from
//! field name to a [`ValidationRule`]. Values arrive as [`FieldValue`]s. The
//! validator crate evaluates one against the other; this crate only holds the
//! vocabulary.
//!
//! ## Key Concepts
//!
//! - **Schema**: the rules for one form, built once
//! - **Rule**: required flag, length and numeric bounds, pattern, custom
//!   predicate, and an optional message override
//! - **Named patterns**: shared formats for emails, phones, names and codes
//!
//! ## Example
//!
//! ```rust
//! use forms_core::{FieldType, NamedPattern, RuleBuilder, ValidationSchema};
//!
//! let schema = ValidationSchema::builder()
//!     .field(
//!         "email",
//!         RuleBuilder::new()
//!             .required()
//!             .named_pattern(NamedPattern::Email)
//!             .field_type(FieldType::Email)
//!             .build(),
//!     )
//!     .field("bio", RuleBuilder::new().min_length(10).build())
//!     .build()
//!     .unwrap();
//!
//! assert!(schema.contains("email"));
//! ```

pub mod builder;
pub mod error;
pub mod patterns;
pub mod rule;
pub mod schema;
pub mod value;

pub use builder::*;
pub use error::*;
pub use patterns::*;
pub use rule::*;
pub use schema::*;
pub use value::*;
