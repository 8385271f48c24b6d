//! Prelude module for convenient imports.
//!
//! ```
//! use libris_validator::prelude::*;
//! use serde_json::json;
//!
//! let edition = required().for_field("edition");
//! assert!(edition.validate(&json!("2nd")).is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

pub use crate::validators::*;

pub use crate::combinators::{
    And, Field, Trimmed, WithMessage, and, named_field, trimmed, with_message,
};

pub use crate::{
    BookInput, BookValidator, DetailRequest, FieldName, ValidationResult, validate_book,
    validate_book_json, validate_field,
};
