//! Presence validators
//!
//! - [`Required`] rejects null, missing and whitespace-only JSON values
//! - [`NotBlank`] is the same check for plain strings

use serde_json::Value;

use crate::foundation::{ValidationError, is_empty};

crate::validator! {
    /// Validates that a field value is present.
    ///
    /// Null and whitespace-only strings fail. Any number, boolean, array or
    /// object passes.
    pub Required for Value;
    rule(input) { !is_empty(input) }
    error(input) { ValidationError::required() }
    fn required();
}

crate::validator! {
    /// Validates that a string has non-whitespace content.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required() }
    fn not_blank();
}
