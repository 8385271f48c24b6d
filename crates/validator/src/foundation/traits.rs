//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that composes rules.

use std::borrow::Cow;

use crate::combinators::{And, Field, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are generic over their input type. A validator is a pure
/// function of its input: it holds no mutable state, so validating the same
/// input twice always gives the same answer.
///
/// # Examples
///
/// ```
/// use libris_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::new("no_digits", "Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoDigits.validate("Dune").is_ok());
/// assert!(NoDigits.validate("Dune 2").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use libris_validator::prelude::*;
/// use serde_json::json;
///
/// let title = required()
///     .with_message("Please enter a title.")
///     .and(trimmed(min_length(2)))
///     .for_field("title");
///
/// let err = title.validate(&json!("  ")).unwrap_err();
/// assert_eq!(err.message, "Please enter a title.");
/// assert_eq!(err.field.as_deref(), Some("title"));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure; `other` only runs when `self`
    /// passes.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the message of any error this validator produces.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Attributes any error this validator produces to `field`.
    fn for_field(self, field: impl Into<Cow<'static, str>>) -> Field<Self> {
        Field::new(field, self)
    }
}

impl<T: Validate> ValidateExt for T {}
