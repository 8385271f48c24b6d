//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The error code is kept, and the original error is nested so its
/// parameters stay reachable through [`ValidationError::root_cause`].
///
/// # Examples
///
/// ```
/// use libris_validator::combinators::WithMessage;
/// use libris_validator::foundation::Validate;
/// use libris_validator::validators::min_length;
///
/// let validator = WithMessage::new(min_length(2), "Title must be at least 2 characters.");
///
/// let error = validator.validate("A").unwrap_err();
/// assert_eq!(error.message, "Title must be at least 2 characters.");
/// assert_eq!(error.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), self.message.clone())
                .with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;

    #[test]
    fn test_with_message_success() {
        let validator = with_message(min_length(3), "Custom message");
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_with_message_replaces_message() {
        let error = with_message(min_length(10), "Too short")
            .validate("short")
            .unwrap_err();

        assert_eq!(error.message, "Too short");
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn test_nested_error_preserved() {
        let error = with_message(min_length(10), "Custom")
            .validate("short")
            .unwrap_err();

        assert_eq!(error.nested.len(), 1);
        assert_eq!(error.nested[0].param("min"), Some("10"));
    }

    #[test]
    fn test_owned_message() {
        let text = String::from("Please enter a title.");
        let validator = with_message(min_length(1), text);
        assert_eq!(validator.message(), "Please enter a title.");
    }
}
