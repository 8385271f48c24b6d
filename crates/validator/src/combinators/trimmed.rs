//! TRIMMED combinator - applies a string rule to a loosely-typed value
//!
//! Field values arrive as `serde_json::Value`. Format rules are written
//! against `str`; `Trimmed` bridges the two by running the inner rule on
//! [`safe_trim`] of the value.

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, safe_trim};

/// Runs a `str` validator against the trimmed text of a JSON value.
#[derive(Debug, Clone)]
pub struct Trimmed<V> {
    inner: V,
}

impl<V> Trimmed<V> {
    /// Wraps a string validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Trimmed<V>
where
    V: Validate<Input = str>,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        self.inner.validate(&safe_trim(input))
    }
}

/// Creates a `Trimmed` combinator.
pub fn trimmed<V>(validator: V) -> Trimmed<V>
where
    V: Validate<Input = str>,
{
    Trimmed::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;
    use serde_json::json;

    #[test]
    fn test_trims_before_checking() {
        let validator = trimmed(min_length(2));
        assert!(validator.validate(&json!("  Ab  ")).is_ok());
        assert!(validator.validate(&json!("  A  ")).is_err());
    }

    #[test]
    fn test_numbers_use_json_text() {
        let validator = trimmed(min_length(2));
        assert!(validator.validate(&json!(42)).is_ok());
        assert!(validator.validate(&json!(7)).is_err());
    }

    #[test]
    fn test_structured_values_are_blank() {
        let validator = trimmed(min_length(1));
        assert!(validator.validate(&json!({"title": "Dune"})).is_err());
    }
}
