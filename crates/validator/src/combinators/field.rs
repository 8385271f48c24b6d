//! FIELD combinator - attributes failures to a named field

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Tags every error of the wrapped validator with a field name.
///
/// An existing field name on the inner error is overwritten, so the
/// outermost `Field` wins.
#[derive(Debug, Clone)]
pub struct Field<V> {
    name: Cow<'static, str>,
    validator: V,
}

impl<V> Field<V> {
    /// Creates a new field validator.
    pub fn new(name: impl Into<Cow<'static, str>>, validator: V) -> Self {
        Self {
            name: name.into(),
            validator,
        }
    }

    /// Returns the field name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V> Validate for Field<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validator
            .validate(input)
            .map_err(|e| e.with_field(self.name.clone()))
    }
}

/// Creates a field validator with a name.
pub fn named_field<V>(name: impl Into<Cow<'static, str>>, validator: V) -> Field<V> {
    Field::new(name, validator)
}
