//! Error type for rule failures
//!
//! A failing rule returns a [`ValidationError`]: a machine-readable code, a
//! human-readable message and, once a field combinator has run, the name of
//! the offending field.
//!
//! All string fields use `Cow<'static, str>` so static codes and field names
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use libris_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("required", "Please enter a title.")
///     .with_field("title");
///
/// assert_eq!(error.field.as_deref(), Some("title"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable message, shown to end users as-is.
    pub message: Cow<'static, str>,

    /// Name of the field that failed, if the failure is attributable.
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failure, e.g. `[("min", "2"), ("actual", "1")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors this one replaced or wraps.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the innermost error along the first nested chain.
    ///
    /// Combinators that replace messages keep the original error nested, so
    /// this is the error the underlying rule produced.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(inner) = current.nested.first() {
            current = inner;
        }
        current
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates an "entity_required" error. It never carries a field.
    pub fn entity_required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("entity_required", message)
    }
}
