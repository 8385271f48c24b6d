//! The verdict handed back to callers.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Pass/fail verdict of a validation call.
///
/// Serializes as `{"isValid": bool, "message"?: string, "field"?: string}`.
/// A success never names a field; it may carry an informational message
/// (unknown field names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationResult {
    /// A plain success.
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
            field: None,
        }
    }

    /// A success carrying an informational note.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: Some(message.into()),
            field: None,
        }
    }

    /// A failure with an optional field attribution.
    pub fn invalid(message: impl Into<String>, field: Option<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            field,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self::invalid(error.message, error.field.map(Into::into))
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(outcome: Result<(), ValidationError>) -> Self {
        outcome.map_or_else(Self::from, |()| Self::valid())
    }
}
