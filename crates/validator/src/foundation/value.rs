//! Presence and trimming helpers for loosely-typed field values.
//!
//! Field values arrive as `serde_json::Value`; a missing attribute is
//! represented by the caller as [`Value::Null`].

use std::borrow::Cow;

use serde_json::Value;

/// Shared stand-in for an attribute that is not present at all.
pub static MISSING: Value = Value::Null;

/// Returns `true` for null and for strings that are empty after trimming.
///
/// Numbers, booleans, arrays and objects always count as present, `0` and
/// `false` included.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Trims surrounding whitespace, tolerating non-string input.
///
/// Numbers and booleans are rendered as their JSON text; null, arrays and
/// objects have no textual form and trim to `""`.
pub fn safe_trim(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.trim()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
    }
}
