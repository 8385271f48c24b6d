//! Rule registry: one composed validator per known field.
//!
//! The registry is built once from a message catalog and compiled patterns
//! and is read-only afterwards. Each rule is a pure function of a single
//! field value.

use std::fmt;

use serde_json::Value;

use crate::combinators::trimmed;
use crate::config::{CompiledPatterns, MessageCatalog};
use crate::fields::FieldName;
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::validators::{matches_pattern, min_length, required};

/// A boxed, thread-safe rule over a single field value.
pub type FieldRule = Box<dyn Validate<Input = Value> + Send + Sync>;

/// Immutable mapping from [`FieldName`] to its rule.
pub struct RuleRegistry {
    // Indexed by `FieldName::index`.
    rules: Box<[FieldRule]>,
}

impl RuleRegistry {
    /// Builds a rule for every field in [`FieldName::ALL`].
    pub fn new(messages: &MessageCatalog, patterns: &CompiledPatterns) -> Self {
        let rules = FieldName::ALL
            .into_iter()
            .map(|field| build_rule(field, messages, patterns))
            .collect();

        tracing::debug!(rules = FieldName::ALL.len(), "built rule registry");
        Self { rules }
    }

    /// Returns the rule for `field`.
    pub fn rule(&self, field: FieldName) -> &FieldRule {
        &self.rules[field.index()]
    }

    /// Runs the rule for `field` against `value`.
    pub fn check(&self, field: FieldName, value: &Value) -> Result<(), ValidationError> {
        self.rule(field).validate(value)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new(&MessageCatalog::default(), &CompiledPatterns::default())
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("fields", &FieldName::ALL.map(FieldName::as_str))
            .finish()
    }
}

/// Required-check for every field, then a format check for `title`, `isbn`
/// and `publishDate`.
fn build_rule(field: FieldName, messages: &MessageCatalog, patterns: &CompiledPatterns) -> FieldRule {
    let present = required().with_message(messages.required.get(field).to_owned());

    match field {
        FieldName::Title => Box::new(
            present
                .and(
                    trimmed(min_length(patterns.title_min_length))
                        .with_message(messages.format.title.clone()),
                )
                .for_field(field.as_str()),
        ),
        FieldName::Isbn => Box::new(
            present
                .and(
                    trimmed(matches_pattern(patterns.isbn.clone()))
                        .with_message(messages.format.isbn.clone()),
                )
                .for_field(field.as_str()),
        ),
        FieldName::PublishDate => Box::new(
            present
                .and(
                    trimmed(matches_pattern(patterns.publish_date.clone()))
                        .with_message(messages.format.publish_date.clone()),
                )
                .for_field(field.as_str()),
        ),
        FieldName::Author
        | FieldName::Price
        | FieldName::Description
        | FieldName::Language
        | FieldName::PageCount
        | FieldName::Publisher
        | FieldName::CoverImageUrl
        | FieldName::Edition => Box::new(present.for_field(field.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_field_has_a_rule_that_rejects_null() {
        let registry = RuleRegistry::default();
        let messages = MessageCatalog::default();

        for field in FieldName::ALL {
            let error = registry.check(field, &Value::Null).unwrap_err();
            assert_eq!(error.code, "required");
            assert_eq!(error.field.as_deref(), Some(field.as_str()));
            assert_eq!(error.message, messages.required.get(field));
        }
    }

    #[test]
    fn test_format_tier_codes() {
        let registry = RuleRegistry::default();

        let title = registry.check(FieldName::Title, &json!("A")).unwrap_err();
        assert_eq!(title.code, "min_length");
        assert_eq!(title.root_cause().param("actual"), Some("1"));

        let isbn = registry.check(FieldName::Isbn, &json!("1234567890123")).unwrap_err();
        assert_eq!(isbn.code, "invalid_format");

        let date = registry.check(FieldName::PublishDate, &json!("2024/01/15")).unwrap_err();
        assert_eq!(date.code, "invalid_format");
    }

    #[test]
    fn test_required_only_fields_accept_anything_present() {
        let registry = RuleRegistry::default();
        for field in [FieldName::Price, FieldName::PageCount] {
            assert!(registry.check(field, &json!("not a number")).is_ok());
            assert!(registry.check(field, &json!(-3)).is_ok());
            assert!(registry.check(field, &json!(0)).is_ok());
        }
    }

    #[test]
    fn test_debug_lists_fields() {
        let debug = format!("{:?}", RuleRegistry::default());
        assert!(debug.contains("coverImageUrl"));
    }
}
