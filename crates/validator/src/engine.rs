//! Validation orchestrator.
//!
//! Applies the registry rules to a whole book in a fixed order and stops at
//! the first failure. The free functions at the bottom of this module use a
//! process-wide engine with the default messages and patterns.

use std::sync::LazyLock;

use serde_json::Value;

use crate::book::BookInput;
use crate::config::{ConfigError, GeneralMessages, MessageCatalog, ValidatorConfig};
use crate::fields::FieldName;
use crate::foundation::{MISSING, ValidationError};
use crate::registry::RuleRegistry;
use crate::result::ValidationResult;

/// Book validation engine.
///
/// Holds only immutable data, so one instance can serve any number of
/// threads.
///
/// # Examples
///
/// ```
/// use libris_validator::{BookInput, BookValidator};
/// use serde_json::json;
///
/// let validator = BookValidator::new();
/// let book: BookInput = serde_json::from_value(json!({
///     "title": "Valid Title",
///     "author": "A",
///     "isbn": "9780306406157",
///     "price": "10",
///     "publishDate": "2024-01-01"
/// }))
/// .unwrap();
///
/// assert!(validator.validate_book(Some(&book)).is_valid());
/// ```
#[derive(Debug)]
pub struct BookValidator {
    registry: RuleRegistry,
    messages: GeneralMessages,
}

impl BookValidator {
    /// Creates an engine with the default messages and patterns.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::default(),
            messages: GeneralMessages::default(),
        }
    }

    /// Creates an engine from configuration, compiling its patterns.
    pub fn from_config(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let patterns = config.patterns.compile()?;
        tracing::debug!(
            title_min_length = patterns.title_min_length,
            isbn_pattern = patterns.isbn.as_str(),
            publish_date_pattern = patterns.publish_date.as_str(),
            "building book validator from config"
        );
        Ok(Self::with_parts(&config.messages, RuleRegistry::new(&config.messages, &patterns)))
    }

    /// Creates an engine with custom messages and the default patterns.
    pub fn with_messages(messages: MessageCatalog) -> Self {
        let registry = RuleRegistry::new(&messages, &Default::default());
        Self::with_parts(&messages, registry)
    }

    fn with_parts(messages: &MessageCatalog, registry: RuleRegistry) -> Self {
        Self {
            registry,
            messages: messages.general.clone(),
        }
    }

    /// The rule registry backing this engine.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Result-returning API
    // ------------------------------------------------------------------

    /// Runs the rule for a single known field.
    pub fn check_field(&self, field: FieldName, value: &Value) -> Result<(), ValidationError> {
        self.registry.check(field, value)
    }

    /// Validates a whole book, returning the first failing rule's error.
    ///
    /// Order: `title, author, isbn, price, publishDate`, then, only when
    /// `detailRequest` is present, `language, pageCount, publisher,
    /// coverImageUrl, edition`. `description` is never checked here.
    pub fn check_book(&self, book: Option<&BookInput>) -> Result<(), ValidationError> {
        let Some(book) = book else {
            return Err(ValidationError::entity_required(
                self.messages.entity_required.clone(),
            ));
        };

        self.check_phase(book, &FieldName::TOP_LEVEL_ORDER)?;
        if book.detail_request.is_some() {
            self.check_phase(book, &FieldName::DETAIL_ORDER)?;
        }
        Ok(())
    }

    fn check_phase(&self, book: &BookInput, order: &[FieldName]) -> Result<(), ValidationError> {
        order
            .iter()
            .try_for_each(|&field| self.check_field(field, book.field(field).unwrap_or(&MISSING)))
    }

    // ------------------------------------------------------------------
    // Verdict API
    // ------------------------------------------------------------------

    /// Validates a whole book. See [`check_book`](Self::check_book) for the order.
    pub fn validate_book(&self, book: Option<&BookInput>) -> ValidationResult {
        match self.check_book(book) {
            Ok(()) => ValidationResult::valid(),
            Err(error) => {
                tracing::debug!(
                    field = error.field.as_deref().unwrap_or("-"),
                    code = %error.code,
                    "book rejected"
                );
                error.into()
            }
        }
    }

    /// Validates a book given as raw JSON. `null` is a missing book.
    pub fn validate_book_json(&self, value: &Value) -> ValidationResult {
        self.validate_book(BookInput::from_json(value).as_ref())
    }

    /// Validates one field by wire name.
    ///
    /// Names without a rule are not an error: the result is a success that
    /// carries the unknown-field message.
    pub fn validate_field(&self, field_name: &str, value: &Value) -> ValidationResult {
        let Some(field) = FieldName::from_name(field_name) else {
            tracing::trace!(field = field_name, "no rule registered for field");
            return ValidationResult::note(self.messages.unknown_field.clone());
        };

        match self.check_field(field, value) {
            Ok(()) => ValidationResult::valid(),
            Err(error) => {
                tracing::debug!(field = field.as_str(), code = %error.code, "field rejected");
                error.into()
            }
        }
    }
}

impl Default for BookValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DEFAULT ENGINE
// ============================================================================

static DEFAULT_VALIDATOR: LazyLock<BookValidator> = LazyLock::new(BookValidator::new);

/// The process-wide engine with default messages and patterns.
pub fn default_validator() -> &'static BookValidator {
    &DEFAULT_VALIDATOR
}

/// Validates a whole book with the default engine.
pub fn validate_book(book: Option<&BookInput>) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_book(book)
}

/// Validates a book given as raw JSON with the default engine.
pub fn validate_book_json(value: &Value) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_book_json(value)
}

/// Validates one field by wire name with the default engine.
pub fn validate_field(field_name: &str, value: &Value) -> ValidationResult {
    DEFAULT_VALIDATOR.validate_field(field_name, value)
}
