//! Message tables and pattern constants supplied to the engine.
//!
//! Everything here is data: the engine never inspects message text, and the
//! patterns are compiled once by [`PatternConfig::compile`].
//!
//! A configuration can be loaded from JSON; missing keys fall back to the
//! defaults, so a file only needs the entries it overrides:
//!
//! ```json
//! {
//!   "messages": { "required": { "title": "제목을 입력해주세요." } },
//!   "patterns": { "titleMinLength": 3 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fields::FieldName;
use crate::validators::pattern::{
    ISBN_PATTERN, ISBN_REGEX, PUBLISH_DATE_PATTERN, PUBLISH_DATE_REGEX,
};

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to build a validator from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} pattern `{pattern}`: {source}")]
    InvalidPattern {
        field: FieldName,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse validator config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read validator config from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Messages shown when a field is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredMessages {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: String,
    pub publish_date: String,
    pub description: String,
    pub language: String,
    pub page_count: String,
    pub publisher: String,
    pub cover_image_url: String,
    pub edition: String,
}

impl RequiredMessages {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::Author => &self.author,
            FieldName::Isbn => &self.isbn,
            FieldName::Price => &self.price,
            FieldName::PublishDate => &self.publish_date,
            FieldName::Description => &self.description,
            FieldName::Language => &self.language,
            FieldName::PageCount => &self.page_count,
            FieldName::Publisher => &self.publisher,
            FieldName::CoverImageUrl => &self.cover_image_url,
            FieldName::Edition => &self.edition,
        }
    }
}

impl Default for RequiredMessages {
    fn default() -> Self {
        Self {
            title: "Please enter a title.".into(),
            author: "Please enter an author.".into(),
            isbn: "Please enter an ISBN.".into(),
            price: "Please enter a price.".into(),
            publish_date: "Please enter a publish date.".into(),
            description: "Please enter a description.".into(),
            language: "Please enter a language.".into(),
            page_count: "Please enter a page count.".into(),
            publisher: "Please enter a publisher.".into(),
            cover_image_url: "Please enter a cover image.".into(),
            edition: "Please enter an edition.".into(),
        }
    }
}

/// Messages shown when a present value has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatMessages {
    /// Title shorter than the configured minimum.
    pub title: String,
    pub isbn: String,
    pub publish_date: String,
}

impl Default for FormatMessages {
    fn default() -> Self {
        Self {
            title: "Title must be at least 2 characters.".into(),
            isbn: "ISBN must be 13 digits starting with 978 or 979.".into(),
            publish_date: "Publish date must use the format YYYY-MM-DD.".into(),
        }
    }
}

/// Every user-facing text the engine can return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageCatalog {
    pub required: RequiredMessages,
    pub format: FormatMessages,
    #[serde(flatten)]
    pub general: GeneralMessages,
}

/// Messages not tied to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralMessages {
    /// The book itself is absent.
    pub entity_required: String,
    /// `validate_field` got a name with no rule.
    pub unknown_field: String,
}

impl Default for GeneralMessages {
    fn default() -> Self {
        Self {
            entity_required: "Book data is required.".into(),
            unknown_field: "unknown field".into(),
        }
    }
}

impl MessageCatalog {
    /// Parses a catalog from JSON, keeping defaults for absent keys.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Format constraints as configured, before compilation.
///
/// Patterns are matched with `Regex::is_match`; anchor them with `^...$`
/// for a full match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternConfig {
    pub isbn: String,
    pub publish_date: String,
    pub title_min_length: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            isbn: ISBN_PATTERN.to_owned(),
            publish_date: PUBLISH_DATE_PATTERN.to_owned(),
            title_min_length: 2,
        }
    }
}

impl PatternConfig {
    /// Compiles the configured patterns, reusing the built-in regexes when
    /// the sources are unchanged.
    pub fn compile(&self) -> Result<CompiledPatterns, ConfigError> {
        Ok(CompiledPatterns {
            isbn: compile_or_reuse(FieldName::Isbn, &self.isbn, &ISBN_REGEX)?,
            publish_date: compile_or_reuse(
                FieldName::PublishDate,
                &self.publish_date,
                &PUBLISH_DATE_REGEX,
            )?,
            title_min_length: self.title_min_length,
        })
    }
}

fn compile_or_reuse(field: FieldName, pattern: &str, builtin: &Regex) -> Result<Regex, ConfigError> {
    if pattern == builtin.as_str() {
        return Ok(builtin.clone());
    }
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        field,
        pattern: pattern.to_owned(),
        source,
    })
}

/// Compiled format constraints, ready for the rule registry.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub isbn: Regex,
    pub publish_date: Regex,
    pub title_min_length: usize,
}

impl Default for CompiledPatterns {
    fn default() -> Self {
        Self {
            isbn: ISBN_REGEX.clone(),
            publish_date: PUBLISH_DATE_REGEX.clone(),
            title_min_length: 2,
        }
    }
}

// ============================================================================
// TOP-LEVEL CONFIG
// ============================================================================

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    pub messages: MessageCatalog,
    pub patterns: PatternConfig,
}

impl ValidatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
