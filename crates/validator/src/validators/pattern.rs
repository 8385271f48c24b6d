//! Regular-expression validators
//!
//! The default ISBN and publish-date patterns live here as process-wide
//! constants. Both use explicit `[0-9]` classes; `\d` in the `regex` crate
//! also matches non-ASCII digits.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

/// Source of the default ISBN-13 pattern: prefix 978 or 979, 13 digits, no separators.
pub const ISBN_PATTERN: &str = r"^(978|979)[0-9]{10}$";

/// Source of the default publish-date pattern: `YYYY-MM-DD` shape, no calendar check.
pub const PUBLISH_DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

pub(crate) static ISBN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISBN_PATTERN).expect("ISBN pattern is a valid regex"));

pub(crate) static PUBLISH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PUBLISH_DATE_PATTERN).expect("publish date pattern is a valid regex")
});

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Anchoring is up to the pattern; use `^...$` for a full match.
    pub MatchesPattern { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("pattern")
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
    new(pattern: Regex) { Self { pattern } }
    fn matches_pattern(pattern: Regex);
}

/// Validator for the default ISBN-13 pattern.
#[must_use]
pub fn isbn13() -> MatchesPattern {
    MatchesPattern::new(ISBN_REGEX.clone())
}

/// Validator for the default `YYYY-MM-DD` pattern.
#[must_use]
pub fn iso_date_shape() -> MatchesPattern {
    MatchesPattern::new(PUBLISH_DATE_REGEX.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_isbn13() {
        let validator = isbn13();
        assert!(validator.validate("9780306406157").is_ok());
        assert!(validator.validate("9791234567896").is_ok());

        assert!(validator.validate("1234567890123").is_err());
        assert!(validator.validate("978-0306406157").is_err());
        assert!(validator.validate("978030640615").is_err());
        assert!(validator.validate("97803064061570").is_err());
        assert!(validator.validate("977030640615X").is_err());
    }

    #[test]
    fn test_isbn13_rejects_non_ascii_digits() {
        // Arabic-Indic digits after a valid prefix
        assert!(isbn13().validate("978٠٣٠٦٤٠٦١٥٧").is_err());
    }

    #[test]
    fn test_iso_date_shape() {
        let validator = iso_date_shape();
        assert!(validator.validate("2024-01-15").is_ok());
        assert!(validator.validate("2024-99-99").is_ok());

        assert!(validator.validate("2024/01/15").is_err());
        assert!(validator.validate("24-01-15").is_err());
        assert!(validator.validate("2024-1-15").is_err());
        assert!(validator.validate("2024-01-15T00:00").is_err());
    }

    #[test]
    fn test_matches_pattern_error() {
        let error = iso_date_shape().validate("soon").unwrap_err();
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("pattern"), Some(PUBLISH_DATE_PATTERN));
    }
}
