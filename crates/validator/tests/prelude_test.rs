//! Integration tests for the prelude module.
//!
//! Verifies that `use libris_validator::prelude::*` brings in everything
//! needed to compose field rules and run the book engine.

use libris_validator::prelude::*;
use serde_json::json;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = required().and(trimmed(min_length(3)));
    assert!(v.validate(&json!("hello")).is_ok());
    assert!(v.validate(&json!("hi")).is_err());
}

// ============================================================================
// COMPOSING A FIELD RULE
// ============================================================================

#[test]
fn custom_field_rule_via_prelude() {
    let subtitle = required()
        .with_message("Please enter a subtitle.")
        .and(trimmed(min_length(5)).with_message("Subtitle is too short."))
        .for_field("subtitle");

    let missing = subtitle.validate(&json!(null)).unwrap_err();
    assert_eq!(missing.message, "Please enter a subtitle.");
    assert_eq!(missing.field.as_deref(), Some("subtitle"));
    assert_eq!(missing.code, "required");

    let short = subtitle.validate(&json!(" abc ")).unwrap_err();
    assert_eq!(short.message, "Subtitle is too short.");
    assert_eq!(short.root_cause().param("min"), Some("5"));

    assert!(subtitle.validate(&json!("A Novel")).is_ok());
}

#[test]
fn pattern_validators_via_prelude() {
    assert!(isbn13().validate("9791234567896").is_ok());
    assert!(iso_date_shape().validate("2024-13-45").is_ok());
    assert!(trimmed(isbn13()).validate(&json!(" 9780306406157 ")).is_ok());
    assert!(not_blank().validate("\t").is_err());
}

#[test]
fn function_style_combinators_via_prelude() {
    let rule = named_field("edition", with_message(and(required(), required()), "Edition?"));
    let error = rule.validate(&json!("")).unwrap_err();
    assert_eq!(error.field.as_deref(), Some("edition"));
    assert_eq!(error.message, "Edition?");
}

// ============================================================================
// ENGINE VIA PRELUDE
// ============================================================================

#[test]
fn engine_entry_points_via_prelude() {
    let verdict: ValidationResult = validate_field("isbn", &json!("9780306406157"));
    assert!(verdict.is_valid());

    let book = BookInput::new().with_field(FieldName::Title, "Dune");
    assert_eq!(validate_book(Some(&book)).field(), Some("author"));
    assert_eq!(
        BookValidator::new().validate_book_json(&json!({})).field(),
        Some("title")
    );
}
