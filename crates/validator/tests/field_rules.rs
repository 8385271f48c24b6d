//! Per-field rules through `validate_field`.

use libris_validator::{FieldName, MessageCatalog, ValidationResult, validate_field};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn messages() -> MessageCatalog {
    MessageCatalog::default()
}

fn failure(message: &str, field: &str) -> ValidationResult {
    ValidationResult::invalid(message, Some(field.to_owned()))
}

// ============================================================================
// REQUIRED TIER
// ============================================================================

#[rstest]
fn empty_values_fail_with_required_message(
    #[values(
        FieldName::Title,
        FieldName::Author,
        FieldName::Isbn,
        FieldName::Price,
        FieldName::PublishDate,
        FieldName::Description,
        FieldName::Language,
        FieldName::PageCount,
        FieldName::Publisher,
        FieldName::CoverImageUrl,
        FieldName::Edition
    )]
    field: FieldName,
    #[values(Value::Null, json!(""), json!("   "), json!("\t\n"))] value: Value,
) {
    let expected = failure(messages().required.get(field), field.as_str());
    assert_eq!(validate_field(field.as_str(), &value), expected);
}

#[rstest]
#[case::author("author", json!("A"))]
#[case::price_text("price", json!("10"))]
#[case::price_number("price", json!(10.5))]
#[case::price_non_numeric("price", json!("ten dollars"))]
#[case::page_count("pageCount", json!(320))]
#[case::page_count_negative("pageCount", json!(-1))]
#[case::description("description", json!("A desert planet."))]
#[case::language("language", json!("ko"))]
#[case::publisher("publisher", json!("Chilton"))]
#[case::cover("coverImageUrl", json!("not even a url"))]
#[case::edition("edition", json!(2))]
fn required_only_fields_accept_any_present_value(#[case] field: &str, #[case] value: Value) {
    assert_eq!(validate_field(field, &value), ValidationResult::valid());
}

// ============================================================================
// FORMAT TIER
// ============================================================================

#[rstest]
#[case::two_chars("Ab")]
#[case::padded(" Ab ")]
#[case::hangul("토지")]
#[case::long("The Left Hand of Darkness")]
fn title_accepts_two_or_more_chars(#[case] title: &str) {
    assert_eq!(validate_field("title", &json!(title)), ValidationResult::valid());
}

#[rstest]
#[case::one_char("A")]
#[case::one_char_padded("  A  ")]
#[case::one_hangul("책")]
fn title_rejects_short(#[case] title: &str) {
    assert_eq!(
        validate_field("title", &json!(title)),
        failure(&messages().format.title, "title")
    );
}

#[rstest]
#[case::prefix_978(json!("9780306406157"))]
#[case::prefix_979(json!("9791234567896"))]
#[case::padded(json!("  9780306406157  "))]
#[case::number_literal(json!(9_780_306_406_157_u64))]
fn isbn_accepts_thirteen_digit_978_979(#[case] isbn: Value) {
    assert_eq!(validate_field("isbn", &isbn), ValidationResult::valid());
}

#[rstest]
#[case::wrong_prefix("1234567890123")]
#[case::hyphenated("978-0-306-40615-7")]
#[case::too_short("978030640615")]
#[case::too_long("97803064061570")]
#[case::isbn10("0306406152")]
#[case::letters("978030640615X")]
fn isbn_rejects_malformed(#[case] isbn: &str) {
    assert_eq!(
        validate_field("isbn", &json!(isbn)),
        failure(&messages().format.isbn, "isbn")
    );
}

#[rstest]
#[case::plain("2024-01-15")]
#[case::padded(" 2024-01-15 ")]
#[case::not_a_calendar_date("2024-99-99")]
fn publish_date_accepts_yyyy_mm_dd_shape(#[case] date: &str) {
    assert_eq!(validate_field("publishDate", &json!(date)), ValidationResult::valid());
}

#[rstest]
#[case::slashes("2024/01/15")]
#[case::short_year("24-01-15")]
#[case::single_digit_month("2024-1-15")]
#[case::timestamp("2024-01-15T10:00:00Z")]
#[case::words("January 15, 2024")]
fn publish_date_rejects_other_shapes(#[case] date: &str) {
    assert_eq!(
        validate_field("publishDate", &json!(date)),
        failure(&messages().format.publish_date, "publishDate")
    );
}

#[test]
fn structured_values_pass_required_but_fail_format() {
    let title = validate_field("title", &json!({ "text": "Dune" }));
    assert_eq!(title, failure(&messages().format.title, "title"));

    let author = validate_field("author", &json!(["Frank Herbert"]));
    assert_eq!(author, ValidationResult::valid());
}

// ============================================================================
// UNKNOWN FIELDS
// ============================================================================

#[rstest]
#[case::unknown("nonexistentField")]
#[case::wrong_case("Title")]
#[case::snake_case("publish_date")]
#[case::empty("")]
#[case::detail_container("detailRequest")]
fn unknown_field_is_informational_success(#[case] name: &str) {
    let expected = ValidationResult::note("unknown field");
    assert_eq!(validate_field(name, &json!("x")), expected);
    assert_eq!(validate_field(name, &json!("x")), expected);
    assert_eq!(validate_field(name, &Value::Null), expected);
}
