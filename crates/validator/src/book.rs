//! Book submission input.
//!
//! Every attribute is an arbitrary JSON value so that partially-filled or
//! mistyped submissions reach the rules instead of failing deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::FieldName;

/// A book as submitted by a form or API client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_request: Option<DetailRequest>,
}

/// Optional descriptive attributes of a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<Value>,
}

/// Reads `key` from `value`, treating non-objects and JSON null as absent.
fn attribute(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}

impl BookInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an input from raw JSON without rejecting anything.
    ///
    /// Returns `None` for JSON `null`. Any other value yields an input whose
    /// attributes are read by key; non-object values simply have none. A
    /// non-null `detailRequest` is always treated as present.
    pub fn from_json(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }

        Some(Self {
            title: attribute(value, FieldName::Title.as_str()),
            author: attribute(value, FieldName::Author.as_str()),
            isbn: attribute(value, FieldName::Isbn.as_str()),
            price: attribute(value, FieldName::Price.as_str()),
            publish_date: attribute(value, FieldName::PublishDate.as_str()),
            detail_request: value
                .get("detailRequest")
                .filter(|v| !v.is_null())
                .map(DetailRequest::from_json),
        })
    }

    /// Returns the value of `field`, looking inside `detailRequest` for
    /// detail attributes.
    pub fn field(&self, field: FieldName) -> Option<&Value> {
        match field {
            FieldName::Title => self.title.as_ref(),
            FieldName::Author => self.author.as_ref(),
            FieldName::Isbn => self.isbn.as_ref(),
            FieldName::Price => self.price.as_ref(),
            FieldName::PublishDate => self.publish_date.as_ref(),
            _ => self.detail_request.as_ref()?.field(field),
        }
    }

    /// Sets `field`, creating `detailRequest` when a detail attribute is set.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: FieldName, value: impl Into<Value>) -> Self {
        let value = Some(value.into());
        match field {
            FieldName::Title => self.title = value,
            FieldName::Author => self.author = value,
            FieldName::Isbn => self.isbn = value,
            FieldName::Price => self.price = value,
            FieldName::PublishDate => self.publish_date = value,
            _ => {
                self.detail_request
                    .get_or_insert_with(DetailRequest::default)
                    .set(field, value);
            }
        }
        self
    }

    /// Attaches a detail section.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, detail: DetailRequest) -> Self {
        self.detail_request = Some(detail);
        self
    }
}

impl DetailRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient counterpart of [`BookInput::from_json`].
    pub fn from_json(value: &Value) -> Self {
        Self {
            description: attribute(value, FieldName::Description.as_str()),
            language: attribute(value, FieldName::Language.as_str()),
            page_count: attribute(value, FieldName::PageCount.as_str()),
            publisher: attribute(value, FieldName::Publisher.as_str()),
            cover_image_url: attribute(value, FieldName::CoverImageUrl.as_str()),
            edition: attribute(value, FieldName::Edition.as_str()),
        }
    }

    /// Returns the value of a detail attribute; `None` for top-level fields.
    pub fn field(&self, field: FieldName) -> Option<&Value> {
        match field {
            FieldName::Description => self.description.as_ref(),
            FieldName::Language => self.language.as_ref(),
            FieldName::PageCount => self.page_count.as_ref(),
            FieldName::Publisher => self.publisher.as_ref(),
            FieldName::CoverImageUrl => self.cover_image_url.as_ref(),
            FieldName::Edition => self.edition.as_ref(),
            _ => None,
        }
    }

    /// Sets a detail attribute. Top-level fields are ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: FieldName, value: impl Into<Value>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    fn set(&mut self, field: FieldName, value: Option<Value>) {
        match field {
            FieldName::Description => self.description = value,
            FieldName::Language => self.language = value,
            FieldName::PageCount => self.page_count = value,
            FieldName::Publisher => self.publisher = value,
            FieldName::CoverImageUrl => self.cover_image_url = value,
            FieldName::Edition => self.edition = value,
            _ => {}
        }
    }
}
