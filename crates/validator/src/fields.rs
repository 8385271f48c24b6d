//! The closed set of validated book fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A book attribute that has a registered rule.
///
/// Declaration order matches [`FieldName::ALL`]; the rule registry relies on
/// it for indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Title,
    Author,
    Isbn,
    Price,
    PublishDate,
    Description,
    Language,
    PageCount,
    Publisher,
    CoverImageUrl,
    Edition,
}

impl FieldName {
    /// Every known field, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Title,
        Self::Author,
        Self::Isbn,
        Self::Price,
        Self::PublishDate,
        Self::Description,
        Self::Language,
        Self::PageCount,
        Self::Publisher,
        Self::CoverImageUrl,
        Self::Edition,
    ];

    /// Evaluation order for the top-level attributes of a book.
    pub const TOP_LEVEL_ORDER: [Self; 5] = [
        Self::Title,
        Self::Author,
        Self::Isbn,
        Self::Price,
        Self::PublishDate,
    ];

    /// Evaluation order for `detailRequest` attributes.
    ///
    /// `Description` is deliberately absent: whole-book validation never
    /// checks it, only [`validate_field`](crate::validate_field) does.
    pub const DETAIL_ORDER: [Self; 5] = [
        Self::Language,
        Self::PageCount,
        Self::Publisher,
        Self::CoverImageUrl,
        Self::Edition,
    ];

    /// The wire name, as used in input keys and in `ValidationResult::field`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Isbn => "isbn",
            Self::Price => "price",
            Self::PublishDate => "publishDate",
            Self::Description => "description",
            Self::Language => "language",
            Self::PageCount => "pageCount",
            Self::Publisher => "publisher",
            Self::CoverImageUrl => "coverImageUrl",
            Self::Edition => "edition",
        }
    }

    /// Looks up a field by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Returns `true` for attributes that live under `detailRequest`.
    pub const fn is_detail(self) -> bool {
        matches!(
            self,
            Self::Description
                | Self::Language
                | Self::PageCount
                | Self::Publisher
                | Self::CoverImageUrl
                | Self::Edition
        )
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name that has no rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownField(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, field) in FieldName::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(FieldName::from_name("publishDate"), Some(FieldName::PublishDate));
        assert_eq!(FieldName::from_name("publishdate"), None);
        assert_eq!(FieldName::from_name("publish_date"), None);
        assert_eq!(
            "nonexistentField".parse::<FieldName>(),
            Err(UnknownField("nonexistentField".into()))
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&FieldName::CoverImageUrl).unwrap(),
            "\"coverImageUrl\""
        );
        let parsed: FieldName = serde_json::from_str("\"pageCount\"").unwrap();
        assert_eq!(parsed, FieldName::PageCount);
    }

    #[test]
    fn test_phases_partition_fields() {
        assert!(FieldName::TOP_LEVEL_ORDER.iter().all(|f| !f.is_detail()));
        assert!(FieldName::DETAIL_ORDER.iter().all(|f| f.is_detail()));
        assert!(!FieldName::DETAIL_ORDER.contains(&FieldName::Description));
    }
}
