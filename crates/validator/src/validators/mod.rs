//! Built-in validators
//!
//! - **Presence**: [`Required`] for field values, [`NotBlank`] for strings
//! - **Length**: [`MinLength`]
//! - **Pattern**: [`MatchesPattern`], plus the default [`isbn13`] and
//!   [`iso_date_shape`] patterns

pub mod length;
pub mod pattern;
pub mod presence;

pub use length::{MinLength, min_length};
pub use pattern::{
    ISBN_PATTERN, MatchesPattern, PUBLISH_DATE_PATTERN, isbn13, iso_date_shape, matches_pattern,
};
pub use presence::{NotBlank, Required, not_blank, required};
