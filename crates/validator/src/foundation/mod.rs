//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`
//! - **Values**: `is_empty` / `safe_trim` over loosely-typed field values
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input type. String format rules take
//! `str`; field rules take `serde_json::Value` because a submitted field may
//! hold anything.
//!
//! ## 2. Composition
//!
//! Validators compose using combinators:
//!
//! ```rust,ignore
//! let isbn = required()
//!     .with_message("Please enter an ISBN.")
//!     .and(trimmed(matches_pattern(isbn_regex)).with_message("ISBN must be 13 digits."))
//!     .for_field("isbn");
//! ```
//!
//! ## 3. Fail-fast
//!
//! Every composition stops at the first failing rule and hands that error
//! back unchanged apart from message and field attribution.

pub mod error;
pub mod traits;
pub mod value;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use value::{MISSING, is_empty, safe_trim};

/// A validation result using the standard `ValidationError`.
pub type ValidationOutcome<T = ()> = Result<T, ValidationError>;
