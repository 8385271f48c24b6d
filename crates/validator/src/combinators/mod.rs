//! Validator combinators
//!
//! - [`And`]: fail-fast conjunction
//! - [`WithMessage`]: replaces the user-facing message
//! - [`Field`]: attributes failures to a field name
//! - [`Trimmed`]: runs a `str` rule on the trimmed text of a JSON value

pub mod and;
pub mod field;
pub mod message;
pub mod trimmed;

pub use and::{And, and};
pub use field::{Field, named_field};
pub use message::{WithMessage, with_message};
pub use trimmed::{Trimmed, trimmed};
