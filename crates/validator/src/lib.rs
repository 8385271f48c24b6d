//! # libris-validator
//!
//! Fail-fast field validation for book submissions.
//!
//! ## Quick Start
//!
//! ```
//! use libris_validator::{validate_book_json, validate_field};
//! use serde_json::json;
//!
//! let verdict = validate_field("isbn", &json!("1234567890123"));
//! assert!(!verdict.is_valid());
//! assert_eq!(verdict.field(), Some("isbn"));
//!
//! let verdict = validate_book_json(&json!({
//!     "title": "Valid Title",
//!     "author": "A",
//!     "isbn": "9780306406157",
//!     "price": "10",
//!     "publishDate": "2024-01-01",
//!     "detailRequest": { "language": "" }
//! }));
//! assert_eq!(verdict.field(), Some("language"));
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the `Validate` trait and `ValidationError`
//! - [`validators`] and [`combinators`]: leaf rules and their composition
//! - [`registry`]: one composed rule per [`FieldName`]
//! - [`engine`]: the orchestrator ([`BookValidator`]) and the default engine
//! - [`config`]: message tables and patterns, loadable from JSON

pub mod book;
pub mod combinators;
pub mod config;
pub mod engine;
pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod result;
pub mod validators;

pub use book::{BookInput, DetailRequest};
pub use config::{ConfigError, MessageCatalog, PatternConfig, ValidatorConfig};
pub use engine::{BookValidator, default_validator, validate_book, validate_book_json, validate_field};
pub use fields::{FieldName, UnknownField};
pub use result::ValidationResult;
