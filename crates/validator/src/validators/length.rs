//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so a two-syllable
//! Hangul title counts as two characters.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}
