//! String length and presence validators
//!
//! Length is measured in Unicode scalar values (chars). Form input is
//! measured after trimming surrounding whitespace, because a name made of
//! spaces is not a name.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to measure the length of form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count chars after trimming leading/trailing whitespace.
    #[default]
    Trimmed,
    /// Count every char as typed.
    Raw,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            Self::Trimmed => input.trim().chars().count(),
            Self::Raw => input.chars().count(),
        }
    }
}

// ============================================================================
// PRESENCE
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty. Whitespace counts as content.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "This field cannot be empty") }
    fn not_empty();
}

crate::validator! {
    /// Validates that a string has content other than whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("not_blank", "This field is required") }
    fn not_blank();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that input has at least `min` chars (trimmed by default).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Trimmed } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that does not trim.
    #[must_use]
    pub fn raw(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Raw,
        }
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has exactly `length` chars, as typed.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("Must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn exact_length(length: usize);
}
