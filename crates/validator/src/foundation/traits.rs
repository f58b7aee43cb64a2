//! Core traits for the validation system
//!
//! Every validator in this crate implements [`Validate`]. The blanket
//! [`ValidateExt`] impl adds the fluent combinators.

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are pure: the same input always yields the same result and
/// validation has no side effects.
///
/// # Examples
///
/// ```
/// use litefi_validator::foundation::{Validate, ValidationError};
///
/// struct StartsWithZero;
///
/// impl Validate for StartsWithZero {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.starts_with('0') {
///             Ok(())
///         } else {
///             Err(ValidationError::new("leading_zero", "Must start with 0"))
///         }
///     }
/// }
///
/// assert!(StartsWithZero.validate("0803").is_ok());
/// assert!(!StartsWithZero.is_valid("803"));
/// ```
pub trait Validate {
    /// The type of input being validated (may be unsized, e.g. `str`).
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`validate`](Self::validate), for predicate-style callers.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// ```
/// use litefi_validator::prelude::*;
///
/// // NIN is optional: empty, or exactly eleven digits.
/// let nin = exact_length(0).or(eleven_digits());
/// assert!(nin.validate("").is_ok());
/// assert!(nin.validate("12345678901").is_ok());
/// assert!(nin.validate("1234").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
