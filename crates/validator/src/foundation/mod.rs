//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type and compose with logical
//! combinators:
//!
//! ```
//! use litefi_validator::prelude::*;
//!
//! let username = not_blank().and(min_length(3));
//! assert!(username.validate("ada").is_ok());
//! assert!(username.validate("  ").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every validator and collects all failures, in order.
///
/// Unlike [`And`](crate::combinators::And) this does not stop at the first
/// failure, which is what a checklist-style UI (e.g. password rules) needs.
///
/// ```
/// use litefi_validator::foundation::{validate_with_all, Validate};
/// use litefi_validator::validators::{min_length, not_blank};
///
/// let rules: [&dyn Validate<Input = str>; 2] = [&not_blank(), &min_length(3)];
/// let errors = validate_with_all(" ", &rules).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result()
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
