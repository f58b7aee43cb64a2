//! Prelude module for convenient imports.
//!
//! Provides a single `use litefi_validator::prelude::*;` import that brings
//! in the traits, error types, validators and combinators.
//!
//! # Examples
//!
//! ```
//! use litefi_validator::prelude::*;
//!
//! let referral_email = optional_email();
//! let account_phone = phone_number().and(nigerian_phone());
//! assert!(referral_email.validate("").is_ok());
//! assert!(account_phone.validate("0803 123 4567").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, WithMessage, and, not, or, with_message};
