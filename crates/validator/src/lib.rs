//! # litefi-validator
//!
//! Typed, composable validators for LiteFi onboarding and loan forms.
//!
//! ## Quick Start
//!
//! ```
//! use litefi_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let nin_field = exact_length(0).or(eleven_digits());
//! assert!(nin_field.validate("").is_ok());
//! assert!(nin_field.validate("1234").is_err());
//!
//! let report = validate_password("Sup3r$ecret");
//! assert!(report.is_valid);
//!
//! let phone = validate_phone_number("2348031234567");
//! assert_eq!(phone.formatted_number, "+234 803 123 4567");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Passwords**: [`validate_password`](validators::validate_password),
//!   [`calculate_password_strength`](validators::calculate_password_strength),
//!   [`PasswordPolicy`](validators::PasswordPolicy)
//! - **Phones**: [`validate_phone_number`](validators::validate_phone_number),
//!   [`phone_number_info`](validators::phone_number_info),
//!   [`NigerianPhone`](validators::NigerianPhone)
//! - **Identity**: [`Bvn`](validators::Bvn), [`Nin`](validators::Nin)
//! - **Strings**: [`NotBlank`](validators::NotBlank), [`MinLength`](validators::MinLength),
//!   [`Email`](validators::Email), [`DayMonthYear`](validators::DayMonthYear)

// ValidationError is the fundamental error type for all validators.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
