//! Built-in validators
//!
//! # Categories
//!
//! - **Presence and length**: [`not_blank`], [`not_empty`], [`min_length`], [`exact_length`]
//! - **Content**: [`email`], [`optional_email`], [`matches_regex`]
//! - **Identity numbers**: [`bvn`], [`nin`], [`eleven_digits`]
//! - **Dates**: [`day_month_year`]
//! - **Passwords**: [`validate_password`], [`calculate_password_strength`], [`strong_password`]
//! - **Phones**: [`validate_phone_number`], [`is_nigerian_number`], [`nigerian_phone`], [`loose_phone`]
//!
//! # Examples
//!
//! ```
//! use litefi_validator::prelude::*;
//!
//! let full_name = not_blank().and(min_length(3));
//! assert!(full_name.validate("Ada Obi").is_ok());
//!
//! let bvn_field = bvn();
//! assert!(bvn_field.validate("22212345678").is_ok());
//! ```

pub mod content;
pub mod date;
pub mod identity;
pub mod length;
pub mod password;
pub mod phone;

pub use content::{Email, MatchesRegex, OptionalEmail, email, matches_regex, optional_email};
pub use date::{DayMonthYear, day_month_year, parse_day_month_year};
pub use identity::{Bvn, ElevenDigits, IDENTITY_NUMBER_DIGITS, Nin, bvn, eleven_digits, nin};
pub use length::{
    ExactLength, LengthMode, MinLength, NotBlank, NotEmpty, exact_length, min_length, not_blank,
    not_empty,
};
pub use password::{
    MIN_PASSWORD_LENGTH, PasswordPolicy, PasswordReport, PasswordRule, PasswordScore,
    PasswordStrength, SPECIAL_CHARACTERS, StrengthColor, calculate_password_strength,
    has_repeated_run, password_strength_color, password_strength_label, strong_password,
    validate_password,
};
pub use phone::{
    Country, LoosePhone, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS, NIGERIAN_MOBILE_PREFIXES,
    NigerianPhone, PhoneClassification, PhoneNumber, PhoneNumberInfo, VerificationMethod,
    format_phone_number, is_nigerian_number, loose_phone, nigerian_phone, phone_number,
    phone_number_info, validate_phone_number,
};
