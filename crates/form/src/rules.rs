//! Named field rules.
//!
//! Each function returns a fresh [`Rule`] carrying its name and a default
//! message. String rules see `Empty` as `""` and reject numbers, booleans
//! and files.
//!
//! ```
//! use litefi_form::{rules, FieldValue};
//!
//! assert!(rules::date().test(&"29/02/2024".into()));
//! assert!(!rules::date().test(&"31/02/2024".into()));
//! assert!(rules::nin().test(&FieldValue::Empty));
//! ```

use litefi_validator::foundation::Validate;
use litefi_validator::validators;

use crate::rule::Rule;
use crate::value::FieldValue;

/// Text: non-blank after trimming. Empty: fails. Anything else passes.
pub fn required() -> Rule {
    Rule::new("required", |value: &FieldValue| match value {
        FieldValue::Empty => false,
        FieldValue::Text(text) => !text.trim().is_empty(),
        _ => true,
    })
    .with_message("This field is required")
}

/// Trimmed text has at least `min` chars. Non-text fails.
pub fn min_length(min: usize) -> Rule {
    Rule::new("min_length", move |value: &FieldValue| {
        value
            .as_text()
            .is_some_and(|text| validators::min_length(min).is_valid(text))
    })
    .with_message(format!("Must be at least {min} characters"))
}

pub fn email() -> Rule {
    Rule::from_validator("email", validators::email()).with_message("Enter a valid email address")
}

/// Empty, or a valid email.
pub fn optional_email() -> Rule {
    Rule::from_validator("optional_email", validators::optional_email())
        .with_message("Enter a valid email address")
}

/// Lenient phone check used by contact fields.
pub fn phone() -> Rule {
    Rule::from_validator("phone", validators::loose_phone())
        .with_message("Enter a valid phone number")
}

pub fn bvn() -> Rule {
    Rule::from_validator("bvn", validators::bvn()).with_message("BVN must be exactly 11 digits")
}

/// Empty, or exactly eleven digits.
pub fn nin() -> Rule {
    Rule::from_validator("nin", validators::nin()).with_message("NIN must be exactly 11 digits")
}

/// Not the empty string. Whitespace counts; `Empty` fails.
pub fn not_empty() -> Rule {
    Rule::new("not_empty", |value: &FieldValue| match value {
        FieldValue::Empty => false,
        FieldValue::Text(text) => !text.is_empty(),
        _ => true,
    })
    .with_message("This field cannot be empty")
}

/// Truthiness, see [`FieldValue::is_truthy`].
pub fn has_value() -> Rule {
    Rule::new("has_value", FieldValue::is_truthy).with_message("Please provide a value")
}

/// Strict `dd/mm/yyyy` naming a real calendar day.
pub fn date() -> Rule {
    Rule::from_validator("date", validators::day_month_year())
        .with_message("Enter a valid date (dd/mm/yyyy)")
}

/// Passes the full password policy.
pub fn strong_password() -> Rule {
    Rule::from_validator("strong_password", validators::strong_password())
        .with_message("Password does not meet requirements")
}

/// A Nigerian phone number in any notation.
pub fn nigerian_phone() -> Rule {
    Rule::from_validator("nigerian_phone", validators::nigerian_phone())
        .with_message("Enter a Nigerian phone number")
}

/// Looks up a named rule that takes no arguments.
///
/// `min_length` is not included since it needs its bound.
pub fn by_name(name: &str) -> Option<Rule> {
    let rule = match name {
        "required" => required(),
        "email" => email(),
        "optional_email" => optional_email(),
        "phone" => phone(),
        "bvn" => bvn(),
        "nin" => nin(),
        "not_empty" => not_empty(),
        "has_value" => has_value(),
        "date" => date(),
        "strong_password" => strong_password(),
        "nigerian_phone" => nigerian_phone(),
        _ => return None,
    };
    Some(rule)
}
