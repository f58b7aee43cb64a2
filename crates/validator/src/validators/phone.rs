//! Nigerian phone number classification and formatting.
//!
//! Numbers are classified after stripping every non-digit character, so
//! `+234 803-123-4567` and `2348031234567` are the same number. Nigerian
//! numbers need SMS OTP verification; anything else is approved without it.

use crate::foundation::{Validate, ValidationError};

/// Fewest digits a phone number may have.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Most digits a phone number may have (E.164 maximum).
pub const MAX_PHONE_DIGITS: usize = 15;

/// Nigeria's country calling code.
pub const NIGERIA_COUNTRY_CODE: &str = "234";

/// Four-digit local prefixes of Nigerian mobile networks.
pub const NIGERIAN_MOBILE_PREFIXES: [&str; 43] = [
    "0701", "0702", "0703", "0704", "0705", "0706", "0707", "0708", "0709", //
    "0802", "0803", "0804", "0805", "0806", "0807", "0808", "0809", //
    "0810", "0811", "0812", "0813", "0814", "0815", "0816", "0817", "0818", "0819", //
    "0901", "0902", "0903", "0904", "0905", "0906", "0907", "0908", "0909", //
    "0912", "0913", "0914", "0915", "0916", "0917", "0918",
];

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Clamped char slice, so short input never panics.
fn slice(digits: &str, start: usize, end: usize) -> &str {
    let end = end.min(digits.len());
    let start = start.min(end);
    &digits[start..end]
}

/// Local (`0…`) prefix of a digit string, up to four chars.
fn local_prefix(digits: &str) -> String {
    match digits.strip_prefix(NIGERIA_COUNTRY_CODE) {
        Some(rest) => format!("0{}", slice(rest, 0, 3)),
        None => slice(digits, 0, 4).to_owned(),
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Returns true if `phone` looks like a Nigerian number.
///
/// Matches `234` + 10 digits, `0` + 10 digits, or any number whose local
/// prefix is a Nigerian mobile prefix.
///
/// ```
/// use litefi_validator::validators::is_nigerian_number;
///
/// assert!(is_nigerian_number("+234 803 123 4567"));
/// assert!(is_nigerian_number("08031234567"));
/// assert!(!is_nigerian_number("+1 415 555 2671"));
/// ```
pub fn is_nigerian_number(phone: &str) -> bool {
    let digits = digits_only(phone);
    let len = digits.len();

    (digits.starts_with(NIGERIA_COUNTRY_CODE) && len == 13)
        || (digits.starts_with('0') && len == 11)
        || NIGERIAN_MOBILE_PREFIXES.contains(&local_prefix(&digits).as_str())
}

/// Formats a phone number for display.
///
/// ```
/// use litefi_validator::validators::format_phone_number;
///
/// assert_eq!(format_phone_number("2348031234567"), "+234 803 123 4567");
/// assert_eq!(format_phone_number("08031234567"), "0803 123 4567");
/// assert_eq!(format_phone_number("14155552671"), "+14155552671");
/// assert_eq!(format_phone_number("+14155552671"), "+14155552671");
/// ```
pub fn format_phone_number(phone: &str) -> String {
    if is_nigerian_number(phone) {
        let digits = digits_only(phone);
        if digits.starts_with(NIGERIA_COUNTRY_CODE) {
            return format!(
                "+234 {} {} {}",
                slice(&digits, 3, 6),
                slice(&digits, 6, 9),
                slice(&digits, 9, 13)
            );
        }
        if digits.starts_with('0') {
            return format!(
                "{} {} {}",
                slice(&digits, 0, 4),
                slice(&digits, 4, 7),
                slice(&digits, 7, 11)
            );
        }
    }

    if phone.starts_with('+') {
        phone.to_owned()
    } else {
        format!("+{phone}")
    }
}

/// Outcome of [`validate_phone_number`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhoneClassification {
    pub is_valid: bool,
    pub is_nigerian: bool,
    /// Nigerian numbers must be verified by OTP.
    pub requires_verification: bool,
    /// Display form, computed even for invalid input.
    pub formatted_number: String,
    pub errors: Vec<String>,
}

/// Validates and classifies a phone number.
///
/// The digit-count checks are independent of each other and of the
/// Nigerian classification.
pub fn validate_phone_number(phone: &str) -> PhoneClassification {
    let mut errors = Vec::new();

    if phone.is_empty() {
        errors.push("Phone number is required".to_owned());
    } else {
        let count = digits_only(phone).len();
        if count < MIN_PHONE_DIGITS {
            errors.push("Phone number must be at least 10 digits".to_owned());
        }
        if count > MAX_PHONE_DIGITS {
            errors.push("Phone number cannot exceed 15 digits".to_owned());
        }
    }

    let is_nigerian = is_nigerian_number(phone);
    PhoneClassification {
        is_valid: errors.is_empty(),
        is_nigerian,
        requires_verification: is_nigerian,
        formatted_number: format_phone_number(phone),
        errors,
    }
}

// ============================================================================
// VERIFICATION ROUTING
// ============================================================================

/// Where a number is registered, as far as onboarding cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Country {
    Nigeria,
    International,
}

/// How a newly registered number is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VerificationMethod {
    /// One-time code sent by SMS.
    SmsOtp,
    /// Approved without a code.
    AutomaticApproval,
}

impl VerificationMethod {
    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::SmsOtp => "SMS OTP verification",
            Self::AutomaticApproval => "Automatic approval",
        }
    }
}

/// Verification routing for a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhoneNumberInfo {
    pub country: Country,
    pub requires_verification: bool,
    pub verification_method: VerificationMethod,
}

/// Decides how `phone` is verified.
pub fn phone_number_info(phone: &str) -> PhoneNumberInfo {
    if is_nigerian_number(phone) {
        PhoneNumberInfo {
            country: Country::Nigeria,
            requires_verification: true,
            verification_method: VerificationMethod::SmsOtp,
        }
    } else {
        PhoneNumberInfo {
            country: Country::International,
            requires_verification: false,
            verification_method: VerificationMethod::AutomaticApproval,
        }
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

crate::validator! {
    /// Validates that a number is Nigerian.
    pub NigerianPhone for str;
    rule(input) { is_nigerian_number(input) }
    error(input) { ValidationError::new("not_nigerian_phone", "Enter a Nigerian phone number") }
    fn nigerian_phone();
}

/// Validates a phone number with [`validate_phone_number`].
///
/// Fails with code `invalid_phone`; the individual messages are nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneNumber;

impl Validate for PhoneNumber {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let report = validate_phone_number(input);
        if report.is_valid {
            return Ok(());
        }
        let nested = report
            .errors
            .into_iter()
            .map(|message| ValidationError::new("invalid_phone", message))
            .collect();
        Err(ValidationError::new("invalid_phone", "Invalid phone number").with_nested(nested))
    }
}

/// Creates a [`PhoneNumber`] validator.
#[must_use]
pub const fn phone_number() -> PhoneNumber {
    PhoneNumber
}

crate::validator! {
    /// Lenient form-field phone check.
    ///
    /// Keeps digits and `+`. A `+` number needs 9 to 15 digits after it, a
    /// `0` number exactly 11 digits, anything else 9 to 15 digits.
    pub LoosePhone for str;
    rule(input) { is_loose_phone(input) }
    error(input) { ValidationError::invalid_format("phone number") }
    fn loose_phone();
}

fn is_loose_phone(input: &str) -> bool {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if let Some(rest) = cleaned.strip_prefix('+') {
        all_digits(rest) && (9..=15).contains(&rest.len())
    } else if cleaned.starts_with('0') {
        all_digits(&cleaned) && cleaned.len() == 11
    } else {
        all_digits(&cleaned) && (9..=15).contains(&cleaned.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_prefix_list_is_complete() {
        let expected: Vec<String> = (701..=709)
            .chain(802..=819)
            .chain(901..=909)
            .chain(912..=918)
            .map(|n| format!("0{n}"))
            .collect();
        assert_eq!(NIGERIAN_MOBILE_PREFIXES.to_vec(), expected);
    }

    #[rstest]
    #[case("2348031234567", true)]
    #[case("+234 803 123 4567", true)]
    #[case("08031234567", true)]
    #[case("0803-123-4567", true)]
    #[case("01234567890", true)] // any 0 + 10 digits
    #[case("0803", true)] // prefix alone
    #[case("2349051", true)] // prefix of the local form
    #[case("0800", false)]
    #[case("0919", false)]
    #[case("14155552671", false)]
    #[case("", false)]
    fn test_is_nigerian_number(#[case] phone: &str, #[case] expected: bool) {
        assert_eq!(is_nigerian_number(phone), expected);
    }

    #[rstest]
    #[case("2348031234567", "+234 803 123 4567")]
    #[case("+234 803 123 4567", "+234 803 123 4567")]
    #[case("08031234567", "0803 123 4567")]
    #[case("0803", "0803  ")]
    #[case("234803", "+234 803  ")]
    #[case("2348", "+2348")]
    #[case("447911123456", "+447911123456")]
    #[case("+447911123456", "+447911123456")]
    #[case("", "+")]
    fn test_format_phone_number(#[case] phone: &str, #[case] expected: &str) {
        assert_eq!(format_phone_number(phone), expected);
    }

    #[test]
    fn test_validate_empty() {
        let report = validate_phone_number("");
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Phone number is required"]);
        assert!(!report.requires_verification);
    }

    #[rstest]
    #[case("080312", vec!["Phone number must be at least 10 digits"])]
    #[case("1234567890123456", vec!["Phone number cannot exceed 15 digits"])]
    #[case("+1 (415) 555-2671", vec![])]
    fn test_validate_digit_bounds(#[case] phone: &str, #[case] expected: Vec<&str>) {
        assert_eq!(validate_phone_number(phone).errors, expected);
    }

    #[test]
    fn test_validate_nigerian_requires_verification() {
        let report = validate_phone_number("08031234567");
        assert_eq!(
            report,
            PhoneClassification {
                is_valid: true,
                is_nigerian: true,
                requires_verification: true,
                formatted_number: "0803 123 4567".to_owned(),
                errors: vec![],
            }
        );
    }

    #[test]
    fn test_short_nigerian_prefix_is_invalid_but_formatted() {
        let report = validate_phone_number("0803");
        assert!(!report.is_valid);
        assert!(report.is_nigerian);
        assert_eq!(report.formatted_number, "0803  ");
    }

    #[test]
    fn test_phone_number_info() {
        assert_eq!(
            phone_number_info("+2348031234567"),
            PhoneNumberInfo {
                country: Country::Nigeria,
                requires_verification: true,
                verification_method: VerificationMethod::SmsOtp,
            }
        );
        let info = phone_number_info("+14155552671");
        assert_eq!(info.country, Country::International);
        assert_eq!(info.verification_method.description(), "Automatic approval");
    }

    #[test]
    fn test_phone_number_validator_nests_messages() {
        let err = phone_number().validate("").unwrap_err();
        assert_eq!(err.code, "invalid_phone");
        assert_eq!(err.messages(), vec!["Phone number is required"]);
        assert!(PhoneNumber.validate("08031234567").is_ok());
    }

    #[rstest]
    #[case("+2348031234567", true)]
    #[case("+234 803 123 4567", true)]
    #[case("+12345678", false)]
    #[case("+123456789", true)]
    #[case("08031234567", true)]
    #[case("0803123456", false)]
    #[case("080312345678", false)]
    #[case("803123456", true)]
    #[case("8031234567890123", false)]
    #[case("0803+1234567", false)]
    #[case("", false)]
    fn test_loose_phone(#[case] phone: &str, #[case] expected: bool) {
        assert_eq!(loose_phone().is_valid(phone), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_classification_serializes_camel_case() {
        let json = serde_json::to_value(validate_phone_number("08031234567")).unwrap();
        assert_eq!(json["formattedNumber"], "0803 123 4567");
        assert_eq!(json["requiresVerification"], true);
    }
}
