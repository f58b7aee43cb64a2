//! Integration tests for Nigerian phone classification.

use litefi_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("+234 803 123 4567")]
#[case("2348031234567")]
#[case("234-803-123-4567")]
#[case("08031234567")]
#[case("0803 123 4567")]
fn same_number_in_any_notation(#[case] phone: &str) {
    let report = validate_phone_number(phone);
    assert!(report.is_valid);
    assert!(report.is_nigerian);
    assert!(report.requires_verification);
    assert_eq!(phone_number_info(phone).verification_method, VerificationMethod::SmsOtp);
}

#[test]
fn international_number_is_auto_approved() {
    let report = validate_phone_number("+44 7911 123456");
    assert_eq!(
        report,
        PhoneClassification {
            is_valid: true,
            is_nigerian: false,
            requires_verification: false,
            formatted_number: "+44 7911 123456".to_owned(),
            errors: vec![],
        }
    );
    assert_eq!(phone_number_info("447911123456").country, Country::International);
}

#[test]
fn every_listed_prefix_is_nigerian() {
    for prefix in NIGERIAN_MOBILE_PREFIXES {
        assert!(is_nigerian_number(prefix), "{prefix}");
        let international = format!("234{}", &prefix[1..]);
        assert!(is_nigerian_number(&international), "{international}");
    }
}

#[rstest]
#[case("", vec!["Phone number is required"])]
#[case("   ", vec!["Phone number must be at least 10 digits"])]
#[case("0803 12", vec!["Phone number must be at least 10 digits"])]
#[case("+1 234 567 890 123 456", vec!["Phone number cannot exceed 15 digits"])]
fn error_messages(#[case] phone: &str, #[case] expected: Vec<&str>) {
    assert_eq!(validate_phone_number(phone).errors, expected);
}

#[test]
fn formatted_number_is_computed_for_invalid_input() {
    let report = validate_phone_number("2348031");
    assert!(!report.is_valid);
    assert_eq!(report.formatted_number, "+234 803 1 ");
}

#[test]
fn account_phone_validator() {
    let account_phone = phone_number().and(nigerian_phone());
    assert!(account_phone.validate("08031234567").is_ok());
    assert_eq!(
        account_phone.validate("+14155552671").unwrap_err().code,
        "not_nigerian_phone"
    );
    assert_eq!(account_phone.validate("").unwrap_err().code, "invalid_phone");
}
