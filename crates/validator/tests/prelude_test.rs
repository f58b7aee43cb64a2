//! Integration tests for the prelude module.
//!
//! Verifies that `use litefi_validator::prelude::*` brings in everything
//! an onboarding form needs.

use litefi_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = not_blank().and(min_length(3));
    assert!(v.validate("Ada").is_ok());
    assert!(v.validate("  ").is_err());
}

// ============================================================================
// ONBOARDING FIELDS VIA PRELUDE
// ============================================================================

#[test]
fn identity_fields_via_prelude() {
    assert!(bvn().validate("22212345678").is_ok());
    assert!(bvn().validate("").is_err());
    assert!(nin().validate("").is_ok());
    assert!(nin().validate("1234567890").is_err());
}

#[test]
fn date_of_birth_via_prelude() {
    assert!(day_month_year().validate("29/02/2000").is_ok());
    assert!(day_month_year().validate("29/02/1900").is_err());
    assert!(day_month_year().validate("2000-02-29").is_err());
}

#[test]
fn contact_fields_via_prelude() {
    assert!(email().validate("ada@litefi.ng").is_ok());
    assert!(optional_email().validate("").is_ok());
    assert!(loose_phone().validate("+234 803 123 4567").is_ok());
}

// ============================================================================
// COMBINATORS VIA PRELUDE
// ============================================================================

#[test]
fn or_combinator_via_prelude() {
    let v = or(exact_length(0), email());
    assert!(v.validate("").is_ok());
    let err = v.validate("nope").unwrap_err();
    assert_eq!(err.nested.len(), 2);
}

#[test]
fn not_combinator_via_prelude() {
    let international = not(nigerian_phone());
    assert!(international.validate("+14155552671").is_ok());
    assert!(international.validate("08031234567").is_err());
}

#[test]
fn collect_all_errors_via_foundation() {
    use litefi_validator::foundation::validate_with_all;

    let rules: [&dyn Validate<Input = str>; 3] = [&not_blank(), &min_length(3), &email()];
    let errors = validate_with_all("ab", &rules).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.errors()[0].code, "min_length");
}
