//! Nigerian identity numbers
//!
//! The Bank Verification Number (BVN) and National Identification Number
//! (NIN) are both eleven ASCII digits. BVN is mandatory on KYC forms; NIN is
//! optional and may be left empty.

use crate::foundation::ValidationError;

/// Length of both BVN and NIN.
pub const IDENTITY_NUMBER_DIGITS: usize = 11;

fn is_eleven_digits(input: &str) -> bool {
    input.len() == IDENTITY_NUMBER_DIGITS && input.bytes().all(|b| b.is_ascii_digit())
}

crate::validator! {
    /// Exactly eleven ASCII digits, nothing else.
    pub ElevenDigits for str;
    rule(input) { is_eleven_digits(input) }
    error(input) {
        ValidationError::new("invalid_digits", "Must be exactly 11 digits")
            .with_param("expected", IDENTITY_NUMBER_DIGITS.to_string())
    }
    fn eleven_digits();
}

crate::validator! {
    /// Bank Verification Number.
    pub Bvn for str;
    rule(input) { is_eleven_digits(input) }
    error(input) { ValidationError::new("invalid_bvn", "BVN must be exactly 11 digits") }
    fn bvn();
}

crate::validator! {
    /// National Identification Number; empty means "not provided".
    pub Nin for str;
    rule(input) { input.is_empty() || is_eleven_digits(input) }
    error(input) { ValidationError::new("invalid_nin", "NIN must be exactly 11 digits") }
    fn nin();
}
