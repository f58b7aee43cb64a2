//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned unchanged.
///
/// ```
/// use litefi_validator::prelude::*;
///
/// let account_name = not_blank().and(min_length(3));
/// assert!(account_name.validate("Ada Obi").is_ok());
/// assert_eq!(account_name.validate("").unwrap_err().code, "not_blank");
/// assert_eq!(account_name.validate("Al").unwrap_err().code, "min_length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{bvn, min_length, not_blank};

    #[test]
    fn test_and_both_pass() {
        assert!(and(not_blank(), bvn()).validate("12345678901").is_ok());
    }

    #[test]
    fn test_and_reports_left_error_first() {
        let err = not_blank().and(bvn()).validate("   ").unwrap_err();
        assert_eq!(err.code, "not_blank");
    }

    #[test]
    fn test_and_reports_right_error() {
        let err = not_blank().and(bvn()).validate("1234").unwrap_err();
        assert_eq!(err.code, "invalid_bvn");
    }

    #[test]
    fn test_and_chain() {
        let validator = not_blank().and(min_length(3)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hey").is_err());
    }
}
