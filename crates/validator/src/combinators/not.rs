//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: passes when the inner validator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::nigerian_phone;

    #[test]
    fn test_not_inverts() {
        let international_only = not(nigerian_phone());
        assert!(international_only.validate("+14155552671").is_ok());
        assert!(international_only.validate("08031234567").is_err());
    }

    #[test]
    fn test_double_negation() {
        let validator = nigerian_phone().not().not();
        assert!(validator.validate("08031234567").is_ok());
        assert!(validator.validate("+14155552671").is_err());
    }
}
