//! OR combinator - logical disjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Succeeds as soon as one side passes. When both fail, the returned
/// `or_failed` error carries both causes as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        match self.right.validate(input) {
            Ok(()) => Ok(()),
            Err(right_error) => Err(ValidationError::new("or_failed", "All alternatives failed")
                .with_nested(vec![left_error, right_error])),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
