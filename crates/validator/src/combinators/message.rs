//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the message of a validator's error, keeping its code.
///
/// Forms show one message per field; this is how a generic rule gets a
/// field-specific sentence.
///
/// ```
/// use litefi_validator::prelude::*;
///
/// let validator = with_message(bvn(), "Enter the 11-digit BVN on your bank profile");
/// let err = validator.validate("123").unwrap_err();
/// assert_eq!(err.code, "invalid_bvn");
/// assert_eq!(err.message, "Enter the 11-digit BVN on your bank profile");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| ValidationError {
            message: self.message.clone(),
            nested: Vec::new(),
            ..original
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
