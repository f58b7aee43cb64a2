//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// something@something.something, no whitespace.
static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

crate::validator! {
    /// Validates an email field that may be left empty.
    pub OptionalEmail for str;
    rule(input) { input.is_empty() || EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn optional_email();
}

// ============================================================================
// REGEX
// ============================================================================

/// Validates that a string matches a regular expression.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: regex::Regex,
}

impl MatchesRegex {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
}

impl crate::foundation::Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("regex")
                .with_param("pattern", self.pattern.as_str().to_string()))
        }
    }
}

/// Creates a regex validator.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}
