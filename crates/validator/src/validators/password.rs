//! Password policy and strength scoring.
//!
//! Two independent notions of "strength" live here and are kept apart on
//! purpose:
//!
//! - [`validate_password`] runs the five policy rules and buckets the
//!   *number of failed rules* into [`PasswordStrength`].
//! - [`calculate_password_strength`] computes a 0-100 score for the meter,
//!   which [`password_strength_color`] and [`password_strength_label`] map to
//!   display values with their own thresholds.
//!
//! The two can disagree on the same password; callers pick the one that
//! matches what they display.

use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" rule.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

// ============================================================================
// POLICY RULES
// ============================================================================

/// One rule of the password policy, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    /// At least [`MIN_PASSWORD_LENGTH`] characters.
    MinLength,
    /// At least one `A-Z`.
    Uppercase,
    /// At least one `a-z`.
    Lowercase,
    /// At least one `0-9`.
    Digit,
    /// At least one of [`SPECIAL_CHARACTERS`].
    Special,
}

impl PasswordRule {
    /// All rules in check order.
    pub const ALL: [Self; 5] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Lowercase,
        Self::Digit,
        Self::Special,
    ];

    /// Returns true if `password` satisfies this rule.
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(is_special),
        }
    }

    /// Stable error code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MinLength => "password_too_short",
            Self::Uppercase => "password_missing_uppercase",
            Self::Lowercase => "password_missing_lowercase",
            Self::Digit => "password_missing_digit",
            Self::Special => "password_missing_special",
        }
    }

    /// Message shown to the user when the rule fails.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MinLength => "Password must be at least 8 characters long",
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Lowercase => "Password must contain at least one lowercase letter",
            Self::Digit => "Password must contain at least one number",
            Self::Special => "Password must contain at least one special character",
        }
    }

    fn to_error(self) -> ValidationError {
        ValidationError::new(self.code(), self.message())
    }
}

// ============================================================================
// POLICY REPORT
// ============================================================================

/// Strength bucket derived from how many policy rules failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PasswordStrength {
    /// Three or more rules failed.
    Weak,
    /// One or two rules failed.
    Medium,
    /// Every rule passed.
    Strong,
}

impl PasswordStrength {
    /// Buckets a failed-rule count.
    pub const fn from_failed_rules(failed: usize) -> Self {
        match failed {
            0 => Self::Strong,
            1 | 2 => Self::Medium,
            _ => Self::Weak,
        }
    }

    /// Lowercase name, as sent to the frontend.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Outcome of checking a password against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PasswordReport {
    /// True when no rule failed.
    pub is_valid: bool,
    /// Messages of the failed rules, in check order.
    pub errors: Vec<String>,
    /// Bucket of the failed-rule count.
    pub strength: PasswordStrength,
}

/// Checks `password` against every policy rule.
///
/// ```
/// use litefi_validator::validators::{validate_password, PasswordStrength};
///
/// let report = validate_password("Sup3r$ecret");
/// assert!(report.is_valid);
/// assert_eq!(report.strength, PasswordStrength::Strong);
///
/// let report = validate_password("secret");
/// assert_eq!(report.errors.len(), 4);
/// assert_eq!(report.strength, PasswordStrength::Weak);
/// ```
pub fn validate_password(password: &str) -> PasswordReport {
    let errors: Vec<String> = failed_rules(password)
        .map(|rule| rule.message().to_owned())
        .collect();

    PasswordReport {
        is_valid: errors.is_empty(),
        strength: PasswordStrength::from_failed_rules(errors.len()),
        errors,
    }
}

fn failed_rules(password: &str) -> impl Iterator<Item = PasswordRule> + '_ {
    PasswordRule::ALL
        .into_iter()
        .filter(move |rule| !rule.is_satisfied_by(password))
}

// ============================================================================
// STRENGTH SCORE
// ============================================================================

/// Returns true if any character appears three or more times in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in password.chars() {
        if previous == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Scores a password from 0 to 100 for the strength meter.
///
/// Length contributes up to 25 points (two per char). Each character class
/// present adds its own bonus (upper 10, lower 10, digit 10, special 15) and
/// then a further 10 per class present. A run of three identical characters
/// costs 10.
///
/// ```
/// use litefi_validator::validators::calculate_password_strength;
///
/// assert_eq!(calculate_password_strength(""), 0);
/// assert_eq!(calculate_password_strength("aaaaaaaa"), 26);
/// assert_eq!(calculate_password_strength("Aa1!aaaa"), 91);
/// ```
pub fn calculate_password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut score = length.saturating_mul(2).min(25) as i32;

    let classes = [
        (PasswordRule::Uppercase, 10),
        (PasswordRule::Lowercase, 10),
        (PasswordRule::Digit, 10),
        (PasswordRule::Special, 15),
    ];
    let mut variety = 0;
    for (rule, bonus) in classes {
        if rule.is_satisfied_by(password) {
            score += bonus;
            variety += 1;
        }
    }
    score += variety * 10;

    if has_repeated_run(password) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Meter color for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrengthColor {
    /// Below 30.
    Red,
    /// 30 to 59.
    Orange,
    /// 60 to 79.
    Yellow,
    /// 80 and above.
    Green,
}

impl StrengthColor {
    /// CSS color name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Maps a score to its meter color.
pub const fn password_strength_color(score: u8) -> StrengthColor {
    match score {
        0..30 => StrengthColor::Red,
        30..60 => StrengthColor::Orange,
        60..80 => StrengthColor::Yellow,
        _ => StrengthColor::Green,
    }
}

/// Maps a score to the label shown under the meter.
pub const fn password_strength_label(score: u8) -> &'static str {
    match score {
        0..30 => "Very Weak",
        30..60 => "Weak",
        60..80 => "Medium",
        _ => "Strong",
    }
}

/// A 0-100 strength score with its display mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Scores `password`.
    pub fn of(password: &str) -> Self {
        Self(calculate_password_strength(password))
    }

    /// Raw 0-100 value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Meter color.
    pub const fn color(self) -> StrengthColor {
        password_strength_color(self.0)
    }

    /// Meter label.
    pub const fn label(self) -> &'static str {
        password_strength_label(self.0)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// The password policy as a [`Validate`] implementation.
///
/// Fails with a `weak_password` error whose nested errors are the failed
/// rules, so `error.messages()` lists them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordPolicy;

impl Validate for PasswordPolicy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        failed_rules(input)
            .map(PasswordRule::to_error)
            .collect::<ValidationErrors>()
            .into_result()
            .map_err(|errors| {
                errors.into_single_error("weak_password", "Password does not meet requirements")
            })
    }
}

/// Creates the password policy validator.
#[must_use]
pub const fn strong_password() -> PasswordPolicy {
    PasswordPolicy
}
