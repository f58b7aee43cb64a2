//! Calendar date validator for `dd/mm/yyyy` input.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::foundation::{Validate, ValidationError};

static DMY_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").unwrap());

/// Parses a strict `dd/mm/yyyy` string into a real calendar date.
///
/// Returns `None` for malformed input and for dates that do not exist,
/// such as `31/02/2024` or `29/02/2023`.
///
/// ```
/// use litefi_validator::validators::parse_day_month_year;
///
/// assert!(parse_day_month_year("29/02/2024").is_some());
/// assert!(parse_day_month_year("29/02/2023").is_none());
/// assert!(parse_day_month_year("1/2/2024").is_none());
/// ```
pub fn parse_day_month_year(input: &str) -> Option<NaiveDate> {
    let caps = DMY_REGEX.captures(input)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validates a `dd/mm/yyyy` date such as a date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DayMonthYear;

impl Validate for DayMonthYear {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !DMY_REGEX.is_match(input) {
            return Err(ValidationError::invalid_format("dd/mm/yyyy"));
        }
        if parse_day_month_year(input).is_none() {
            return Err(ValidationError::new("invalid_date", "Date does not exist"));
        }
        Ok(())
    }
}

/// Creates a `dd/mm/yyyy` validator.
#[must_use]
pub const fn day_month_year() -> DayMonthYear {
    DayMonthYear
}
