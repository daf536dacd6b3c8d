//! Calendar arithmetic
//!
//! Month stepping with day-of-month clamping, day offsets, and the
//! `MM/DD/YYYY` text form.
//!
//! INVARIANTS:
//! - `advance_by_months` keeps the day-of-month unless the target month is
//!   shorter, in which case it lands on the target month's last day
//! - Negative steps walk backwards with the same clamping

use chrono::{Days, Months, NaiveDate};

use crate::error::ScheduleError;

/// Textual date format accepted and produced at the boundary.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a caller-supplied `MM/DD/YYYY` date.
///
/// Surrounding whitespace is ignored. Impossible dates (02/30/2025) and
/// trailing input are rejected.
pub fn parse_origin_date(input: &str) -> Result<NaiveDate, ScheduleError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| ScheduleError::InvalidDate {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Render a date as `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Add a whole number of calendar months to a date.
///
/// Jan 31 + 1 month is Feb 28, or Feb 29 in a leap year. Oct 15 + 3 months
/// is Jan 15 of the following year.
pub fn advance_by_months(date: NaiveDate, months: i32) -> Result<NaiveDate, ScheduleError> {
    let step = Months::new(months.unsigned_abs());
    let advanced = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    advanced
        .ok_or_else(|| ScheduleError::DateOutOfRange(format!("{} + {} months", date, months)))
}

/// Shift a date by a signed number of days.
pub fn shift_days(date: NaiveDate, offset_days: i64) -> Result<NaiveDate, ScheduleError> {
    let days = Days::new(offset_days.unsigned_abs());
    let shifted = if offset_days >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.ok_or_else(|| ScheduleError::DateOutOfRange(format!("{} + {} days", date, offset_days)))
}

/// Serde adapter rendering `NaiveDate` fields as `MM/DD/YYYY` strings.
pub mod mdy_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_origin_date(&text).map_err(de::Error::custom)
    }
}
