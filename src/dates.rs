//! Calendar date parsing
//!
//! Contact dates are written month/day/4-digit-year (`8/1/2025`,
//! `08/01/2025`), optionally followed by a time of day which is ignored.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// `M/D/YYYY` with one or two digit month and day and exactly four year digits
static US_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap());

/// Parse a whole string as `MM/DD/YYYY`.
///
/// Returns `None` when the text does not have that exact shape or names a
/// day that does not exist (`2/30/2025`).
pub fn parse_us_date(text: &str) -> Option<NaiveDate> {
    let caps = US_DATE.captures(text)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Derive the normalized calendar date from a raw date cell.
///
/// Only the first whitespace-delimited token is parsed, so
/// `"8/1/2025 12:47:28"` and `"8/1/2025"` normalize to the same date.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    raw.split_whitespace().next().and_then(parse_us_date)
}

/// The calendar day before `today`
pub fn previous_day(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}

/// Today's date in the local time zone
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
