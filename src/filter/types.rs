//! Filter types
//!
//! The closed set of date selections an operator can make.

use crate::dates::{parse_us_date, previous_day};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which rows to keep, judged by their normalized date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DateSelector {
    /// Keep every row
    #[default]
    None,
    /// Rows dated today
    Today,
    /// Rows dated the day before today
    Yesterday,
    /// Rows dated today or yesterday
    TodayOrYesterday,
    /// Rows dated within `[start, end]`, both inclusive
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateSelector {
    /// Create an inclusive range selector.
    ///
    /// A start after the end is accepted and simply matches nothing.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Range { start, end }
    }

    /// Parse both bounds as `MM/DD/YYYY` (surrounding whitespace ignored)
    pub fn range_from_strings(start: &str, end: &str) -> Result<Self> {
        let parse = |s: &str| parse_us_date(s.trim()).ok_or_else(|| Error::invalid_range(s.trim()));
        Ok(Self::range(parse(start)?, parse(end)?))
    }

    /// Whether this selector filters at all
    pub fn is_filtering(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Check a normalized date against this selector, `today` being the run date
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            Self::None => true,
            Self::Today => date == today,
            Self::Yesterday => date == previous_day(today),
            Self::TodayOrYesterday => date == today || date == previous_day(today),
            Self::Range { start, end } => start <= date && date <= end,
        }
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "all dates"),
            Self::Today => write!(f, "today"),
            Self::Yesterday => write!(f, "yesterday"),
            Self::TodayOrYesterday => write!(f, "today and yesterday"),
            Self::Range { start, end } => {
                write!(f, "{} to {}", start.format("%m/%d/%Y"), end.format("%m/%d/%Y"))
            }
        }
    }
}

/// The numbered filter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// 1. Today
    Today,
    /// 2. Yesterday
    Yesterday,
    /// 3. Both today and yesterday
    Both,
    /// 4. Custom date range
    CustomRange,
}

impl FilterMode {
    /// Menu entries in display order
    pub const MENU: [(u8, &'static str); 4] = [
        (1, "Today"),
        (2, "Yesterday"),
        (3, "Both Today and Yesterday"),
        (4, "Custom date range"),
    ];

    /// Selector for the modes that need no further input
    pub fn fixed_selector(self) -> Option<DateSelector> {
        match self {
            Self::Today => Some(DateSelector::Today),
            Self::Yesterday => Some(DateSelector::Yesterday),
            Self::Both => Some(DateSelector::TodayOrYesterday),
            Self::CustomRange => None,
        }
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Today),
            "2" => Ok(Self::Yesterday),
            "3" => Ok(Self::Both),
            "4" => Ok(Self::CustomRange),
            other => Err(Error::invalid_choice(other)),
        }
    }
}
