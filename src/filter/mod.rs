//! Date filter module
//!
//! Narrows the working table to today, yesterday, both, or an inclusive
//! custom range.

mod types;

pub use types::{DateSelector, FilterMode};

use crate::error::{Error, Result};
use crate::table::Table;
use chrono::NaiveDate;
use tracing::info;

/// Apply `selector` to `table`, producing a new table.
///
/// `DateSelector::None` passes the table through unchanged. Any other
/// selector that leaves no rows fails with `EmptyFilterResult`.
pub fn apply_selector(table: &Table, selector: DateSelector, today: NaiveDate) -> Result<Table> {
    if !selector.is_filtering() {
        return Ok(table.clone());
    }

    let filtered = table.retain_dates(|date| selector.matches(date, today));
    info!(
        selector = %selector,
        before = table.len(),
        after = filtered.len(),
        "applied date filter"
    );

    if filtered.is_empty() {
        return Err(Error::EmptyFilterResult);
    }
    Ok(filtered)
}
