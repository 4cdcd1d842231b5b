//! Contact table types
//!
//! A `Table` is an ordered list of `Record`s sharing one header. Each record
//! is indexed by field name and carries its normalized date alongside the
//! original cells; the date is bookkeeping and never written back out.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::ops::Range;

/// A single contact row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Original cell values keyed by header name
    values: HashMap<String, String>,
    /// Calendar date derived from the date column
    date: NaiveDate,
}

impl Record {
    /// Get a field value by header name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// The normalized date of this row
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Ordered rows sharing a common header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    date_column: String,
    records: Vec<Record>,
}

impl Table {
    /// Create an empty table
    pub fn new(headers: Vec<String>, date_column: impl Into<String>) -> Self {
        Self {
            headers,
            date_column: date_column.into(),
            records: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Cells are matched to headers by position. Missing trailing cells become
    /// empty strings and surplus cells are ignored, so every record carries
    /// exactly the table's field set.
    pub fn push_row<I, S>(&mut self, cells: I, date: NaiveDate)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::<String>::into);
        let values: HashMap<String, String> = self
            .headers
            .iter()
            .map(|h| (h.clone(), cells.next().unwrap_or_default()))
            .collect();
        self.records.push(Record { values, date });
    }

    /// Header names in output order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Name of the header the dates were read from
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// All rows in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows within `range`, clamped to the table length
    pub fn slice(&self, range: Range<usize>) -> &[Record] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// Build a new table holding the rows that satisfy `keep`, in order
    #[must_use]
    pub fn retain_dates<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(NaiveDate) -> bool,
    {
        Table {
            headers: self.headers.clone(),
            date_column: self.date_column.clone(),
            records: self
                .records
                .iter()
                .filter(|r| keep(r.date))
                .cloned()
                .collect(),
        }
    }

    /// Cell values of `record` in header order
    pub fn row_values<'a>(&'a self, record: &'a Record) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(|h| record.get(h).unwrap_or_default())
            .collect()
    }
}

/// Find the header matching `name` ignoring case and surrounding whitespace.
///
/// The first match wins.
pub fn find_column<'a>(headers: &'a [String], name: &str) -> Option<&'a str> {
    let wanted = name.trim().to_uppercase();
    headers
        .iter()
        .find(|h| h.trim().to_uppercase() == wanted)
        .map(String::as_str)
}
