//! Loader types
//!
//! Options and statistics for reading a contact file.

use crate::table::Table;
use serde::Serialize;

/// Default name of the date-bearing column
pub const DEFAULT_DATE_COLUMN: &str = "DATE";

/// Options controlling how a contact file is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Header to look for, compared case-insensitively after trimming
    pub date_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date column name
    #[must_use]
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Row counts gathered while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows read from the file
    pub rows_read: usize,
    /// Rows dropped because their date did not parse
    pub rows_rejected: usize,
}

impl LoadStats {
    /// Rows that made it into the working table
    pub fn rows_valid(&self) -> usize {
        self.rows_read - self.rows_rejected
    }
}

/// The working table together with how it was produced
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// Rows with a parsed date
    pub table: Table,
    /// Load statistics
    pub stats: LoadStats,
}
