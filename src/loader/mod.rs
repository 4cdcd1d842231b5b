//! Contact file loader
//!
//! Reads a delimited contact file into a working `Table`.
//!
//! # Overview
//!
//! The loader:
//! - trims header names and disambiguates duplicates
//! - locates the date column case-insensitively
//! - normalizes each row's date and drops rows whose date does not parse

mod parser;
mod types;

pub use parser::{load_table, load_table_from_reader, normalize_headers};
pub use types::{LoadOptions, LoadStats, LoadedTable, DEFAULT_DATE_COLUMN};
