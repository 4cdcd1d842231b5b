//! CSV parsing for contact files
//!
//! Turns a header row plus data rows into a `Table`, keeping only rows
//! whose date cell normalizes to a calendar date.

use crate::dates::normalize_date;
use crate::error::{Error, Result};
use crate::loader::types::{LoadOptions, LoadStats, LoadedTable};
use crate::table::{find_column, Table};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load a contact file from disk.
///
/// Fails with `SourceNotFound` before touching anything else if `path` does
/// not exist.
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> Result<LoadedTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::source_not_found(path));
    }

    let file = File::open(path)?;
    let loaded = load_table_from_reader(file, options)?;
    info!(
        path = %path.display(),
        rows = loaded.stats.rows_read,
        rejected = loaded.stats.rows_rejected,
        "loaded contacts"
    );
    Ok(loaded)
}

/// Load a contact table from any reader
pub fn load_table_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<LoadedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = normalize_headers(reader.headers()?.iter());
    let date_column = find_column(&headers, &options.date_column)
        .ok_or_else(|| Error::missing_date_column(&options.date_column, headers.clone()))?
        .to_string();
    let date_idx = headers
        .iter()
        .position(|h| *h == date_column)
        .unwrap_or_default();
    debug!(column = %date_column, index = date_idx, "located date column");

    let width = headers.len();
    let mut table = Table::new(headers, date_column);
    let mut stats = LoadStats::default();

    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // header is line 1
        let line = i + 2;
        stats.rows_read += 1;

        if row.len() > width {
            warn!(line, fields = row.len(), expected = width, "dropping surplus fields");
        }

        let raw = row.get(date_idx).unwrap_or_default();
        match normalize_date(raw) {
            Some(date) => table.push_row(row.iter(), date),
            None => {
                debug!(line, value = raw, "skipping row with unparseable date");
                stats.rows_rejected += 1;
            }
        }
    }

    if table.is_empty() {
        return Err(Error::NoValidDates);
    }

    Ok(LoadedTable { table, stats })
}

/// Trim header names and make them unique.
///
/// A repeated name gets a `.1`, `.2`, ... suffix in order of appearance.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    for name in raw {
        let base = name.trim();
        let mut candidate = base.to_string();
        let mut n = 0;
        while !seen.insert(candidate.clone()) {
            n += 1;
            candidate = format!("{base}.{n}");
        }
        headers.push(candidate);
    }

    headers
}
