//! Partition types
//!
//! The requested number of output chunks and the chunks derived from it.

use crate::error::{Error, Result};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Shown when the part count is not an integer
pub const NOT_A_NUMBER: &str = "Invalid number. Try again.";

/// Shown when the part count is zero or negative
pub const NOT_POSITIVE: &str = "Enter a number greater than 0.";

/// How many chunks the filtered table is divided into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PartitionPlan {
    parts: NonZeroUsize,
}

impl PartitionPlan {
    /// Create a plan for `parts` chunks
    pub fn new(parts: NonZeroUsize) -> Self {
        Self { parts }
    }

    /// Number of requested chunks
    pub fn parts(&self) -> usize {
        self.parts.get()
    }

    /// Parse operator input.
    ///
    /// Accepts an optionally signed run of decimal digits. Counts larger than
    /// `usize` can hold saturate, which still yields one row per file.
    /// Rejections carry the message to show before asking again.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_part_count(input, NOT_A_NUMBER));
        }
        if negative {
            return Err(Error::invalid_part_count(input, NOT_POSITIVE));
        }

        // all digits, so overflow is the only way this fails
        let value = digits.parse::<usize>().unwrap_or(usize::MAX);
        NonZeroUsize::new(value)
            .map(Self::new)
            .ok_or_else(|| Error::invalid_part_count(input, NOT_POSITIVE))
    }
}

/// A contiguous slice of the filtered table bound for one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position, used in the output file name
    pub index: usize,
    /// Row range within the filtered table
    pub rows: Range<usize>,
}

impl Chunk {
    /// Create a chunk
    pub fn new(index: usize, rows: Range<usize>) -> Self {
        Self { index, rows }
    }

    /// Number of rows in this chunk
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the chunk holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
