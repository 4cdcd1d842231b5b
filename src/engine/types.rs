//! Engine types
//!
//! Preset answers and the report produced by a run.

use crate::filter::DateSelector;
use crate::loader::LoadStats;
use crate::output::WrittenChunk;
use crate::partition::PartitionPlan;
use serde::Serialize;
use std::path::PathBuf;

/// Answers supplied up front instead of asking the operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Date filter to apply without prompting
    pub selector: Option<DateSelector>,
    /// Part count to use without prompting
    pub parts: Option<PartitionPlan>,
}

impl RunOptions {
    /// Create options that prompt for everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the date filter
    #[must_use]
    pub fn with_selector(mut self, selector: DateSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Preset the part count
    #[must_use]
    pub fn with_parts(mut self, plan: PartitionPlan) -> Self {
        self.parts = Some(plan);
        self
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Input file
    pub source: PathBuf,
    /// Load statistics
    #[serde(flatten)]
    pub load: LoadStats,
    /// Filter that was applied
    pub selector: DateSelector,
    /// Rows left after filtering
    pub rows_selected: usize,
    /// Parts the operator asked for
    pub parts_requested: PartitionPlan,
    /// Maximum rows per file
    pub chunk_size: usize,
    /// Files written, in order
    pub files: Vec<WrittenChunk>,
}

impl SplitReport {
    /// Total rows across all written files
    pub fn rows_written(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }
}
