//! Execution engine module
//!
//! Runs the three stages in order: load, filter, partition and write.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SplitEngine` - Orchestrates one run against an `Operator`
//! - `RunOptions` - Answers supplied without prompting
//! - `SplitReport` - What the run did

mod types;

pub use types::{RunOptions, SplitReport};

use crate::dates::local_today;
use crate::error::Result;
use crate::filter::apply_selector;
use crate::loader::{load_table, LoadOptions};
use crate::operator::{ask_date_selector, ask_part_count, Operator};
use crate::output::{ChunkWriter, OutputConfig};
use crate::partition::{chunk_size, plan_chunks};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Shown once every chunk has been written
pub const DONE_MESSAGE: &str = "Done! Contacts successfully split.";

/// Drives a single split run
#[derive(Debug, Clone)]
pub struct SplitEngine {
    /// Contact file to read
    source: PathBuf,
    /// How to read it
    load: LoadOptions,
    /// Where chunks go
    writer: ChunkWriter,
    /// Run date used by the today/yesterday filters
    today: NaiveDate,
    /// Preset answers
    options: RunOptions,
}

impl SplitEngine {
    /// Create an engine for `source`, dated today
    pub fn new(source: impl Into<PathBuf>, load: LoadOptions, output: OutputConfig) -> Self {
        Self {
            source: source.into(),
            load,
            writer: ChunkWriter::new(output),
            today: local_today(),
            options: RunOptions::default(),
        }
    }

    /// Override the run date
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Set preset answers
    #[must_use]
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Contact file this engine reads
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Run date
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Run every stage.
    ///
    /// Loader and filter failures return before any file is written. A write
    /// failure stops the run; parts already written stay on disk.
    pub fn run<O: Operator + ?Sized>(&self, operator: &mut O) -> Result<SplitReport> {
        let start = Instant::now();

        let loaded = load_table(&self.source, &self.load)?;

        let selector = match self.options.selector {
            Some(selector) => selector,
            None => ask_date_selector(operator)?,
        };
        let selected = apply_selector(&loaded.table, selector, self.today)?;
        if selector.is_filtering() {
            operator.tell(&format!(
                "{} contacts found for your selection.",
                selected.len()
            ))?;
        } else {
            operator.tell(&format!(
                "Using all {} contacts without filtering.",
                selected.len()
            ))?;
        }

        let plan = match self.options.parts {
            Some(plan) => plan,
            None => ask_part_count(operator)?,
        };
        let chunks = plan_chunks(selected.len(), plan);

        let mut files = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let written = self.writer.write_chunk(&selected, chunk)?;
            operator.tell(&format!(
                "Saved: {} ({} contacts)",
                written.file_name(),
                written.rows
            ))?;
            files.push(written);
        }
        operator.tell(DONE_MESSAGE)?;

        info!(
            files = files.len(),
            rows = selected.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "split complete"
        );

        Ok(SplitReport {
            source: self.source.clone(),
            load: loaded.stats,
            selector,
            rows_selected: selected.len(),
            parts_requested: plan,
            chunk_size: chunk_size(selected.len(), plan.parts()),
            files,
        })
    }
}
