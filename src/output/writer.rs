//! CSV chunk writer
//!
//! Each chunk goes to a temporary file in the output directory which is
//! renamed into place once complete, so a failed write never leaves a
//! truncated part file behind.

use crate::error::{Error, Result, ResultExt};
use crate::partition::Chunk;
use crate::table::Table;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

/// Default output file name prefix
pub const DEFAULT_FILE_PREFIX: &str = "contacts_part_";

/// Configuration for chunk output
#[derive(Debug, Clone)]
pub struct OutputConfig {
    dir: PathBuf,
    prefix: String,
    delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: DEFAULT_FILE_PREFIX.to_string(),
            delimiter: b',',
        }
    }
}

impl OutputConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the file name prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for the chunk at 1-based `index`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{index}.csv", self.prefix)
    }

    /// Full path for the chunk at 1-based `index`
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(self.file_name(index))
    }
}

/// A chunk that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenChunk {
    /// 1-based chunk index
    pub index: usize,
    /// Destination file
    pub path: PathBuf,
    /// Data rows written (header excluded)
    pub rows: usize,
}

impl WrittenChunk {
    /// File name without the directory
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Writes table chunks as CSV files
#[derive(Debug, Clone, Default)]
pub struct ChunkWriter {
    config: OutputConfig,
}

impl ChunkWriter {
    /// Create a writer
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Get the output config
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Write `chunk` of `table` to its numbered file.
    ///
    /// Only the table's own headers are written; the normalized date is not
    /// a column. An existing file with the same name is replaced.
    pub fn write_chunk(&self, table: &Table, chunk: &Chunk) -> Result<WrittenChunk> {
        let path = self.config.path_for(chunk.index);
        let rows = table.slice(chunk.rows.clone());

        fs::create_dir_all(&self.config.dir).map_err(|e| {
            Error::output(format!(
                "Failed to create directory {}: {e}",
                self.config.dir.display()
            ))
        })?;

        let mut tmp = staging_file(&self.config.dir)
            .with_context(|| format!("Failed to create temp file for {}", path.display()))?;
        debug!(tmp = %tmp.path().display(), "staging chunk");

        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.config.delimiter)
                .from_writer(tmp.as_file_mut());

            writer
                .write_record(table.headers())
                .with_context(|| format!("Failed to write header to {}", path.display()))?;
            for record in rows {
                writer
                    .write_record(table.row_values(record))
                    .with_context(|| format!("Failed to write row to {}", path.display()))?;
            }
            writer
                .flush()
                .with_context(|| format!("Failed to flush {}", path.display()))?;
        }

        tmp.persist(&path).map_err(|e| {
            Error::output(format!("Failed to move chunk into {}: {}", path.display(), e.error))
        })?;

        info!(path = %path.display(), rows = rows.len(), "wrote chunk");
        Ok(WrittenChunk {
            index: chunk.index,
            path,
            rows: rows.len(),
        })
    }
}

/// Temp file in `dir` that ends up with the same mode a plain create would give.
///
/// `NamedTempFile` defaults to owner-only access, which would otherwise carry
/// over to the part file through the rename.
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".contacts").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // the process umask still applies on open
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
