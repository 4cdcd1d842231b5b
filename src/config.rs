//! Run settings
//!
//! Settings can come from a YAML file and be overridden on the command line.
//! Every field has a default, so an empty file is valid.
//!
//! ```yaml
//! input: exports/contacts.csv
//! output_dir: parts
//! file_prefix: call_list_
//! date_column: Date Added
//! delimiter: ";"
//! ```

use crate::error::{Error, Result};
use crate::loader::{LoadOptions, DEFAULT_DATE_COLUMN};
use crate::output::{OutputConfig, DEFAULT_FILE_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default contact file name
pub const DEFAULT_INPUT: &str = "contacts.csv";

// ============================================================================
// Split Settings
// ============================================================================

/// File locations and format settings for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitSettings {
    /// Contact file to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory receiving the part files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Part files are named `<file_prefix><k>.csv`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Header of the date column, matched case-insensitively
    #[serde(default = "default_date_column")]
    pub date_column: String,

    /// Field delimiter for both input and output
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_date_column() -> String {
    DEFAULT_DATE_COLUMN.to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            date_column: default_date_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl SplitSettings {
    /// Parse settings from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read settings file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check values that the type system does not
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.date_column.trim().is_empty() {
            return Err(Error::config("date_column must not be empty"));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(Error::config(format!(
                "file_prefix '{}' must not contain path separators",
                self.file_prefix
            )));
        }
        Ok(())
    }

    /// The delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r')
            .ok_or_else(|| {
                Error::config(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                ))
            })
    }

    /// Loader options derived from these settings
    pub fn load_options(&self) -> Result<LoadOptions> {
        Ok(LoadOptions::new()
            .with_date_column(self.date_column.clone())
            .with_delimiter(self.delimiter_byte()?))
    }

    /// Output config derived from these settings
    pub fn output_config(&self) -> Result<OutputConfig> {
        Ok(OutputConfig::new()
            .with_dir(self.output_dir.clone())
            .with_prefix(self.file_prefix.clone())
            .with_delimiter(self.delimiter_byte()?))
    }
}
