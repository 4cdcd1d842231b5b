//! Error types for contact-splitter
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for contact-splitter
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Loader Errors
    // ============================================================================
    #[error("File '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("No '{expected}' column found. Available columns: {available:?}")]
    MissingDateColumn {
        expected: String,
        available: Vec<String>,
    },

    #[error("No valid dates found after parsing")]
    NoValidDates,

    // ============================================================================
    // Filter Errors
    // ============================================================================
    #[error("Invalid choice '{choice}', expected 1-4")]
    InvalidFilterChoice { choice: String },

    #[error("Invalid date format '{value}'. Use MM/DD/YYYY")]
    InvalidRangeFormat { value: String },

    #[error("No contacts match the selected date range")]
    EmptyFilterResult,

    // ============================================================================
    // Partition Errors
    // ============================================================================
    #[error("{message}")]
    InvalidPartCount { input: String, message: String },

    // ============================================================================
    // Operator Errors
    // ============================================================================
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a source-not-found error
    pub fn source_not_found(path: impl AsRef<Path>) -> Self {
        Self::SourceNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a missing date column error
    pub fn missing_date_column(expected: impl Into<String>, available: Vec<String>) -> Self {
        Self::MissingDateColumn {
            expected: expected.into(),
            available,
        }
    }

    /// Create an invalid filter choice error
    pub fn invalid_choice(choice: impl Into<String>) -> Self {
        Self::InvalidFilterChoice {
            choice: choice.into(),
        }
    }

    /// Create an invalid range format error
    pub fn invalid_range(value: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            value: value.into(),
        }
    }

    /// Create an invalid part count error
    pub fn invalid_part_count(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPartCount {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an input-closed error
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if the operator can be asked again instead of ending the run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InvalidPartCount { .. })
    }
}

/// Result type alias for contact-splitter
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
