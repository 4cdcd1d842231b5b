//! CLI module
//!
//! Command-line interface for splitting a contact file.
//!
//! Anything not given as a flag is asked for interactively:
//! the date filter unless `--filter` is set, and the part count unless
//! `--parts` is set.

mod commands;
mod runner;

pub use commands::{Cli, FilterArg, OutputFormat};
pub use runner::Runner;
