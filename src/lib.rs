//! # contact-splitter
//!
//! Filter a contact list by date and split it into evenly sized CSV files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contact_splitter::{LoadOptions, OutputConfig, ScriptedOperator, SplitEngine};
//!
//! # fn main() -> contact_splitter::Result<()> {
//! let engine = SplitEngine::new("contacts.csv", LoadOptions::default(), OutputConfig::default());
//!
//! // decline filtering, then ask for three parts
//! let mut operator = ScriptedOperator::new(["no", "3"]);
//! let report = engine.run(&mut operator)?;
//! println!("wrote {} files", report.files.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! contacts.csv
//!      │
//! ┌────▼─────┐   ┌──────────┐   ┌─────────────┐   ┌──────────────────────┐
//! │  Loader  │──►│  Filter  │──►│ Partitioner │──►│ contacts_part_<k>.csv│
//! │ trim hdr │   │ today    │   │ ceil(M/N)   │   │ original columns     │
//! │ find DATE│   │ yesterday│   │ contiguous  │   │ temp file + rename   │
//! │ M/D/YYYY │   │ range    │   │ chunks      │   │                      │
//! └──────────┘   └──────────┘   └─────────────┘   └──────────────────────┘
//!                      ▲               ▲
//!                      └─── Operator ──┘
//!                    (terminal or scripted)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Month/day/year date parsing
pub mod dates;

/// Contact rows and tables
pub mod table;

/// CSV loading and date normalization
pub mod loader;

/// Date filters
pub mod filter;

/// Chunk arithmetic
pub mod partition;

/// Part file writing
pub mod output;

/// Prompts and progress messages
pub mod operator;

/// Stage orchestration
pub mod engine;

/// Run settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SplitSettings;
pub use engine::{RunOptions, SplitEngine, SplitReport};
pub use error::{Error, Result};
pub use filter::DateSelector;
pub use loader::LoadOptions;
pub use operator::{Operator, ScriptedOperator, TerminalOperator};
pub use output::OutputConfig;
pub use partition::PartitionPlan;
pub use table::{Record, Table};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
