//! CLI arguments and parsing

use clap::Parser;
use std::path::PathBuf;

/// Filter a contact list by date and split it into evenly sized CSV files
#[derive(Parser, Debug)]
#[command(name = "contact-splitter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Contact file to read [default: contacts.csv]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for the part files [default: .]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Part file name prefix [default: contacts_part_]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Date column header, matched case-insensitively [default: DATE]
    #[arg(long)]
    pub date_column: Option<String>,

    /// Field delimiter [default: ,]
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Settings file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Date filter to apply without prompting
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Range start for `--filter range` (MM/DD/YYYY)
    #[arg(long)]
    pub start: Option<String>,

    /// Range end for `--filter range` (MM/DD/YYYY)
    #[arg(long)]
    pub end: Option<String>,

    /// Number of part files, without prompting
    #[arg(short = 'n', long)]
    pub parts: Option<String>,

    /// Report format printed after the run
    #[arg(short, long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Non-interactive date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterArg {
    /// Keep every contact
    None,
    /// Contacts dated today
    Today,
    /// Contacts dated yesterday
    Yesterday,
    /// Contacts dated today or yesterday
    Both,
    /// Contacts between --start and --end inclusive
    Range,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Progress messages only
    Pretty,
    /// Progress messages, then the run report as one JSON object
    Json,
}
