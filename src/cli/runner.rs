//! CLI runner - resolves settings and executes a split

use crate::cli::commands::{Cli, FilterArg, OutputFormat};
use crate::config::SplitSettings;
use crate::engine::{RunOptions, SplitEngine, SplitReport};
use crate::error::{Error, Result};
use crate::filter::DateSelector;
use crate::operator::{Operator, TerminalOperator};
use crate::partition::PartitionPlan;
use std::io::{self, Write};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the terminal
    pub fn run(&self) -> Result<()> {
        let mut operator = TerminalOperator::stdio();
        self.run_with(&mut operator, &mut io::stdout())?;
        Ok(())
    }

    /// Run against the given operator, printing the report to `out`
    pub fn run_with<O, W>(&self, operator: &mut O, out: &mut W) -> Result<SplitReport>
    where
        O: Operator + ?Sized,
        W: Write,
    {
        let settings = self.settings()?;
        debug!(?settings, "resolved settings");

        let engine = SplitEngine::new(
            settings.input.clone(),
            settings.load_options()?,
            settings.output_config()?,
        )
        .with_options(self.run_options()?);

        let report = engine.run(operator)?;

        if self.cli.format == OutputFormat::Json {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        Ok(report)
    }

    /// Settings from the config file (if any) overridden by flags
    pub fn settings(&self) -> Result<SplitSettings> {
        let mut settings = match &self.cli.config {
            Some(path) => SplitSettings::from_file(path)?,
            None => SplitSettings::default(),
        };

        if let Some(input) = &self.cli.input {
            settings.input = input.clone();
        }
        if let Some(dir) = &self.cli.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(prefix) = &self.cli.prefix {
            settings.file_prefix = prefix.clone();
        }
        if let Some(column) = &self.cli.date_column {
            settings.date_column = column.clone();
        }
        if let Some(delimiter) = self.cli.delimiter {
            settings.delimiter = delimiter;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Answers given as flags
    pub fn run_options(&self) -> Result<RunOptions> {
        let mut options = RunOptions::new();

        if let Some(filter) = self.cli.filter {
            options = options.with_selector(self.selector_for(filter)?);
        } else if self.cli.start.is_some() || self.cli.end.is_some() {
            return Err(Error::config("--start and --end require --filter range"));
        }

        if let Some(parts) = &self.cli.parts {
            options = options.with_parts(PartitionPlan::parse(parts)?);
        }

        Ok(options)
    }

    fn selector_for(&self, filter: FilterArg) -> Result<DateSelector> {
        match filter {
            FilterArg::None => Ok(DateSelector::None),
            FilterArg::Today => Ok(DateSelector::Today),
            FilterArg::Yesterday => Ok(DateSelector::Yesterday),
            FilterArg::Both => Ok(DateSelector::TodayOrYesterday),
            FilterArg::Range => match (&self.cli.start, &self.cli.end) {
                (Some(start), Some(end)) => DateSelector::range_from_strings(start, end),
                _ => Err(Error::config("--filter range requires --start and --end")),
            },
        }
    }
}
