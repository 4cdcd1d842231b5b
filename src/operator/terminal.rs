//! Line-based terminal operator

use crate::error::{Error, Result};
use crate::operator::Operator;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts on a writer and reads answers line by line from a reader
#[derive(Debug)]
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
}

impl TerminalOperator<StdinLock<'static>, Stdout> {
    /// Operator bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalOperator<R, W> {
    /// Create an operator over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the operator, returning its streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Operator for TerminalOperator<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::input_closed(prompt));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn tell(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
