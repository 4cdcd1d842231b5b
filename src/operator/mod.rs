//! Operator interaction
//!
//! The pipeline never reads the terminal directly. It asks questions and
//! reports progress through an `Operator`, so runs can be scripted.
//!
//! # Implementations
//!
//! - `TerminalOperator` - line-based prompts over any reader/writer pair
//! - `ScriptedOperator` - canned answers with a recorded transcript

mod prompts;
mod scripted;
mod terminal;

pub use prompts::{
    ask_date_selector, ask_part_count, FILTER_PROMPT, MENU_HEADER, MODE_PROMPT, PARTS_PROMPT,
    RANGE_END_PROMPT, RANGE_START_PROMPT,
};
pub use scripted::{Exchange, ScriptedOperator};
pub use terminal::TerminalOperator;

use crate::error::Result;

/// Someone who answers prompts and reads progress messages
pub trait Operator {
    /// Ask a question and block until an answer arrives.
    ///
    /// The returned answer has its line terminator removed but is otherwise
    /// untouched.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a message
    fn tell(&mut self, message: &str) -> Result<()>;
}
