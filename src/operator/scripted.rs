//! Scripted operator for unattended runs and tests

use crate::error::{Error, Result};
use crate::operator::Operator;
use std::collections::VecDeque;

/// One step of a conversation with the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// A prompt and the answer that was given
    Asked { prompt: String, answer: String },
    /// A message shown to the operator
    Told(String),
}

/// Replays canned answers in order and records everything said
#[derive(Debug, Clone, Default)]
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    transcript: Vec<Exchange>,
}

impl ScriptedOperator {
    /// Create an operator that gives `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything asked and told so far
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Prompts asked so far, in order
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                Exchange::Asked { prompt, .. } => Some(prompt.as_str()),
                Exchange::Told(_) => None,
            })
            .collect()
    }

    /// Messages told so far, in order
    pub fn messages(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                Exchange::Told(message) => Some(message.as_str()),
                Exchange::Asked { .. } => None,
            })
            .collect()
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Operator for ScriptedOperator {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| Error::input_closed(prompt))?;
        self.transcript.push(Exchange::Asked {
            prompt: prompt.to_string(),
            answer: answer.clone(),
        });
        Ok(answer)
    }

    fn tell(&mut self, message: &str) -> Result<()> {
        self.transcript.push(Exchange::Told(message.to_string()));
        Ok(())
    }
}
