//! Confirmation prompts for destructive operations

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Source of yes/no answers for destructive prompts.
///
/// Injected into the delete command so tests can script the answer.
pub trait ConfirmationPrompt {
    /// Ask the user a question; only an explicit yes proceeds.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompt on stderr, answer read from stdin
pub struct TerminalPrompt;

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        eprint!("{} ", prompt);
        io::stderr().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(is_affirmative(&answer))
    }
}

/// Only `y` or `yes` (case-insensitive) counts as consent; anything else,
/// including an empty answer, cancels.
fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Scripted answers for tests
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: usize,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: 0,
        }
    }
}

#[cfg(test)]
impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        self.asked += 1;
        let answer = self.answers.pop_front().unwrap_or_default();
        Ok(is_affirmative(&answer))
    }
}
