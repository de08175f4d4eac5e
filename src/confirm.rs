//! Operator confirmation prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Only the exact token counts as an affirmative; anything else,
/// including empty input, declines.
pub fn affirmative(input: &str) -> bool {
    input.trim_end_matches(['\r', '\n']) == "yes"
}

pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<bool>;
}

/// Blocks on a single stdin line per question. With `auto_confirm` set,
/// every question is answered yes without prompting.
pub struct StdinPrompt {
    pub auto_confirm: bool,
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<bool> {
        if self.auto_confirm {
            return Ok(true);
        }
        print!("{question}");
        std::io::stdout().flush().context("flush prompt")?;
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read confirmation")?;
        Ok(affirmative(&line))
    }
}

#[cfg(test)]
#[path = "tests/confirm_tests.rs"]
mod tests;
