//! Confirmation before overwriting an existing `.cursor` directory

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Question asked when the target already has a `.cursor` directory
pub const OVERWRITE_QUESTION: &str = "Continue and potentially overwrite? [y/N] ";

/// Decides whether the sync may proceed
pub trait Confirm {
    /// Ask `question` and return true to continue
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Only `y` or `Y`, with the line terminator removed, counts as yes
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(['\n', '\r'])
        .eq_ignore_ascii_case("y")
}

/// Prompts on stdout and reads one line from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{question}").context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        read_answer(&mut io::stdin().lock())
    }
}

/// Read one answer line; EOF counts as an empty (negative) answer
fn read_answer<R: BufRead>(reader: &mut R) -> Result<bool> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read confirmation from stdin")?;
    Ok(is_affirmative(&line))
}

/// Always gives the same answer without prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}
