//! # Portal Management UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Interactive input for commands that fall back to asking the user when a
//! value was not supplied on the command line.
//!
//! Commands never read stdin directly. They take an `InputProvider`, which
//! keeps prompting testable:
//! - `ConsolePrompter` is the real implementation, reading answers line by line
//!   from any `BufRead` (stdin in production) and writing prompts to a `Write`
//! - tests implement `InputProvider` with scripted answers
//!
//! ```rust,ignore
//! let mut input = ConsolePrompter::stdio();
//! let container = input.read_input("Container name (ie portal)", 0)?;
//! if input.confirm("Do you wish to proceed (N) ? Y/N", 0)? {
//!     // ...
//! }
//! ```
//!
use crate::core::error::{PortalMgmtError, Result};
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Source of interactive answers.
pub trait InputProvider {
    /// Shows `prompt` (indented by `level`) and returns the trimmed answer.
    fn read_input(&mut self, prompt: &str, level: usize) -> Result<String>;

    /// Asks a yes/no question; only `Y` (any case) counts as yes.
    fn confirm(&mut self, prompt: &str, level: usize) -> Result<bool> {
        let answer = self.read_input(prompt, level)?;
        Ok(is_yes(&answer))
    }
}

/// `true` for a case-insensitive `Y` answer.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Line-oriented prompter over a reader/writer pair.
pub struct ConsolePrompter<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsolePrompter<R, W> {
    fn read_input(&mut self, prompt: &str, level: usize) -> Result<String> {
        let indent = "  ".repeat(level);
        write!(self.writer, "{}{}: ", indent, prompt).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            return Err(PortalMgmtError::InputClosed {
                prompt: prompt.to_string(),
            }
            .into());
        }
        Ok(line.trim().to_string())
    }
}
