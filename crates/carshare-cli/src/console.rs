//! Line-oriented console I/O
//!
//! Menus read one line per answer and write plain lines. Generic over the
//! reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::errors::{CliError, Result};
use crate::messages::{ListKind, BACK, INVALID_NUMBER, INVALID_SELECTION};

pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn lines(&mut self, texts: &[&str]) -> Result<()> {
        for text in texts {
            self.line(text)?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Print a message followed by an empty line
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.line(text)?;
        self.blank()
    }

    /// Read one answer without its line ending
    ///
    /// Invalid UTF-8 is replaced, never rejected. Returns
    /// `CliError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        // Raw bytes: undecodable input is a bad answer, not a broken console
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::InputClosed);
        }
        self.blank()?;

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    /// Read a menu number; `None` (after printing the error) if it isn't one
    pub fn read_choice(&mut self) -> Result<Option<i64>> {
        let answer = self.read_line()?;
        match answer.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.say(INVALID_NUMBER)?;
                Ok(None)
            }
        }
    }

    /// Print `N. name` lines under the list header, or the empty-list text
    pub fn list(&mut self, kind: ListKind, names: &[&str]) -> Result<()> {
        if names.is_empty() {
            return self.say(kind.empty());
        }

        self.line(kind.header())?;
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
        }
        Ok(())
    }

    /// Let the user pick one entry of a numbered list
    ///
    /// Returns the zero-based index, or `None` when the list is empty or the
    /// user goes back. Out-of-range and non-numeric answers re-prompt.
    pub fn choose(
        &mut self,
        prompt: Option<&str>,
        kind: ListKind,
        names: &[&str],
    ) -> Result<Option<usize>> {
        loop {
            if let Some(prompt) = prompt {
                self.line(prompt)?;
            }
            self.list(kind, names)?;
            if names.is_empty() {
                return Ok(None);
            }
            self.say(BACK)?;

            match self.read_choice()? {
                Some(0) => return Ok(None),
                Some(n) => match usize::try_from(n) {
                    Ok(n) if n <= names.len() => return Ok(Some(n - 1)),
                    _ => self.say(INVALID_SELECTION)?,
                },
                None => {}
            }
        }
    }
}
