//! Numbered-menu selection and the exit pause
//!
//! A menu prints its title and the store's keys numbered from 1, then keeps
//! asking until the user types a number in range. There is no retry limit;
//! only closing the input ends the loop (as an I/O error).

use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use console::{style, Term};
use dialoguer::Input;
use thiserror::Error;
use tracing::debug;

use crate::error::{MsgError, MsgResult};
use crate::storage::KeyValueStore;

const CHOICE_PROMPT: &str = "Your choice (number)";

/// A chosen menu entry, borrowed from the store it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Why a typed choice was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Error: enter a number!")]
    NotANumber,
    #[error("Error: enter a number from the list!")]
    OutOfRange,
}

/// Parse a 1-based menu choice into a zero-based index.
///
/// Surrounding whitespace and a leading `+` are accepted; anything that is not
/// an integer in `[1, count]` is rejected. Integers too large to parse are
/// out of range, not "not a number".
pub fn parse_choice(input: &str, count: usize) -> Result<usize, ChoiceError> {
    let number: i64 = input.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ChoiceError::OutOfRange,
        _ => ChoiceError::NotANumber,
    })?;

    if number >= 1 && (number as u64) <= count as u64 {
        Ok(number as usize - 1)
    } else {
        Err(ChoiceError::OutOfRange)
    }
}

/// Front-end that asks the user to pick from a store.
pub trait Selector {
    /// Show `items` under `title` and block until a valid entry is chosen.
    fn select<'a>(&mut self, title: &str, items: &'a KeyValueStore) -> MsgResult<Selection<'a>>;

    /// Print `message` and wait for the user to press Enter.
    fn pause(&mut self, message: &str) -> MsgResult<()>;
}

fn ensure_not_empty(title: &str, items: &KeyValueStore) -> MsgResult<()> {
    if items.is_empty() {
        return Err(MsgError::malformed(
            format!("menu '{}'", title),
            "there is nothing to choose from",
        ));
    }
    Ok(())
}

fn selection_at<'a>(items: &'a KeyValueStore, index: usize) -> MsgResult<Selection<'a>> {
    let (key, value) = items
        .entry_at(index)
        .ok_or_else(|| MsgError::malformed("menu choice", format!("no entry at {}", index + 1)))?;
    debug!(key, "menu entry selected");
    Ok(Selection { key, value })
}

fn console_error(e: io::Error) -> MsgError {
    MsgError::io("writing to the console", e)
}

// ============================================================================
// Plain line-based selector
// ============================================================================

/// Menu over any reader/writer pair; used for piped input and in tests.
pub struct LineSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> MsgResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| MsgError::io("reading from the console", e))?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Selector for LineSelector<R, W> {
    fn select<'a>(&mut self, title: &str, items: &'a KeyValueStore) -> MsgResult<Selection<'a>> {
        ensure_not_empty(title, items)?;

        writeln!(self.output, "\n{}:", title).map_err(console_error)?;
        for (i, key) in items.keys().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, key).map_err(console_error)?;
        }

        loop {
            write!(self.output, "{}: ", CHOICE_PROMPT).map_err(console_error)?;
            self.output.flush().map_err(console_error)?;

            let line = self.read_line()?.ok_or_else(|| {
                MsgError::io(
                    "reading a menu choice",
                    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                )
            })?;

            match parse_choice(&line, items.len()) {
                Ok(index) => return selection_at(items, index),
                Err(e) => writeln!(self.output, "{}", e).map_err(console_error)?,
            }
        }
    }

    fn pause(&mut self, message: &str) -> MsgResult<()> {
        write!(self.output, "\n{}", message).map_err(console_error)?;
        self.output.flush().map_err(console_error)?;
        // End of input counts as acknowledgement.
        self.read_line()?;
        Ok(())
    }
}

// ============================================================================
// Terminal selector
// ============================================================================

/// Styled menu with a dialoguer prompt that validates inline.
pub struct TerminalSelector {
    term: Term,
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn select<'a>(&mut self, title: &str, items: &'a KeyValueStore) -> MsgResult<Selection<'a>> {
        ensure_not_empty(title, items)?;

        self.term.write_line("").map_err(console_error)?;
        self.term
            .write_line(&format!("{}:", style(title).cyan().bold()))
            .map_err(console_error)?;
        for (i, key) in items.keys().enumerate() {
            self.term
                .write_line(&format!("  {} {}", style(format!("{}.", i + 1)).yellow(), key))
                .map_err(console_error)?;
        }

        let count = items.len();
        let answer: String = Input::new()
            .with_prompt(CHOICE_PROMPT)
            .validate_with(move |input: &String| parse_choice(input, count).map(|_| ()))
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(e) => MsgError::io("reading a menu choice", e),
            })?;

        let index = parse_choice(&answer, count)
            .map_err(|e| MsgError::malformed("menu choice", e.to_string()))?;
        selection_at(items, index)
    }

    fn pause(&mut self, message: &str) -> MsgResult<()> {
        self.term.write_line("").map_err(console_error)?;
        self.term
            .write_str(&format!("{}", style(message).dim()))
            .map_err(console_error)?;
        self.term
            .read_line()
            .map_err(|e| MsgError::io("reading from the console", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3), Ok(0));
        assert_eq!(parse_choice(" 3 \n", 3), Ok(2));
        assert_eq!(parse_choice("+2", 3), Ok(1));
        assert_eq!(parse_choice("0", 3), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("4", 3), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("-1", 3), Err(ChoiceError::OutOfRange));
        assert_eq!(
            parse_choice("99999999999999999999", 3),
            Err(ChoiceError::OutOfRange)
        );
        assert_eq!(
            parse_choice("-99999999999999999999", 3),
            Err(ChoiceError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_choice_rejects_text() {
        assert_eq!(parse_choice("two", 3), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("", 3), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("1.5", 3), Err(ChoiceError::NotANumber));
    }
}
