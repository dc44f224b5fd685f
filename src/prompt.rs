//! Blocking line-based prompts: free text, yes/no and numbered choice.
//!
//! Every operation writes its question, then reads exactly one line per
//! attempt. [`Prompter::stdio`] binds to the terminal; [`Prompter::new`]
//! takes any reader and writers, which is how the tests drive it.

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use log::debug;

use crate::error::{ClikitError, Result};
use crate::output::{StatusPrinter, CYAN, RESET};

const CHOICE_PROMPT: &str = "Enter choice number: ";
const NOT_A_NUMBER: &str = "Please enter a number.";
const OUT_OF_RANGE: &str = "Invalid choice. Please try again.";

/// An ordered, non-empty list of labels with an optional default index.
#[derive(Debug)]
pub struct ChoiceSet<'a, S> {
    choices: &'a [S],
    default: Option<usize>,
}

impl<'a, S: AsRef<str>> ChoiceSet<'a, S> {
    /// # Errors
    ///
    /// [`ClikitError::EmptyChoices`] for an empty list and
    /// [`ClikitError::DefaultOutOfRange`] for a default past the end.
    pub fn new(choices: &'a [S], default: Option<usize>) -> Result<Self> {
        if choices.is_empty() {
            return Err(ClikitError::EmptyChoices);
        }
        if let Some(index) = default {
            if index >= choices.len() {
                return Err(ClikitError::DefaultOutOfRange {
                    index,
                    len: choices.len(),
                });
            }
        }
        Ok(Self { choices, default })
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn default_index(&self) -> Option<usize> {
        self.default
    }

    /// Label at `index`. Indices handed out by [`SelectState`] are always valid.
    pub(crate) fn label(&self, index: usize) -> &'a str {
        let choices: &'a [S] = self.choices;
        choices[index].as_ref()
    }

    /// Classify one raw input line.
    pub fn classify(&self, line: &str) -> SelectState {
        let response = line.trim();
        if response.is_empty() {
            if let Some(index) = self.default {
                return SelectState::ValidEmpty(index);
            }
        }
        match response.parse::<i64>() {
            Ok(n) if n >= 1 && (n as u64) <= self.choices.len() as u64 => {
                SelectState::ValidIndex((n - 1) as usize)
            }
            Ok(_) => SelectState::InvalidRange,
            // integers too large for i64 are still numbers, just out of range
            Err(_) if is_integer(response) => SelectState::InvalidRange,
            Err(_) => SelectState::InvalidFormat,
        }
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// States of the numbered-choice loop.
///
/// `InvalidFormat` and `InvalidRange` lead back to `AwaitingInput`; the two
/// valid states end the loop with the carried index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    AwaitingInput,
    ValidEmpty(usize),
    ValidIndex(usize),
    InvalidFormat,
    InvalidRange,
}

/// Question/answer session over one input stream and two output streams.
pub struct Prompter<R, W = Stdout, E = Stderr> {
    input: R,
    printer: StatusPrinter<W, E>,
}

impl Prompter<StdinLock<'static>, Stdout, Stderr> {
    /// Prompter reading stdin and writing stdout, with errors on stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input,
            printer: StatusPrinter::new(out, err),
        }
    }

    /// Ask for free text.
    ///
    /// Shows `? question [default]: ` when a non-empty default is given.
    /// Returns the trimmed answer, or the default (or `""`) for an empty one.
    pub fn prompt(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let shown = match default {
            Some(d) if !d.is_empty() => format!("{} [{}]", question, d),
            _ => question.to_string(),
        };
        self.ask(&format!("{CYAN}?{RESET} {}: ", shown))?;

        let response = self.read_line()?.unwrap_or_default();
        let response = response.trim();
        if response.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(response.to_string())
        }
    }

    /// Ask a yes/no question.
    ///
    /// Only `y` and `yes` (any case) count as yes. Anything else that is not
    /// empty counts as no; an empty answer gives `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        self.ask(&format!("{CYAN}?{RESET} {} ({}): ", question, hint))?;

        let response = self.read_line()?.unwrap_or_default();
        let response = response.trim().to_lowercase();
        if response.is_empty() {
            return Ok(default);
        }
        Ok(matches!(response.as_str(), "y" | "yes"))
    }

    /// Ask the user to pick one of `choices` by its 1-based number.
    ///
    /// Re-prompts until the answer is valid. Returns the chosen label.
    ///
    /// # Errors
    ///
    /// Fails up front on an empty list or out-of-range default, and with
    /// [`ClikitError::InputClosed`] if input ends with no default to fall
    /// back on.
    pub fn select<'c, S: AsRef<str>>(
        &mut self,
        question: &str,
        choices: &'c [S],
        default: Option<usize>,
    ) -> Result<&'c str> {
        let set = ChoiceSet::new(choices, default)?;
        let index = self.run_select(question, &set)?;
        Ok(set.label(index))
    }

    /// Same as [`select`](Self::select) but returns the 0-based index.
    pub fn select_index<S: AsRef<str>>(
        &mut self,
        question: &str,
        choices: &[S],
        default: Option<usize>,
    ) -> Result<usize> {
        let set = ChoiceSet::new(choices, default)?;
        self.run_select(question, &set)
    }

    /// Status printer sharing this prompter's output streams.
    pub fn printer(&mut self) -> &mut StatusPrinter<W, E> {
        &mut self.printer
    }

    /// Consume the prompter and return its output streams.
    pub fn into_inner(self) -> (W, E) {
        self.printer.into_inner()
    }

    fn run_select<S: AsRef<str>>(
        &mut self,
        question: &str,
        set: &ChoiceSet<'_, S>,
    ) -> Result<usize> {
        let out = self.printer.out();
        writeln!(out, "{CYAN}?{RESET} {}", question)?;
        for i in 0..set.len() {
            let marker = if set.default_index() == Some(i) {
                " (default)"
            } else {
                ""
            };
            writeln!(out, "  {}. {}{}", i + 1, set.label(i), marker)?;
        }

        let mut state = SelectState::AwaitingInput;
        loop {
            match state {
                SelectState::AwaitingInput => {
                    self.ask(CHOICE_PROMPT)?;
                    state = match self.read_line()? {
                        Some(line) => set.classify(&line),
                        None => match set.default_index() {
                            Some(index) => SelectState::ValidEmpty(index),
                            None => return Err(ClikitError::InputClosed),
                        },
                    };
                }
                SelectState::ValidEmpty(index) | SelectState::ValidIndex(index) => {
                    return Ok(index);
                }
                SelectState::InvalidFormat => {
                    debug!("select: non-numeric answer");
                    self.printer.error(NOT_A_NUMBER)?;
                    state = SelectState::AwaitingInput;
                }
                SelectState::InvalidRange => {
                    debug!("select: answer outside 1..={}", set.len());
                    self.printer.error(OUT_OF_RANGE)?;
                    state = SelectState::AwaitingInput;
                }
            }
        }
    }

    fn ask(&mut self, text: &str) -> Result<()> {
        let out = self.printer.out();
        write!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    /// One line of input, or `None` once the stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Ask for free text on the terminal.
pub fn prompt(question: &str, default: Option<&str>) -> Result<String> {
    Prompter::stdio().prompt(question, default)
}

/// Ask a yes/no question on the terminal.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    Prompter::stdio().confirm(question, default)
}

/// Ask the user to pick one of `choices` on the terminal.
pub fn select<'c, S: AsRef<str>>(
    question: &str,
    choices: &'c [S],
    default: Option<usize>,
) -> Result<&'c str> {
    Prompter::stdio().select(question, choices, default)
}
