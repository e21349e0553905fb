//! Bounded, cancellable prompting for the user's calls.

use crate::error::InputError;
use crate::legal::is_pass_token;
use bidding_core::{Bid, Position};
use std::collections::VecDeque;
use tracing::warn;

const CALL_HELP: &str = "Enter a bid from one of the potential bids listed, or P to pass. \
You must use a single character to define the suit.";

/// A line-oriented terminal, or a script standing in for one.
pub trait LineReader {
    /// Show `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn message(&mut self, text: &str);
}

/// Feeds pre-recorded lines and collects messages.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    pub messages: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            messages: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.pop_front()
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

/// Prompt until `parse` accepts a line.
///
/// `quit`, `exit` and end of input cancel. `help` shows `help` and is not
/// counted. With `max_tries = Some(n)` the n-th rejected line fails with
/// [`InputError::Exhausted`]; `None` keeps asking.
pub fn validated_input<T>(
    reader: &mut dyn LineReader,
    prompt: &str,
    help: &str,
    max_tries: Option<usize>,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T, InputError> {
    let mut rejected = 0;
    loop {
        let line = reader.read_line(prompt).ok_or(InputError::Cancelled)?;
        let line = line.trim();
        if is_quit(line) {
            return Err(InputError::Cancelled);
        }
        if line.eq_ignore_ascii_case("help") {
            reader.message(help);
            continue;
        }
        if let Some(value) = parse(line) {
            return Ok(value);
        }

        rejected += 1;
        warn!(input = line, attempt = rejected, "rejected input");
        if max_tries.is_some_and(|max| rejected >= max) {
            return Err(InputError::Exhausted {
                attempts: rejected,
                last: line.to_string(),
            });
        }
        reader.message("That was not an expected response.");
    }
}

/// One legal bid offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidOption<'a> {
    pub token: &'a str,
    pub value: Bid,
    pub description: &'a str,
}

#[derive(Debug, Clone)]
pub struct CallRequest<'a> {
    pub seat: Position,
    pub options: Vec<BidOption<'a>>,
    pub show_meanings: bool,
}

impl CallRequest<'_> {
    /// What to show before prompting: one `value: description` line per
    /// option, or the bare tokens on a single line.
    pub fn listing(&self) -> Vec<String> {
        if self.show_meanings {
            self.options
                .iter()
                .map(|o| format!("{}: {}", o.value, o.description))
                .collect()
        } else {
            let tokens: Vec<&str> = self.options.iter().map(|o| o.token).collect();
            vec![format!("[{}]", tokens.join(", "))]
        }
    }

    /// `p` for a pass token, the lower-cased token for an offered bid.
    pub fn accept(&self, line: &str) -> Option<String> {
        if is_pass_token(line) {
            return Some("p".to_string());
        }
        let token = line.trim().to_ascii_lowercase();
        self.options
            .iter()
            .any(|o| o.token == token)
            .then_some(token)
    }
}

/// Source of the user's calls. Returns a legal token or a pass token.
pub trait CallInput {
    fn request_call(&mut self, request: &CallRequest<'_>) -> Result<String, InputError>;
}

/// [`CallInput`] that prompts through a [`LineReader`].
pub struct PromptInput<'r> {
    reader: &'r mut dyn LineReader,
    max_tries: Option<usize>,
}

impl<'r> PromptInput<'r> {
    pub fn new(reader: &'r mut dyn LineReader, max_tries: Option<usize>) -> Self {
        Self { reader, max_tries }
    }
}

impl CallInput for PromptInput<'_> {
    fn request_call(&mut self, request: &CallRequest<'_>) -> Result<String, InputError> {
        for line in request.listing() {
            self.reader.message(&line);
        }
        validated_input(
            &mut *self.reader,
            "Your bid: ",
            CALL_HELP,
            self.max_tries,
            |line| request.accept(line),
        )
    }
}
