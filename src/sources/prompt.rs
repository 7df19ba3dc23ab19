// src/sources/prompt.rs
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;
use prime_range_domain::RangeQuery;
use prime_range_ports::{RangeDto, RangeSource};
use prime_range_shared_kernel::{PresentationError, Result};

use crate::parsers::BoundInput;

const START_PROMPT: &str = "Please enter the start of the range (non-negative integer): ";
const END_PROMPT: &str = "Please enter the end of the range (non-negative integer): ";
const INVALID_INPUT: &str = "Error: Invalid input. Please enter integer values.";

/// Asks for the range on a terminal until a valid one is entered.
///
/// Answers are whitespace-separated tokens, so `10 30` on one line fills both
/// prompts. A non-integer answer discards the rest of its line and restarts
/// from the start prompt. End of input before a valid range is an error
/// rather than an endless loop.
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, line: String::new(), pending: VecDeque::new() }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<BoundInput> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let token = self.next_token()?;
        let parsed = BoundInput::parse(&token);
        if matches!(parsed, BoundInput::Invalid(_)) {
            self.pending.clear();
        }
        Ok(parsed)
    }

    /// Next answer token, reading further lines while the current one is used up.
    fn next_token(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(PresentationError::InputClosed.into());
            }
            self.pending.extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> RangeSource for InteractivePrompt<R, W> {
    fn obtain(&mut self) -> Result<RangeDto> {
        loop {
            let start = match self.ask(START_PROMPT)? {
                BoundInput::Value(v) => v,
                BoundInput::Invalid(reason) => {
                    debug!("rejected start: {reason}");
                    self.report(INVALID_INPUT)?;
                    continue;
                }
            };
            let end = match self.ask(END_PROMPT)? {
                BoundInput::Value(v) => v,
                BoundInput::Invalid(reason) => {
                    debug!("rejected end: {reason}");
                    self.report(INVALID_INPUT)?;
                    continue;
                }
            };

            match RangeQuery::validated(start, end) {
                Ok(query) => return Ok(RangeDto { start: query.start, end: query.end }),
                Err(err) => self.report(&format!("Error: {err}"))?,
            }
        }
    }
}
