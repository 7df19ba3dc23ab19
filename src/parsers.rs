// src/parsers.rs
use std::num::IntErrorKind;

/// Outcome of reading one range bound from a token of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundInput {
    Value(i64),
    Invalid(String),
}

impl BoundInput {
    pub fn parse(line: &str) -> Self {
        let text = line.trim();
        match text.parse::<i64>() {
            Ok(value) => Self::Value(value),
            Err(err) => {
                let reason = match err.kind() {
                    IntErrorKind::Empty => "empty input".to_string(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        format!("{text} is out of range")
                    }
                    _ => format!("{text} is not an integer"),
                };
                Self::Invalid(reason)
            }
        }
    }
}
