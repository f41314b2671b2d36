use regex::Regex;

use crate::domain::{MatchEvent, Outcome, Side};
use crate::errors::DataLoadError;

/// Decodes match-slot cells such as `R:W`, `w:l`, `B:D` or a bare `D`
pub struct CellDecoder {
    prefixed_regex: Regex,
}

impl CellDecoder {
    pub fn new() -> Result<Self, DataLoadError> {
        let prefixed_regex = Self::compile_regex()?;
        Ok(Self { prefixed_regex })
    }

    fn compile_regex() -> Result<Regex, regex::Error> {
        Regex::new(r"(?s)^([RWB]):(.*)$")
    }

    pub fn decode(&self, cell: &str) -> MatchEvent {
        let normalized = cell.trim().to_uppercase();
        if normalized.is_empty() {
            return MatchEvent::ABSENT;
        }

        let (side, token) = self.split_side(&normalized);
        MatchEvent::new(side, Outcome::from_token(token.trim()))
    }

    /// Bare values without a side prefix are White
    fn split_side<'a>(&self, normalized: &'a str) -> (Side, &'a str) {
        match self.prefixed_regex.captures(normalized) {
            Some(captures) => {
                let side = side_from_prefix(captures.get(1).map_or("", |m| m.as_str()));
                let rest = captures.get(2).map_or("", |m| m.as_str());
                (side, rest)
            }
            None => (Side::White, normalized),
        }
    }
}

fn side_from_prefix(prefix: &str) -> Side {
    match prefix {
        "R" => Side::Red,
        "W" => Side::White,
        _ => Side::None,
    }
}
