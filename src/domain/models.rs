use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type PlayerId = String;

/// Per-player event sequences, ordered by player identifier
pub type HistoryMap = BTreeMap<PlayerId, PlayerHistory>;

/// Which named squad a player was on for a match slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    White,
    None,
}

impl Side {
    pub fn is_named(&self) -> bool {
        matches!(self, Side::Red | Side::White)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Side::Red => "red",
            Side::White => "white",
            Side::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    Unplayed,
}

impl Outcome {
    pub fn from_token(token: &str) -> Self {
        match token {
            "W" => Outcome::Win,
            "D" => Outcome::Draw,
            "L" => Outcome::Loss,
            _ => Outcome::Unplayed,
        }
    }

    pub fn is_played(&self) -> bool {
        !matches!(self, Outcome::Unplayed)
    }

    /// Net score contribution: win +1, draw 0, loss -1
    pub fn points(&self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
            Outcome::Draw | Outcome::Unplayed => 0,
        }
    }
}

/// One player's entry in one chronological match slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub side: Side,
    pub outcome: Outcome,
}

impl MatchEvent {
    pub const ABSENT: MatchEvent = MatchEvent {
        side: Side::None,
        outcome: Outcome::Unplayed,
    };

    pub fn new(side: Side, outcome: Outcome) -> Self {
        Self { side, outcome }
    }

    /// Counts toward performance and synergy
    pub fn counts(&self) -> bool {
        self.side.is_named() && self.outcome.is_played()
    }
}

/// Ordered match events for a single player, one per recorded slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistory {
    events: Vec<MatchEvent>,
}

impl PlayerHistory {
    pub fn new(events: Vec<MatchEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&MatchEvent> {
        self.events.get(slot)
    }
}

impl FromIterator<MatchEvent> for PlayerHistory {
    fn from_iter<I: IntoIterator<Item = MatchEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tokens() {
        assert_eq!(Outcome::from_token("W"), Outcome::Win);
        assert_eq!(Outcome::from_token("D"), Outcome::Draw);
        assert_eq!(Outcome::from_token("L"), Outcome::Loss);
        assert_eq!(Outcome::from_token("X"), Outcome::Unplayed);
        assert_eq!(Outcome::from_token(""), Outcome::Unplayed);
    }

    #[test]
    fn test_none_side_never_counts() {
        assert!(!MatchEvent::new(Side::None, Outcome::Win).counts());
        assert!(!MatchEvent::new(Side::Red, Outcome::Unplayed).counts());
        assert!(MatchEvent::new(Side::White, Outcome::Draw).counts());
    }
}
