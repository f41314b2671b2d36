use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Outcome, PlayerId};

pub type PerformanceMap = BTreeMap<PlayerId, PerformanceRecord>;

/// Aggregated results of one player over every played match slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub score: i32,
}

impl PerformanceRecord {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Unplayed => return,
        }

        self.games += 1;
        self.score += outcome.points();
    }

    pub fn has_played(&self) -> bool {
        self.games > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_invariants() {
        let mut record = PerformanceRecord::default();
        for outcome in [
            Outcome::Win,
            Outcome::Win,
            Outcome::Draw,
            Outcome::Loss,
            Outcome::Unplayed,
        ] {
            record.record(outcome);
        }

        assert_eq!(record.games, 4);
        assert_eq!(record.games, record.wins + record.draws + record.losses);
        assert_eq!(record.score, record.wins as i32 - record.losses as i32);
        assert_eq!(record.score, 1);
    }

    #[test]
    fn test_unplayed_is_ignored() {
        let mut record = PerformanceRecord::default();
        record.record(Outcome::Unplayed);
        assert!(!record.has_played());
        assert_eq!(record, PerformanceRecord::default());
    }
}
