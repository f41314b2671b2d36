use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::ROSTER_SIZE;
use crate::domain::PlayerId;
use crate::errors::InvalidRosterError;
use crate::rating::{RatingPolicy, rate_with};
use crate::stats::PerformanceMap;

/// A roster entry with its rating resolved
#[derive(Debug, Clone, PartialEq)]
pub struct RatedPlayer {
    pub id: PlayerId,
    pub rating: f64,
}

/// How players with equal ratings are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    PlayerId,
    InputOrder,
}

pub fn validate_roster(
    roster: &[PlayerId],
    performance: &PerformanceMap,
) -> Result<(), InvalidRosterError> {
    if roster.len() != ROSTER_SIZE {
        return Err(InvalidRosterError::WrongSize {
            expected: ROSTER_SIZE,
            actual: roster.len(),
        });
    }

    let mut seen = HashSet::with_capacity(ROSTER_SIZE);
    for player in roster {
        if !seen.insert(player) {
            return Err(InvalidRosterError::DuplicatePlayer(player.clone()));
        }
        if !performance.contains_key(player) {
            return Err(InvalidRosterError::UnknownPlayer(player.clone()));
        }
    }

    Ok(())
}

pub fn validate_synergy_weight(weight: f64) -> Result<(), InvalidRosterError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(InvalidRosterError::InvalidSynergyWeight(weight))
    }
}

/// Highest rating first; the sort is stable so `InputOrder` keeps roster order on ties
pub fn order_roster(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    policy: RatingPolicy,
    tie_break: TieBreak,
) -> Vec<RatedPlayer> {
    let mut rated: Vec<RatedPlayer> = roster
        .iter()
        .map(|id| rate_player(id, performance, policy))
        .collect();

    rated.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| break_tie(a, b, tie_break))
    });
    rated
}

fn rate_player(id: &PlayerId, performance: &PerformanceMap, policy: RatingPolicy) -> RatedPlayer {
    let record = performance.get(id).copied().unwrap_or_default();
    RatedPlayer {
        id: id.clone(),
        rating: rate_with(&record, policy),
    }
}

fn break_tie(a: &RatedPlayer, b: &RatedPlayer, tie_break: TieBreak) -> Ordering {
    match tie_break {
        TieBreak::PlayerId => a.id.cmp(&b.id),
        TieBreak::InputOrder => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PerformanceRecord;

    fn performance_for(players: &[(&str, i32)]) -> PerformanceMap {
        players
            .iter()
            .map(|&(id, score)| {
                let wins = score.max(0) as u32;
                let losses = (-score).max(0) as u32;
                let record = PerformanceRecord {
                    games: 4,
                    wins,
                    draws: 4 - wins - losses,
                    losses,
                    score,
                };
                (id.to_string(), record)
            })
            .collect()
    }

    fn ids(players: &[&str]) -> Vec<PlayerId> {
        players.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_wrong_size_rejected() {
        let names: Vec<String> = (0..11).map(|i| format!("p{i}")).collect();
        let performance: PerformanceMap = names
            .iter()
            .map(|n| (n.clone(), PerformanceRecord::default()))
            .collect();

        let nine = validate_roster(&names[..9], &performance);
        assert_eq!(
            nine,
            Err(InvalidRosterError::WrongSize { expected: 10, actual: 9 })
        );

        let eleven = validate_roster(&names, &performance);
        assert_eq!(
            eleven,
            Err(InvalidRosterError::WrongSize { expected: 10, actual: 11 })
        );

        assert!(validate_roster(&names[..10], &performance).is_ok());
    }

    #[test]
    fn test_unknown_and_duplicate_rejected() {
        let mut names: Vec<String> = (0..10).map(|i| format!("p{i}")).collect();
        let performance: PerformanceMap = names
            .iter()
            .map(|n| (n.clone(), PerformanceRecord::default()))
            .collect();

        names[9] = "stranger".to_string();
        assert_eq!(
            validate_roster(&names, &performance),
            Err(InvalidRosterError::UnknownPlayer("stranger".to_string()))
        );

        names[9] = "p0".to_string();
        assert_eq!(
            validate_roster(&names, &performance),
            Err(InvalidRosterError::DuplicatePlayer("p0".to_string()))
        );
    }

    #[test]
    fn test_synergy_weight_bounds() {
        assert!(validate_synergy_weight(0.0).is_ok());
        assert!(validate_synergy_weight(2.0).is_ok());
        assert!(validate_synergy_weight(-0.1).is_err());
        assert!(validate_synergy_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_order_by_rating_then_id() {
        let performance = performance_for(&[("cat", 1), ("ann", 1), ("bob", 3), ("dan", -2)]);
        let ordered = order_roster(
            &ids(&["cat", "ann", "bob", "dan"]),
            &performance,
            RatingPolicy::AverageScore,
            TieBreak::PlayerId,
        );

        let names: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["bob", "ann", "cat", "dan"]);
    }

    #[test]
    fn test_input_order_tie_break_keeps_roster_order() {
        let performance = performance_for(&[("cat", 1), ("ann", 1), ("bob", 3)]);
        let ordered = order_roster(
            &ids(&["cat", "ann", "bob"]),
            &performance,
            RatingPolicy::AverageScore,
            TieBreak::InputOrder,
        );

        let names: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["bob", "cat", "ann"]);
    }
}
