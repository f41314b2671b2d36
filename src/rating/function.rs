use super::types::{RatingPolicy, SCORE_WEIGHT, WIN_RATE_WEIGHT};
use crate::stats::PerformanceRecord;

/// Rating under the default policy (net score per game)
pub fn rate(record: &PerformanceRecord) -> f64 {
    rate_with(record, RatingPolicy::default())
}

/// Zero-game records rate 0 under every policy
pub fn rate_with(record: &PerformanceRecord, policy: RatingPolicy) -> f64 {
    if !record.has_played() {
        return 0.0;
    }

    match policy {
        RatingPolicy::AverageScore => score_per_game(record),
        RatingPolicy::Composite { scale } => composite(record, scale),
    }
}

/// Draws count as half a win
pub fn win_rate(record: &PerformanceRecord) -> f64 {
    if !record.has_played() {
        return 0.0;
    }

    let weighted_wins = record.wins as f64 + 0.5 * record.draws as f64;
    weighted_wins / record.games as f64
}

fn score_per_game(record: &PerformanceRecord) -> f64 {
    record.score as f64 / record.games.max(1) as f64
}

fn composite(record: &PerformanceRecord, scale: f64) -> f64 {
    let blended = WIN_RATE_WEIGHT * win_rate(record) + SCORE_WEIGHT * score_per_game(record);
    scale * blended
}
