use serde::{Deserialize, Serialize};

use super::types::Squad;
use crate::config::settings::BalanceSettings;
use crate::domain::PlayerId;
use crate::rating::{RatingPolicy, rate_with};
use crate::stats::PerformanceMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceVerdict {
    Excellent,
    Good,
    Imbalanced,
}

impl BalanceVerdict {
    pub fn from_difference(difference: f64, settings: &BalanceSettings) -> Self {
        if difference <= settings.excellent_max {
            BalanceVerdict::Excellent
        } else if difference <= settings.good_max {
            BalanceVerdict::Good
        } else {
            BalanceVerdict::Imbalanced
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BalanceVerdict::Excellent => "excellent",
            BalanceVerdict::Good => "good",
            BalanceVerdict::Imbalanced => "imbalanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadSummary {
    pub members: Vec<PlayerId>,
    pub total_rating: f64,
    pub average_rating: f64,
}

/// Figures shown alongside a generated pair of squads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub first: SquadSummary,
    pub second: SquadSummary,
    pub difference: f64,
    pub verdict: BalanceVerdict,
}

pub fn summarize(
    squads: &(Squad, Squad),
    performance: &PerformanceMap,
    policy: RatingPolicy,
    settings: &BalanceSettings,
) -> MatchupSummary {
    let first = summarize_squad(&squads.0, performance, policy);
    let second = summarize_squad(&squads.1, performance, policy);
    let difference = (first.total_rating - second.total_rating).abs();

    MatchupSummary {
        verdict: BalanceVerdict::from_difference(difference, settings),
        first,
        second,
        difference,
    }
}

fn summarize_squad(
    squad: &Squad,
    performance: &PerformanceMap,
    policy: RatingPolicy,
) -> SquadSummary {
    let total_rating: f64 = squad
        .iter()
        .map(|player| player_rating(player, performance, policy))
        .sum();

    SquadSummary {
        members: squad.members().to_vec(),
        total_rating,
        average_rating: average(total_rating, squad.len()),
    }
}

fn player_rating(player: &str, performance: &PerformanceMap, policy: RatingPolicy) -> f64 {
    performance
        .get(player)
        .map(|record| rate_with(record, policy))
        .unwrap_or(0.0)
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
