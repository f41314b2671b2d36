use serde::{Deserialize, Serialize};

pub const WIN_RATE_WEIGHT: f64 = 0.7;
pub const SCORE_WEIGHT: f64 = 0.3;
pub const DEFAULT_COMPOSITE_SCALE: f64 = 10.0;

/// How a performance record is turned into a single fitness value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RatingPolicy {
    /// Net score per game, in [-1, 1]
    AverageScore,
    /// `scale * (0.7 * win_rate + 0.3 * score_per_game)`
    Composite { scale: f64 },
}

impl Default for RatingPolicy {
    fn default() -> Self {
        RatingPolicy::AverageScore
    }
}

impl RatingPolicy {
    pub fn composite() -> Self {
        RatingPolicy::Composite {
            scale: DEFAULT_COMPOSITE_SCALE,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RatingPolicy::AverageScore => "average-score",
            RatingPolicy::Composite { .. } => "composite",
        }
    }
}

/// Rough sample-size label shown next to a player's numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormLevel {
    Unproven,    // < 5 games
    Regular,     // 5-19 games
    Established, // 20+ games
}

impl FormLevel {
    pub fn from_games_played(games: u32) -> Self {
        if games < 5 {
            FormLevel::Unproven
        } else if games < 20 {
            FormLevel::Regular
        } else {
            FormLevel::Established
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FormLevel::Unproven => "unproven",
            FormLevel::Regular => "regular",
            FormLevel::Established => "established",
        }
    }
}
