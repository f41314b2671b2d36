use crate::allocation::BalancePolicy;
use crate::rating::RatingPolicy;

pub const DATA_FILE_ENV: &str = "SQUAD_DATA_FILE";

pub struct DataSettings {
    pub default_file: &'static str,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            default_file: "thursday_football.csv",
        }
    }
}

impl DataSettings {
    /// `--file` wins over the environment, which wins over the default
    pub fn resolve_file(&self, explicit: Option<&str>) -> String {
        if let Some(path) = explicit {
            return path.to_string();
        }

        std::env::var(DATA_FILE_ENV).unwrap_or_else(|_| self.default_file.to_string())
    }
}

pub struct AllocationSettings {
    pub synergy_weight: f64,
    pub policy: BalancePolicy,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            synergy_weight: 1.0,
            policy: BalancePolicy::Penalty,
        }
    }
}

pub struct RatingSettings {
    pub policy: RatingPolicy,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            policy: RatingPolicy::AverageScore,
        }
    }
}

/// Upper bounds on the total-rating difference for each balance verdict
pub struct BalanceSettings {
    pub excellent_max: f64,
    pub good_max: f64,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            excellent_max: 2.0,
            good_max: 5.0,
        }
    }
}

pub struct AppConfig {
    pub data: DataSettings,
    pub allocation: AllocationSettings,
    pub rating: RatingSettings,
    pub balance: BalanceSettings,
    pub top_synergy_pairs: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::default(),
            allocation: AllocationSettings::default(),
            rating: RatingSettings::default(),
            balance: BalanceSettings::default(),
            top_synergy_pairs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_file_wins() {
        let settings = DataSettings::default();
        assert_eq!(settings.resolve_file(Some("history.csv")), "history.csv");
    }
}
