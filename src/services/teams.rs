use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use serde::Serialize;

use crate::allocation::{self, AllocationOptions, BalancePolicy, MatchupSummary, Squad};
use crate::cli::BalanceArgs;
use crate::config::settings::AppConfig;
use crate::domain::{HistoryMap, PlayerId};
use crate::errors::{allocation_context, load_context};
use crate::parsing;
use crate::rating::{self, FormLevel, RatingPolicy};
use crate::stats::{self, PerformanceMap, SynergyMatrix};

/// One allocation call as requested by the user
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRequest {
    pub players: Vec<PlayerId>,
    pub reroll: bool,
    pub options: AllocationOptions,
}

impl TeamRequest {
    /// Unset command-line options fall back to the configured defaults
    pub fn new(
        players: Vec<PlayerId>,
        reroll: bool,
        balance: &BalanceArgs,
        config: &AppConfig,
    ) -> Self {
        let options = AllocationOptions {
            synergy_weight: balance
                .synergy_weight
                .unwrap_or(config.allocation.synergy_weight),
            policy: balance
                .policy
                .map(Into::into)
                .unwrap_or(config.allocation.policy),
            rating: balance.rating.map(Into::into).unwrap_or(config.rating.policy),
        };

        Self {
            players,
            reroll,
            options,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupReport {
    pub generated_at: DateTime<Utc>,
    pub policy: BalancePolicy,
    pub rating: RatingPolicy,
    pub synergy_weight: f64,
    pub rerolled: bool,
    pub summary: MatchupSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub score: i32,
    pub win_rate: f64,
    pub rating: f64,
    pub form: FormLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergyPair {
    pub first: PlayerId,
    pub second: PlayerId,
    pub matches_together: u32,
}

/// Statistics snapshot of one history file plus the operations run against it
pub struct TeamService {
    config: AppConfig,
    performance: PerformanceMap,
    synergy: SynergyMatrix,
}

impl TeamService {
    pub fn load(config: AppConfig, file: Option<&str>) -> Result<Self> {
        let path = config.data.resolve_file(file);
        info!("=== Loading match history ===");

        let histories = parsing::load_file(Path::new(&path)).with_context(|| load_context(&path))?;
        Ok(Self::from_histories(config, &histories))
    }

    pub fn from_histories(config: AppConfig, histories: &HistoryMap) -> Self {
        let (performance, synergy) = stats::aggregate(histories);
        info!(
            "  → {} players, {} with at least one game",
            performance.len(),
            performance.values().filter(|r| r.has_played()).count()
        );

        Self {
            config,
            performance,
            synergy,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn players(&self) -> Vec<PlayerId> {
        self.performance.keys().cloned().collect()
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &TeamRequest,
        rng: &mut R,
    ) -> Result<MatchupReport> {
        let squads = self
            .allocate_squads(request, rng)
            .with_context(|| allocation_context(&request.players))?;

        let summary = allocation::summarize(
            &squads,
            &self.performance,
            request.options.rating,
            &self.config.balance,
        );
        info!(
            "Squads generated, difference {:.2} ({})",
            summary.difference,
            summary.verdict.as_str()
        );

        Ok(MatchupReport {
            generated_at: Utc::now(),
            policy: request.options.policy,
            rating: request.options.rating,
            synergy_weight: request.options.synergy_weight,
            rerolled: request.reroll,
            summary,
        })
    }

    fn allocate_squads<R: Rng + ?Sized>(
        &self,
        request: &TeamRequest,
        rng: &mut R,
    ) -> Result<(Squad, Squad), crate::errors::InvalidRosterError> {
        if request.reroll {
            allocation::reroll(
                &request.players,
                &self.performance,
                &self.synergy,
                &request.options,
                rng,
            )
        } else {
            allocation::allocate(
                &request.players,
                &self.performance,
                &self.synergy,
                &request.options,
            )
        }
    }

    pub fn sample_roster<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<PlayerId>> {
        let pool = self.players();
        allocation::random_roster(&pool, rng)
            .context("Not enough players in the history for a random draw")
    }

    pub fn player_stats(&self, policy: Option<RatingPolicy>) -> Vec<PlayerStats> {
        let policy = policy.unwrap_or(self.config.rating.policy);

        self.performance
            .iter()
            .map(|(player, record)| PlayerStats {
                player: player.clone(),
                games: record.games,
                wins: record.wins,
                draws: record.draws,
                losses: record.losses,
                score: record.score,
                win_rate: rating::win_rate(record),
                rating: rating::rate_with(record, policy),
                form: FormLevel::from_games_played(record.games),
            })
            .collect()
    }

    pub fn top_synergy_pairs(&self) -> Vec<SynergyPair> {
        self.synergy
            .pairs()
            .into_iter()
            .take(self.config.top_synergy_pairs)
            .map(|(first, second, count)| SynergyPair {
                first: first.clone(),
                second: second.clone(),
                matches_together: count,
            })
            .collect()
    }
}
