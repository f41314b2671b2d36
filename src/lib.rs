pub mod allocation;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod parsing;
pub mod rating;
pub mod services;
pub mod stats;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{BalanceArgs, Command, SourceArgs};
use crate::config::settings::AppConfig;
use crate::services::render;
use crate::services::teams::{TeamRequest, TeamService};

pub use allocation::{allocate, reroll};
pub use parsing::{load, load_file};
pub use rating::rate;
pub use stats::aggregate;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_stats(source: &SourceArgs, rating: Option<cli::RatingArg>, json: bool) -> Result<()> {
    let config = AppConfig::new();
    let service = TeamService::load(config, source.file.as_deref())?;
    let rows = service.player_stats(rating.map(Into::into));

    if json {
        render::print_json(&rows)
    } else {
        render::print_stats(&rows, &service.top_synergy_pairs());
        Ok(())
    }
}

pub fn handle_teams(
    source: &SourceArgs,
    players: &[String],
    reroll: bool,
    balance: &BalanceArgs,
) -> Result<()> {
    let config = AppConfig::new();
    let service = TeamService::load(config, source.file.as_deref())?;
    let request = TeamRequest::new(players.to_vec(), reroll, balance, service.config());
    let report = service.generate(&request, &mut rand::rng())?;
    render::print_report(&report, balance.json)
}

pub fn handle_sample(source: &SourceArgs, balance: &BalanceArgs) -> Result<()> {
    let config = AppConfig::new();
    let service = TeamService::load(config, source.file.as_deref())?;
    let mut rng = rand::rng();
    let players = service.sample_roster(&mut rng)?;
    let request = TeamRequest::new(players, false, balance, service.config());
    let report = service.generate(&request, &mut rng)?;
    render::print_report(&report, balance.json)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
