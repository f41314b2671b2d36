use anyhow::Result;

use squad_balancer::cli::Command;
use squad_balancer::{handle_completions, handle_sample, handle_stats, handle_teams, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Stats {
            source,
            rating,
            json,
        } => handle_stats(source, *rating, *json),
        Command::Teams {
            source,
            players,
            reroll,
            balance,
        } => handle_teams(source, players, *reroll, balance),
        Command::Sample { source, balance } => handle_sample(source, balance),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
