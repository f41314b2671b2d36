use std::path::PathBuf;

use thiserror::Error;

use crate::domain::PlayerId;

/// The match history could not be read at all
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read data file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed match table: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Failed to compile cell pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Roster rejected before any allocation work
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidRosterError {
    #[error("Roster must contain exactly {expected} players, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Player listed more than once: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Synergy weight must be a finite non-negative number, got {0}")]
    InvalidSynergyWeight(f64),
}

/// Add context to data file errors
pub fn load_context(path: &str) -> String {
    format!("Failed to load match history from: {}", path)
}

/// Add context to allocation errors
pub fn allocation_context(players: &[PlayerId]) -> String {
    format!("Failed to allocate squads for: {}", players.join(", "))
}
