use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use super::cell::CellDecoder;
use crate::domain::{HistoryMap, PlayerHistory};
use crate::errors::DataLoadError;

/// Match history as read from the source: one row per player,
/// the first column is the player, every following column is a match slot
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.iter().map(str::to_string).collect();
        let rows = csv_reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        if !path.exists() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| DataLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    pub fn slot_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }
}

/// Parse an in-memory table into per-player histories
pub fn load(table: &RawTable) -> Result<HistoryMap, DataLoadError> {
    let decoder = CellDecoder::new()?;
    Ok(parse_rows(&decoder, &table.rows))
}

/// Read and parse a CSV match history file
pub fn load_file(path: &Path) -> Result<HistoryMap, DataLoadError> {
    let table = RawTable::from_path(path)?;
    info!(
        "Read {} rows with {} match slots from {}",
        table.rows.len(),
        table.slot_count(),
        path.display()
    );

    let histories = load(&table)?;
    info!("  → Parsed histories for {} players", histories.len());
    Ok(histories)
}

fn parse_rows(decoder: &CellDecoder, rows: &[Vec<String>]) -> HistoryMap {
    let mut histories = HistoryMap::new();

    for row in rows {
        let Some((player, history)) = parse_row(decoder, row) else {
            continue;
        };

        if histories.insert(player.clone(), history).is_some() {
            warn!("Duplicate row for player {}, keeping the later one", player);
        }
    }

    histories
}

fn parse_row(decoder: &CellDecoder, row: &[String]) -> Option<(String, PlayerHistory)> {
    let player = row.first().map(|cell| cell.trim()).unwrap_or("");
    if player.is_empty() {
        return None;
    }

    let history = row[1..].iter().map(|cell| decoder.decode(cell)).collect();
    Some((player.to_string(), history))
}
