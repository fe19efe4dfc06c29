//! Roster loading: one player identity per line

use crate::error::Result;
use crate::rating::RatingTable;
use crate::types::PlayerId;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read player identities, trimming whitespace and skipping blank lines
pub fn parse_roster<R: BufRead>(reader: R) -> Result<Vec<PlayerId>> {
    let mut players = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read roster line {}", index + 1))?;
        let player = line.trim();
        if !player.is_empty() {
            players.push(player.to_string());
        }
    }

    Ok(players)
}

pub fn load_roster(path: &Path) -> Result<Vec<PlayerId>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster {}", path.display()))?;
    let players = parse_roster(BufReader::new(file))
        .with_context(|| format!("Failed to load roster {}", path.display()))?;

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Start every rostered player at `initial_rating`.
///
/// A name listed twice keeps its first position.
pub fn build_table(players: &[PlayerId], initial_rating: f64) -> RatingTable {
    let mut table = RatingTable::new();
    for player in players {
        if !table.insert(player.as_str(), initial_rating) {
            warn!("Player {} appears more than once in the roster", player);
        }
    }
    table
}
