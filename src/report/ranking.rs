//! Final ranking of a run

use crate::rating::RatingTable;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Decoration for the top three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based position, if it earns one
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// One line of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based position
    pub position: usize,
    pub player_id: PlayerId,
    pub rating: f64,
    pub rounded_rating: i64,
    pub medal: Option<Medal>,
    pub games_played: u64,
}

impl RankingEntry {
    /// Medal icon, or an empty string below the podium
    pub fn icon(&self) -> &'static str {
        self.medal.map(|medal| medal.icon()).unwrap_or("")
    }
}

/// Round a rating to the nearest integer, halves to even
pub fn round_rating(rating: f64) -> i64 {
    rating.round_ties_even() as i64
}

/// Rank every player by descending rating.
///
/// The sort is stable, so players with equal ratings keep roster order.
pub fn build_ranking(table: &RatingTable) -> Vec<RankingEntry> {
    let mut entries: Vec<_> = table.entries().iter().collect();
    entries.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let position = index + 1;
            RankingEntry {
                position,
                player_id: entry.player_id.clone(),
                rating: entry.rating,
                rounded_rating: round_rating(entry.rating),
                medal: Medal::for_position(position),
                games_played: entry.games_played,
            }
        })
        .collect()
}

/// Human-readable ranking list
pub fn write_ranking<W: Write>(out: &mut W, ranking: &[RankingEntry]) -> std::io::Result<()> {
    writeln!(out, "Rankings")?;
    for entry in ranking {
        writeln!(
            out,
            " {}. {}: {}{}",
            entry.position,
            entry.player_id,
            entry.rounded_rating,
            entry.icon()
        )?;
    }
    Ok(())
}

/// Ranking as a pretty-printed JSON array
pub fn write_ranking_json<W: Write>(out: &mut W, ranking: &[RankingEntry]) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut *out, ranking)?;
    writeln!(out)?;
    Ok(())
}
