//! Rating table
//!
//! The single mutable structure of a run: player identity to current rating,
//! remembering the order in which players were rostered.

use crate::error::{RatingError, Result};
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage entry for a player's rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub player_id: PlayerId,
    pub rating: f64,
    pub games_played: u64,
}

impl RatingEntry {
    /// Create a new rating entry for a rostered player
    pub fn new(player_id: PlayerId, initial_rating: f64) -> Self {
        Self {
            player_id,
            rating: initial_rating,
            games_played: 0,
        }
    }

    /// Apply a match's rating change and count the game
    pub fn apply_delta(&mut self, delta: f64) {
        self.rating += delta;
        self.games_played += 1;
    }
}

/// Player ratings in roster order
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    entries: Vec<RatingEntry>,
    index: HashMap<PlayerId, usize>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table where every player starts at `initial_rating`
    pub fn with_players<I, S>(players: I, initial_rating: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        let mut table = Self::new();
        for player in players {
            table.insert(player, initial_rating);
        }
        table
    }

    /// Insert a player, or reset an existing one in place.
    ///
    /// Returns `false` when the player was already present; its roster
    /// position is kept.
    pub fn insert(&mut self, player_id: impl Into<PlayerId>, rating: f64) -> bool {
        let player_id = player_id.into();
        if let Some(&slot) = self.index.get(&player_id) {
            self.entries[slot] = RatingEntry::new(player_id, rating);
            return false;
        }

        self.index.insert(player_id.clone(), self.entries.len());
        self.entries.push(RatingEntry::new(player_id, rating));
        true
    }

    pub fn get_entry(&self, player_id: &str) -> Option<&RatingEntry> {
        self.index.get(player_id).map(|&slot| &self.entries[slot])
    }

    /// Current rating of a player, if rostered
    pub fn get(&self, player_id: &str) -> Option<f64> {
        self.get_entry(player_id).map(|entry| entry.rating)
    }

    /// Current rating of a player, failing for unknown identities
    pub fn rating(&self, player_id: &str) -> Result<f64> {
        self.get(player_id).ok_or_else(|| {
            RatingError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into()
        })
    }

    /// Add `delta` to a player's rating
    pub fn apply_delta(&mut self, player_id: &str, delta: f64) -> Result<()> {
        let slot = *self
            .index
            .get(player_id)
            .ok_or_else(|| RatingError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;
        self.entries[slot].apply_delta(delta);
        Ok(())
    }

    /// Entries in roster order
    pub fn entries(&self) -> &[RatingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every rating in the table
    pub fn total_rating(&self) -> f64 {
        self.entries.iter().map(|entry| entry.rating).sum()
    }
}
