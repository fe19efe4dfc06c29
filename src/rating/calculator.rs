//! Rating calculator trait
//!
//! This module defines the interface the match processor uses to turn the
//! pre-match ratings of two teams and the final score into a rating change.

use crate::types::MatchScore;

/// Trait for calculating the rating change of a two-on-two match
pub trait RatingCalculator {
    /// Calculate the rating change for a single match
    ///
    /// # Arguments
    /// * `team1` - Pre-match ratings of the two team 1 players
    /// * `team2` - Pre-match ratings of the two team 2 players
    /// * `score` - Final score of the match
    ///
    /// # Returns
    /// The amount added to each team 1 player and subtracted from each team 2
    /// player
    fn match_delta(&self, team1: [f64; 2], team2: [f64; 2], score: MatchScore) -> f64;

    /// Get the initial rating for rostered players
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
