//! Team Elo rating system
//!
//! This module provides the rating arithmetic, the rating table and the
//! sequential match processor that folds results over it.

pub mod calculator;
pub mod elo;
pub mod processor;
pub mod storage;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::{
    average_team_rating, expected_win_probability, rating_delta, team_rating_delta,
    TeamEloCalculator,
};
pub use processor::{MatchOutcome, MatchProcessor, ProcessingSummary};
pub use storage::{RatingEntry, RatingTable};
