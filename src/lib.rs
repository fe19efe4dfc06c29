//! Team Elo - ratings for two-on-two matches
//!
//! This crate reads a roster and an ordered list of match results, applies a
//! pooled team Elo update for every match and produces a final ranking and an
//! optional lookup script.

pub mod config;
pub mod error;
pub mod input;
pub mod rating;
pub mod report;
pub mod service;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{MatchProcessor, RatingCalculator, RatingTable, TeamEloCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
