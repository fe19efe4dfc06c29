//! Match processing
//!
//! Folds match records, strictly in input order, over a rating table. Every
//! match reads the four pre-match ratings, computes one delta and moves team 1
//! up and team 2 down by that amount.

use crate::error::Result;
use crate::rating::calculator::RatingCalculator;
use crate::rating::storage::RatingTable;
use crate::types::{MatchRecord, RatingChange};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Effect of one processed match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Amount added to team 1 and subtracted from team 2
    pub delta: f64,
    /// Per-player changes, team 1 first
    pub rating_changes: Vec<RatingChange>,
}

/// Totals for a processed sequence of matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub matches_processed: usize,
    /// Matches with no points scored, which change nothing
    pub scoreless_matches: usize,
    /// Largest absolute delta seen
    pub max_delta: f64,
}

/// Applies match results to a rating table
#[derive(Debug)]
pub struct MatchProcessor<'a, C: RatingCalculator> {
    calculator: &'a C,
}

impl<'a, C: RatingCalculator> MatchProcessor<'a, C> {
    pub fn new(calculator: &'a C) -> Self {
        Self { calculator }
    }

    /// Apply a single match.
    ///
    /// All four players are looked up before anything is written, so a match
    /// naming an unknown player leaves the table untouched.
    pub fn process_match(
        &self,
        table: &mut RatingTable,
        record: &MatchRecord,
    ) -> Result<MatchOutcome> {
        let [p1, p2, p3, p4] = record.participants();
        let team1 = [table.rating(p1)?, table.rating(p2)?];
        let team2 = [table.rating(p3)?, table.rating(p4)?];

        let delta = self.calculator.match_delta(team1, team2, record.score);

        let moves = [(p1, delta), (p2, delta), (p3, -delta), (p4, -delta)];

        let mut rating_changes = Vec::with_capacity(moves.len());
        for (player_id, change) in moves {
            let old_rating = table.rating(player_id)?;
            table.apply_delta(player_id, change)?;
            rating_changes.push(RatingChange {
                player_id: player_id.clone(),
                old_rating,
                new_rating: table.rating(player_id)?,
            });
        }

        debug!(
            "{} vs {} ({}-{}): delta {:+.2}",
            record.team1, record.team2, record.score.team1, record.score.team2, delta
        );

        Ok(MatchOutcome {
            delta,
            rating_changes,
        })
    }

    /// Apply every match in order, stopping at the first error
    pub fn process_all(
        &self,
        table: &mut RatingTable,
        records: &[MatchRecord],
    ) -> Result<ProcessingSummary> {
        let mut summary = ProcessingSummary::default();

        for record in records {
            let outcome = self.process_match(table, record)?;

            summary.matches_processed += 1;
            if record.score.total() == 0 {
                summary.scoreless_matches += 1;
            }
            summary.max_delta = summary.max_delta.max(outcome.delta.abs());
        }

        Ok(summary)
    }
}
