//! Run coordination
//!
//! Loads the roster and match results, folds the matches over a fresh rating
//! table and hands the resulting ranking to the reporters. All loading
//! happens before processing and all reporting after it.

use crate::config::{AppConfig, RatingConfig};
use crate::error::Result;
use crate::input::{build_table, load_matches, load_roster};
use crate::rating::{MatchProcessor, ProcessingSummary, RatingTable, TeamEloCalculator};
use crate::report::{
    build_ranking, write_ranking, write_ranking_json, write_script_file, RankingEntry,
    ScriptStyle,
};
use crate::types::{MatchRecord, PlayerId};
use std::io::Write;
use tracing::info;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub table: RatingTable,
    pub ranking: Vec<RankingEntry>,
    pub summary: ProcessingSummary,
}

/// Rate an already loaded roster and match list
pub fn rate_matches(
    rating: &RatingConfig,
    roster: &[PlayerId],
    records: &[MatchRecord],
) -> Result<RunReport> {
    let calculator = TeamEloCalculator::new(*rating)?;
    let processor = MatchProcessor::new(&calculator);

    let mut table = build_table(roster, rating.initial_rating);
    let summary = processor.process_all(&mut table, records)?;

    info!(
        "Processed {} matches for {} players ({} scoreless, largest delta {:.2})",
        summary.matches_processed,
        table.len(),
        summary.scoreless_matches,
        summary.max_delta
    );

    let ranking = build_ranking(&table);
    Ok(RunReport {
        table,
        ranking,
        summary,
    })
}

/// Load the configured inputs and rate them
pub fn run(config: &AppConfig) -> Result<RunReport> {
    let roster = load_roster(&config.input.players_path)?;
    let records = load_matches(&config.input.games_path)?;

    rate_matches(&config.rating, &roster, &records)
}

/// Write the configured script, then the ranking to `out`
pub fn emit_report<W: Write>(config: &AppConfig, report: &RunReport, out: &mut W) -> Result<()> {
    if let Some(path) = &config.output.script_path {
        let style = if config.output.script_with_rankings {
            ScriptStyle::WithRankings
        } else {
            ScriptStyle::Plain
        };
        write_script_file(
            path,
            &report.table,
            &report.ranking,
            config.rating.initial_rating,
            style,
        )?;
    }

    if config.output.json {
        write_ranking_json(out, &report.ranking)?;
    } else {
        write_ranking(out, &report.ranking)?;
    }

    Ok(())
}
