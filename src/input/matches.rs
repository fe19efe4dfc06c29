//! Match result loading
//!
//! One match per line, whitespace separated:
//! `team1_player1 team1_player2 team2_player1 team2_player2 team1_score team2_score`

use crate::error::{RatingError, Result};
use crate::types::{MatchRecord, MatchScore, Team};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

const FIELD_COUNT: usize = 6;

fn parse_score(value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| {
        RatingError::MalformedScore {
            value: value.to_string(),
        }
        .into()
    })
}

/// Parse a single non-blank match line
pub fn parse_match_line(line: &str) -> Result<MatchRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < FIELD_COUNT {
        return Err(RatingError::MalformedMatch {
            reason: format!(
                "expected {} fields, found {}: {:?}",
                FIELD_COUNT,
                fields.len(),
                line.trim()
            ),
        }
        .into());
    }
    if fields.len() > FIELD_COUNT {
        warn!(
            "Ignoring {} extra field(s) in match {:?}",
            fields.len() - FIELD_COUNT,
            line.trim()
        );
    }

    let score = MatchScore::new(parse_score(fields[4])?, parse_score(fields[5])?);

    Ok(MatchRecord::new(
        Team::new(fields[0], fields[1]),
        Team::new(fields[2], fields[3]),
        score,
    ))
}

/// Parse every match in order, skipping blank lines
pub fn parse_matches<R: BufRead>(reader: R) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read match line {}", line_number))?;
        if line.trim().is_empty() {
            continue;
        }

        let record =
            parse_match_line(&line).with_context(|| format!("Invalid match on line {}", line_number))?;
        records.push(record);
    }

    Ok(records)
}

pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open match results {}", path.display()))?;
    let records = parse_matches(BufReader::new(file))
        .with_context(|| format!("Failed to load match results {}", path.display()))?;

    info!("Loaded {} matches from {}", records.len(), path.display());
    Ok(records)
}
