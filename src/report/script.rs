//! Generated lookup script
//!
//! A bash script that prints the rounded rating of the player named by its
//! first argument, falling back to the starting rating for unknown names.

use super::ranking::{round_rating, RankingEntry};
use crate::error::Result;
use crate::rating::RatingTable;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Which flavour of script to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStyle {
    /// Players in roster order, bare ratings
    Plain,
    /// Players in ranking order with medals, plus a trailing ranking comment
    WithRankings,
}

/// Quote a name for use as a `case` pattern when it contains shell syntax
fn case_pattern(name: &str) -> String {
    let is_plain = name
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '@' | '+'));
    if is_plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', r"'\''"))
    }
}

fn write_arm<W: Write>(out: &mut W, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(out, "{})", case_pattern(name))?;
    writeln!(out, "echo {}", value)?;
    writeln!(out, ";;")
}

pub fn write_script<W: Write>(
    out: &mut W,
    table: &RatingTable,
    ranking: &[RankingEntry],
    initial_rating: f64,
    style: ScriptStyle,
) -> std::io::Result<()> {
    writeln!(out, "#! /bin/bash")?;
    writeln!(out, "case $1 in")?;

    match style {
        ScriptStyle::Plain => {
            for entry in table.entries() {
                write_arm(out, &entry.player_id, &round_rating(entry.rating).to_string())?;
            }
        }
        ScriptStyle::WithRankings => {
            for entry in ranking {
                let value = format!("{}{}", entry.rounded_rating, entry.icon());
                write_arm(out, &entry.player_id, &value)?;
            }
        }
    }

    writeln!(out, "*)")?;
    writeln!(out, "echo {}", round_rating(initial_rating))?;
    writeln!(out, ";;")?;
    writeln!(out, "esac")?;

    if style == ScriptStyle::WithRankings {
        writeln!(out)?;
        writeln!(out, "# Rankings")?;
        for entry in ranking {
            writeln!(
                out,
                "# {}. {}: {}{}",
                entry.position,
                entry.player_id,
                entry.rounded_rating,
                entry.icon()
            )?;
        }
    }

    Ok(())
}

/// Write the script to `path` and make it executable
pub fn write_script_file(
    path: &Path,
    table: &RatingTable,
    ranking: &[RankingEntry],
    initial_rating: f64,
    style: ScriptStyle,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create script {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_script(&mut out, table, ranking, initial_rating, style)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write script {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to make {} executable", path.display()))?;
    }

    info!("Wrote lookup script to {}", path.display());
    Ok(())
}
