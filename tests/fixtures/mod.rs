//! Shared helpers for integration testing

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use team_elo::input::parse_match_line;
use team_elo::types::{MatchRecord, PlayerId};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Roster from a list of names
pub fn roster(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Match records from lines in the match file format
pub fn records(lines: &[&str]) -> Vec<MatchRecord> {
    lines
        .iter()
        .map(|line| parse_match_line(line).expect("fixture match line must parse"))
        .collect()
}

/// A fresh directory under the system temp dir, unique per test
pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "team-elo-{}-{}-{}",
            label,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&path).expect("failed to create temp dir");
        Self { path }
    }

    /// Write `contents` to `name` inside the directory and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, contents).expect("failed to write fixture file");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
