//! Main application configuration
//!
//! This module defines the primary configuration structures for the rating
//! tool, including environment variable and TOML file loading and validation.

use super::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub input: InputSettings,
    pub rating: RatingConfig,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where the roster and match results are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// One player identity per line
    pub players_path: PathBuf,
    /// One match per line
    pub games_path: PathBuf,
}

/// Optional generated artifacts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Path of the generated lookup script, if any
    pub script_path: Option<PathBuf>,
    /// Annotate the script with medals and a trailing ranking table
    pub script_with_rankings: bool,
    /// Print the ranking as JSON instead of text
    pub json: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-elo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from("players.txt"),
            games_path: PathBuf::from("games.txt"),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", name, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections and keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Input settings
        if let Ok(path) = env::var("ELO_PLAYERS_FILE") {
            self.input.players_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("ELO_GAMES_FILE") {
            self.input.games_path = PathBuf::from(path);
        }

        // Rating settings
        if let Ok(scale) = env::var("ELO_SCALE") {
            self.rating.scale = parse_var("ELO_SCALE", &scale)?;
        }
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            self.rating.k_factor = parse_var("ELO_K_FACTOR", &k_factor)?;
        }
        if let Ok(initial) = env::var("ELO_INITIAL_RATING") {
            self.rating.initial_rating = parse_var("ELO_INITIAL_RATING", &initial)?;
        }

        // Output settings
        if let Ok(path) = env::var("ELO_SCRIPT_OUTPUT") {
            self.output.script_path = Some(PathBuf::from(path));
        }
        if let Ok(rankings) = env::var("ELO_SCRIPT_RANKINGS") {
            self.output.script_with_rankings = parse_var("ELO_SCRIPT_RANKINGS", &rankings)?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate inputs
    if config.input.players_path.as_os_str().is_empty() {
        return Err(anyhow!("Players file path cannot be empty"));
    }
    if config.input.games_path.as_os_str().is_empty() {
        return Err(anyhow!("Games file path cannot be empty"));
    }
    if let Some(path) = &config.output.script_path {
        if path.as_os_str().is_empty() {
            return Err(anyhow!("Script output path cannot be empty"));
        }
    }

    config.rating.validate()
}
