//! Main entry point for the team Elo rating tool
//!
//! Reads the roster and match results, rates every match in order and prints
//! the final ranking, optionally generating a lookup script.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use team_elo::config::{validate_config, AppConfig};
use team_elo::service::{emit_report, run};
use tracing::{debug, info};

/// Team Elo - ratings and rankings for two-on-two matches
#[derive(Parser)]
#[command(
    name = "team-elo",
    version,
    about = "Compute Elo ratings for two-on-two team matches",
    long_about = "Reads a roster (one player per line) and match results \
                 (`p1 p2 p3 p4 score1 score2` per line), pools each team's ratings, \
                 applies an Elo update per match in input order and prints the final ranking."
)]
struct Args {
    /// Elo performance rating scale
    #[arg(short = 'T', value_name = "SCALE", help = "ELO performance rating scale [default: 400]")]
    scale: Option<f64>,

    /// Elo rating change magnitude
    #[arg(short = 'K', value_name = "K", help = "ELO rating change magnitude [default: 128]")]
    k_factor: Option<f64>,

    /// Starting rating
    #[arg(short = 'E', value_name = "RATING", help = "ELO rating start [default: 1500]")]
    initial_rating: Option<f64>,

    /// Lookup script output path
    #[arg(
        short = 'o',
        value_name = "FILE",
        help = "Write a shell script that prints a player's ELO rating"
    )]
    output: Option<PathBuf>,

    /// Annotate the script with rankings
    #[arg(short = 'r', help = "Include medals and a ranking table in the generated script")]
    rankings: bool,

    /// Roster file override
    #[arg(long, value_name = "FILE", help = "Roster file, one player per line")]
    players: Option<PathBuf>,

    /// Match results file override
    #[arg(long, value_name = "FILE", help = "Match results file, one match per line")]
    games: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with per-match logging")]
    debug: bool,

    /// Print the ranking as JSON
    #[arg(long, help = "Print the ranking as JSON instead of text")]
    json: bool,

    /// Dry run mode (validate inputs and exit)
    #[arg(
        long,
        help = "Load and rate every match, then exit without printing or writing anything"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(scale) = args.scale {
        config.rating.scale = scale;
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    if let Some(initial_rating) = args.initial_rating {
        config.rating.initial_rating = initial_rating;
    }

    if let Some(players) = &args.players {
        config.input.players_path = players.clone();
    }

    if let Some(games) = &args.games {
        config.input.games_path = games.clone();
    }

    if let Some(output) = &args.output {
        config.output.script_path = Some(output.clone());
    }

    if args.rankings {
        config.output.script_with_rankings = true;
    }

    if args.json {
        config.output.json = true;
    }

    validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = &args.config {
        info!("Loaded configuration from: {}", config_path.display());
    }
    debug!(
        "{}: scale {}, k-factor {}, starting rating {}",
        config.service.name,
        config.rating.scale,
        config.rating.k_factor,
        config.rating.initial_rating
    );

    let report = run(&config)?;

    if args.dry_run {
        info!("Dry run completed - nothing written");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit_report(&config, &report, &mut out)?;

    Ok(())
}
