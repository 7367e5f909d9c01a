//! Drop Token - command-line game
//!
//! Reads commands from stdin and prints responses to stdout. Logs go to
//! stderr so they never interleave with the protocol.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use drop_token::{CommandLoop, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    initialize_tracing(config.log_filter());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = CommandLoop::new(stdin.lock(), stdout.lock()).banner(*config.banner());
    let summary = session.run()?;

    info!(
        commands = summary.commands(),
        status = ?summary.status(),
        "Exiting"
    );
    Ok(())
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;

    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    if cli.no_banner {
        config = config.with_banner(false);
    }

    Ok(config)
}

#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}
