//! Command-line interface for drop_token.

use clap::Parser;

/// Drop Token - a 4x4 connect-four variant played over stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "drop_token")]
#[command(about = "Play Drop Token with PUT, GET, BOARD and EXIT commands", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = drop_token::DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Tracing filter (overrides the config file; RUST_LOG takes precedence)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Skip the welcome greeting
    #[arg(long)]
    pub no_banner: bool,
}
