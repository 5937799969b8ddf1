//! CLI module for Herdboard
//!
//! Command-line interface definitions and handlers for the Herdboard server.
//!
//! # Commands
//!
//! - `serve` - Start the Herdboard server
//! - `goats` - List the herd records
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! herdboard serve
//!
//! # List the herd as JSON
//! herdboard goats --json
//!
//! # Generate shell completions
//! herdboard completions bash > ~/.bash_completion.d/herdboard
//! ```

pub mod completions;
pub mod config;
pub mod goats;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use goats::handle_goats;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Herdboard - Livestock Dashboard Server
#[derive(Parser, Debug)]
#[command(
    name = "herdboard",
    version,
    about = "Livestock dashboard server - web UI and JSON API over herd records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Herdboard server
    Serve(ServeArgs),
    /// List the herd records
    Goats(GoatsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "herdboard.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "HERDBOARD_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "HERDBOARD_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HERDBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct GoatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "herdboard.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
