//! # ollmcp-config
//!
//! Inspect the configuration defaults used by the ollmcp client.
//!
//! ## Usage
//!
//! - `ollmcp-config defaults` - Print the default configuration as JSON
//! - `ollmcp-config path [NAME]` - Print where the named configuration lives
//!
//! Logs are written to stderr so stdout can be piped.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{defaults_command, path_command};

/// ollmcp-config - Inspect ollmcp configuration defaults and paths
#[derive(Parser)]
#[command(name = "ollmcp-config")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect ollmcp configuration defaults and file locations")]
#[command(long_about = None)]
struct Cli {
    /// Configuration directory (defaults to $OLLMCP_CONFIG_DIR, then ~/.config/ollmcp)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration as JSON
    Defaults {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Print the path of a named configuration file, creating its directory
    Path {
        /// Configuration name (default: "default")
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ollmcp_core::init_tracing_with_debug(cli.verbose);

    match cli.command {
        Commands::Defaults { compact } => defaults_command(compact),
        Commands::Path { name } => path_command(cli.config_dir, name),
    }
}
