//! Default configuration printing command

use anyhow::{Context, Result};
use ollmcp_core::{default_config, Configuration};
use tracing::info;

/// Print the default configuration as JSON on stdout
pub fn defaults_command(compact: bool) -> Result<()> {
    info!("Rendering default configuration");

    println!("{}", render(&default_config(), compact)?);

    Ok(())
}

fn render(config: &Configuration, compact: bool) -> Result<String> {
    config
        .to_json(compact)
        .context("Failed to serialize default configuration")
}
