//! Config path resolution command

use anyhow::{Context, Result};
use ollmcp_core::ConfigDir;
use std::path::PathBuf;
use tracing::info;

/// Print the path of the named configuration file
pub fn path_command(config_dir: Option<PathBuf>, name: Option<String>) -> Result<()> {
    info!("Resolving config path");

    let dir = ConfigDir::resolve(config_dir.as_deref())
        .context("Failed to determine configuration directory")?;

    let path = dir.config_path(name.as_deref()).with_context(|| {
        format!(
            "Failed to prepare configuration directory: {}",
            dir.path().display()
        )
    })?;

    println!("{}", path.display());

    Ok(())
}
