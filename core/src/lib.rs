//! # ollmcp Core
//!
//! Configuration defaults for ollmcp, a terminal client that drives MCP tools
//! through a local Ollama runtime.
//!
//! The crate builds the default settings document and resolves where a named
//! configuration file lives. Reading and writing those files is left to the
//! caller.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    default_config, sanitize_config_name, ConfigDir, Configuration, ContextSettings,
    DisplaySettings, HilSettings, ModelConfig, ModelSettings,
};
pub use error::{ConfigError, Error, Result};

use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr, filtered by `RUST_LOG`
pub fn init_tracing() {
    install_subscriber(EnvFilter::from_default_env());
}

/// Initialize tracing on stderr
///
/// `debug` forces the debug level. Otherwise `RUST_LOG` applies, falling
/// back to info.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    install_subscriber(filter);
}

fn install_subscriber(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
