//! Error types and handling for ollmcp core

use thiserror::Error;

/// Result type alias for ollmcp core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ollmcp core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Could not determine a configuration directory (no home directory found)")]
    NoConfigDir,
}
