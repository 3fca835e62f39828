//! Configuration defaults and file locations
//!
//! Only builds default values and computes paths. Loading and merging
//! persisted files is done by the caller.

pub mod constants;
pub mod defaults;
pub mod paths;
pub mod types;

pub use constants::{
    CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_NAME, DEFAULT_MODEL,
};
pub use defaults::default_config;
pub use paths::{sanitize_config_name, ConfigDir};
pub use types::{
    Configuration, ContextSettings, DisplaySettings, HilSettings, ModelConfig, ModelSettings,
};
