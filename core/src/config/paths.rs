//! Configuration directory and file path resolution
//!
//! Directory lookup order:
//! 1. Explicit override path, used as given
//! 2. `OLLMCP_CONFIG_DIR` environment variable (`~` and `$VAR` are expanded)
//! 3. `~/.config/ollmcp`

use super::constants::{
    CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_NAME,
};
use crate::error::{ConfigError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Directory holding named configuration files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    path: PathBuf,
}

impl ConfigDir {
    /// Use an explicit directory, without any lookup
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the directory from an optional override, the environment,
    /// or the user's home directory
    pub fn resolve(override_path: Option<&Path>) -> Result<Self> {
        Self::resolve_with(
            override_path,
            std::env::var_os(CONFIG_DIR_ENV),
            dirs::home_dir(),
        )
    }

    fn resolve_with(
        override_path: Option<&Path>,
        env_value: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = override_path {
            return Ok(Self::new(path));
        }

        if let Some(value) = env_value.filter(|v| !v.to_string_lossy().trim().is_empty()) {
            debug!("Using config directory from {}", CONFIG_DIR_ENV);
            // Only UTF-8 values are expanded
            let path = match value.to_str() {
                Some(raw) => expand(raw)?,
                None => PathBuf::from(value),
            };
            return Ok(Self::new(path));
        }

        let home = home.ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(home.join(DEFAULT_CONFIG_DIR)))
    }

    /// The directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and any missing parents
    ///
    /// Succeeds when the directory already exists.
    pub fn ensure_exists(&self) -> Result<()> {
        debug!("Ensuring config directory exists: {}", self.path.display());
        std::fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Path of the configuration file for `name`
    ///
    /// `None` stands for `"default"`. The name is sanitized with
    /// [`sanitize_config_name`]; the default name maps to `config.json`,
    /// any other name to `<name>.json`. The directory is created first and
    /// a failure to do so is returned to the caller.
    pub fn config_path(&self, name: Option<&str>) -> Result<PathBuf> {
        self.ensure_exists()?;

        let name = sanitize_config_name(name.unwrap_or(DEFAULT_CONFIG_NAME));
        let path = if name == DEFAULT_CONFIG_NAME {
            self.path.join(DEFAULT_CONFIG_FILE)
        } else {
            self.path.join(format!("{}.json", name))
        };

        debug!("Resolved config '{}' to {}", name, path.display());
        Ok(path)
    }
}

/// Reduce a configuration name to letters, numbers, `-` and `_`, lowercased
///
/// Letters and numbers are judged by Unicode general category, so combining
/// marks are dropped. Falls back to `"default"` when nothing survives the
/// filter.
pub fn sanitize_config_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| is_letter_or_number(*c) || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase();

    if sanitized.is_empty() {
        debug!("Config name '{}' has no usable characters, using default", name);
        DEFAULT_CONFIG_NAME.to_string()
    } else {
        sanitized
    }
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

fn expand(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| ConfigError::InvalidValue {
        field: "config_dir".to_string(),
        value: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
