//! Well-known names used by the configuration layer

/// Model used when no configuration overrides it
pub const DEFAULT_MODEL: &str = "qwen2.5:7b";

/// File name of the default configuration inside the config directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Sentinel configuration name that maps to [`DEFAULT_CONFIG_FILE`]
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Config directory relative to the user's home directory
pub const DEFAULT_CONFIG_DIR: &str = ".config/ollmcp";

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "OLLMCP_CONFIG_DIR";

/// Placeholder system prompt shipped with the defaults
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant and speak {Language} and your name is {Name}. My name is {Name}.";
