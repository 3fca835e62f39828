//! Default configuration settings
//!
//! Each call builds a new owned value; nothing is cached or shared, so a
//! caller can mutate its copy freely.

use super::constants::{DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
use super::types::{
    Configuration, ContextSettings, DisplaySettings, HilSettings, ModelConfig, ModelSettings,
};
use std::collections::HashMap;

/// Build the default configuration
pub fn default_config() -> Configuration {
    Configuration {
        model: DEFAULT_MODEL.to_string(),
        enabled_tools: HashMap::new(),
        context_settings: ContextSettings::default(),
        model_settings: ModelSettings::default(),
        model_config: ModelConfig::default(),
        display_settings: DisplaySettings::default(),
        hil_settings: HilSettings::default(),
    }
}

impl Default for Configuration {
    fn default() -> Self {
        default_config()
    }
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            retain_context: true,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            thinking_mode: true,
            show_thinking: false,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            num_keep: 5,
            seed: None,
            num_predict: 2048,
            top_k: 40,
            top_p: 0.9,
            min_p: 0.05,
            typical_p: 1.0,
            repeat_last_n: 64,
            temperature: 0.7,
            repeat_penalty: 1.1,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop: None,
            num_ctx: 8192,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_tool_execution: true,
            show_metrics: false,
        }
    }
}

impl Default for HilSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
