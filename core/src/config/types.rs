//! Configuration document types
//!
//! The JSON layout mirrors what the client persists: camelCase section names,
//! with `modelConfig` keeping the option names the Ollama runtime expects.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full client configuration
///
/// Every section falls back to its default when missing, so a partial file
/// deserializes into a complete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Model identifier as known to the runtime, e.g. `qwen2.5:7b`
    pub model: String,

    /// Tool name to enabled flag. Populated once tools are discovered.
    pub enabled_tools: HashMap<String, bool>,

    /// Conversation context handling
    pub context_settings: ContextSettings,

    /// Runtime behaviour of the model
    pub model_settings: ModelSettings,

    /// Generation parameters passed to the runtime
    pub model_config: ModelConfig,

    /// What the terminal UI shows
    pub display_settings: DisplaySettings,

    /// Human-in-the-loop confirmation for tool calls
    pub hil_settings: HilSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextSettings {
    /// Keep earlier turns in the conversation context
    pub retain_context: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelSettings {
    /// Ask thinking-capable models to reason before answering
    pub thinking_mode: bool,
    /// Print the reasoning text alongside the answer
    pub show_thinking: bool,
}

/// Sampling and generation options
///
/// Field names match the runtime's option keys and are serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// System prompt template
    pub system_prompt: String,
    /// Tokens of the prompt kept when the context is truncated
    pub num_keep: i32,
    /// Random seed, `None` lets the runtime choose
    pub seed: Option<i64>,
    /// Maximum tokens to generate, -1 for unlimited
    pub num_predict: i32,
    /// Top-k sampling parameter
    pub top_k: u32,
    /// Top-p sampling parameter
    pub top_p: f32,
    /// Min-p sampling parameter
    pub min_p: f32,
    /// Locally typical sampling parameter
    pub typical_p: f32,
    /// How far back to look when applying the repeat penalty
    pub repeat_last_n: i32,
    /// Temperature for sampling (0.0 to 2.0)
    pub temperature: f32,
    pub repeat_penalty: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    /// Stop sequences
    pub stop: Option<Vec<String>>,
    /// Context window size in tokens
    pub num_ctx: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    pub show_tool_execution: bool,
    pub show_metrics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HilSettings {
    /// Require confirmation before a tool runs
    pub enabled: bool,
}

impl Configuration {
    /// Check whether a tool is present and switched on
    pub fn is_tool_enabled(&self, name: &str) -> bool {
        self.enabled_tools.get(name).copied().unwrap_or(false)
    }

    /// Enable or disable a tool, adding it if unknown
    pub fn set_tool_enabled(&mut self, name: impl Into<String>, enabled: bool) {
        self.enabled_tools.insert(name.into(), enabled);
    }

    /// Parse a configuration document, filling missing keys with defaults
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the configuration, pretty-printed unless `compact`
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model".to_string(),
                value: self.model.clone(),
            }
            .into());
        }

        self.model_config.validate()
    }
}

impl ModelConfig {
    /// Validate parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid("modelConfig.temperature", self.temperature));
        }

        for (field, value) in [
            ("modelConfig.top_p", self.top_p),
            ("modelConfig.min_p", self.min_p),
            ("modelConfig.typical_p", self.typical_p),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, value));
            }
        }

        if self.num_ctx == 0 {
            return Err(invalid("modelConfig.num_ctx", self.num_ctx));
        }

        if self.num_predict < -1 {
            return Err(invalid("modelConfig.num_predict", self.num_predict));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: impl ToString) -> crate::error::Error {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_tool_toggles() {
        let mut config = Configuration::default();
        assert!(!config.is_tool_enabled("filesystem.read_file"));

        config.set_tool_enabled("filesystem.read_file", true);
        config.set_tool_enabled("shell.exec", false);

        assert!(config.is_tool_enabled("filesystem.read_file"));
        assert!(!config.is_tool_enabled("shell.exec"));
        assert_eq!(config.enabled_tools.len(), 2);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = Configuration::default();
        config.model_config.temperature = 3.5;

        match config.validate() {
            Err(Error::Config(ConfigError::InvalidValue { field, value })) => {
                assert_eq!(field, "modelConfig.temperature");
                assert_eq!(value, "3.5");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_probability_fields_checked() {
        let mut config = ModelConfig::default();
        config.min_p = -0.1;
        assert!(config.validate().is_err());

        let mut config = ModelConfig::default();
        config.typical_p = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_num_predict_unlimited_is_valid() {
        let mut config = ModelConfig::default();
        config.num_predict = -1;
        assert!(config.validate().is_ok());

        config.num_predict = -2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_context_window_rejected() {
        let mut config = ModelConfig::default();
        config.num_ctx = 0;

        match config.validate() {
            Err(Error::Config(ConfigError::InvalidValue { field, value })) => {
                assert_eq!(field, "modelConfig.num_ctx");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Configuration::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{
            "model": "llama3.2:3b",
            "modelConfig": { "temperature": 0.2 },
            "hilSettings": { "enabled": false }
        }"#;

        let config = Configuration::from_json(json).unwrap();

        assert_eq!(config.model, "llama3.2:3b");
        assert_eq!(config.model_config.temperature, 0.2);
        assert_eq!(config.model_config.num_ctx, 8192);
        assert!(!config.hil_settings.enabled);
        assert!(config.context_settings.retain_context);
        assert!(config.enabled_tools.is_empty());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        match Configuration::from_json("{ \"model\": ") {
            Err(Error::Serialization(_)) => {}
            other => panic!("expected serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_key_names() {
        let value = serde_json::to_value(Configuration::default()).unwrap();

        assert_eq!(value["contextSettings"]["retainContext"], true);
        assert_eq!(value["modelSettings"]["thinkingMode"], true);
        assert_eq!(value["modelSettings"]["showThinking"], false);
        assert_eq!(value["displaySettings"]["showToolExecution"], true);
        assert_eq!(value["displaySettings"]["showMetrics"], false);
        assert_eq!(value["modelConfig"]["num_ctx"], 8192);
        assert_eq!(value["modelConfig"]["repeat_last_n"], 64);
        assert!(value["modelConfig"]["seed"].is_null());
        assert!(value["modelConfig"]["stop"].is_null());
    }
}
