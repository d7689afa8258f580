//! Configuration loading, validation, and management for Attune.
//!
//! Loads configuration from `~/.attune/config.toml` with environment
//! variable overrides (`ATTUNE_*`). Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// The root configuration structure.
///
/// Maps directly to `~/.attune/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chat model served by the chat backend
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Base URL of the chat backend (Ollama by default)
    #[serde(default = "default_chat_base_url")]
    pub chat_base_url: String,

    /// Emotion classification model
    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,

    /// Base URL of the classification endpoint
    #[serde(default = "default_classifier_base_url")]
    pub classifier_base_url: String,

    /// Optional API key for the classification endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier_api_key: Option<String>,

    /// Generation-length budget per reply
    #[serde(default = "default_max_reply_tokens")]
    pub max_reply_tokens: u32,

    /// Sampling temperature for replies
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Weather cache configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Conversation history bounds
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_chat_model() -> String {
    "mistral:7b-instruct-q5_0".into()
}
fn default_chat_base_url() -> String {
    "http://localhost:11434".into()
}
fn default_classifier_model() -> String {
    "SamLowe/roberta-base-go_emotions".into()
}
fn default_classifier_base_url() -> String {
    "http://localhost:8080".into()
}
fn default_max_reply_tokens() -> u32 {
    150
}
fn default_temperature() -> f32 {
    0.7
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("chat_model", &self.chat_model)
            .field("chat_base_url", &self.chat_base_url)
            .field("classifier_model", &self.classifier_model)
            .field("classifier_base_url", &self.classifier_base_url)
            .field("classifier_api_key", &redact(&self.classifier_api_key))
            .field("max_reply_tokens", &self.max_reply_tokens)
            .field("temperature", &self.temperature)
            .field("weather", &self.weather)
            .field("history", &self.history)
            .finish()
    }
}

/// Weather cache and fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// URL returning a one-line weather report
    #[serde(default = "default_weather_url")]
    pub url: String,

    /// Cache time-to-live; a failed fetch also cools down a full window
    #[serde(default = "default_weather_cache_seconds")]
    pub cache_seconds: u64,

    /// Per-fetch timeout
    #[serde(default = "default_weather_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

fn default_weather_url() -> String {
    "https://wttr.in?format=1".into()
}
fn default_weather_cache_seconds() -> u64 {
    300
}
fn default_weather_fetch_timeout_ms() -> u64 {
    2000
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            url: default_weather_url(),
            cache_seconds: default_weather_cache_seconds(),
            fetch_timeout_ms: default_weather_fetch_timeout_ms(),
        }
    }
}

/// Conversation history bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Stored turns beyond which eviction kicks in
    #[serde(default = "default_history_max_turns")]
    pub max_turns: usize,

    /// Oldest turns removed per eviction
    #[serde(default = "default_history_evict_count")]
    pub evict_count: usize,
}

fn default_history_max_turns() -> usize {
    12
}
fn default_history_evict_count() -> usize {
    2
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_turns: default_history_max_turns(),
            evict_count: default_history_evict_count(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_model: default_chat_model(),
            chat_base_url: default_chat_base_url(),
            classifier_model: default_classifier_model(),
            classifier_base_url: default_classifier_base_url(),
            classifier_api_key: None,
            max_reply_tokens: default_max_reply_tokens(),
            temperature: default_temperature(),
            weather: WeatherConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// The config directory: `~/.attune`.
    pub fn config_dir() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".attune")
    }

    /// Load config from `~/.attune/config.toml`, apply environment
    /// overrides, and validate. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_dir().join("config.toml");
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&raw)?
        } else {
            debug!(path = %path.display(), "No config file found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `ATTUNE_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var("ATTUNE_CHAT_MODEL") {
            self.chat_model = model;
        }
        if let Ok(url) = std::env::var("ATTUNE_CHAT_BASE_URL") {
            self.chat_base_url = url;
        }
        if let Ok(model) = std::env::var("ATTUNE_CLASSIFIER_MODEL") {
            self.classifier_model = model;
        }
        if let Ok(url) = std::env::var("ATTUNE_CLASSIFIER_BASE_URL") {
            self.classifier_base_url = url;
        }
        if let Ok(key) = std::env::var("ATTUNE_CLASSIFIER_API_KEY") {
            self.classifier_api_key = Some(key);
        }
    }

    /// Validate settings; called once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chat_model.trim().is_empty() {
            return Err(ConfigError::Invalid("chat_model must not be empty".into()));
        }
        if self.classifier_model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "classifier_model must not be empty".into(),
            ));
        }
        if self.history.max_turns == 0 {
            return Err(ConfigError::Invalid(
                "history.max_turns must be at least 1".into(),
            ));
        }
        if self.history.evict_count == 0 || self.history.evict_count > self.history.max_turns {
            return Err(ConfigError::Invalid(format!(
                "history.evict_count must be in 1..={}",
                self.history.max_turns
            )));
        }
        if self.max_reply_tokens == 0 {
            return Err(ConfigError::Invalid(
                "max_reply_tokens must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
