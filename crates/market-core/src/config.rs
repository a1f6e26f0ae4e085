//! Workload configuration.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },
}

/// Configuration shared by the marketplace workloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Base URL of the remote listing store.
    pub api_base: String,
    /// Whether id lookups consult the remote store before the mock collection.
    pub remote_lookup: bool,
    /// Language used when the request does not ask for one.
    pub default_language: Language,
    /// Maximum number of similar listings shown on the detail page.
    pub similar_limit: usize,
    /// Minimum log level ("trace", "debug", "info", "warn", "error").
    pub log_level: String,
    /// Log output format ("json" or "human").
    pub log_format: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.example.kz/v1".to_string(),
            remote_lookup: true,
            default_language: Language::Ru,
            similar_limit: 4,
            log_level: "info".to_string(),
            log_format: "json".to_string(),
        }
    }
}

impl MarketConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a key/value source (e.g., Spin application variables).
    ///
    /// Keys are the snake_case field names. Unknown keys are ignored. A
    /// malformed value leaves its field unchanged and is returned as an error
    /// alongside the config; the other overrides still apply.
    pub fn with_overrides<F>(mut self, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(v) = lookup("api_base") {
            self.api_base = v;
        }
        if let Some(v) = lookup("remote_lookup") {
            match parse_bool("remote_lookup", &v) {
                Ok(enabled) => self.remote_lookup = enabled,
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup("default_language") {
            match Language::from_code(&v) {
                Some(language) => self.default_language = language,
                None => errors.push(invalid("default_language", &v)),
            }
        }
        if let Some(v) = lookup("similar_limit") {
            match v.trim().parse() {
                Ok(limit) => self.similar_limit = limit,
                Err(_) => errors.push(invalid("similar_limit", &v)),
            }
        }
        if let Some(v) = lookup("log_level") {
            self.log_level = v;
        }
        if let Some(v) = lookup("log_format") {
            self.log_format = v;
        }
        (self, errors)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
