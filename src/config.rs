//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::llm::openai::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};

/// Default model for question generation.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Model identifier for the question-generation call.
    pub model: String,
    /// Chat-completions API base URL.
    pub api_base: String,
    /// Bounded timeout for the single external call.
    pub request_timeout: Duration,
    /// Location of the optional TOML secrets file.
    pub secrets_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            secrets_path: PathBuf::from("secrets.toml"),
        }
    }
}

impl AppConfig {
    /// Build the config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: std::env::var("TALENTSCOUT_MODEL").unwrap_or(defaults.model),
            api_base: std::env::var("TALENTSCOUT_API_BASE").unwrap_or(defaults.api_base),
            request_timeout: std::env::var("TALENTSCOUT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            secrets_path: std::env::var("TALENTSCOUT_SECRETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.secrets_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.secrets_path, PathBuf::from("secrets.toml"));
    }
}
