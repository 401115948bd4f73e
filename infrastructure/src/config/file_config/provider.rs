//! Remote service configuration from TOML (`[provider]` section)

use super::ConfigIssue;
use crate::credentials::{DEFAULT_API_KEY_ENV, DEFAULT_ENV_FILE};
use crate::groq::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Groq API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var or env file instead).
    pub api_key: Option<String>,
    /// Env file holding `KEY=value` lines (default: "api_key.env").
    pub env_file: String,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            env_file: DEFAULT_ENV_FILE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "provider.api_key_env",
                "provider.api_key_env: variable name cannot be empty",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "provider.base_url",
                "provider.base_url: URL cannot be empty",
            ));
        }
        if self.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "provider.api_key",
                format!(
                    "provider.api_key: storing the key in a config file is not recommended, use ${} instead",
                    self.api_key_env
                ),
            ));
        }
        issues
    }
}
