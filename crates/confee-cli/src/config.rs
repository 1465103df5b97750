//! Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the chat API base URL
pub const API_URL_ENV: &str = "CONFEE_API_URL";

/// Timeout used when neither the CLI nor the config file sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for confee
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the chat API (requests go to `<api_url>/chat`)
    pub api_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Whether to list suggested prompts on an empty conversation
    pub show_suggestions: Option<bool>,
}

/// Problems found while resolving settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API URL is not configured (use --api-url, set CONFEE_API_URL, or add api_url to the config file)")]
    MissingApiUrl,
    #[error("timeout must be at least 1 second")]
    InvalidTimeout,
}

/// Effective settings after merging CLI, environment and config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub timeout: Duration,
    pub show_suggestions: bool,
}

impl Config {
    /// Get the config directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("confee")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        // Check for CONFEE_CONFIG_PATH env var first
        if let Ok(path) = std::env::var("CONFEE_CONFIG_PATH") {
            return PathBuf::from(path);
        }
        Self::config_dir().join("config.toml")
    }

    /// Load config from file
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to file
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, content)
    }

    /// Create a default config file if it doesn't exist
    pub fn init() -> std::io::Result<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            return Ok(path);
        }

        let default_config = Config {
            api_url: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            show_suggestions: Some(true),
        };

        default_config.save()?;
        Ok(path)
    }

    /// Merge with CLI values and the environment (CLI > env > file > default)
    pub fn resolve(
        &self,
        cli_api_url: Option<&str>,
        cli_timeout_secs: Option<u64>,
        env_api_url: Option<String>,
    ) -> Result<Settings, ConfigError> {
        let api_url = non_blank(cli_api_url)
            .or_else(|| non_blank(env_api_url.as_deref()))
            .or_else(|| non_blank(self.api_url.as_deref()))
            .ok_or(ConfigError::MissingApiUrl)?;

        let timeout_secs = cli_timeout_secs
            .or(self.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Settings {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            show_suggestions: self.show_suggestions.unwrap_or(true),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Generate example config content
pub fn example_config() -> &'static str {
    r#"# confee configuration file
# Place at ~/.config/confee/config.toml (Linux) or set CONFEE_CONFIG_PATH

# Base URL of the chat API; requests are sent to <api_url>/chat
# Can also be set with the CONFEE_API_URL environment variable
# api_url = "https://xxxxxxxxxx.execute-api.ap-northeast-1.amazonaws.com/prod"

# Seconds to wait for a reply before giving up
timeout_secs = 30

# List suggested prompts while the conversation is empty
show_suggestions = true
"#
}
