//! Configuration model.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top-10 source configuration.
    pub source: SourceConfig,
    /// Seconds to wait between catalog requests.
    pub request_delay_secs: u64,
}

/// Top-10 source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the Netflix weekly top-10 TSV dataset.
    pub url: String,
    /// Country name as it appears in the dataset.
    pub country: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            request_delay_secs: 1,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: crate::services::netflix::NETFLIX_TOP10_URL.to_string(),
            country: "United States".to_string(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("trendarr")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}
