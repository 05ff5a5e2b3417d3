use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use scout_core::SearchConfig;
use scout_engine::FetchSettings;
use scout_logging::scout_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the optional API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Settings read from the optional RON config file. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub debounce_ms: u64,
    pub default_query: String,
    pub default_language: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let search = SearchConfig::default();
        let fetch = FetchSettings::default();
        Self {
            api_base_url: fetch.api_base_url,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            debounce_ms: search.debounce.as_millis() as u64,
            default_query: search.default_query,
            default_language: search.default_language,
        }
    }
}

impl AppConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                scout_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        scout_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            default_query: self.default_query.clone(),
            default_language: self
                .default_language
                .clone()
                .filter(|language| !language.trim().is_empty()),
            debounce: Duration::from_millis(self.debounce_ms),
            ..SearchConfig::default()
        }
    }

    pub fn fetch_settings(&self, token: Option<String>) -> FetchSettings {
        FetchSettings {
            api_base_url: self.api_base_url.clone(),
            token,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }
}
