//! Configuration loading for the demeter CLI.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.demeter/config.toml` (user)
//! 3. `/etc/demeter/config.toml` (system)
//! 4. built-in defaults
//!
//! `DEMETER_REMOTE_URL` overrides `remote.base_url` from any source.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gateway::RecommenderBuilder;
use crate::{DemeterError, Result};

/// Environment variable overriding the remote model URL.
pub const REMOTE_URL_ENV: &str = "DEMETER_REMOTE_URL";

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Remote prediction service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Service base URL. `None` disables all remote traffic.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Health check timeout in seconds (default: 3).
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Predict request timeout in seconds (default: 5).
    #[serde(default = "default_predict_timeout")]
    pub predict_timeout_secs: u64,
    /// Send shadow predict requests when the service is up (default: true).
    #[serde(default = "default_shadow")]
    pub shadow: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            probe_timeout_secs: default_probe_timeout(),
            predict_timeout_secs: default_predict_timeout(),
            shadow: default_shadow(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    3
}

fn default_predict_timeout() -> u64 {
    5
}

fn default_shadow() -> bool {
    true
}

/// Recommendation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendConfig {
    /// Seed for the default branch; unset draws from the thread generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first existing file
    /// wins and defaults apply when there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };

        if let Ok(url) = std::env::var(REMOTE_URL_ENV)
            && !url.trim().is_empty()
        {
            config.remote.base_url = Some(url);
        }

        Ok(config)
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DemeterError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            DemeterError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(DemeterError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".demeter").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/demeter/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Apply this configuration to a recommender builder.
    pub fn apply(&self, mut builder: RecommenderBuilder) -> RecommenderBuilder {
        if let Some(ref url) = self.remote.base_url {
            builder = builder.remote(url.clone());
        }
        builder = builder
            .probe_timeout(Duration::from_secs(self.remote.probe_timeout_secs))
            .predict_timeout(Duration::from_secs(self.remote.predict_timeout_secs))
            .shadow(self.remote.shadow);
        if let Some(seed) = self.recommend.seed {
            builder = builder.seed(seed);
        }
        builder
    }
}
