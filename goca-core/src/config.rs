//! Global goca configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GocaError, GocaResult};

static DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration at `<config dir>/goca/config.toml`.
///
/// Every field can be overridden from the environment with a `GOCA_` prefix,
/// e.g. `GOCA_API_URL`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GocaConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Host used when a command is not given a username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_host: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GocaConfig {
    fn default() -> Self {
        GocaConfig {
            api_url: default_api_url(),
            default_host: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GocaConfig {
    /// `GOCA_CONFIG` if set (with `~` expanded), otherwise the platform config dir.
    pub fn config_path() -> GocaResult<PathBuf> {
        if let Ok(custom) = std::env::var("GOCA_CONFIG") {
            return Ok(PathBuf::from(shellexpand::tilde(&custom).into_owned()));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| GocaError::Config("Could not determine config directory".into()))?
            .join("goca");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first use.
    pub fn load() -> GocaResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> GocaResult<Self> {
        debug!(path = %path.display(), "Loading config");

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("GOCA"))
            .build()
            .map_err(|e| GocaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GocaError::Config(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn save(&self) -> GocaResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> GocaResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GocaError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| GocaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GocaResult<()> {
        let contents = format!(
            "\
# goca configuration

# Booking backend:
# api_url = \"{DEFAULT_API_URL}\"

# Host used when none is given on the command line:
# default_host = \"john\"

# Seconds before a request to the backend is abandoned:
# request_timeout_secs = {DEFAULT_TIMEOUT_SECS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GocaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GocaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
