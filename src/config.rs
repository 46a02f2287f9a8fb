//! Runtime configuration
//!
//! Defaults, overridden by `<data_dir>/config.yaml`, overridden by environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    default_user_agent, CONFIG_FILE, DATA_DIR_NAME, DEFAULT_API_BASE_URL, ENV_API_URL,
    ENV_DATA_DIR, LOG_FILE, STORAGE_FILE,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base address of the REST API, without trailing slash
    pub api_base_url: String,
    /// Holds storage.json, config.yaml and the log file
    pub data_dir: PathBuf,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            data_dir: default_data_dir(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Resolve the data directory from the environment, then read the config
    /// file inside it. A missing or malformed file yields defaults.
    pub fn load() -> Self {
        let data_dir = std::env::var_os(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let mut config = Self::from_file(&data_dir.join(CONFIG_FILE)).unwrap_or_default();
        config.data_dir = data_dir;

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config
    }

    /// Parse a YAML config file. `None` if it is absent or invalid.
    pub fn from_file(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match serde_yaml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                None
            }
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn log_file_name(&self) -> &'static str {
        LOG_FILE
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}
