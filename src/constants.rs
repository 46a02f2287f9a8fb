//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base address of the GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Directory under the home directory holding storage, config and logs
pub const DATA_DIR_NAME: &str = ".github-explorer";

/// File holding the saved accounts and theme record
pub const STORAGE_FILE: &str = "storage.json";

/// Optional YAML configuration file inside the data directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Log file inside the data directory
pub const LOG_FILE: &str = "github-explorer.log";

/// Environment override for the API base URL
pub const ENV_API_URL: &str = "GITHUB_EXPLORER_API_URL";

/// Environment override for the data directory
pub const ENV_DATA_DIR: &str = "GITHUB_EXPLORER_DATA_DIR";

/// Application name
pub const APP_NAME: &str = "GitHub Explorer";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every API request (GitHub rejects requests without one)
pub fn default_user_agent() -> String {
    format!("github-explorer-tui/{}", APP_VERSION)
}
