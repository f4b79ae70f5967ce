//! # silver-config
//!
//! Layered configuration loading for the Silver ledger using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SILVER_*` prefix, `__` as separator)
//! 2. Project-level `silver.toml`
//! 3. User-level `~/.config/silver/silver.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SILVER_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `SILVER_STORAGE__RECORDS_FILE` -> `storage.records_file`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! The credential mapping (`[credentials.users]`) is static configuration —
//! it is never written by the application, only read at login time.

mod credentials;
mod error;
mod storage;

pub use credentials::CredentialsConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SilverConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl SilverConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("silver.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SILVER_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("silver").join("silver.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SilverConfig::default();
        assert!(!config.credentials.is_configured());
        assert_eq!(config.storage.records_file, "silver_data.csv");
        assert_eq!(config.storage.log_file, "action_log.csv");
    }
}
