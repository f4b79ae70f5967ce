//! Storage path configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_records_file() -> String {
    "silver_data.csv".to_string()
}

fn default_log_file() -> String {
    "action_log.csv".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding both persisted tables.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the compensation record table.
    #[serde(default = "default_records_file")]
    pub records_file: String,

    /// File name of the action log table.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl StorageConfig {
    /// Full path to the record table.
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.records_file)
    }

    /// Full path to the action log.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.log_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            records_file: default_records_file(),
            log_file: default_log_file(),
        }
    }
}
