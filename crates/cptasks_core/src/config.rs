//! Runtime configuration resolved by front ends.
//!
//! # Invariants
//! - All derived paths live under `data_dir`.
//! - `log_level` is already normalized (`trace|debug|info|warn|error`).

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::path::PathBuf;

/// Directory name appended to the platform data directory.
pub const APP_DIR_NAME: &str = "cptasks";
pub const DB_FILE_NAME: &str = "cptasks.sqlite3";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Config rooted at `data_dir` with the build-mode default log level.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_level: default_log_level(),
        }
    }

    /// Overrides the log level, rejecting unknown names.
    pub fn with_log_level(mut self, level: &str) -> Result<Self, LoggingError> {
        self.log_level = normalize_level(level)?;
        Ok(self)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn derived_paths_live_under_data_dir() {
        let config = AppConfig::new("/var/lib/cptasks");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/var/lib/cptasks/cptasks.sqlite3")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/var/lib/cptasks/logs"));
    }

    #[test]
    fn with_log_level_normalizes_and_rejects_unknown() {
        let config = AppConfig::new("/tmp/x").with_log_level("WARNING").unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(AppConfig::new("/tmp/x").with_log_level("loud").is_err());
    }
}
