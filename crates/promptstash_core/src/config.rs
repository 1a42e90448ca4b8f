//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; unusable values fall back to defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "PROMPTSTASH_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PROMPTSTASH_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROMPTSTASH_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = ".promptstash.sqlite3";

/// Where the stash lives and how it logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is off when unset.
    pub log_dir: Option<String>,
}

impl StashConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`, e.g. a fixed map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_db_path(read("HOME")));
        let log_level = read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_level,
            log_dir: read(ENV_LOG_DIR),
        }
    }
}

fn default_db_path(home: Option<String>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(DEFAULT_DB_FILE_NAME)
}
