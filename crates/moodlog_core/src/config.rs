//! Runtime configuration resolution.
//!
//! Precedence: explicit overrides, then `MOODLOG_*` environment variables,
//! then defaults under the OS temp directory. Blank values are ignored.
//! A relative log directory from any source resolves against the current
//! working directory, since the logger only accepts absolute paths.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "MOODLOG_DB_PATH";
pub const LOG_DIR_ENV: &str = "MOODLOG_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "MOODLOG_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "moodlog.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "moodlog-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

/// Caller-supplied values that win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl JournalConfig {
    /// Resolves against the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolves against an arbitrary variable lookup.
    pub fn resolve_with(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = overrides
            .db_path
            .or_else(|| env(DB_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_dir = overrides
            .log_dir
            .or_else(|| env(LOG_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        let log_dir = absolutize(log_dir, std::env::current_dir().ok().as_deref());
        let log_level = overrides
            .log_level
            .or_else(|| env(LOG_LEVEL_ENV))
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}

fn absolutize(path: PathBuf, cwd: Option<&Path>) -> PathBuf {
    match cwd {
        Some(cwd) if path.is_relative() => cwd.join(path),
        _ => path,
    }
}
