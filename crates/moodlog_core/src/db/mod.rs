//! Journal database: the SQLite file behind [`crate::SqliteKeyValueStore`].
//!
//! The schema is a single `kv_entries` table; the log store keeps its whole
//! snapshot under the `records` key, so migrations only ever touch that
//! table's shape, never the JSON inside it.
//!
//! # Invariants
//! - `PRAGMA user_version` equals the last applied migration.
//! - A file written by a newer build is refused rather than downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file's schema is ahead of what this build can migrate.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "journal database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "journal database schema {found} is from a newer build (supports {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
