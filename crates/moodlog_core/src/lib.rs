//! Core domain logic for the mood journal.
//! This crate is the single source of truth for calendar and log invariants.

pub mod calendar;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::grid::{compute_visible_days, DayCell};
pub use calendar::header::{week_prompt, HeaderLabels};
pub use calendar::interval::{
    advance_interval, days_in_month, interval_length, Direction, IntervalKind, IntervalState,
};
pub use config::{ConfigOverrides, JournalConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date_key::{DateKey, DateKeyError};
pub use model::entry::LogEntry;
pub use model::mood::Mood;
pub use service::journal_session::{JournalError, JournalResult, JournalSession};
pub use store::kv::{
    KeyValueStore, MemoryKeyValueStore, PersistenceError, SqliteKeyValueStore, RECORDS_KEY,
};
pub use store::log_store::{LogStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
