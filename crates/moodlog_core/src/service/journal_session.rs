//! Journal session: the explicit owner of mutable journal state.
//!
//! # Responsibility
//! - Hydrate the log store once when the session opens.
//! - Write every new snapshot through to the key-value backend.
//! - Track the visible interval and recompute the grid on request.
//!
//! # Invariants
//! - Mutations run one at a time, each deriving from the previous snapshot.
//! - A failed write keeps the new in-memory snapshot; the failure is
//!   returned to the caller but never rolled back.

use crate::calendar::grid::{compute_visible_days, DayCell};
use crate::calendar::header::HeaderLabels;
use crate::calendar::interval::{Direction, IntervalKind, IntervalState};
use crate::model::date_key::DateKey;
use crate::model::mood::Mood;
use crate::store::kv::{KeyValueStore, PersistenceError};
use crate::store::log_store::{LogStore, StoreError};
use chrono::NaiveDate;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type JournalResult<T> = Result<T, JournalError>;

/// Session-level failure.
#[derive(Debug)]
pub enum JournalError {
    /// Target day has no entry.
    NotFound(DateKey),
    /// Snapshot applied in memory but not persisted.
    Persistence(PersistenceError),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "no journal entry for {key}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for JournalError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(key) => Self::NotFound(key),
        }
    }
}

impl From<PersistenceError> for JournalError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Live journal state for one process.
pub struct JournalSession<K: KeyValueStore> {
    kv: K,
    store: LogStore,
    interval: IntervalState,
}

impl<K: KeyValueStore> JournalSession<K> {
    /// Loads persisted records and anchors a month view at `today`.
    pub fn open(kv: K, today: NaiveDate) -> Self {
        let store = LogStore::load(&kv);
        info!(
            "event=session_open module=service status=ok entries={}",
            store.len()
        );
        Self {
            kv,
            store,
            interval: IntervalState::starting_at(today),
        }
    }

    /// Current snapshot.
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn interval(&self) -> IntervalState {
        self.interval
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    /// Grid for the current interval against the current snapshot.
    pub fn visible_days(&self, today: NaiveDate) -> Vec<DayCell<'_>> {
        compute_visible_days(self.interval.anchor, self.interval.kind, &self.store, today)
    }

    pub fn header(&self) -> HeaderLabels {
        HeaderLabels::for_anchor(self.interval.anchor)
    }

    pub fn advance(&mut self, direction: Direction) {
        self.interval.advance(direction);
    }

    /// Switches granularity, keeping the anchor date.
    pub fn set_interval(&mut self, kind: IntervalKind) {
        self.interval.kind = kind;
    }

    /// Re-anchors the view at `today`, keeping the interval kind.
    pub fn reset_to(&mut self, today: NaiveDate) {
        self.interval.anchor = today;
    }

    pub fn set_mood(&mut self, key: DateKey, mood: Mood) -> JournalResult<()> {
        let next = self.store.set_mood(key, mood);
        self.commit(next, "set_mood", key)
    }

    pub fn set_feeling<I, S>(
        &mut self,
        key: DateKey,
        mood: Mood,
        descriptors: I,
    ) -> JournalResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = self.store.set_feeling(key, mood, descriptors);
        self.commit(next, "set_feeling", key)
    }

    /// # Errors
    /// - `JournalError::NotFound` when `key` has no entry; nothing is written.
    pub fn expunge_feeling(&mut self, key: DateKey, descriptor: &str) -> JournalResult<()> {
        let next = self.store.expunge_feeling(key, descriptor)?;
        self.commit(next, "expunge_feeling", key)
    }

    fn commit(&mut self, next: LogStore, op: &'static str, key: DateKey) -> JournalResult<()> {
        self.store = next;
        match self.store.save(&self.kv) {
            Ok(()) => {
                info!("event=store_write module=service status=ok op={op} key={key}");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_write module=service status=error op={op} key={key} error={err}"
                );
                Err(err.into())
            }
        }
    }
}
