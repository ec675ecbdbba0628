//! Immutable log store snapshots and their mutations.
//!
//! # Responsibility
//! - Apply mood, feeling and feeling-removal edits copy-on-write.
//! - Encode/decode the `records` JSON document.
//!
//! # Invariants
//! - `expunge_feeling` never creates an entry.
//! - Decoding drops individual days with an invalid key or mood rather than
//!   admitting them; a document that is not a JSON object decodes as empty.

use super::kv::{KeyValueStore, PersistenceResult, RECORDS_KEY};
use crate::model::date_key::DateKey;
use crate::model::entry::LogEntry;
use crate::model::mood::Mood;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic failures of store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry exists for the given day.
    NotFound(DateKey),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "no journal entry for {key}"),
        }
    }
}

impl Error for StoreError {}

/// Snapshot of every recorded day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogStore {
    entries: BTreeMap<DateKey, LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: DateKey) -> Option<&LogEntry> {
        self.entries.get(&key)
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &LogEntry)> {
        self.entries.iter()
    }

    /// Sets the day-level mood, keeping the day's feelings.
    pub fn set_mood(&self, key: DateKey, mood: Mood) -> LogStore {
        self.with_entry(key, |entry| entry.mood = Some(mood))
    }

    /// Tags every descriptor with `mood`, overwriting earlier tags of the
    /// same name. Descriptors are stored verbatim, including empty strings.
    pub fn set_feeling<I, S>(&self, key: DateKey, mood: Mood, descriptors: I) -> LogStore
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_entry(key, |entry| {
            for descriptor in descriptors {
                entry.feelings.insert(descriptor.into(), mood);
            }
        })
    }

    /// Removes one feeling tag from an existing day.
    ///
    /// Removing a descriptor the day does not carry is a no-op.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the day has no entry.
    pub fn expunge_feeling(&self, key: DateKey, descriptor: &str) -> StoreResult<LogStore> {
        if !self.entries.contains_key(&key) {
            return Err(StoreError::NotFound(key));
        }
        Ok(self.with_entry(key, |entry| {
            entry.feelings.remove(descriptor);
        }))
    }

    /// Encodes the snapshot as the `records` JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a `records` document, dropping invalid days.
    pub fn from_json(raw: &str) -> LogStore {
        let document = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => {
                warn!("event=store_decode module=store status=error error_code=not_an_object");
                return LogStore::new();
            }
            Err(err) => {
                warn!(
                    "event=store_decode module=store status=error error_code=invalid_json line={} column={}",
                    err.line(),
                    err.column()
                );
                return LogStore::new();
            }
        };

        let mut entries = BTreeMap::new();
        let mut dropped = 0usize;
        for (raw_key, value) in document {
            let Ok(key) = raw_key.parse::<DateKey>() else {
                dropped += 1;
                continue;
            };
            match serde_json::from_value::<LogEntry>(value) {
                Ok(entry) => {
                    entries.insert(key, entry);
                }
                Err(_) => {
                    warn!(
                        "event=store_decode module=store status=error error_code=invalid_entry key={key}"
                    );
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            warn!(
                "event=store_decode module=store status=partial kept={} dropped={dropped}",
                entries.len()
            );
        }
        LogStore { entries }
    }

    /// Hydrates a snapshot from `kv`; any failure yields an empty store.
    pub fn load(kv: &impl KeyValueStore) -> LogStore {
        match kv.read_raw(RECORDS_KEY) {
            Ok(Some(raw)) => {
                let store = Self::from_json(&raw);
                debug!(
                    "event=store_load module=store status=ok entries={}",
                    store.len()
                );
                store
            }
            Ok(None) => {
                debug!("event=store_load module=store status=ok entries=0 source=absent");
                LogStore::new()
            }
            Err(err) => {
                warn!("event=store_load module=store status=error error={err}");
                LogStore::new()
            }
        }
    }

    /// Writes the full snapshot to `kv`.
    pub fn save(&self, kv: &impl KeyValueStore) -> PersistenceResult<()> {
        let raw = self.to_json()?;
        kv.write_raw(RECORDS_KEY, &raw)
    }

    fn with_entry(&self, key: DateKey, edit: impl FnOnce(&mut LogEntry)) -> LogStore {
        let mut next = self.clone();
        edit(next.entries.entry(key).or_default());
        next
    }
}
