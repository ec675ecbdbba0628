//! Per-day log entry.
//!
//! # Invariants
//! - `mood` and `feelings` are independently settable; either may be empty.
//! - Descriptors are unique per entry (map keys).

use super::mood::Mood;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded mood plus tagged feelings for one day.
///
/// Unknown fields in stored JSON (such as a legacy `date` copy of the key)
/// are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub feelings: BTreeMap<String, Mood>,
}

impl LogEntry {
    /// Entry with only a day-level mood.
    pub fn with_mood(mood: Mood) -> Self {
        Self {
            mood: Some(mood),
            feelings: BTreeMap::new(),
        }
    }

    /// Whether neither a mood nor any feeling is recorded.
    pub fn is_blank(&self) -> bool {
        self.mood.is_none() && self.feelings.is_empty()
    }
}
