//! Journal domain model.
//!
//! # Responsibility
//! - Define the canonical values persisted by the log store.
//! - Own date-key canonicalization so every layer agrees on lookup identity.
//!
//! # Invariants
//! - A `DateKey` is derived from a calendar date only, never from a time.
//! - `Mood` has exactly three variants; unknown values are rejected on decode.

pub mod date_key;
pub mod entry;
pub mod mood;
