//! Log store and its persistence collaborator.
//!
//! # Responsibility
//! - Hold the date-keyed mapping of journal entries as immutable snapshots.
//! - Serialize snapshots to the `records` key of a key-value backend.
//!
//! # Invariants
//! - Mutations return a new snapshot and leave the receiver untouched.
//! - Loading never fails: unreadable or malformed state loads as empty.

pub mod kv;
pub mod log_store;
