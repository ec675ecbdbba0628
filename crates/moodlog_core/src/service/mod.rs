//! Session-level orchestration.
//!
//! # Responsibility
//! - Own the live store snapshot, interval state and persistence backend.
//! - Keep view layers decoupled from storage details.

pub mod journal_session;
