//! Calendar engine: visible-day grids and interval navigation.
//!
//! # Responsibility
//! - Derive the ordered, Monday-first grid of days for a day/week/month view.
//! - Annotate each day with the log entry stored under its date key.
//! - Move an anchor date one interval forward or backward.
//!
//! # Invariants
//! - Every function here is pure; "today" is always passed in by the caller.
//! - Week and month grids start on a Monday and end on a Sunday.

pub mod grid;
pub mod header;
pub mod interval;
