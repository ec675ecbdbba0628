//! Interval kinds, lengths and anchor navigation.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Granularity of the visible calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalKind {
    Day,
    Week,
    #[default]
    Month,
}

impl IntervalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Capitalized name for "Last Month" / "Next Month" style labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

impl Display for IntervalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntervalError(pub String);

impl Display for ParseIntervalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown interval `{}`; expected day|week|month", self.0)
    }
}

impl Error for ParseIntervalError {}

impl FromStr for IntervalKind {
    type Err = ParseIntervalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseIntervalError(value.to_string())),
        }
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn signum(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Number of days in the month containing `date`.
///
/// Measured as the distance from the first of the month to the first of
/// the next; the final representable month is December and has 31 days.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    first
        .checked_add_months(Months::new(1))
        .map_or(31, |next| next.signed_duration_since(first).num_days() as u32)
}

/// Returns 1 for day, 7 for week, and the anchor month's length for month.
pub fn interval_length(kind: IntervalKind, anchor: NaiveDate) -> u32 {
    match kind {
        IntervalKind::Day => 1,
        IntervalKind::Week => 7,
        IntervalKind::Month => days_in_month(anchor),
    }
}

/// Moves `anchor` one interval in `direction`.
///
/// Day and week steps shift by 1 and 7 days. Month steps move one calendar
/// month and clamp the day-of-month to the target month's length, so
/// Jan 31 advances to the end of February rather than into March. Stepping
/// past the representable date range leaves the anchor unchanged.
pub fn advance_interval(anchor: NaiveDate, kind: IntervalKind, direction: Direction) -> NaiveDate {
    let days = Days::new(u64::from(interval_length(kind, anchor)));
    let shifted = match (kind, direction) {
        (IntervalKind::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
        (IntervalKind::Month, Direction::Previous) => anchor.checked_sub_months(Months::new(1)),
        (_, Direction::Next) => anchor.checked_add_days(days),
        (_, Direction::Previous) => anchor.checked_sub_days(days),
    };
    shifted.unwrap_or(anchor)
}

/// Interval kind plus anchor date for one UI session.
///
/// Not persisted: a fresh session is anchored at today with a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalState {
    pub kind: IntervalKind,
    pub anchor: NaiveDate,
}

impl IntervalState {
    pub fn new(kind: IntervalKind, anchor: NaiveDate) -> Self {
        Self { kind, anchor }
    }

    /// Default session state: month view anchored at `today`.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self::new(IntervalKind::default(), today)
    }

    pub fn advance(&mut self, direction: Direction) {
        self.anchor = advance_interval(self.anchor, self.kind, direction);
    }

    pub fn length(&self) -> u32 {
        interval_length(self.kind, self.anchor)
    }
}
