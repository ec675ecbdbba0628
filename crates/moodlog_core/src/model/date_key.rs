//! Canonical date keys.
//!
//! # Responsibility
//! - Convert calendar dates to the fixed-width `YYYY-MM-DD` lookup key.
//! - Parse persisted keys strictly so malformed records can be dropped.
//!
//! # Invariants
//! - Formatting is always zero-padded and ten characters long.
//! - Two timestamps on the same calendar date produce equal keys.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

/// Unique identifier of one journal day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Keys a timestamp by its calendar date, discarding time-of-day.
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        Self(value.date())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

/// Malformed date key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Text is not exactly `YYYY-MM-DD`.
    Malformed(String),
    /// Shape is right but the date does not exist (e.g. `2023-02-29`).
    InvalidDate(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "date key `{value}` must have the form YYYY-MM-DD"),
            Self::InvalidDate(value) => write!(f, "date key `{value}` is not a calendar date"),
        }
    }
}

impl Error for DateKeyError {}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !DATE_KEY_RE.is_match(value) {
            return Err(DateKeyError::Malformed(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DateKeyError::InvalidDate(value.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateKey, DateKeyError};
    use chrono::NaiveDate;

    #[test]
    fn formats_with_fixed_width() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(key.to_string(), "2024-03-07");
    }

    #[test]
    fn ignores_time_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let morning = DateKey::from_datetime(date.and_hms_opt(0, 0, 1).unwrap());
        let night = DateKey::from_datetime(date.and_hms_opt(23, 59, 59).unwrap());
        assert_eq!(morning, night);
        assert_eq!(morning, DateKey::new(date));
    }

    #[test]
    fn rejects_unpadded_and_impossible_dates() {
        assert_eq!(
            "2024-3-7".parse::<DateKey>().unwrap_err(),
            DateKeyError::Malformed("2024-3-7".to_string())
        );
        assert_eq!(
            "2023-02-29".parse::<DateKey>().unwrap_err(),
            DateKeyError::InvalidDate("2023-02-29".to_string())
        );
        assert!("2024-02-29".parse::<DateKey>().is_ok());
    }
}
