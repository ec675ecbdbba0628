//! Header labels derived from dates.

use chrono::{Datelike, NaiveDate, Weekday};

/// Monday-first weekday names.
pub const DAYS_OF_THE_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    DAYS_OF_THE_WEEK[weekday.num_days_from_monday() as usize]
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Labels shown above the grid for the current anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLabels {
    pub weekday: &'static str,
    pub month: &'static str,
    pub year: String,
}

impl HeaderLabels {
    pub fn for_anchor(anchor: NaiveDate) -> Self {
        Self {
            weekday: weekday_name(anchor.weekday()),
            month: month_name(anchor),
            year: format!("{:04}", anchor.year()),
        }
    }
}

/// Greeting for the current point in the week.
pub fn week_prompt(today: NaiveDate) -> &'static str {
    match today.weekday().num_days_from_monday() {
        0..=2 => "Ready for the week?",
        3..=5 => "How is your week going?",
        _ => "How was your week?",
    }
}
