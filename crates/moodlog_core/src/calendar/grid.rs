//! Visible-day grid computation.

use super::header::weekday_name;
use super::interval::{days_in_month, IntervalKind};
use crate::model::date_key::DateKey;
use crate::model::entry::LogEntry;
use crate::store::log_store::LogStore;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// One rendered day: never persisted, rebuilt on every recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub is_today: bool,
    pub log: Option<&'a LogEntry>,
}

impl DayCell<'_> {
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn key(&self) -> DateKey {
        DateKey::new(self.date)
    }
}

/// Computes the ordered grid for `kind` anchored at `anchor`.
///
/// - `Day`: the anchor alone.
/// - `Week`: Monday through Sunday of the anchor's ISO week.
/// - `Month`: the anchor month padded with trailing days of the previous
///   month and leading days of the next one so the grid spans whole
///   Monday-to-Sunday rows.
///
/// Each cell carries the entry stored under its key in `store`, and
/// `is_today` compares against the caller-supplied `today`.
pub fn compute_visible_days<'a>(
    anchor: NaiveDate,
    kind: IntervalKind,
    store: &'a LogStore,
    today: NaiveDate,
) -> Vec<DayCell<'a>> {
    let (start, len) = visible_range(anchor, kind);
    start
        .iter_days()
        .take(len)
        .map(|date| DayCell {
            weekday: date.weekday(),
            date,
            is_today: date == today,
            log: store.get(DateKey::new(date)),
        })
        .collect()
}

/// First visible date and number of cells for a grid.
fn visible_range(anchor: NaiveDate, kind: IntervalKind) -> (NaiveDate, usize) {
    match kind {
        IntervalKind::Day => (anchor, 1),
        IntervalKind::Week => (monday_of(anchor), 7),
        IntervalKind::Month => {
            let first = anchor.with_day(1).unwrap_or(anchor);
            let month_len = days_in_month(anchor);
            let lead = first.weekday().num_days_from_monday();
            let last_weekday = (lead + month_len - 1) % 7;
            let trail = 6 - last_weekday;
            let start = first
                .checked_sub_days(Days::new(u64::from(lead)))
                .unwrap_or(first);
            (start, (lead + month_len + trail) as usize)
        }
    }
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::{monday_of, visible_range};
    use crate::calendar::interval::IntervalKind;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_of_sunday_is_previous_monday() {
        assert_eq!(monday_of(ymd(2024, 3, 17)), ymd(2024, 3, 11));
        assert_eq!(monday_of(ymd(2024, 3, 11)), ymd(2024, 3, 11));
    }

    #[test]
    fn month_starting_on_monday_has_no_leading_padding() {
        // April 2024 starts on a Monday and ends on a Tuesday.
        let (start, len) = visible_range(ymd(2024, 4, 20), IntervalKind::Month);
        assert_eq!(start, ymd(2024, 4, 1));
        assert_eq!(len, 35);
    }

    #[test]
    fn february_in_non_leap_year_can_fill_exactly_four_rows() {
        // February 2021 starts on a Monday and has 28 days.
        let (start, len) = visible_range(ymd(2021, 2, 14), IntervalKind::Month);
        assert_eq!(start, ymd(2021, 2, 1));
        assert_eq!(len, 28);
    }
}
