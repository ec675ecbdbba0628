use chrono::NaiveDate;
use moodlog_core::db::{open_db, DbError};
use moodlog_core::{
    DateKey, Direction, IntervalKind, JournalError, JournalSession, KeyValueStore, LogStore,
    MemoryKeyValueStore, Mood, PersistenceError, SqliteKeyValueStore, RECORDS_KEY,
};
use std::cell::Cell;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Backend whose writes always fail after counting the attempt.
#[derive(Default)]
struct FailingWrites {
    attempts: Cell<usize>,
}

impl KeyValueStore for FailingWrites {
    fn read_raw(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn write_raw(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(PersistenceError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }
}

#[test]
fn new_session_starts_on_month_view_at_today() {
    let today = ymd(2024, 3, 15);
    let session = JournalSession::open(MemoryKeyValueStore::new(), today);

    assert_eq!(session.interval().kind, IntervalKind::Month);
    assert_eq!(session.interval().anchor, today);
    assert_eq!(session.visible_days(today).len(), 35);
    assert_eq!(session.header().month, "March");
}

#[test]
fn every_mutation_writes_full_snapshot_through() {
    let today = ymd(2024, 3, 7);
    let mut session = JournalSession::open(MemoryKeyValueStore::new(), today);
    let day = DateKey::new(today);

    session.set_mood(day, Mood::Happy).unwrap();
    session
        .set_feeling(day, Mood::Happy, ["calm", "focused"])
        .unwrap();
    session.expunge_feeling(day, "calm").unwrap();

    let persisted = LogStore::load(session.backend());
    assert_eq!(&persisted, session.store());
    let raw = session.backend().read_raw(RECORDS_KEY).unwrap().unwrap();
    assert_eq!(
        raw,
        r#"{"2024-03-07":{"mood":"happy","feelings":{"focused":"happy"}}}"#
    );
}

#[test]
fn expunge_without_entry_reports_not_found_and_writes_nothing() {
    let backend = FailingWrites::default();
    let mut session = JournalSession::open(backend, ymd(2024, 3, 7));

    let err = session
        .expunge_feeling(DateKey::new(ymd(2024, 3, 7)), "calm")
        .unwrap_err();
    assert!(matches!(err, JournalError::NotFound(_)));
    assert_eq!(session.backend().attempts.get(), 0);
}

#[test]
fn failed_write_keeps_in_memory_snapshot() {
    let mut session = JournalSession::open(FailingWrites::default(), ymd(2024, 3, 7));
    let day = DateKey::new(ymd(2024, 3, 7));

    let err = session.set_mood(day, Mood::Sad).unwrap_err();
    assert!(matches!(err, JournalError::Persistence(_)));
    assert_eq!(session.store().get(day).unwrap().mood, Some(Mood::Sad));
    assert_eq!(session.backend().attempts.get(), 1);
}

#[test]
fn grid_reflects_mutations_on_next_recompute() {
    let today = ymd(2024, 3, 7);
    let mut session = JournalSession::open(MemoryKeyValueStore::new(), today);
    session.set_interval(IntervalKind::Week);

    let before = session.visible_days(today);
    assert!(before.iter().all(|day| day.log.is_none()));

    let key = DateKey::new(today);
    session.set_mood(key, Mood::Neutral).unwrap();
    let after = session.visible_days(today);
    let cell = after.iter().find(|day| day.is_today).unwrap();
    assert_eq!(cell.log.and_then(|log| log.mood), Some(Mood::Neutral));
}

#[test]
fn navigation_moves_anchor_and_reset_returns_to_today() {
    let today = ymd(2024, 1, 31);
    let mut session = JournalSession::open(MemoryKeyValueStore::new(), today);

    session.advance(Direction::Next);
    assert_eq!(session.interval().anchor, ymd(2024, 2, 29));
    session.set_interval(IntervalKind::Week);
    session.advance(Direction::Previous);
    assert_eq!(session.interval().anchor, ymd(2024, 2, 22));

    session.reset_to(today);
    assert_eq!(session.interval().anchor, today);
    assert_eq!(session.interval().kind, IntervalKind::Week);
}

#[test]
fn sqlite_backed_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.sqlite3");
    let day = DateKey::new(ymd(2024, 3, 7));

    {
        let conn = open_db(&path).unwrap();
        let mut session = JournalSession::open(SqliteKeyValueStore::new(&conn), ymd(2024, 3, 7));
        session.set_mood(day, Mood::Happy).unwrap();
        session.set_feeling(day, Mood::Sad, ["tired"]).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let session = JournalSession::open(SqliteKeyValueStore::new(&conn), ymd(2024, 3, 8));
    let entry = session.store().get(day).unwrap();
    assert_eq!(entry.mood, Some(Mood::Happy));
    assert_eq!(entry.feelings.get("tired"), Some(&Mood::Sad));
}
