use moodlog_core::{
    DateKey, KeyValueStore, LogStore, MemoryKeyValueStore, Mood, StoreError, RECORDS_KEY,
};
use serde_json::json;
use std::collections::BTreeMap;

fn key(raw: &str) -> DateKey {
    raw.parse().unwrap()
}

#[test]
fn latest_mood_wins_and_feelings_survive() {
    let day = key("2024-03-07");
    let store = LogStore::new()
        .set_feeling(day, Mood::Neutral, ["calm"])
        .set_mood(day, Mood::Happy)
        .set_mood(day, Mood::Sad);

    let entry = store.get(day).unwrap();
    assert_eq!(entry.mood, Some(Mood::Sad));
    assert_eq!(
        entry.feelings,
        BTreeMap::from([("calm".to_string(), Mood::Neutral)])
    );
}

#[test]
fn set_feeling_then_expunge_leaves_remaining_descriptor() {
    let day = key("2024-03-07");
    let store = LogStore::new()
        .set_feeling(day, Mood::Happy, ["calm", "focused"])
        .expunge_feeling(day, "calm")
        .unwrap();

    let entry = store.get(day).unwrap();
    assert_eq!(entry.mood, None);
    assert_eq!(
        entry.feelings,
        BTreeMap::from([("focused".to_string(), Mood::Happy)])
    );
}

#[test]
fn set_feeling_overwrites_existing_descriptor_mood() {
    let day = key("2024-03-07");
    let store = LogStore::new()
        .set_feeling(day, Mood::Happy, ["tired"])
        .set_feeling(day, Mood::Sad, ["tired", ""]);

    let entry = store.get(day).unwrap();
    assert_eq!(entry.feelings.get("tired"), Some(&Mood::Sad));
    assert_eq!(entry.feelings.get(""), Some(&Mood::Sad));
}

#[test]
fn expunge_on_missing_day_fails_with_not_found() {
    let store = LogStore::new().set_mood(key("2024-03-07"), Mood::Happy);
    let err = store.expunge_feeling(key("2024-03-08"), "calm").unwrap_err();
    assert_eq!(err, StoreError::NotFound(key("2024-03-08")));
}

#[test]
fn saved_store_loads_back_equal() {
    let store = LogStore::new()
        .set_mood(key("2024-03-07"), Mood::Happy)
        .set_feeling(key("2024-03-07"), Mood::Sad, ["tired"])
        .set_feeling(key("2024-02-29"), Mood::Neutral, ["calm", "focused"])
        .expunge_feeling(key("2024-02-29"), "calm")
        .unwrap()
        .set_mood(key("1999-12-31"), Mood::Neutral);

    let kv = MemoryKeyValueStore::new();
    store.save(&kv).unwrap();

    assert_eq!(LogStore::load(&kv), store);
}

#[test]
fn load_accepts_documented_wire_format() {
    let raw = json!({
        "2024-03-07": { "mood": "happy", "feelings": { "productive": "happy", "tired": "sad" } }
    })
    .to_string();
    let kv = MemoryKeyValueStore::with_value(RECORDS_KEY, raw);

    let store = LogStore::load(&kv);
    let entry = store.get(key("2024-03-07")).unwrap();
    assert_eq!(entry.mood, Some(Mood::Happy));
    assert_eq!(entry.feelings.len(), 2);
}

#[test]
fn load_treats_missing_or_malformed_records_as_empty() {
    assert!(LogStore::load(&MemoryKeyValueStore::new()).is_empty());
    for raw in ["{oops", "\"text\"", "[]"] {
        let kv = MemoryKeyValueStore::with_value(RECORDS_KEY, raw);
        assert!(LogStore::load(&kv).is_empty(), "records {raw}");
    }
}

#[test]
fn load_rejects_day_with_invalid_mood_but_keeps_others() {
    let raw = json!({
        "2024-03-07": { "mood": "happy", "feelings": {} },
        "2024-03-08": { "mood": "happy", "feelings": { "odd": "elated" } }
    })
    .to_string();
    let kv = MemoryKeyValueStore::with_value(RECORDS_KEY, raw);

    let store = LogStore::load(&kv);
    assert_eq!(store.len(), 1);
    assert!(store.get(key("2024-03-08")).is_none());
}

#[test]
fn save_writes_records_key_only() {
    let kv = MemoryKeyValueStore::new();
    LogStore::new()
        .set_mood(key("2024-03-07"), Mood::Happy)
        .save(&kv)
        .unwrap();
    let raw = kv.read_raw(RECORDS_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"2024-03-07":{"mood":"happy","feelings":{}}}"#);
}
