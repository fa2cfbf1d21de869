//! History persisted through the file-backed store

use std::sync::Arc;

use native_translator::history::HISTORY_KEY;
use native_translator::{FileStore, HistoryStore, KeyValueStore, Language, NewHistoryEntry};

fn entry(text: &str) -> NewHistoryEntry {
    NewHistoryEntry::new(
        text,
        text.to_uppercase(),
        Language::find("de").unwrap(),
        Language::find("nl").unwrap(),
        Some("travel"),
    )
}

#[test]
fn test_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut history = HistoryStore::open(store);
    history.record(entry("hallo"));
    history.record(entry("danke"));
    history.record(entry("hallo"));
    let expected = history.entries().to_vec();

    let reopened = HistoryStore::open(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(reopened.entries(), expected.as_slice());
    assert_eq!(reopened.entries()[0].source_text, "hallo");
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_blob_is_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::open(dir.path()).unwrap());

    let mut history = HistoryStore::open(store.clone());
    history.record(entry("bitte"));

    let bytes = store.get(HISTORY_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["sourceText"], "bitte");
    assert_eq!(items[0]["targetLanguageCode"], "nl");
}

#[test]
fn test_truncated_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HISTORY_KEY), b"[{\"id\":").unwrap();

    let history = HistoryStore::open(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert!(history.is_empty());
}
