//! Tests for draft persistence and its storage backends.
use stepform::error::StorageError;
use stepform::prelude::*;
use stepform::store::DEFAULT_STORAGE_KEY;
use std::fs;

fn sample_draft() -> DraftRecord {
    DraftRecord::from_iter([
        ("companyName", FieldValue::text("Acme")),
        ("desiredInvestment", FieldValue::Number(1234.5)),
        (
            "channelsUsed",
            FieldValue::Selection(Selection::of(&["Instagram", "Site"]).with_other("Newsletter")),
        ),
    ])
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DraftStore::new(FileStorage::new(dir.path()));

    store.save(&sample_draft());
    assert!(dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY)).exists());

    let reopened = DraftStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.load(), sample_draft());
}

#[test]
fn test_save_overwrites_previous_draft() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DraftStore::new(FileStorage::new(dir.path()));

    store.save(&sample_draft());
    let smaller = DraftRecord::from_iter([("companyName", "Beta")]);
    store.save(&smaller);

    assert_eq!(store.load(), smaller);
}

#[test]
fn test_missing_draft_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = DraftStore::new(FileStorage::new(dir.path().join("not-created-yet")));
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_draft_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    fs::write(storage.path_for(DEFAULT_STORAGE_KEY), "{ not json").unwrap();

    assert!(DraftStore::new(storage).load().is_empty());
}

#[test]
fn test_clear_removes_the_stored_draft() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let path = storage.path_for(DEFAULT_STORAGE_KEY);
    let mut store = DraftStore::new(storage);

    store.save(&sample_draft());
    store.clear();
    assert!(!path.exists());
    assert!(store.load().is_empty());

    // Clearing twice is harmless.
    store.clear();
}

#[test]
fn test_custom_key_is_isolated() {
    let storage = MemoryStorage::new();
    let mut a = DraftStore::with_key(storage.clone(), "form-a");
    let b = DraftStore::with_key(storage, "form-b");

    a.save(&sample_draft());
    assert_eq!(a.key(), "form-a");
    assert!(b.load().is_empty());
}

#[test]
fn test_memory_storage_clones_share_slots() {
    let storage = MemoryStorage::new();
    let mut store = DraftStore::new(storage.clone());
    store.save(&sample_draft());

    let raw = storage.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(DraftRecord::from_json(&raw).unwrap(), sample_draft());
}

/// A backend on which every operation fails.
struct BrokenStorage;

impl DraftStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }
}

#[test]
fn test_storage_failures_never_reach_the_caller() {
    let mut store = DraftStore::new(BrokenStorage);
    store.save(&sample_draft());
    store.clear();
    assert!(store.load().is_empty());
}

#[test]
fn test_engine_keeps_working_without_persistence() {
    let mut engine = FormEngine::builder(briefing_form().unwrap())
        .with_store(DraftStore::new(BrokenStorage))
        .build();

    engine.update("companyName", "Acme").unwrap();
    assert_eq!(engine.value("companyName"), Some(&FieldValue::text("Acme")));
    engine.reset();
    assert!(engine.draft().is_empty());
}
