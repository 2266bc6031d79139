use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use ticked::error::StorageFailure;
use ticked::store::{JsonFileBackend, TaskStore};

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

fn store_at(dir: &TempDir) -> TaskStore {
    TaskStore::new(Box::new(JsonFileBackend::new(data_path(dir))))
}

fn titles(store: &mut TaskStore) -> Vec<String> {
    store
        .fetch_all()
        .unwrap()
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    assert_eq!(store.fetch_all().unwrap(), vec![]);
}

#[test]
fn created_tasks_append_after_prior_entries() {
    let dir = TempDir::new().unwrap();

    let mut store = store_at(&dir);
    store.create("Buy milk");
    store.persist().unwrap();

    // A later session appends, never reorders.
    let mut store = store_at(&dir);
    store.fetch_all().unwrap();
    store.create("Call mom");
    store.persist().unwrap();

    let mut fresh = store_at(&dir);
    assert_eq!(titles(&mut fresh), ["Buy milk", "Call mom"]);
}

#[test]
fn update_changes_only_the_target_task() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    let first = store.create("Buy milk");
    store.create("Call mom");
    store.persist().unwrap();

    assert!(store.update(&first.id, "Buy oat milk").is_some());
    store.persist().unwrap();

    let mut fresh = store_at(&dir);
    let tasks = fresh.fetch_all().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, first.id);
    assert_eq!(tasks[0].title, "Buy oat milk");
    assert_eq!(tasks[1].title, "Call mom");
}

#[test]
fn delete_removes_exactly_that_task() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    let first = store.create("Buy milk");
    store.create("Call mom");
    store.persist().unwrap();

    let removed = store.delete(&first.id).unwrap();
    assert_eq!(removed.id, first.id);
    store.persist().unwrap();

    let mut fresh = store_at(&dir);
    let tasks = fresh.fetch_all().unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks.iter().all(|t| t.id != first.id));
}

#[test]
fn staged_mutations_are_invisible_until_persist() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    store.create("Draft");
    assert!(store.is_dirty());

    let mut fresh = store_at(&dir);
    assert_eq!(fresh.fetch_all().unwrap(), vec![]);

    store.persist().unwrap();
    assert!(!store.is_dirty());
    assert_eq!(titles(&mut fresh), ["Draft"]);
}

#[test]
fn persist_with_nothing_pending_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    store.create("Buy milk");
    store.persist().unwrap();

    let before = fs::read_to_string(data_path(&dir)).unwrap();
    store.persist().unwrap();
    let after = fs::read_to_string(data_path(&dir)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn rollback_discards_staged_mutations() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    let kept = store.create("Keep me");
    store.persist().unwrap();

    store.create("Discard me");
    store.update(&kept.id, "Mangled");
    store.rollback();
    assert!(!store.is_dirty());
    store.persist().unwrap();

    let mut fresh = store_at(&dir);
    assert_eq!(titles(&mut fresh), ["Keep me"]);
}

#[test]
fn unknown_id_stages_nothing() {
    let dir = TempDir::new().unwrap();
    let mut store = store_at(&dir);
    store.create("Buy milk");
    store.persist().unwrap();

    assert!(store.update("no-such-id", "x").is_none());
    assert!(store.delete("no-such-id").is_none());
    assert!(!store.is_dirty());
}

#[test]
fn corrupt_file_surfaces_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(data_path(&dir), "not json at all").unwrap();

    let mut store = store_at(&dir);
    let err = store.fetch_all().unwrap_err();
    assert!(matches!(err, StorageFailure::Corrupt(_)), "{:?}", err);
}
