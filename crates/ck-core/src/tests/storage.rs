use crate::storage::{FileStore, KeyValueStore, MemoryStore, NoopStore};

use tempfile::TempDir;

#[test]
fn given_memory_store_when_set_then_get_returns_value() {
    let store = MemoryStore::new();

    store.set("token", "abc123");

    assert_eq!(store.get("token"), Some(String::from("abc123")));
}

#[test]
fn given_memory_store_when_overwritten_then_last_write_wins() {
    let store = MemoryStore::new();

    store.set("token", "first");
    store.set("token", "second");

    assert_eq!(store.get("token"), Some(String::from("second")));
}

#[test]
fn given_memory_store_when_removed_then_get_returns_none() {
    let store = MemoryStore::new();

    store.set("token", "abc123");
    store.remove("token");

    assert_eq!(store.get("token"), None);
}

#[test]
fn given_file_store_when_set_then_value_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    FileStore::new(&path).set("token", "abc123");

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("token"), Some(String::from("abc123")));
}

#[test]
fn given_missing_file_when_read_then_empty() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("absent.json"));

    assert_eq!(store.get("token"), None);
}

#[test]
fn given_corrupt_file_when_read_then_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let store = FileStore::new(&path);

    assert_eq!(store.get("token"), None);
}

#[test]
fn given_file_store_when_removed_then_gone_after_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let store = FileStore::new(&path);
    store.set("token", "abc123");
    store.set("user", "{}");
    store.remove("token");

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("token"), None);
    assert_eq!(reopened.get("user"), Some(String::from("{}")));
}

#[test]
fn given_noop_store_when_set_then_get_returns_none() {
    let store = NoopStore;

    store.set("token", "abc123");

    assert_eq!(store.get("token"), None);
}
