use crate::capabilities::storage::load_access_token;
use crate::capabilities::{CredentialStorage, FileCredentialStorage, MemoryCredentialStorage};
use crate::error::StorageError;

use tempfile::TempDir;

#[test]
fn given_memory_storage_when_items_set_and_removed_then_reflected() {
    let storage = MemoryCredentialStorage::new();
    let shared = storage.clone();

    storage.set_item("access_token", "abc").unwrap();
    assert!(shared.contains("access_token"));
    assert_eq!(shared.get_item("access_token").unwrap().as_deref(), Some("abc"));

    shared.remove_item("access_token").unwrap();
    assert!(!storage.contains("access_token"));
}

/// **VALUE**: The token survives a process restart.
///
/// **BUG THIS CATCHES**: Would catch the file being rewritten without the other keys, or
/// the temp file left in place of the real one.
#[test]
fn given_file_storage_when_reopened_then_items_persist() {
    // GIVEN
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session").join("storage.json");
    let storage = FileCredentialStorage::new(&path);
    storage.set_item("access_token", "abc").unwrap();
    storage.set_item("locale", "en").unwrap();

    // WHEN: Removing one key and reopening
    storage.remove_item("access_token").unwrap();
    let reopened = FileCredentialStorage::new(&path);

    // THEN
    assert_eq!(reopened.get_item("access_token").unwrap(), None);
    assert_eq!(reopened.get_item("locale").unwrap().as_deref(), Some("en"));
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn given_missing_key_when_removed_then_ok() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileCredentialStorage::new(temp_dir.path().join("storage.json"));

    assert!(storage.remove_item("access_token").is_ok());
    assert!(!storage.path().exists(), "Nothing to write");
}

#[test]
fn given_corrupted_file_when_reading_then_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let result = FileCredentialStorage::new(&path).get_item("access_token");

    assert!(matches!(result, Err(StorageError::ParseError { .. })));
}

#[test]
fn given_blank_token_when_loading_then_treated_as_absent() {
    let storage = MemoryCredentialStorage::new();
    storage.set_item("access_token", "   ").unwrap();

    assert!(load_access_token(&storage, "access_token").unwrap().is_none());

    storage.set_item("access_token", "secret").unwrap();
    let token = load_access_token(&storage, "access_token").unwrap().unwrap();
    assert_eq!(token.bearer(), "Bearer secret");
}
