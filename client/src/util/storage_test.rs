use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get(TOKEN_KEY), None);

    storage.set(TOKEN_KEY, "t1");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));

    storage.set(TOKEN_KEY, "t2");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t2"));

    storage.remove(TOKEN_KEY);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_with_entries_seeds_values() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "abc"), (USER_KEY, "{}")]);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn removing_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("nope");
    assert!(storage.is_empty());
}

#[test]
fn shared_reference_delegates_to_inner_storage() {
    let storage = MemoryStorage::new();
    let by_ref = &storage;
    by_ref.set(USER_KEY, "x");
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("x"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_off_browser() {
    let storage = BrowserStorage;
    storage.set(TOKEN_KEY, "t1");
    assert_eq!(storage.get(TOKEN_KEY), None);
    storage.remove(TOKEN_KEY);
}
