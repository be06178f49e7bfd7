use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_returns_stored_value() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("theme"), None);

    storage.set("theme", "dark");
    assert_eq!(storage.get("theme"), Some("dark".to_owned()));
}

#[test]
fn memory_storage_remove_clears_value() {
    let storage = MemoryStorage::default();
    storage.set(ACCESS_TOKEN_KEY, "t1");
    storage.remove(ACCESS_TOKEN_KEY);
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
}

#[test]
fn memory_storage_overwrites_are_last_write_wins() {
    let storage = MemoryStorage::default();
    storage.set("theme", "dark");
    storage.set("theme", "forest");
    assert_eq!(storage.get("theme"), Some("forest".to_owned()));
}

#[test]
fn memory_storage_clone_shares_entries() {
    let storage = MemoryStorage::default();
    let alias = storage.clone();

    storage.set(USER_ID_KEY, "u1");
    assert_eq!(alias.get(USER_ID_KEY), Some("u1".to_owned()));

    alias.remove(USER_ID_KEY);
    assert_eq!(storage.get(USER_ID_KEY), None);
}

// =============================================================
// LocalStorage (native stub)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_native_reads_nothing() {
    let storage = LocalStorage;
    storage.set("theme", "dark");
    assert_eq!(storage.get("theme"), None);
}
