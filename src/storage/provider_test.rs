use super::*;

#[test]
fn tier_for_remember_flag() {
    assert_eq!(StorageTier::for_remember(true), StorageTier::Remembered);
    assert_eq!(StorageTier::for_remember(false), StorageTier::Ephemeral);
}

#[test]
fn null_storage_is_unavailable_and_forgets_everything() {
    let store = NullStorage;
    store.set("k", "v");
    assert!(!store.is_available());
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let view = store.clone();
    store.set("k", "v");
    assert_eq!(view.get("k").as_deref(), Some("v"));
    view.remove("k");
    assert_eq!(store.get("k"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_without_hydrate() {
    let store = BrowserStorage::new(StorageTier::Remembered);
    store.set("k", "v");
    assert!(!store.is_available());
    assert_eq!(store.get("k"), None);
}
