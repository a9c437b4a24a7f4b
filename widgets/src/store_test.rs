use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::new().get("app-theme"), None);
}

#[test]
fn memory_store_overwrites_values() {
    let mut store = MemoryStore::with("app-theme", "light");
    store.set("app-theme", "dark");
    assert_eq!(store.get("app-theme").as_deref(), Some("dark"));
    assert_eq!(store.get("other"), None);
}
