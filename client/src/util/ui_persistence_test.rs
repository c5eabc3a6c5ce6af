use super::*;
use session::MemoryStorage;

#[test]
fn saved_period_loads_back() {
    let storage = MemoryStorage::new();
    save_period(&storage, 3, 2024);
    assert_eq!(load_period(&storage), Some((3, 2024)));
    assert_eq!(storage.get(DASHBOARD_PERIOD_KEY).as_deref(), Some(r#"{"month":3,"year":2024}"#));
}

#[test]
fn missing_period_loads_none() {
    assert_eq!(load_period(&MemoryStorage::new()), None);
}

#[test]
fn malformed_or_invalid_period_loads_none() {
    let storage = MemoryStorage::new();
    storage.set(DASHBOARD_PERIOD_KEY, "not json").unwrap();
    assert_eq!(load_period(&storage), None);
    storage.set(DASHBOARD_PERIOD_KEY, r#"{"month":13,"year":2024}"#).unwrap();
    assert_eq!(load_period(&storage), None);
}
