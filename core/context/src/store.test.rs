use super::*;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn generate_context_id_is_deterministic_and_seven_hex_chars() {
    let id_a = generate_context_id("hello world");
    let id_b = generate_context_id("hello world");
    assert_eq!(id_a, id_b);
    assert_eq!(id_a.len(), ID_PREFIX_LEN);
    assert!(id_a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_context_id_differs_for_different_content() {
    assert_ne!(generate_context_id("a"), generate_context_id("b"));
}

#[test]
fn save_then_load_round_trips_body_and_meta() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());

    let meta = store.save("<context/>", "fix bug", vec!["src/lib.rs".to_string()], 42, 1000, false).unwrap();

    assert!(store.exists(&meta.id));
    assert_eq!(store.load(&meta.id).unwrap(), "<context/>");
    let loaded_meta = store.load_meta(&meta.id).unwrap();
    assert_eq!(loaded_meta.task, "fix bug");
    assert_eq!(loaded_meta.tokens, 42);
    assert_eq!(loaded_meta.pinned, None);
}

#[test]
fn load_missing_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let err = store.load("abc1234").unwrap_err();
    assert!(matches!(err, ContextError::NotFound { .. }));
}

#[test]
fn find_by_prefix_resolves_unique_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let meta = store.save("unique body", "task", vec![], 10, 100, false).unwrap();

    let found = store.find_by_prefix(&meta.id[..3]).unwrap();
    assert_eq!(found.unwrap().id, meta.id);
}

#[test]
fn find_by_prefix_ambiguous_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    // Craft two bodies whose ids happen to share a prefix isn't
    // guaranteed by content alone, so fake it by saving one entry and
    // probing with an empty prefix, which matches everything once more
    // than one entry exists.
    store.save("body one", "task a", vec![], 1, 10, false).unwrap();
    store.save("body two", "task b", vec![], 1, 10, false).unwrap();

    let err = store.find_by_prefix("").unwrap_err();
    assert!(matches!(err, ContextError::AmbiguousPrefix { .. }));
}

#[test]
fn list_orders_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let first = store.save("first", "a", vec![], 1, 10, false).unwrap();
    sleep(Duration::from_millis(5));
    let second = store.save("second", "b", vec![], 1, 10, false).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn pin_and_unpin_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let meta = store.save("body", "task", vec![], 1, 10, false).unwrap();

    let pinned = store.pin(&meta.id).unwrap();
    assert_eq!(pinned.pinned, Some(true));

    let unpinned = store.unpin(&meta.id).unwrap();
    assert_eq!(unpinned.pinned, None);
}

#[test]
fn cleanup_never_deletes_pinned_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let pinned_meta = store.save("keep me", "task", vec![], 1, 10, true).unwrap();
    store.save("drop me", "task", vec![], 1, 10, false).unwrap();

    let removed = store.cleanup(0, 0).unwrap();
    assert_eq!(removed, 1);
    assert!(store.exists(&pinned_meta.id));
}

#[test]
fn cleanup_respects_max_count_among_unpinned() {
    let dir = tempfile::tempdir().unwrap();
    let store = ContextStore::new(dir.path());
    let oldest = store.save("oldest", "task", vec![], 1, 10, false).unwrap();
    sleep(Duration::from_millis(5));
    let newest = store.save("newest", "task", vec![], 1, 10, false).unwrap();

    let removed = store.cleanup(i64::MAX, 1).unwrap();
    assert_eq!(removed, 1);
    assert!(store.exists(&newest.id));
    assert!(!store.exists(&oldest.id));
}
