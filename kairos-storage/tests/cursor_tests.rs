//! # EventCursor Tests
//!
//! Cursor state machine, in-place removal and live-view behaviour.

use kairos_core::{Error, Event};
use kairos_storage::EventStore;

fn store_with_range(event_type: &str, count: i64) -> EventStore {
    let store = EventStore::new();
    for i in 0..count {
        store.insert(Event::new(event_type, i));
    }
    store
}

#[test]
fn test_query_yields_window_in_order() {
    let store = store_with_range("X", 20);
    let mut cursor = store.query("X", 5, 18).unwrap();

    for expected in 5..18 {
        assert!(cursor.move_next());
        assert_eq!(cursor.current().unwrap().timestamp(), expected);
    }
    assert!(!cursor.move_next());
}

#[test]
fn test_current_before_move_next_fails() {
    let store = store_with_range("some_type", 20);
    let cursor = store.query("some_type", 5, 20).unwrap();

    assert_eq!(cursor.current(), Err(Error::NoCurrentElement));
}

#[test]
fn test_exhaustion_is_sticky() {
    let store = store_with_range("X", 3);
    let mut cursor = store.query("X", 0, 3).unwrap();

    while cursor.move_next() {}

    for _ in 0..5 {
        assert!(!cursor.move_next());
    }
    assert_eq!(cursor.current(), Err(Error::NoCurrentElement));
    assert_eq!(cursor.remove(), Err(Error::NoCurrentElement));
    assert_eq!(store.size(), 3);
}

#[test]
fn test_remove_then_requery() {
    let store = store_with_range("X", 20);

    let mut cursor = store.query("X", 5, 20).unwrap();
    assert!(cursor.move_next());
    assert_eq!(cursor.current().unwrap().timestamp(), 5);
    cursor.remove().unwrap();

    let mut second = store.query("X", 5, 20).unwrap();
    assert!(second.move_next());
    assert_eq!(second.current().unwrap().timestamp(), 6);
    assert_eq!(store.size(), 19);
}

#[test]
fn test_current_after_remove_fails() {
    let store = store_with_range("X", 5);
    let mut cursor = store.query("X", 0, 5).unwrap();

    assert!(cursor.move_next());
    cursor.remove().unwrap();

    assert_eq!(cursor.current(), Err(Error::NoCurrentElement));
    assert_eq!(cursor.remove(), Err(Error::NoCurrentElement));
    assert_eq!(store.size(), 4);
}

#[test]
fn test_iteration_continues_after_remove() {
    let store = store_with_range("X", 10);
    let mut cursor = store.query("X", 0, 10).unwrap();

    let mut kept = Vec::new();
    while cursor.move_next() {
        let ts = cursor.current().unwrap().timestamp();
        if ts % 2 == 0 {
            cursor.remove().unwrap();
        } else {
            kept.push(ts);
        }
    }

    assert_eq!(kept, vec![1, 3, 5, 7, 9]);
    let remaining: Vec<i64> = store
        .query("X", 0, 10)
        .unwrap()
        .map(|event| event.timestamp())
        .collect();
    assert_eq!(remaining, kept);
    assert_eq!(store.metrics().snapshot().events_removed, 5);
}

#[test]
fn test_removing_last_event_drops_type() {
    let store = EventStore::new();
    store.insert(Event::new("solo", 1));
    store.insert(Event::new("other", 1));

    let mut cursor = store.query("solo", 0, 10).unwrap();
    assert!(cursor.move_next());
    cursor.remove().unwrap();

    assert!(!store.contains_type("solo"));
    assert!(matches!(store.query("solo", 0, 10), Err(Error::NotFound { .. })));
    assert!(!cursor.move_next());
    assert_eq!(store.size(), 1);
}

#[test]
fn test_remove_after_remove_all_fails() {
    let store = store_with_range("X", 5);
    let mut cursor = store.query("X", 0, 5).unwrap();
    assert!(cursor.move_next());

    store.remove_all("X").unwrap();

    assert_eq!(cursor.remove(), Err(Error::not_found("X")));
    // The failed removal leaves the cursor positioned
    assert_eq!(cursor.current().unwrap().timestamp(), 0);
}

#[test]
fn test_live_view_sees_inserts_ahead() {
    let store = EventStore::new();
    for ts in [1, 5, 9] {
        store.insert(Event::new("live", ts));
    }

    let mut cursor = store.query("live", 0, 10).unwrap();
    assert!(cursor.move_next());
    assert_eq!(cursor.current().unwrap().timestamp(), 1);

    store.insert(Event::new("live", 3));
    // Outside the window, never visible
    store.insert(Event::new("live", 10));
    // Behind the cursor, never revisited
    store.insert(Event::new("live", 0));

    let rest: Vec<i64> = cursor.map(|event| event.timestamp()).collect();
    assert_eq!(rest, vec![3, 5, 9]);
}

#[test]
fn test_live_view_skips_removed_ahead() {
    let store = store_with_range("live", 5);

    let mut cursor = store.query("live", 0, 5).unwrap();
    assert!(cursor.move_next());

    let mut other = store.query("live", 2, 3).unwrap();
    assert!(other.move_next());
    other.remove().unwrap();
    other.close();

    let rest: Vec<i64> = cursor.map(|event| event.timestamp()).collect();
    assert_eq!(rest, vec![1, 3, 4]);
}

#[test]
fn test_cursor_as_iterator() {
    let store = store_with_range("iter", 6);
    let cursor = store.query("iter", 2, 6).unwrap();

    assert_eq!(cursor.event_type(), "iter");
    assert_eq!(cursor.range().start(), 2);
    assert_eq!(cursor.range().end(), 6);

    let events: Vec<Event> = cursor.collect();
    assert_eq!(
        events,
        (2..6).map(|ts| Event::new("iter", ts)).collect::<Vec<_>>()
    );
}

#[test]
fn test_close_leaves_store_untouched() {
    let store = store_with_range("X", 4);
    let mut cursor = store.query("X", 0, 4).unwrap();
    assert!(cursor.move_next());
    cursor.close();

    assert_eq!(store.size(), 4);
}

#[test]
fn test_stale_cursor_removes_by_type_and_timestamp() {
    let store = store_with_range("X", 3);
    let mut stale = store.query("X", 0, 3).unwrap();
    assert!(stale.move_next());

    // The type is dropped and rebuilt behind the cursor's back
    store.remove_all("X").unwrap();
    store.insert(Event::new("X", 0));

    // Removal is keyed by (type, timestamp), so it hits the new event
    assert_eq!(stale.remove(), Ok(()));
    assert!(!store.contains_type("X"));

    // The cursor keeps reading the partition it was opened on
    let rest: Vec<i64> = stale.map(|event| event.timestamp()).collect();
    assert_eq!(rest, vec![1, 2]);
}

#[test]
fn test_second_removal_of_same_timestamp_is_ok() {
    let store = store_with_range("X", 3);
    let mut first = store.query("X", 0, 3).unwrap();
    let mut second = store.query("X", 0, 3).unwrap();
    assert!(first.move_next());
    assert!(second.move_next());

    assert_eq!(first.remove(), Ok(()));
    assert_eq!(second.remove(), Ok(()));

    assert_eq!(store.size(), 2);
    // Only the removal that found the event is counted
    assert_eq!(store.metrics().snapshot().events_removed, 1);
    assert_eq!(second.current(), Err(Error::NoCurrentElement));
}
