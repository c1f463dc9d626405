//! Cursor and Iterator Tests
//!
//! Tests verify:
//! - Borrowing cursors: dereference, stepping, value comparison
//! - Bidirectional iteration over live elements only

use seqvec::Vector;

// =============================================================================
// Cursor Tests
// =============================================================================

#[test]
fn test_cursor_dereferences_slot() {
    let v = Vector::from([5, 6, 7]);
    let cursor = v.cursor(v.begin() + 2);
    assert_eq!(*cursor, 7);
    assert_eq!(cursor.get(), Some(&7));
}

#[test]
fn test_cursor_steps_both_ways() {
    let v = Vector::from([1, 2, 3, 4]);
    let mut cursor = v.cursor(v.begin());

    cursor.move_next().move_next();
    assert_eq!(*cursor, 3);
    cursor.move_prev();
    assert_eq!(*cursor, 2);
    cursor.seek(2);
    assert_eq!(*cursor, 4);
    assert_eq!(cursor.position(), v.end() - 1);
}

#[test]
fn test_cursor_outside_buffer_has_no_value() {
    let v = Vector::from([1, 2]);
    assert_eq!(v.cursor(v.begin() - 1).get(), None);
    assert_eq!(v.cursor(v.end()).get(), None);
}

#[test]
fn test_cursor_value_eq_compares_values() {
    let v = Vector::from([3, 9, 3]);
    let first = v.cursor(v.begin());
    let last = v.cursor(v.begin() + 2);
    let middle = v.cursor(v.begin() + 1);

    assert!(first.value_eq(&last));
    assert!(!first.value_eq(&middle));
    assert_ne!(first.position(), last.position());
}

#[test]
fn test_cursor_debug_format() {
    let v = Vector::from([42]);
    assert_eq!(format!("{:?}", v.cursor(v.begin())), "[@ 0: 42 ]");
    assert_eq!(format!("{:?}", v.cursor(v.end())), "[@ 1: - ]");
}

#[test]
#[should_panic(expected = "null position")]
fn test_cursor_null_dereference_panics() {
    let v = Vector::from([1]);
    let cursor = v.cursor(Default::default());
    let _value = *cursor;
}

#[test]
fn test_cursor_stale_position_has_no_value() {
    let mut v = Vector::from([1, 2, 3]);
    let stale = v.begin() + 1;
    v.push_back(4);

    let cursor = v.cursor(stale);
    assert!(!cursor.is_current());
    assert_eq!(cursor.get(), None);
    assert_eq!(format!("{:?}", cursor), "[@ 1: - ]");
    assert_eq!(v.cursor(v.begin() + 1).get(), Some(&2));
}

#[test]
fn test_cursor_stale_position_from_other_vector_has_no_value() {
    let v = Vector::from([1, 2, 3]);
    let other = Vector::from([100, 200, 300]);
    assert_eq!(other.cursor(v.begin() + 1).get(), None);
}

#[test]
#[should_panic(expected = "reallocated buffer")]
fn test_cursor_stale_position_dereference_panics() {
    let mut v = Vector::from([1, 2, 3]);
    let stale = v.begin();
    v.reserve(10);
    let _value = *v.cursor(stale);
}

// =============================================================================
// Iterator Tests
// =============================================================================

#[test]
fn test_iter_visits_live_elements_in_order() {
    let mut v = Vector::from([1, 2, 3]);
    v.reserve(10);
    let collected: Vec<i32> = v.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_iter_reverses() {
    let v = Vector::from([1, 2, 3]);
    let collected: Vec<i32> = v.iter().rev().copied().collect();
    assert_eq!(collected, vec![3, 2, 1]);
}

#[test]
fn test_iter_meets_in_the_middle() {
    let v = Vector::from([1, 2, 3, 4]);
    let mut iter = v.iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iter_on_empty_vector() {
    let v: Vector<u8> = Vector::new();
    assert_eq!(v.iter().next(), None);
    assert_eq!(v.iter().len(), 0);
}

#[test]
fn test_for_loop_over_reference() {
    let v = Vector::from([1, 2, 3]);
    let mut total = 0;
    for x in &v {
        total += x;
    }
    assert_eq!(total, 6);
}
