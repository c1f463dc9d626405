//! Vector Display Tests
//!
//! Tests verify the diagnostic rendering of the whole slot buffer and the
//! list-style Debug output.

use seqvec::Vector;

#[test]
fn test_display_empty_unallocated() {
    let v: Vector<i32> = Vector::new();
    assert_eq!(v.to_string(), "{ }, size=0, capacity=0");
}

#[test]
fn test_display_full_buffer_has_no_marker() {
    let v = Vector::from([1, 2, 3]);
    assert_eq!(v.to_string(), "{ 1 2 3 }, size=3, capacity=3");
}

#[test]
fn test_display_marks_unused_slots() {
    let mut v = Vector::from([1, 2, 3]);
    v.reserve(5);
    assert_eq!(v.to_string(), "{ 1 2 3 | 0 0 }, size=3, capacity=5");
}

#[test]
fn test_display_after_clear() {
    let mut v = Vector::from([7, 8]);
    v.clear();
    assert_eq!(v.to_string(), "{ | 0 0 }, size=0, capacity=2");
}

#[test]
fn test_display_after_erase_resets_vacated_slot() {
    let mut v = Vector::from([1, 2, 3]);
    v.erase(v.begin()).unwrap();
    assert_eq!(v.to_string(), "{ 2 3 | 0 }, size=2, capacity=3");
}

#[test]
fn test_debug_lists_live_elements_only() {
    let mut v = Vector::from([1, 2]);
    v.reserve(8);
    assert_eq!(format!("{:?}", v), "[1, 2]");
}
