//! In-place shift algorithms
//!
//! Both work element by element with `swap`, so no element is cloned and the
//! spare slots just trade places with the moved ones. O(len - at).

/// Move `slots[at..len]` right by `count`.
///
/// Afterwards `slots[at..at + count]` holds the spare slots that used to sit
/// in `slots[len..len + count]`, ready to be overwritten.
///
/// Requires `at <= len` and `len + count <= slots.len()`.
pub(super) fn open_gap<T>(slots: &mut [T], at: usize, len: usize, count: usize) {
    debug_assert!(at <= len && len + count <= slots.len());
    if count == 0 {
        return;
    }
    let mut i = len;
    while i > at {
        i -= 1;
        slots.swap(i, i + count);
    }
}

/// Move `slots[at + count..len]` left by `count`.
///
/// The `count` elements that were at `slots[at..at + count]` end up in
/// `slots[len - count..len]` for the caller to drop.
///
/// Requires `at + count <= len <= slots.len()`.
pub(super) fn close_gap<T>(slots: &mut [T], at: usize, len: usize, count: usize) {
    debug_assert!(at + count <= len && len <= slots.len());
    if count == 0 {
        return;
    }
    for i in at..len - count {
        slots.swap(i, i + count);
    }
}
