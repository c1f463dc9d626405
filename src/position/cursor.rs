//! Borrowing read cursor
//!
//! A [`Position`] paired with a shared borrow of the buffer it points into,
//! so it can be dereferenced directly.

use std::ops::Deref;

use super::{BufferId, Position};

/// A position that can be dereferenced
///
/// Created by `Vector::cursor`. The cursor sees every slot of the buffer
/// (`0..capacity`), like a raw position does; slots past `size` hold
/// default values.
pub struct Cursor<'a, T> {
    slots: &'a [T],
    /// Id of the buffer `slots` belongs to
    origin: BufferId,
    buffer: BufferId,
    offset: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [T], origin: BufferId, position: Position) -> Self {
        Self {
            slots,
            origin,
            buffer: position.buffer(),
            offset: position.offset(),
        }
    }

    /// The detached position (usable with `insert`/`erase` once the borrow ends)
    pub fn position(&self) -> Position {
        Position::new(self.buffer, self.offset)
    }

    /// Whether the position was issued by the buffer this cursor reads
    pub fn is_current(&self) -> bool {
        !self.buffer.is_null() && self.buffer == self.origin
    }

    /// The slot value, or `None` when null, stale, foreign or outside the buffer
    pub fn get(&self) -> Option<&'a T> {
        if !self.is_current() || self.offset < 0 {
            return None;
        }
        self.slots.get(self.offset as usize)
    }

    /// Step forward one slot
    pub fn move_next(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Step back one slot
    pub fn move_prev(&mut self) -> &mut Self {
        self.offset -= 1;
        self
    }

    /// Move by a signed number of slots
    pub fn seek(&mut self, delta: isize) -> &mut Self {
        self.offset += delta;
        self
    }

    /// Compare the values under two cursors
    ///
    /// Panics if either cursor cannot be dereferenced.
    pub fn value_eq(&self, other: &Cursor<'_, T>) -> bool
    where
        T: PartialEq,
    {
        **self == **other
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        assert!(!self.buffer.is_null(), "dereferenced a null position");
        assert!(
            self.buffer == self.origin,
            "dereferenced a position issued by another or a reallocated buffer"
        );
        match self.get() {
            Some(value) => value,
            None => panic!(
                "cursor offset {} is outside a buffer of {} slots",
                self.offset,
                self.slots.len()
            ),
        }
    }
}

impl<T> std::fmt::Debug for Cursor<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(value) => write!(f, "[@ {}: {:?} ]", self.offset, value),
            None => write!(f, "[@ {}: - ]", self.offset),
        }
    }
}
