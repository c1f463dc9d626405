//! Vector modifiers
//!
//! push/pop at both ends, positional insert/erase, assign, clear.
//!
//! Every fallible operation validates its positions before touching the
//! buffer, so a rejected call leaves the vector exactly as it was.

use crate::error::Result;
use crate::position::Position;

use super::buffer::Buffer;
use super::shift::{close_gap, open_gap};
use super::storage::Vector;

impl<T: Default> Vector<T> {
    // =========================================================================
    // Push / Pop
    // =========================================================================

    /// Append an element, growing per the policy when full
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one("push_back");
        let len = self.len();
        self.buffer_mut().slots_mut()[len] = value;
        self.set_len(len + 1);
    }

    /// Prepend an element
    ///
    /// O(n): every live element shifts one slot right first.
    pub fn push_front(&mut self, value: T) {
        self.grow_for_one("push_front");
        let len = self.len();
        let slots = self.buffer_mut().slots_mut();
        open_gap(slots, 0, len, 1);
        slots[0] = value;
        self.set_len(len + 1);
    }

    /// Remove and return the last element; `None` when empty
    pub fn pop_back(&mut self) -> Option<T> {
        let len = self.len().checked_sub(1)?;
        let value = std::mem::take(&mut self.buffer_mut().slots_mut()[len]);
        self.set_len(len);
        Some(value)
    }

    /// Remove and return the first element; `None` when empty
    ///
    /// O(n): the remaining elements shift one slot left.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        let slots = self.buffer_mut().slots_mut();
        let value = std::mem::take(&mut slots[0]);
        close_gap(slots, 0, len, 1);
        self.set_len(len - 1);
        Some(value)
    }

    /// Drop all live elements; capacity is unchanged
    pub fn clear(&mut self) {
        let len = self.len();
        self.reset_slots(0, len);
        self.set_len(0);
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Insert `value` before `position`
    ///
    /// `position` must lie in `[begin(), end()]` of the current buffer.
    /// Returns the position of the inserted element, which refers to the new
    /// buffer if the insert had to grow.
    pub fn insert(&mut self, position: Position, value: T) -> Result<Position> {
        let at = self.checked_slot(position, "insert", true)?;
        self.grow_for_one("insert");

        let len = self.len();
        let slots = self.buffer_mut().slots_mut();
        open_gap(slots, at, len, 1);
        slots[at] = value;
        self.set_len(len + 1);

        Ok(self.begin() + at as isize)
    }

    /// Insert every element of `items`, in order, before `position`
    ///
    /// Grows to `capacity() + k` when the `k` new elements do not fit.
    /// Returns the position of the first inserted element. O(n + k).
    pub fn insert_iter<I>(&mut self, position: Position, items: I) -> Result<Position>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let at = self.checked_slot(position, "insert", true)?;
        let items = items.into_iter();
        let count = items.len();

        if self.len() + count > self.capacity() {
            let target = self.capacity() + count;
            self.relocate(target, "insert");
        }

        let len = self.len();
        let slots = self.buffer_mut().slots_mut();
        open_gap(slots, at, len, count);
        let mut written = 0;
        for (slot, item) in slots[at..at + count].iter_mut().zip(items) {
            *slot = item;
            written += 1;
        }
        // A short iterator leaves part of the gap unfilled
        close_gap(slots, at + written, len + count, count - written);
        self.set_len(len + written);

        Ok(self.begin() + at as isize)
    }

    // =========================================================================
    // Erase
    // =========================================================================

    /// Remove the element at `position`
    ///
    /// `position` must lie in `[begin(), end())`. Returns `position`, which
    /// now names the element that followed the removed one.
    pub fn erase(&mut self, position: Position) -> Result<Position> {
        let at = self.checked_slot(position, "erase", false)?;
        let len = self.len();
        close_gap(self.buffer_mut().slots_mut(), at, len, 1);
        self.reset_slots(len - 1, len);
        self.set_len(len - 1);
        Ok(position)
    }

    /// Remove the elements in `[first, last)`
    ///
    /// Requires `first <= last`, both within `[begin(), end()]`. Returns
    /// `first`.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<Position> {
        let (start, end) = self.checked_range(first, last, "erase")?;
        let count = end - start;
        let len = self.len();
        close_gap(self.buffer_mut().slots_mut(), start, len, count);
        self.reset_slots(len - count, len);
        self.set_len(len - count);

        tracing::trace!(start, count, len = len - count, "erased range");
        Ok(first)
    }

    // =========================================================================
    // Assign
    // =========================================================================

    /// Replace the contents with the elements of `items`
    ///
    /// Overwrites in place when they fit in the current capacity; otherwise
    /// swaps in an exact-fit buffer.
    pub fn assign_iter<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();
        let old_len = self.len();

        if count > self.capacity() {
            tracing::debug!(
                old_capacity = self.capacity(),
                new_capacity = count,
                reason = "assign",
                "reallocated vector buffer"
            );
            *self.buffer_mut() = Buffer::allocate(count);
        } else {
            tracing::trace!(count, capacity = self.capacity(), "assigning in place");
        }

        let mut written = 0;
        for (slot, item) in self.buffer_mut().slots_mut().iter_mut().zip(items) {
            *slot = item;
            written += 1;
        }
        if old_len > written {
            self.reset_slots(written, old_len);
        }
        self.set_len(written);
    }

    /// Reset `slots[start..end]` to default values, dropping what was there
    fn reset_slots(&mut self, start: usize, end: usize) {
        for slot in &mut self.buffer_mut().slots_mut()[start..end] {
            *slot = T::default();
        }
    }
}

impl<T: Default + Clone> Vector<T> {
    /// Insert a copy of `items` before `position`
    pub fn insert_slice(&mut self, position: Position, items: &[T]) -> Result<Position> {
        self.insert_iter(position, items.iter().cloned())
    }

    /// Insert a copy of `[first, last)` of `source` before `position`
    pub fn insert_range(
        &mut self,
        position: Position,
        source: &Vector<T>,
        first: Position,
        last: Position,
    ) -> Result<Position> {
        let (start, end) = source.checked_range(first, last, "insert")?;
        self.insert_slice(position, &source.data()[start..end])
    }

    /// Replace the contents with `count` copies of `value`
    pub fn assign(&mut self, count: usize, value: T) {
        self.assign_iter((0..count).map(|_| value.clone()));
    }

    /// Replace the contents with a copy of `items`
    pub fn assign_slice(&mut self, items: &[T]) {
        self.assign_iter(items.iter().cloned());
    }

    /// Replace the contents with a copy of `[first, last)` of `source`
    pub fn assign_range(
        &mut self,
        source: &Vector<T>,
        first: Position,
        last: Position,
    ) -> Result<()> {
        let (start, end) = source.checked_range(first, last, "assign")?;
        self.assign_slice(&source.data()[start..end]);
        Ok(())
    }
}
