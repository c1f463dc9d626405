//! Element access
//!
//! Two access paths with different contracts:
//! - Checked: `at`, `front`, `back` return `Err(OutOfRange)` instead of
//!   touching anything outside `0..len()`.
//! - Unchecked: `vector[idx]` addresses the raw slot buffer. There is no
//!   check against `len()`; an index in `len()..capacity()` reads a
//!   value-initialized slot, and only an index past `capacity()` panics.

use std::ops::{Index, IndexMut};

use crate::error::{Result, SeqVecError};
use crate::position::{Cursor, Position};

use super::storage::Vector;

impl<T> Vector<T> {
    // =========================================================================
    // Checked Access
    // =========================================================================

    /// Element at `index`, or out-of-range when `index >= len()`
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.buffer().slots()[index])
    }

    /// Mutable element at `index`, or out-of-range when `index >= len()`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.buffer_mut().slots_mut()[index])
    }

    /// Element at `index`, or `None` when `index >= len()`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data().get(index)
    }

    pub fn front(&self) -> Result<&T> {
        self.data()
            .first()
            .ok_or_else(|| SeqVecError::out_of_range("front", "the first element of an empty vector"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data_mut()
            .first_mut()
            .ok_or_else(|| SeqVecError::out_of_range("front", "the first element of an empty vector"))
    }

    pub fn back(&self) -> Result<&T> {
        self.data()
            .last()
            .ok_or_else(|| SeqVecError::out_of_range("back", "the last element of an empty vector"))
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data_mut()
            .last_mut()
            .ok_or_else(|| SeqVecError::out_of_range("back", "the last element of an empty vector"))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SeqVecError::out_of_range(
                "at",
                format!("index {} of a vector with size {}", index, self.len()),
            ));
        }
        Ok(())
    }

    // =========================================================================
    // Raw Data
    // =========================================================================

    /// The live elements as one contiguous slice
    pub fn data(&self) -> &[T] {
        &self.buffer().slots()[..self.len()]
    }

    /// The live elements as one contiguous mutable slice
    pub fn data_mut(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.buffer_mut().slots_mut()[..len]
    }

    /// Pointer to the first slot of the buffer
    ///
    /// Invalidated by any reallocation.
    pub fn as_ptr(&self) -> *const T {
        self.buffer().slots().as_ptr()
    }

    /// Mutable pointer to the first slot of the buffer
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer_mut().slots_mut().as_mut_ptr()
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    /// Borrowing cursor at `position`
    pub fn cursor(&self, position: Position) -> Cursor<'_, T> {
        let buffer = self.buffer();
        Cursor::new(buffer.slots(), buffer.id(), position)
    }

    /// Compare the values at two positions (not the positions themselves)
    ///
    /// Panics under the same conditions as `vector[position]`.
    pub fn values_equal(&self, a: Position, b: Position) -> bool
    where
        T: PartialEq,
    {
        self[a] == self[b]
    }

    /// Slot index for dereferencing `position`; panics when it cannot be
    fn slot_index(&self, position: Position) -> usize {
        assert!(!position.is_null(), "dereferenced a null position");
        assert!(
            position.buffer() == self.buffer().id(),
            "dereferenced a position issued by another or a reallocated buffer"
        );
        assert!(
            position.offset() >= 0,
            "dereferenced position {} before the start of the buffer",
            position.offset()
        );
        position.offset() as usize
    }
}

// =============================================================================
// Index Operators
// =============================================================================

/// Unchecked access: no check against `len()` (see module docs)
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buffer().slots()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer_mut().slots_mut()[index]
    }
}

/// Dereference a position issued by this vector's current buffer
impl<T> Index<Position> for Vector<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        let index = self.slot_index(position);
        &self.buffer().slots()[index]
    }
}

impl<T> IndexMut<Position> for Vector<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        let index = self.slot_index(position);
        &mut self.buffer_mut().slots_mut()[index]
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Equal when sizes match and live elements are pairwise equal; capacity
/// plays no part.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq> Eq for Vector<T> {}
