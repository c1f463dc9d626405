//! Position type and its arithmetic

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::BufferId;

/// A cursor naming one slot of a vector's buffer
///
/// Obtained from `Vector::begin()`/`end()` or by arithmetic on another
/// position. Positions are plain values: they borrow nothing, so they can be
/// handed back to `insert`/`erase` on the vector that issued them.
///
/// ## Equality and ordering
/// Two positions are equal when they name the same slot of the same buffer.
/// Ordering follows slot order and is only defined within one buffer;
/// `partial_cmp` returns `None` for positions over different buffers, so all
/// four relational operators are `false` for them.
///
/// To compare the *values* two positions point at, use
/// `Vector::values_equal` or [`Cursor::value_eq`](super::Cursor::value_eq).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    buffer: BufferId,
    offset: isize,
}

impl Position {
    pub(crate) fn new(buffer: BufferId, offset: isize) -> Self {
        Self { buffer, offset }
    }

    pub(crate) fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// True for a default-constructed position (not issued by any vector)
    pub fn is_null(&self) -> bool {
        self.buffer.is_null()
    }

    /// Signed slot offset from the start of the buffer
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// True when both positions were issued from the same buffer
    pub fn same_buffer(&self, other: &Position) -> bool {
        self.buffer == other.buffer
    }

    /// Signed distance `other - self`, or `None` across buffers
    pub fn distance_to(&self, other: &Position) -> Option<isize> {
        self.same_buffer(other).then(|| other.offset - self.offset)
    }

    /// Pre-increment: step forward and return the updated position
    pub fn increment(&mut self) -> Position {
        self.offset += 1;
        *self
    }

    /// Post-increment: step forward and return the prior position
    pub fn post_increment(&mut self) -> Position {
        let prior = *self;
        self.offset += 1;
        prior
    }

    /// Pre-decrement: step back and return the updated position
    pub fn decrement(&mut self) -> Position {
        self.offset -= 1;
        *self
    }

    /// Post-decrement: step back and return the prior position
    pub fn post_decrement(&mut self) -> Position {
        let prior = *self;
        self.offset -= 1;
        prior
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_buffer(other) {
            return None;
        }
        Some(self.offset.cmp(&other.offset))
    }
}

// =============================================================================
// Offset Arithmetic
// =============================================================================

impl AddAssign<isize> for Position {
    fn add_assign(&mut self, offset: isize) {
        self.offset += offset;
    }
}

impl SubAssign<isize> for Position {
    fn sub_assign(&mut self, offset: isize) {
        self.offset -= offset;
    }
}

impl Add<isize> for Position {
    type Output = Position;

    fn add(mut self, offset: isize) -> Position {
        self += offset;
        self
    }
}

impl Add<Position> for isize {
    type Output = Position;

    fn add(self, position: Position) -> Position {
        position + self
    }
}

impl Sub<isize> for Position {
    type Output = Position;

    fn sub(mut self, offset: isize) -> Position {
        self -= offset;
        self
    }
}

/// Signed distance between two positions over the same buffer
///
/// Panics when the positions are over different buffers; use
/// [`Position::distance_to`] when that can happen.
impl Sub<Position> for Position {
    type Output = isize;

    fn sub(self, rhs: Position) -> isize {
        assert!(
            self.same_buffer(&rhs),
            "distance between positions over different buffers"
        );
        self.offset - rhs.offset
    }
}
