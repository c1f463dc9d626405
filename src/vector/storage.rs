//! Vector storage
//!
//! Construction, capacity management, copying, and position bookkeeping.

use crate::config::GrowthPolicy;
use crate::error::{Result, SeqVecError};
use crate::position::{Iter, Position};

use super::buffer::Buffer;

/// A contiguous, growable sequence container
///
/// ## Ownership
/// Each `Vector` exclusively owns one slot buffer. `clone` builds a fresh
/// buffer; [`swap`] and `std::mem::swap` exchange buffers without copying.
///
/// ## Positions
/// `begin()`/`end()` hand out [`Position`]s tied to the current buffer. Any
/// reallocation (growth, `reserve`, `shrink_to_fit`, exact-fit assign)
/// replaces the buffer and makes every earlier position stale; `insert` and
/// `erase` reject stale positions with an out-of-range error.
pub struct Vector<T> {
    /// Slot buffer; `buffer.capacity()` is the vector's capacity
    buffer: Buffer<T>,

    /// Number of live elements at the front of the buffer
    len: usize,

    /// How the buffer grows when full
    policy: GrowthPolicy,
}

/// Owning iterator over the live elements of a vector
pub type IntoIter<T> = std::iter::Take<std::vec::IntoIter<T>>;

// =============================================================================
// Construction
// =============================================================================

impl<T: Default> Vector<T> {
    /// Create an empty vector (capacity 0) with the default growth policy
    pub fn new() -> Self {
        Self::from_parts(Buffer::allocate(0), 0, GrowthPolicy::default())
    }

    /// Create a vector holding `size` default-valued elements
    ///
    /// The elements are live: `len() == capacity() == size`.
    pub fn with_size(size: usize) -> Self {
        Self::from_parts(Buffer::allocate(size), size, GrowthPolicy::default())
    }

    /// Create an empty vector with a custom growth policy
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self::from_parts(Buffer::allocate(0), 0, policy))
    }
}

impl<T: Default + Clone> Vector<T> {
    /// Create a vector from the elements in `[first, last)` of `source`
    ///
    /// The new vector is exact-fit: `len() == capacity() == last - first`.
    pub fn from_range(source: &Vector<T>, first: Position, last: Position) -> Result<Self> {
        let (start, end) = source.checked_range(first, last, "from_range")?;
        Ok(Self::from(&source.data()[start..end]))
    }
}

impl<T> Vector<T> {
    pub(super) fn from_parts(buffer: Buffer<T>, len: usize, policy: GrowthPolicy) -> Self {
        debug_assert!(len <= buffer.capacity());
        Self {
            buffer,
            len,
            policy,
        }
    }
}

impl<T: Default> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        let slots = elements.into_boxed_slice();
        let len = slots.len();
        Self::from_parts(Buffer::from_slots(slots), len, GrowthPolicy::default())
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

// =============================================================================
// Size & Capacity Queries
// =============================================================================

impl<T> Vector<T> {
    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias for [`is_empty`](Self::is_empty)
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub(super) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub(super) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    pub(super) fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    pub(super) fn buffer_mut(&mut self) -> &mut Buffer<T> {
        &mut self.buffer
    }
}

// =============================================================================
// Growth & Reallocation
// =============================================================================

impl<T: Default> Vector<T> {
    /// Ensure capacity for at least `capacity` slots
    ///
    /// No-op when `capacity <= self.capacity()`; otherwise reallocates to
    /// exactly `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        self.relocate(capacity, "reserve");
    }

    /// Drop unused capacity so that `capacity() == len()`
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.relocate(self.len, "shrink_to_fit");
        }
    }

    /// Grow per the policy if there is no free slot left
    pub(super) fn grow_for_one(&mut self, reason: &'static str) {
        if self.is_full() {
            let target = self.policy.next_capacity(self.capacity());
            self.relocate(target, reason);
        }
    }

    /// Move the live elements into a fresh buffer of `capacity` slots
    pub(super) fn relocate(&mut self, capacity: usize, reason: &'static str) {
        debug_assert!(capacity >= self.len);
        let mut fresh = Buffer::allocate(capacity);
        let live = &mut self.buffer.slots_mut()[..self.len];
        for (dst, src) in fresh.slots_mut().iter_mut().zip(live.iter_mut()) {
            *dst = std::mem::take(src);
        }

        tracing::debug!(
            old_capacity = self.buffer.capacity(),
            new_capacity = capacity,
            len = self.len,
            reason,
            "reallocated vector buffer"
        );

        self.buffer = fresh;
    }
}

// =============================================================================
// Copy & Swap
// =============================================================================

impl<T: Default + Clone> Clone for Vector<T> {
    /// Deep copy with the same size and capacity
    fn clone(&self) -> Self {
        let mut buffer = Buffer::allocate(self.capacity());
        buffer.slots_mut()[..self.len].clone_from_slice(self.data());
        Self::from_parts(buffer, self.len, self.policy)
    }

    /// Copy-assignment; reuses this vector's buffer when `source` fits
    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
        self.policy = source.policy;
    }
}

impl<T: Default + Clone> Vector<T> {
    /// Replace the contents with a copy of `other`'s live elements
    ///
    /// When `other.len() <= self.capacity()` the copy happens in place and
    /// capacity is unchanged; otherwise the buffer is replaced by an
    /// exact-fit one.
    pub fn assign_from(&mut self, other: &Vector<T>) {
        self.assign_slice(other.data());
    }
}

impl<T> Vector<T> {
    /// Exchange contents (buffer, size, capacity, policy) with `other` in O(1)
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        std::mem::swap(self, other);
    }
}

/// Exchange the contents of two vectors in O(1)
///
/// Positions stay tied to their buffer, so a position issued by `a` before
/// the swap is valid for `b` afterwards.
pub fn swap<T>(a: &mut Vector<T>, b: &mut Vector<T>) {
    a.swap_with(b);
}

// =============================================================================
// Positions & Iteration
// =============================================================================

impl<T> Vector<T> {
    /// Position of the first element
    pub fn begin(&self) -> Position {
        Position::new(self.buffer.id(), 0)
    }

    /// Position one past the last live element
    pub fn end(&self) -> Position {
        Position::new(self.buffer.id(), self.len as isize)
    }

    /// Same as [`begin`](Self::begin); reads never need a separate handle
    pub fn cbegin(&self) -> Position {
        self.begin()
    }

    /// Same as [`end`](Self::end)
    pub fn cend(&self) -> Position {
        self.end()
    }

    /// Iterate over the live elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data(), self.begin(), self.end())
    }

    /// Iterate mutably over the live elements
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Resolve `position` to a slot index inside the live window
    ///
    /// The window is `[begin, end]` when `allow_end` is set (insert), and
    /// `[begin, end)` otherwise (erase).
    pub(super) fn checked_slot(
        &self,
        position: Position,
        method: &'static str,
        allow_end: bool,
    ) -> Result<usize> {
        self.check_issued(position, method)?;
        let offset = position.offset();
        let limit = self.len as isize;
        let in_window = offset >= 0 && (offset < limit || (allow_end && offset == limit));
        if !in_window {
            return Err(SeqVecError::out_of_range(
                method,
                format!("position {} of a vector with size {}", offset, self.len),
            ));
        }
        Ok(offset as usize)
    }

    /// Resolve `[first, last)` to a slot range inside `[begin, end]`
    pub(super) fn checked_range(
        &self,
        first: Position,
        last: Position,
        method: &'static str,
    ) -> Result<(usize, usize)> {
        self.check_issued(first, method)?;
        self.check_issued(last, method)?;
        let (start, end) = (first.offset(), last.offset());
        if start > end || start < 0 || end > self.len as isize {
            return Err(SeqVecError::out_of_range(
                method,
                format!(
                    "range [{}, {}) of a vector with size {}",
                    start, end, self.len
                ),
            ));
        }
        Ok((start as usize, end as usize))
    }

    fn check_issued(&self, position: Position, method: &'static str) -> Result<()> {
        if position.is_null() {
            return Err(SeqVecError::out_of_range(method, "a null position"));
        }
        if position.buffer() != self.buffer.id() {
            return Err(SeqVecError::out_of_range(
                method,
                "a position issued by another or a reallocated buffer",
            ));
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        self.buffer.into_slots().into_vec().into_iter().take(len)
    }
}

impl<T: Default> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}
