//! Owned slot buffer
//!
//! `Box<[T]>` plus the identity positions use to detect reallocation.

use crate::position::BufferId;

/// One allocation of `capacity` slots
pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
    id: BufferId,
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` value-initialized slots
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self::from_slots(std::iter::repeat_with(T::default).take(capacity).collect())
    }
}

impl<T> Buffer<T> {
    /// Adopt already-populated slots as a new allocation
    pub(crate) fn from_slots(slots: Box<[T]>) -> Self {
        Self {
            slots,
            id: BufferId::fresh(),
        }
    }

    pub(crate) fn id(&self) -> BufferId {
        self.id
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub(crate) fn into_slots(self) -> Box<[T]> {
        self.slots
    }
}
