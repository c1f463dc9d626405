//! Iterator over live elements
//!
//! Walks the live window with a pair of positions: `front` moves up from
//! `begin()`, `back` moves down from `end()`, iteration stops when they meet.

use std::iter::FusedIterator;

use super::Position;

/// Bidirectional iterator over `&T`, created by `Vector::iter`
pub struct Iter<'a, T> {
    /// Live elements only (`0..size`)
    live: &'a [T],
    front: Position,
    back: Position,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [T], begin: Position, end: Position) -> Self {
        Self {
            live,
            front: begin,
            back: end,
        }
    }

    fn remaining(&self) -> usize {
        (self.back - self.front).max(0) as usize
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            live: self.live,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.live.get(self.front.post_increment().offset() as usize)?;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.live.get(self.back.decrement().offset() as usize)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
