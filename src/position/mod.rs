//! Position Module
//!
//! Lightweight cursors over a vector's slot buffer.
//!
//! ## Responsibilities
//! - Identify a single slot by (buffer identity, signed offset)
//! - Offset arithmetic, increment/decrement, signed distance
//! - Relational comparison between positions over the same buffer
//! - Borrowing read cursors and bidirectional iteration over live elements
//!
//! ## Validity
//! A position owns nothing. Every allocation made by a vector gets a fresh
//! `BufferId`, and positions remember the id they were issued from, so a
//! position that outlived a reallocation (or came from a different vector)
//! is detected instead of silently addressing the wrong slot:
//!
//! ```text
//!   begin()             end()
//!     │                   │
//!   ┌───┬───┬───┬───┬───┬───┬───┐
//!   │ a │ b │ c │ d │ e │ · │ · │   buffer #7, size 5, capacity 7
//!   └───┴───┴───┴───┴───┴───┴───┘
//!     0   1   2   3   4   5   6
//! ```
//!
//! Shifting elements (insert/erase) keeps the buffer id, so a position keeps
//! its slot but the element it names may have changed.

mod cursor;
mod iter;
mod slot;

use std::sync::atomic::{AtomicU64, Ordering};

pub use cursor::Cursor;
pub use iter::Iter;
pub use slot::Position;

/// Identity of one slot buffer allocation (0 = null)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct BufferId(u64);

impl BufferId {
    pub(crate) const NULL: BufferId = BufferId(0);

    /// Allocate an id never handed out before in this process
    pub(crate) fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        BufferId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn is_null(self) -> bool {
        self == Self::NULL
    }
}
