//! Text rendering
//!
//! `Display` is a diagnostic dump of the whole buffer:
//!
//! ```text
//! { 1 2 3 | 0 0 }, size=3, capacity=5
//! ```
//!
//! Every slot is printed; `| ` marks where the unused slots begin and is left
//! out when the buffer is full. Not meant to be parsed back.

use std::fmt;

use super::storage::Vector;

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, slot) in self.buffer().slots().iter().enumerate() {
            if i == self.len() {
                write!(f, "| ")?;
            }
            write!(f, "{} ", slot)?;
        }
        write!(f, "}}, size={}, capacity={}", self.len(), self.capacity())
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data()).finish()
    }
}
