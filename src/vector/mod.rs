//! Vector Module
//!
//! The storage engine: a single contiguous, growable slot buffer.
//!
//! ## Responsibilities
//! - Own exactly one buffer per instance; release it exactly once
//! - Track logical size vs allocated capacity
//! - Amortized growth (seed capacity, then multiply) for push/insert
//! - Shift-based positional insert/erase
//! - Checked (`at`, `front`, `back`) and unchecked (`[]`) element access
//!
//! ## Buffer Layout
//! ```text
//! ┌─────────────── capacity ────────────────┐
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │ e0  │ e1  │ e2  │ e3  │ def │ def │ def │
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//! └──────── size ─────────┘
//!   live elements            value-initialized slots
//! ```
//!
//! ## Costs
//! - `push_back`: amortized O(1)
//! - `push_front`/`pop_front`: O(n); every live element shifts one slot.
//!   The container is built for back insertion.
//! - `insert`/`erase`: O(n) tail shift
//! - ranged insert: O(n + k) for k inserted elements

mod access;
mod buffer;
mod display;
mod modifiers;
mod serialization;
mod shift;
mod storage;

pub use storage::{swap, IntoIter, Vector};
