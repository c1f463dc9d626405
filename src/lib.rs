//! # SeqVec
//!
//! A contiguous, growable sequence container with:
//! - An explicit growth policy (seed capacity 10, then doubling)
//! - Positional insert/erase driven by detachable positions
//! - Checked (`at`, `front`, `back`) and unchecked (`[]`) access paths
//! - Detection of positions that outlived a reallocation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     seqvec-cli (harness)                     │
//! │               Command parsing / Session driver               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Vector<T>                              │
//! │        push/pop, insert/erase, assign, reserve, access       │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │
//!            ▼                                 ▼
//!   ┌─────────────────┐               ┌─────────────────┐
//!   │  Slot Buffer    │◄──────────────│    Position     │
//!   │ (Box<[T]> + id) │   identifies  │ Cursor / Iter   │
//!   └─────────────────┘               └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use seqvec::Vector;
//!
//! let mut v = Vector::from([10, 20, 30]);
//! let pos = v.insert(v.begin() + 1, 99).unwrap();
//! assert_eq!(v[pos], 99);
//! assert_eq!(v.data(), &[10, 99, 20, 30]);
//!
//! v.erase(v.begin()).unwrap();
//! assert_eq!(v.data(), &[99, 20, 30]);
//! assert!(v.at(3).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod position;
pub mod vector;
pub mod harness;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SeqVecError};
pub use config::GrowthPolicy;
pub use position::{Cursor, Iter, Position};
pub use vector::{swap, Vector};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SeqVec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
