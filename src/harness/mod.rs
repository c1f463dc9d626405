//! Harness Module
//!
//! Drives a `Vector<i64>` through textual commands for the CLI.
//!
//! ## Responsibilities
//! - Parse one command per string (`insert 1 99`, `erase_range 0 2`, ...)
//! - Apply commands to a session vector and report the outcome
//! - Provide the canned walkthrough scenario
//!
//! ## Command Syntax
//! Positions are written as offsets from `begin()`; negative offsets are
//! accepted by the parser so the container's own range checks reject them.
//! ```text
//! push_back <v>        push_front <v>       pop_back         pop_front
//! insert <off> <v>     insert_many <off> <v,v,...>
//! erase <off>          erase_range <first> <last>
//! assign <count> <v>   reserve <n>          shrink           clear
//! at <idx>             front                back
//! ```

mod command;
mod session;

pub use command::Command;
pub use session::{scenario, Outcome, Session};
