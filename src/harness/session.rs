//! Command session
//!
//! Owns the vector a CLI run operates on and applies parsed commands to it.

use std::fmt;

use crate::config::GrowthPolicy;
use crate::error::Result;
use crate::vector::Vector;

use super::Command;

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command only changed the vector
    Done,

    /// An element read by `at`/`front`/`back`
    Value(i64),

    /// An element removed by a pop (`None` when the vector was empty)
    Removed(Option<i64>),

    /// Offset of the position returned by insert/erase
    Position(isize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Value(value) => write!(f, "value {}", value),
            Outcome::Removed(Some(value)) => write!(f, "removed {}", value),
            Outcome::Removed(None) => write!(f, "nothing to remove"),
            Outcome::Position(offset) => write!(f, "position begin()+{}", offset),
        }
    }
}

/// A vector plus the commands applied to it so far
pub struct Session {
    vector: Vector<i64>,
    applied: usize,
}

impl Session {
    /// Start a session with `initial` as the exact-fit starting contents
    pub fn new(policy: GrowthPolicy, initial: &[i64]) -> Result<Self> {
        let mut vector = Vector::with_policy(policy)?;
        if !initial.is_empty() {
            vector.assign_slice(initial);
        }
        Ok(Self { vector, applied: 0 })
    }

    pub fn vector(&self) -> &Vector<i64> {
        &self.vector
    }

    /// Number of commands that completed without error
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Apply one command
    ///
    /// On error the vector is unchanged.
    pub fn apply(&mut self, command: &Command) -> Result<Outcome> {
        tracing::trace!("Applying command: {:?}", command);

        let v = &mut self.vector;
        let outcome = match command {
            Command::PushBack { value } => {
                v.push_back(*value);
                Outcome::Done
            }
            Command::PushFront { value } => {
                v.push_front(*value);
                Outcome::Done
            }
            Command::PopBack => Outcome::Removed(v.pop_back()),
            Command::PopFront => Outcome::Removed(v.pop_front()),
            Command::Insert { offset, value } => {
                let position = v.insert(v.begin() + *offset, *value)?;
                Outcome::Position(position - v.begin())
            }
            Command::InsertMany { offset, values } => {
                let position = v.insert_slice(v.begin() + *offset, values)?;
                Outcome::Position(position - v.begin())
            }
            Command::Erase { offset } => {
                let position = v.erase(v.begin() + *offset)?;
                Outcome::Position(position - v.begin())
            }
            Command::EraseRange { first, last } => {
                let position = v.erase_range(v.begin() + *first, v.begin() + *last)?;
                Outcome::Position(position - v.begin())
            }
            Command::Assign { count, value } => {
                v.assign(*count, *value);
                Outcome::Done
            }
            Command::Reserve { capacity } => {
                v.reserve(*capacity);
                Outcome::Done
            }
            Command::ShrinkToFit => {
                v.shrink_to_fit();
                Outcome::Done
            }
            Command::Clear => {
                v.clear();
                Outcome::Done
            }
            Command::At { index } => Outcome::Value(*v.at(*index)?),
            Command::Front => Outcome::Value(*v.front()?),
            Command::Back => Outcome::Value(*v.back()?),
        };

        self.applied += 1;
        Ok(outcome)
    }
}

/// The walkthrough run by `seqvec-cli scenario`
///
/// Starts from `{10, 20, 30}`; the final `at 3` is expected to fail.
pub fn scenario() -> (Vec<i64>, Vec<Command>) {
    let initial = vec![10, 20, 30];
    let commands = vec![
        Command::Insert {
            offset: 1,
            value: 99,
        },
        Command::Erase { offset: 0 },
        Command::At { index: 3 },
    ];
    (initial, commands)
}
