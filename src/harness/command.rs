//! Command definitions
//!
//! Represents one operation on the session vector, parsed from text.

use std::str::FromStr;

use crate::error::{Result, SeqVecError};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PushBack { value: i64 },
    PushFront { value: i64 },
    PopBack,
    PopFront,

    /// Insert one value before the element at `offset`
    Insert { offset: isize, value: i64 },

    /// Insert several values, in order, before the element at `offset`
    InsertMany { offset: isize, values: Vec<i64> },

    Erase { offset: isize },
    EraseRange { first: isize, last: isize },

    /// Replace the contents with `count` copies of `value`
    Assign { count: usize, value: i64 },

    Reserve { capacity: usize },
    ShrinkToFit,
    Clear,

    At { index: usize },
    Front,
    Back,
}

impl Command {
    /// The keyword this command is written with
    pub fn name(&self) -> &'static str {
        match self {
            Command::PushBack { .. } => "push_back",
            Command::PushFront { .. } => "push_front",
            Command::PopBack => "pop_back",
            Command::PopFront => "pop_front",
            Command::Insert { .. } => "insert",
            Command::InsertMany { .. } => "insert_many",
            Command::Erase { .. } => "erase",
            Command::EraseRange { .. } => "erase_range",
            Command::Assign { .. } => "assign",
            Command::Reserve { .. } => "reserve",
            Command::ShrinkToFit => "shrink",
            Command::Clear => "clear",
            Command::At { .. } => "at",
            Command::Front => "front",
            Command::Back => "back",
        }
    }

    /// Parse a command such as `insert 1 99`
    pub fn parse(input: &str) -> Result<Command> {
        let mut tokens = input.split_whitespace();
        let keyword = tokens
            .next()
            .ok_or_else(|| SeqVecError::Parse("empty command".to_string()))?;
        let args: Vec<&str> = tokens.collect();

        let command = match keyword {
            "push_back" => {
                expect_args(keyword, &args, 1)?;
                Command::PushBack { value: number(&args[0])? }
            }
            "push_front" => {
                expect_args(keyword, &args, 1)?;
                Command::PushFront { value: number(&args[0])? }
            }
            "pop_back" => {
                expect_args(keyword, &args, 0)?;
                Command::PopBack
            }
            "pop_front" => {
                expect_args(keyword, &args, 0)?;
                Command::PopFront
            }
            "insert" => {
                expect_args(keyword, &args, 2)?;
                Command::Insert {
                    offset: number(&args[0])?,
                    value: number(&args[1])?,
                }
            }
            "insert_many" => {
                expect_args(keyword, &args, 2)?;
                Command::InsertMany {
                    offset: number(&args[0])?,
                    values: number_list(&args[1])?,
                }
            }
            "erase" => {
                expect_args(keyword, &args, 1)?;
                Command::Erase { offset: number(&args[0])? }
            }
            "erase_range" => {
                expect_args(keyword, &args, 2)?;
                Command::EraseRange {
                    first: number(&args[0])?,
                    last: number(&args[1])?,
                }
            }
            "assign" => {
                expect_args(keyword, &args, 2)?;
                Command::Assign {
                    count: number(&args[0])?,
                    value: number(&args[1])?,
                }
            }
            "reserve" => {
                expect_args(keyword, &args, 1)?;
                Command::Reserve { capacity: number(&args[0])? }
            }
            "shrink" | "shrink_to_fit" => {
                expect_args(keyword, &args, 0)?;
                Command::ShrinkToFit
            }
            "clear" => {
                expect_args(keyword, &args, 0)?;
                Command::Clear
            }
            "at" => {
                expect_args(keyword, &args, 1)?;
                Command::At { index: number(&args[0])? }
            }
            "front" => {
                expect_args(keyword, &args, 0)?;
                Command::Front
            }
            "back" => {
                expect_args(keyword, &args, 0)?;
                Command::Back
            }
            other => {
                return Err(SeqVecError::Parse(format!("unknown command '{}'", other)));
            }
        };

        Ok(command)
    }
}

impl FromStr for Command {
    type Err = SeqVecError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

fn expect_args(keyword: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(SeqVecError::Parse(format!(
            "'{}' takes {} argument(s), got {}",
            keyword,
            expected,
            args.len()
        )));
    }
    Ok(())
}

fn number<N: FromStr>(token: &str) -> Result<N> {
    token
        .parse()
        .map_err(|_| SeqVecError::Parse(format!("'{}' is not a valid number", token)))
}

/// Comma-separated list, e.g. `1,2,3`
fn number_list(token: &str) -> Result<Vec<i64>> {
    token
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| number(part.trim()))
        .collect()
}
