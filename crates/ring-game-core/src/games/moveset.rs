//! Validated, ordered move list.

use super::resolver::{compare, Outcome};
use crate::error::{ConfigError, InvalidInput};
use crate::protocol::Selection;
use serde::Serialize;
use std::ops::Index;

/// Ordered, distinct move names; odd count, at least 3
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and take ownership of a move list
    pub fn new<I, S>(moves: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = moves.into_iter().map(Into::into).collect();
        check(&names)?;
        Ok(Self { names })
    }

    /// Pre-check a candidate list without building a move set
    pub fn validate<S: AsRef<str>>(moves: &[S]) -> bool {
        check(moves).is_ok()
    }

    /// Number of moves on the ring
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Moves each move beats, and moves each move loses to
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Compare move `i` against move `j`, from `i`'s point of view
    pub fn compare(&self, i: usize, j: usize) -> Outcome {
        compare(i, j, self.len())
    }

    /// Classify a 1-based selection; `0` quits
    pub fn select(&self, raw: i64) -> Result<Selection, InvalidInput> {
        match usize::try_from(raw) {
            Ok(0) => Ok(Selection::Quit),
            Ok(n) if n <= self.len() => Ok(Selection::Move(n - 1)),
            _ => Err(InvalidInput::OutOfRange {
                value: raw,
                max: self.len(),
            }),
        }
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

fn check<S: AsRef<str>>(moves: &[S]) -> Result<(), ConfigError> {
    for (i, name) in moves.iter().enumerate() {
        let name = name.as_ref();
        if moves[i + 1..].iter().any(|other| other.as_ref() == name) {
            return Err(ConfigError::DuplicateMove(name.to_string()));
        }
    }
    if moves.len() < 3 {
        return Err(ConfigError::TooFewMoves(moves.len()));
    }
    if moves.len() % 2 == 0 {
        return Err(ConfigError::EvenMoveCount(moves.len()));
    }
    Ok(())
}
