//! Error types.
//!
//! Each operation returns only the error it can produce: building a move set
//! fails with [`ConfigError`], classifying a selection with [`InvalidInput`],
//! and committing a round with [`PlatformFault`].

use thiserror::Error;

/// A move list that cannot start a session
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Duplicate move: {0:?}")]
    DuplicateMove(String),

    #[error("Too few moves: got {0}, need at least 3")]
    TooFewMoves(usize),

    #[error("Even number of moves: got {0}, need an odd count")]
    EvenMoveCount(usize),
}

/// Per-round input that is refused; the same round is offered again
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Selection {value} is out of range 0..={max}")]
    OutOfRange { value: i64, max: usize },

    #[error("Unrecognized input: {0:?}")]
    Unparseable(String),
}

/// Platform failure that makes the fairness guarantee impossible to uphold
#[derive(Debug, Error)]
pub enum PlatformFault {
    #[error("Secure random source failed: {0}")]
    Random(#[from] rand::Error),

    #[error("Secure random source produced a zero byte in {attempts} consecutive keys")]
    DegenerateKey { attempts: usize },

    #[error("Keyed hash rejected a {0}-byte key")]
    Mac(usize),
}

/// Malformed hex handed in for verification
#[derive(Debug, Error)]
pub enum HexError {
    #[error("Invalid hex: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}
