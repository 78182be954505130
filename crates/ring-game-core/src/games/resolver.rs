//! Circular outcome resolution.
//!
//! Moves sit on a ring of odd size `n`. A move beats the `n / 2` moves that
//! precede it on the ring and loses to the `n / 2` that follow it, so the
//! classic ordering `rock, paper, scissors` gives paper over rock, scissors
//! over paper and rock over scissors.

use serde::Serialize;
use std::fmt;
use std::ops::Neg;

/// Result of a comparison, from the first move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl Neg for Outcome {
    type Output = Outcome;

    /// The same comparison seen from the other side
    fn neg(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compare move `i` against move `j` on a ring of `n` moves.
///
/// Both indices must be below `n`, and `n` must be odd.
pub fn compare(i: usize, j: usize, n: usize) -> Outcome {
    debug_assert!(i < n && j < n, "move index out of range");
    debug_assert!(n % 2 == 1, "ring size must be odd");

    let i = if i < j { i + n } else { i };
    let delta = i - j;
    let half = n / 2;

    if delta == 0 {
        Outcome::Draw
    } else if delta > half {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}
