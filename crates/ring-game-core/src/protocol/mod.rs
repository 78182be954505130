//! Round protocol: identifiers, player selections, and the commit-reveal
//! state machine.

mod round;
mod types;

pub use round::{CommittedRound, FairnessEngine, ResolvedRound, RevealedRound};
pub use types::{RoundId, Selection};
