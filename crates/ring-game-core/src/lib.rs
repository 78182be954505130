//! Ring Game Core Library
//!
//! This crate provides move-set validation, circular outcome resolution for
//! any odd number of moves, and the commit-reveal protocol that lets a player
//! check the computer fixed its move before seeing theirs.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;
pub mod session;

pub use crypto::{verify_hex, Commitment, SecretKey};
pub use error::{ConfigError, HexError, InvalidInput, PlatformFault};
pub use games::{compare, relation_table, MoveRelations, MoveSet, Outcome};
pub use protocol::{CommittedRound, FairnessEngine, ResolvedRound, RevealedRound, RoundId, Selection};
pub use session::GameSession;
