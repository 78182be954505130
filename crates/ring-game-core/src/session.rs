//! A game session: one immutable move set and the engine that plays it.

use crate::error::{ConfigError, InvalidInput, PlatformFault};
use crate::games::{relation_table, MoveRelations, MoveSet};
use crate::protocol::{CommittedRound, FairnessEngine, Selection};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore};
use tracing::info;

/// Rounds are played strictly one after another; the move picker is mutated
/// through `&mut self` only.
pub struct GameSession<K = OsRng, R = StdRng> {
    moves: MoveSet,
    engine: FairnessEngine<K, R>,
}

impl GameSession {
    /// Validate the move list and seed the engine from OS entropy
    pub fn new<I, S>(moves: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves = MoveSet::new(moves)?;
        Ok(Self::with_engine(moves, FairnessEngine::from_entropy()))
    }
}

impl<K, R> GameSession<K, R>
where
    K: RngCore + CryptoRng,
    R: Rng,
{
    pub fn with_engine(moves: MoveSet, engine: FairnessEngine<K, R>) -> Self {
        info!("Session started with {} moves", moves.len());
        Self { moves, engine }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Commit to the computer's move for the next round
    pub fn start_round(&mut self) -> Result<CommittedRound, PlatformFault> {
        self.engine.start_round(&self.moves)
    }

    /// Classify a raw 1-based selection against this session's moves
    pub fn select(&self, raw: i64) -> Result<Selection, InvalidInput> {
        self.moves.select(raw)
    }

    pub fn relation_table(&self) -> Vec<MoveRelations> {
        relation_table(&self.moves)
    }
}
