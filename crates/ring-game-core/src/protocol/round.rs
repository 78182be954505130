//! Fairness engine: commit to the computer's move, resolve, then reveal.
//!
//! A round passes through three states, each its own type:
//! [`CommittedRound`] → [`ResolvedRound`] → [`RevealedRound`]. Every
//! transition consumes the previous state, so the key cannot be read before
//! the player's move is recorded and a round cannot be revealed twice.

use super::types::RoundId;
use crate::crypto::{Commitment, SecretKey};
use crate::error::PlatformFault;
use crate::games::{compare, MoveSet, Outcome};
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use tracing::{debug, info};

/// Draws keys from a secure source and the computer's moves from a
/// general-purpose one.
///
/// The two sources stay separate types: moves only need to be uniform, the
/// commitment is only binding if keys are unpredictable.
pub struct FairnessEngine<K, R> {
    key_source: K,
    move_picker: R,
}

impl FairnessEngine<OsRng, StdRng> {
    /// OS entropy for keys, an entropy-seeded `StdRng` for moves
    pub fn from_entropy() -> Self {
        Self::new(OsRng, StdRng::from_entropy())
    }
}

impl<K, R> FairnessEngine<K, R>
where
    K: RngCore + CryptoRng,
    R: Rng,
{
    pub fn new(key_source: K, move_picker: R) -> Self {
        Self {
            key_source,
            move_picker,
        }
    }

    /// Pick the computer's move and commit to it under a fresh key
    pub fn start_round(&mut self, moves: &MoveSet) -> Result<CommittedRound, PlatformFault> {
        let id = RoundId::new();
        let key = SecretKey::generate(&mut self.key_source)?;
        let computer = self.move_picker.gen_range(0..moves.len());
        let commitment = Commitment::for_move(&key, &moves[computer])?;

        debug!("Round {} committed: {}", id, commitment);

        Ok(CommittedRound {
            id,
            ring: moves.len(),
            key,
            computer,
            commitment,
        })
    }
}

/// Commitment published, player's move not yet known
#[derive(Debug)]
pub struct CommittedRound {
    id: RoundId,
    ring: usize,
    key: SecretKey,
    computer: usize,
    commitment: Commitment,
}

impl CommittedRound {
    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Record the player's 0-based move and resolve the round.
    ///
    /// Panics if `human` is not a valid index for the move set the round was
    /// started with.
    pub fn play(self, human: usize) -> ResolvedRound {
        assert!(
            human < self.ring,
            "move index {} out of range for {} moves",
            human,
            self.ring
        );
        let outcome = compare(human, self.computer, self.ring);

        info!(
            round = %self.id,
            human,
            computer = self.computer,
            "Round resolved: {}",
            outcome
        );

        ResolvedRound {
            id: self.id,
            key: self.key,
            commitment: self.commitment,
            human,
            computer: self.computer,
            outcome,
        }
    }
}

/// Both moves known and the outcome decided; key still withheld
#[derive(Debug)]
pub struct ResolvedRound {
    id: RoundId,
    key: SecretKey,
    commitment: Commitment,
    human: usize,
    computer: usize,
    outcome: Outcome,
}

impl ResolvedRound {
    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn human(&self) -> usize {
        self.human
    }

    pub fn computer(&self) -> usize {
        self.computer
    }

    /// From the player's point of view
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Disclose the key so the player can check the commitment
    pub fn reveal(self) -> RevealedRound {
        info!("Round {} key revealed: {}", self.id, self.key.to_hex());

        RevealedRound {
            id: self.id,
            key: self.key,
            commitment: self.commitment,
            human: self.human,
            computer: self.computer,
            outcome: self.outcome,
        }
    }
}

/// Finished round with its key disclosed
#[derive(Debug)]
pub struct RevealedRound {
    id: RoundId,
    key: SecretKey,
    commitment: Commitment,
    human: usize,
    computer: usize,
    outcome: Outcome,
}

impl RevealedRound {
    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// Uppercase hex, same format as the commitment
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn human(&self) -> usize {
        self.human
    }

    pub fn computer(&self) -> usize {
        self.computer
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Recompute the commitment from the disclosed key and announced move
    pub fn verify(&self, moves: &MoveSet) -> bool {
        moves
            .get(self.computer)
            .is_some_and(|name| self.commitment.verify_move(&self.key, name))
    }
}
