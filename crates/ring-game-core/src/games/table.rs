//! Relation table for the help screen.
//!
//! Always derived from [`compare`](super::compare), never stored.

use super::moveset::MoveSet;
use super::resolver::Outcome;
use serde::{Deserialize, Serialize};

/// What a single move wins against, loses to, and draws with
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRelations {
    pub name: String,
    pub beats: Vec<String>,
    pub loses_to: Vec<String>,
    pub draws_with: Vec<String>,
}

/// One row per move, in move-set order; names inside each row keep that order too
pub fn relation_table(moves: &MoveSet) -> Vec<MoveRelations> {
    (0..moves.len())
        .map(|i| {
            let mut row = MoveRelations {
                name: moves[i].to_string(),
                beats: Vec::new(),
                loses_to: Vec::new(),
                draws_with: Vec::new(),
            };
            for j in 0..moves.len() {
                let bucket = match moves.compare(i, j) {
                    Outcome::Win => &mut row.beats,
                    Outcome::Lose => &mut row.loses_to,
                    Outcome::Draw => &mut row.draws_with,
                };
                bucket.push(moves[j].to_string());
            }
            row
        })
        .collect()
}
