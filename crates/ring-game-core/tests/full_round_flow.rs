//! Integration tests for the full round flow.
//!
//! These tests play complete sessions from move-list validation to key
//! disclosure and check every commitment the way a player would.

use rand::rngs::StdRng;
use rand::SeedableRng;
use ring_game_core::{
    verify_hex, Commitment, ConfigError, FairnessEngine, GameSession, InvalidInput, MoveSet,
    Outcome, SecretKey, Selection,
};

fn seeded(moves: &[&str], seed: u64) -> GameSession<StdRng, StdRng> {
    let moves = MoveSet::new(moves.iter().copied()).unwrap();
    let engine = FairnessEngine::new(StdRng::seed_from_u64(seed), StdRng::seed_from_u64(!seed));
    GameSession::with_engine(moves, engine)
}

/// Play one round and check it the way a player would
#[test]
fn test_player_verifies_round() {
    let mut session = seeded(&["rock", "paper", "scissors"], 42);

    // Phase 1: computer commits, player only sees the digest
    let round = session.start_round().unwrap();
    let announced = round.commitment().to_string();
    assert_eq!(announced.len(), 64);
    assert_eq!(announced, announced.to_uppercase());

    // Phase 2: player picks paper
    let Selection::Move(human) = session.select(2).unwrap() else {
        panic!("expected a move");
    };
    let resolved = round.play(human);
    let computer_move = session.moves()[resolved.computer()].to_string();

    // Phase 3: key disclosed after the outcome is fixed
    let revealed = resolved.reveal();
    assert!(verify_hex(&revealed.key_hex(), &computer_move, &announced).unwrap());

    for (index, name) in session.moves().iter().enumerate() {
        if index != revealed.computer() {
            assert!(!verify_hex(&revealed.key_hex(), name, &announced).unwrap());
        }
    }
}

/// A run of rounds over the five-move ring
#[test]
fn test_many_rounds_five_moves() {
    let mut session = seeded(&["rock", "paper", "scissors", "lizard", "Spock"], 7);
    let mut tally = [0usize; 3];

    for round_no in 0..300 {
        let human = round_no % 5;
        let revealed = session.start_round().unwrap().play(human).reveal();

        assert!(revealed.verify(session.moves()));
        assert!(!revealed.key().as_bytes().contains(&0));
        assert_eq!(
            revealed.outcome(),
            session.moves().compare(human, revealed.computer())
        );

        let slot = match revealed.outcome() {
            Outcome::Win => 0,
            Outcome::Lose => 1,
            Outcome::Draw => 2,
        };
        tally[slot] += 1;
    }

    // Every outcome shows up over 300 uniform rounds
    assert!(tally.iter().all(|&count| count > 0));
}

/// An invalid selection leaves the open round untouched
#[test]
fn test_invalid_selection_keeps_round() {
    let mut session = seeded(&["a", "b", "c"], 3);
    let round = session.start_round().unwrap();
    let announced = *round.commitment();

    assert_eq!(
        session.select(9),
        Err(InvalidInput::OutOfRange { value: 9, max: 3 })
    );
    assert_eq!(*round.commitment(), announced);

    let revealed = round.play(0).reveal();
    assert_eq!(*revealed.commitment(), announced);
    assert!(revealed.verify(session.moves()));
}

/// Recomputing a commitment by hand with the disclosed key
#[test]
fn test_manual_recomputation() {
    let mut session = seeded(&["fire", "water", "air", "earth", "aether", "void", "wood"], 11);
    let round = session.start_round().unwrap();
    let announced = round.commitment().to_hex();
    let revealed = round.play(6).reveal();

    let key = SecretKey::from_hex(&revealed.key_hex()).unwrap();
    let name = &session.moves()[revealed.computer()];
    assert_eq!(Commitment::for_move(&key, name).unwrap().to_hex(), announced);
}

#[test]
fn test_invalid_move_lists_never_start() {
    assert_eq!(
        GameSession::new(["rock", "paper", "scissors", "lizard"]).err(),
        Some(ConfigError::EvenMoveCount(4))
    );
    assert_eq!(
        GameSession::new(["rock", "rock", "paper"]).err(),
        Some(ConfigError::DuplicateMove("rock".to_string()))
    );
    assert_eq!(
        GameSession::new(Vec::<String>::new()).err(),
        Some(ConfigError::TooFewMoves(0))
    );
}
