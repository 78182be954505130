//! Line-based console loop for `play`.

use crate::render;
use anyhow::Result;
use rand::{CryptoRng, Rng, RngCore};
use ring_game_core::{GameSession, InvalidInput, MoveSet, Outcome, Selection};
use std::io::{BufRead, Write};
use tracing::{debug, info_span};

/// Play rounds until the player quits or input ends
pub fn play<K, R, I, O>(session: &mut GameSession<K, R>, mut input: I, out: &mut O) -> Result<()>
where
    K: RngCore + CryptoRng,
    R: Rng,
    I: BufRead,
    O: Write,
{
    loop {
        let round = session.start_round()?;
        let span = info_span!("round", id = %round.id());
        let _guard = span.enter();

        writeln!(out, "{}", render::rule('='))?;
        writeln!(out, "HMAC: {}", round.commitment())?;
        menu(session.moves(), out)?;

        let human = loop {
            match read_selection(session, &mut input)? {
                Ok(Selection::Quit) => return Ok(()),
                Ok(Selection::Help) => {
                    let table = session.relation_table();
                    writeln!(out, "{}", render::relation_table(session.moves(), &table))?;
                    menu(session.moves(), out)?;
                }
                Ok(Selection::Move(index)) => break index,
                Err(err) => {
                    debug!("Rejected input: {}", err);
                    writeln!(out, "Invalid input. Please enter one of the following moves:")?;
                    menu(session.moves(), out)?;
                }
            }
        };

        let resolved = round.play(human);
        let moves = session.moves();
        writeln!(out, "Your move: {} ({})", human + 1, &moves[human])?;
        writeln!(
            out,
            "AI move: {} ({})",
            resolved.computer() + 1,
            &moves[resolved.computer()]
        )?;
        writeln!(out, "{}", verdict(resolved.outcome()))?;

        let revealed = resolved.reveal();
        writeln!(out, "HMAC key: {}", revealed.key_hex())?;
        out.flush()?;
    }
}

/// Read one line and classify it; end of input counts as quitting and a line
/// that is not UTF-8 is rejected like any other unparseable input
fn read_selection<K, R, I>(
    session: &GameSession<K, R>,
    input: &mut I,
) -> Result<std::result::Result<Selection, InvalidInput>>
where
    K: RngCore + CryptoRng,
    R: Rng,
    I: BufRead,
{
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(Ok(Selection::Quit));
    }
    match String::from_utf8(buf) {
        Ok(line) => Ok(classify(session, line.trim())),
        Err(err) => Ok(Err(InvalidInput::Unparseable(
            String::from_utf8_lossy(err.as_bytes()).trim().to_string(),
        ))),
    }
}

fn classify<K, R>(session: &GameSession<K, R>, line: &str) -> std::result::Result<Selection, InvalidInput>
where
    K: RngCore + CryptoRng,
    R: Rng,
{
    if line == "?" {
        return Ok(Selection::Help);
    }
    match line.parse::<i64>() {
        Ok(raw) => session.select(raw),
        Err(_) => Err(InvalidInput::Unparseable(line.to_string())),
    }
}

fn menu<O: Write>(moves: &MoveSet, out: &mut O) -> std::io::Result<()> {
    for (index, name) in moves.iter().enumerate() {
        writeln!(out, "{} - play {}", index + 1, name)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    out.flush()
}

fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lost!",
        Outcome::Draw => "Draw!",
    }
}
