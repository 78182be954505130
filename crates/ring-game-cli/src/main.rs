//! Ring Game console
//!
//! Plays rock-paper-scissors style rounds for any odd number of moves. Each
//! round prints an HMAC of the computer's move before the player chooses and
//! discloses the key afterwards, so the player can check the move was fixed.

mod cli;
mod console;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use ring_game_core::{relation_table, verify_hex, ConfigError, GameSession, HexError, MoveSet};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Clean quit, or a `verify` whose HMAC matched
const EXIT_OK: u8 = 0;
/// Platform or I/O failure, or a `verify` whose HMAC did not match
const EXIT_FAILURE: u8 = 1;
/// Rejected move list, or malformed hex handed to `verify`
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {err}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(cli.command, stdin.lock(), &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            if err.downcast_ref::<ConfigError>().is_some() {
                eprintln!("{err}");
                eprintln!("Provide an odd number (3 or more) of distinct moves, e.g. `ring-game play rock paper scissors`");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Input mistakes the user can correct exit with `EXIT_USAGE`, everything
/// else with `EXIT_FAILURE`.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<HexError>().is_some() {
        EXIT_USAGE
    } else {
        EXIT_FAILURE
    }
}

fn run<I, O>(command: Command, input: I, out: &mut O) -> Result<u8>
where
    I: BufRead,
    O: Write,
{
    match command {
        Command::Play { moves } => {
            let mut session = GameSession::new(moves)?;
            console::play(&mut session, input, out)?;
            info!("Session ended");
            Ok(EXIT_OK)
        }
        Command::Table { moves, json } => {
            let moves = MoveSet::new(moves)?;
            let table = relation_table(&moves);
            if json {
                serde_json::to_writer_pretty(&mut *out, &table)
                    .context("writing relation table")?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", render::relation_table(&moves, &table))?;
            }
            Ok(EXIT_OK)
        }
        Command::Verify { key, hmac, name } => {
            let matches = verify_hex(&key, &name, &hmac).context("parsing key or HMAC")?;
            if matches {
                writeln!(out, "OK")?;
                Ok(EXIT_OK)
            } else {
                writeln!(out, "MISMATCH")?;
                Ok(EXIT_FAILURE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_game_core::crypto::KEY_LEN;
    use ring_game_core::{Commitment, MoveRelations, SecretKey};

    fn moves(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn run_with(command: Command, script: &str) -> (Result<u8>, String) {
        let mut out = Vec::new();
        let result = run(command, script.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn verify(key: &SecretKey, hmac: String, name: &str) -> Command {
        Command::Verify {
            key: key.to_hex(),
            hmac,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_invalid_move_list_exits_with_usage_code() {
        let (result, output) = run_with(
            Command::Play {
                moves: moves(&["rock", "paper"]),
            },
            "",
        );
        let err = result.unwrap_err();

        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::TooFewMoves(2)));
        assert_eq!(exit_code(&err), EXIT_USAGE);
        assert!(output.is_empty());
    }

    #[test]
    fn test_table_rejects_even_count() {
        let (result, _) = run_with(
            Command::Table {
                moves: moves(&["a", "b", "c", "d"]),
                json: false,
            },
            "",
        );
        assert_eq!(exit_code(&result.unwrap_err()), EXIT_USAGE);
    }

    #[test]
    fn test_play_quits_cleanly() {
        let (result, output) = run_with(
            Command::Play {
                moves: moves(&["rock", "paper", "scissors"]),
            },
            "1\n0\n",
        );

        assert_eq!(result.unwrap(), EXIT_OK);
        assert_eq!(output.lines().filter(|l| l.starts_with("HMAC key: ")).count(), 1);
    }

    #[test]
    fn test_verify_matching_hmac() {
        let key = SecretKey::from_bytes([0x5a; KEY_LEN]);
        let hmac = Commitment::for_move(&key, "paper").unwrap().to_hex();
        let (result, output) = run_with(verify(&key, hmac, "paper"), "");

        assert_eq!(result.unwrap(), EXIT_OK);
        assert_eq!(output, "OK\n");
    }

    #[test]
    fn test_verify_tampered_hmac() {
        let key = SecretKey::from_bytes([0x5a; KEY_LEN]);
        let mut digest = *Commitment::for_move(&key, "paper").unwrap().as_bytes();
        digest[0] ^= 0x01;
        let hmac = Commitment::from_bytes(digest).to_hex();
        let (result, output) = run_with(verify(&key, hmac, "paper"), "");

        assert_eq!(result.unwrap(), EXIT_FAILURE);
        assert_eq!(output, "MISMATCH\n");
    }

    #[test]
    fn test_verify_malformed_hex_is_a_usage_error() {
        let key = SecretKey::from_bytes([0x5a; KEY_LEN]);
        let (result, output) = run_with(verify(&key, "not-hex".to_string(), "paper"), "");
        let err = result.unwrap_err();

        assert!(err.downcast_ref::<HexError>().is_some());
        assert_eq!(exit_code(&err), EXIT_USAGE);
        assert!(output.is_empty());
    }

    #[test]
    fn test_other_failures_exit_with_failure_code() {
        let err = anyhow::Error::new(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_table_json() {
        let (result, output) = run_with(
            Command::Table {
                moves: moves(&["rock", "paper", "scissors"]),
                json: true,
            },
            "",
        );
        assert_eq!(result.unwrap(), EXIT_OK);

        let rows: Vec<MoveRelations> = serde_json::from_str(&output).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "rock");
        assert_eq!(rows[0].beats, ["scissors"]);
        assert_eq!(rows[0].loses_to, ["paper"]);
        assert_eq!(rows[0].draws_with, ["rock"]);
    }

    #[test]
    fn test_table_text() {
        let (result, output) = run_with(
            Command::Table {
                moves: moves(&["rock", "paper", "scissors"]),
                json: false,
            },
            "",
        );
        assert_eq!(result.unwrap(), EXIT_OK);
        assert!(output.contains("Wins: scissors"));
        assert!(output.contains("Loses to: paper"));
    }
}
