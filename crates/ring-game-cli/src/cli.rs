//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ring-game", version, about = "Rock-paper-scissors for any odd number of moves, with provably fixed computer moves")]
pub struct Cli {
    /// Log filter, e.g. `info` or `ring_game_core=debug`
    #[arg(long, global = true, env = "RING_GAME_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play rounds against the computer
    Play {
        /// Odd number (3 or more) of distinct moves, in ring order
        #[arg(required = true, value_name = "MOVE")]
        moves: Vec<String>,
    },

    /// Print who beats whom
    Table {
        /// Odd number (3 or more) of distinct moves, in ring order
        #[arg(required = true, value_name = "MOVE")]
        moves: Vec<String>,

        /// Emit JSON instead of a console table
        #[arg(long)]
        json: bool,
    },

    /// Check a disclosed key against an announced move and HMAC
    Verify {
        /// Key printed after the round
        #[arg(long)]
        key: String,

        /// HMAC printed before the round
        #[arg(long)]
        hmac: String,

        /// Move the computer announced
        #[arg(value_name = "MOVE")]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from(["ring-game", "play", "rock", "paper", "scissors"]).unwrap();
        match cli.command {
            Command::Play { moves } => assert_eq!(moves, ["rock", "paper", "scissors"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_play_requires_moves() {
        assert!(Cli::try_parse_from(["ring-game", "play"]).is_err());
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "ring-game",
            "--log-level",
            "debug",
            "verify",
            "--key",
            "AA",
            "--hmac",
            "BB",
            "rock",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Command::Verify { key, hmac, name } => {
                assert_eq!((key.as_str(), hmac.as_str(), name.as_str()), ("AA", "BB", "rock"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
