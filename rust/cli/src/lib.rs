//! # roach CLI Library
//!
//! Command-line surface of the Cockroach Poker simulator.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, executes the subcommand and returns the
//! process exit code. Output streams are injected so the whole CLI can be
//! driven from tests.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = roach_cli::run(["roach", "deal", "--seed", "42", "--seats", "3"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("Seed: 42"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game at the console against agents
//! - `sim`: Run many agent games, tally losses, optionally save JSONL transcripts
//! - `replay`: Print the moves of recorded games
//! - `deal`: Show the dealt hands for a seed
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, RoachCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_replay_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "replay", "deal", "cfg"];

/// Runs the CLI with `args` (program name first).
///
/// Returns `0` on success and `2` on any error; errors are printed to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RoachCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write_or_exit!(out, "{}", e);
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: roach <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: roach --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play { seats, seed, agent } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seats, seed, agent, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seats,
            seed,
            agent,
            output,
        } => handle_sim_command(games, seats, seed, agent, output, out, err),
        Commands::Replay { input } => handle_replay_command(input, out, err),
        Commands::Deal { seats, seed } => handle_deal_command(seats, seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
