//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "roach",
    version,
    about = "Cockroach Poker simulator: play against agents or run batches of agent games"
)]
pub struct RoachCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game from the console as the first seat
    Play {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Agent kind for the other seats
        #[arg(long)]
        agent: Option<String>,
    },
    /// Run many agent-only games and tally the losers
    Sim {
        #[arg(long)]
        games: u32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        agent: Option<String>,
        /// Append one JSON transcript per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the moves recorded in a JSONL transcript file
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Show the hands dealt for a seed
    Deal {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        seats: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
