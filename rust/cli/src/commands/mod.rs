//! Command handler modules.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` taking its
//! output streams as `&mut dyn Write`.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod replay;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Loads the layered configuration, then applies command-line overrides.
pub(crate) fn resolve_config(
    seats: Option<u8>,
    seed: Option<u64>,
    agent: Option<String>,
) -> Result<Config, CliError> {
    let mut cfg = config::load()?;
    if let Some(n) = seats {
        cfg.seats = n as usize;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
    if let Some(kind) = agent {
        cfg.agent = kind;
    }
    config::validate(&cfg)?;
    Ok(cfg)
}

/// Names for agent-controlled seats: `baseline-1`, `baseline-2`, ...
pub(crate) fn agent_seat_names(kind: &str, range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("{}-{}", kind, i)).collect()
}

/// Per-seat agent seed derived from the game seed.
pub(crate) fn agent_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .wrapping_mul(31)
        .wrapping_add(seat as u64 + 1)
}
