//! `roach sim`: plays many agent-only games and tallies who lost.
//!
//! Game `i` (counting from zero) is dealt from `seed + i`, so any single game
//! of a batch can be reproduced. With `--output`, each finished game is
//! appended to the file as one JSON line.
//!
//! ```no_run
//! use roach_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, None, Some(42), None, Some("data/games.jsonl".into()), &mut out, &mut err).unwrap();
//! ```

use crate::commands::{agent_seat_names, agent_seed, resolve_config};
use crate::error::CliError;
use crate::formatters::{format_result, format_tally};
use crate::ui;
use roach_ai::create_agent;
use roach_engine::engine::Engine;
use roach_engine::game::LossTally;
use roach_engine::logger::GameLogger;
use std::io::Write;
use tracing::info;

pub fn handle_sim_command(
    games: u32,
    seats: Option<u8>,
    seed: Option<u64>,
    agent: Option<String>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = resolve_config(seats, seed, agent)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let names = agent_seat_names(&cfg.agent, 1..cfg.seats + 1);

    let mut logger = match output.as_deref() {
        Some(path) => match GameLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let mut tally = LossTally::new();
    for name in &names {
        tally.register(name);
    }

    writeln!(
        out,
        "sim: games={} seats={} agent={} seed={}",
        games, cfg.seats, cfg.agent, base_seed
    )?;

    for i in 0..games {
        let game_seed = base_seed.wrapping_add(i as u64);
        let mut engine = Engine::new(names.clone(), Some(game_seed))?;
        let mut agents = (0..names.len())
            .map(|seat| create_agent(&cfg.agent, agent_seed(game_seed, seat)))
            .collect::<Result<Vec<_>, _>>()?;

        let result = engine.play_game(&mut agents)?;
        let loser = engine.table().name(result.loser)?.to_string();
        tally.record(&loser);
        info!(game = i + 1, seed = game_seed, loser = %loser, rounds = result.rounds, "game finished");

        writeln!(
            out,
            "Game {} of {}: {} ({} rounds)",
            i + 1,
            games,
            format_result(&names, &result),
            result.rounds
        )?;

        if let Some(logger) = logger.as_mut() {
            let record = engine.record(logger.next_id());
            if let Err(e) = logger.write(&record) {
                ui::write_error(err, "Failed to write game transcript")?;
                return Err(CliError::Io(e));
            }
        }
    }

    writeln!(out, "{}", format_tally(&tally))?;
    writeln!(out, "Simulated: {} games", tally.games())?;
    Ok(())
}
