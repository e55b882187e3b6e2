//! `roach deal`: shows every seat's hand for a seed, and who would start.

use crate::commands::{agent_seat_names, resolve_config};
use crate::error::CliError;
use roach_engine::engine::Engine;
use std::io::Write;

pub fn handle_deal_command(
    seats: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = resolve_config(seats, seed, None)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let names = agent_seat_names("seat", 0..cfg.seats);
    let engine = Engine::new(names, Some(seed))?;

    writeln!(out, "Seed: {}", seed)?;
    for seat in engine.table().seats() {
        writeln!(
            out,
            "{} ({} cards): {}",
            seat.name(),
            seat.hand().total(),
            seat.hand()
        )?;
    }
    let starter = engine.current_seat()?;
    writeln!(out, "Starts: {}", engine.table().name(starter)?)?;
    Ok(())
}
