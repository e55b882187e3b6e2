//! `roach replay`: prints the games recorded in a JSONL transcript file.
//!
//! Each line holds one [`GameRecord`]. Lines that fail to parse are reported
//! on stderr and skipped.

use crate::error::CliError;
use crate::formatters::{format_move_row, format_outcome, format_result, move_header, narrate};
use crate::io_utils::read_text;
use crate::{parse_json_or_continue, ui};
use roach_engine::logger::GameRecord;
use std::io::Write;

pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text(&input) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!("Failed to read {}: {}", input, e);
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        writeln!(out, "No games found in file.")?;
        return Ok(());
    }

    let mut shown = 0usize;
    for (n, line) in lines.iter().enumerate() {
        let record: GameRecord = parse_json_or_continue!(line, err, format!("game {}", n + 1));
        shown += 1;
        replay_game(&record, out)?;
    }

    let skipped = lines.len() - shown;
    if skipped > 0 {
        ui::display_warning(err, &format!("{} malformed line(s) skipped", skipped))?;
    }
    writeln!(out, "Replayed: {} games", shown)?;
    Ok(())
}

fn replay_game(record: &GameRecord, out: &mut dyn Write) -> Result<(), CliError> {
    let seats = &record.seats;
    match record.seed {
        Some(seed) => writeln!(out, "Game {} (seed {})", record.game_id, seed)?,
        None => writeln!(out, "Game {}", record.game_id)?,
    }
    writeln!(out, "Seats: {}", seats.join(", "))?;

    for (i, round) in record.rounds.iter().enumerate() {
        let starter = round
            .moves
            .first()
            .map_or("?", |m| record.seat_name(m.actor.index()));
        ui::round_banner(out, i + 1, starter)?;
        writeln!(out, "{}", move_header())?;
        for m in &round.moves {
            writeln!(out, "{}", format_move_row(seats, m))?;
        }
        for m in &round.moves {
            writeln!(out, "  {}", narrate(seats, m))?;
            if !m.reason.is_empty() {
                writeln!(out, "    > {}", m.reason)?;
            }
        }
        writeln!(out, "{}", format_outcome(seats, round))?;
    }

    match &record.result {
        Some(result) => writeln!(out, "{}", format_result(seats, result))?,
        None => writeln!(out, "Game unfinished.")?,
    }
    writeln!(out)?;
    Ok(())
}
