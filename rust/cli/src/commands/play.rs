//! # Play Command
//!
//! One game at the console. The first seat is the user, typing moves on
//! stdin; every other seat is driven by an agent. Each applied move is
//! narrated on stdout, and prompts and input errors go to stderr.

use crate::commands::{agent_seat_names, agent_seed, resolve_config};
use crate::error::CliError;
use crate::formatters::{format_outcome, format_piles, format_result, narrate};
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_human_input};
use roach_ai::create_agent;
use roach_engine::agent::{Agent, AgentError, PlayerView, Proposal};
use roach_engine::engine::{Engine, Step};
use roach_engine::player::PlayerId;
use roach_engine::rules::Phase;
use std::io::{BufRead, Write};

pub const HUMAN_SEAT: PlayerId = PlayerId(0);
const HUMAN_NAME: &str = "you";

/// Agent reading moves from a console.
///
/// Re-prompts until a line parses. Quitting (or end of input) makes
/// `propose` fail and sets [`HumanAgent::has_quit`].
pub struct HumanAgent<'a> {
    input: &'a mut dyn BufRead,
    prompt: &'a mut dyn Write,
    quit: bool,
}

impl<'a> HumanAgent<'a> {
    pub fn new(input: &'a mut dyn BufRead, prompt: &'a mut dyn Write) -> Self {
        Self {
            input,
            prompt,
            quit: false,
        }
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    fn describe(&mut self, view: &PlayerView) -> std::io::Result<()> {
        writeln!(self.prompt, "Your hand: {}", view.hand)?;
        if let Some(claim) = view.pending_claim() {
            writeln!(
                self.prompt,
                "{} passed you a card and claims it is a {}.",
                claim.from, claim.claim
            )?;
        }
        if let Some(card) = view.looked_card {
            writeln!(self.prompt, "You looked: it is a {}.", card)?;
        }
        if !view.targets.is_empty() {
            writeln!(self.prompt, "Targets: {}", view.targets.join(", "))?;
        }
        let hint = match view.phase {
            Phase::Opening => "play <card> <target> <claim>",
            Phase::MustPass => "pass <target> <claim>",
            Phase::ForcedGuess => "guess true|false",
            Phase::FreeChoice => "look | guess true|false",
        };
        write!(self.prompt, "Enter move ({}, q to quit): ", hint)?;
        self.prompt.flush()
    }
}

impl Agent for HumanAgent<'_> {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        let io_failed = |e: std::io::Error| AgentError::NoProposal(e.to_string());
        self.describe(view).map_err(io_failed)?;
        loop {
            let Some(line) = read_stdin_line(self.input) else {
                self.quit = true;
                return Err(AgentError::NoProposal("end of input".into()));
            };
            match parse_human_input(&line) {
                ParseResult::Proposal(p) => return Ok(p),
                ParseResult::Quit => {
                    self.quit = true;
                    return Err(AgentError::NoProposal("player quit".into()));
                }
                ParseResult::Invalid(msg) => {
                    writeln!(self.prompt, "Error: {}", msg).map_err(io_failed)?;
                    write!(self.prompt, "Try again: ").map_err(io_failed)?;
                    self.prompt.flush().map_err(io_failed)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        HUMAN_NAME
    }
}

pub fn handle_play_command(
    seats: Option<u8>,
    seed: Option<u64>,
    agent: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = resolve_config(seats, seed, agent)?;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut names = vec![HUMAN_NAME.to_string()];
    names.extend(agent_seat_names(&cfg.agent, 1..cfg.seats));
    let mut bots = (1..cfg.seats)
        .map(|seat| create_agent(&cfg.agent, agent_seed(seed, seat)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut human = HumanAgent::new(stdin, err);

    let mut engine = Engine::new(names.clone(), Some(seed))?;
    writeln!(
        out,
        "play: seats={} agent={} seed={}",
        cfg.seats, cfg.agent, seed
    )?;
    announce_round(&engine, out)?;

    while !engine.is_over() {
        let seat = engine.current_seat()?;
        let view = engine.view()?;
        let response = if seat == HUMAN_SEAT {
            let response = human.propose(&view);
            if human.has_quit() {
                writeln!(out, "Game abandoned.")?;
                return Ok(());
            }
            response
        } else {
            bots[seat.index() - 1].propose(&view)
        };

        match engine.submit(response)? {
            Step::Moved(m) => writeln!(out, "{}", narrate(&names, &m))?,
            Step::RoundOver(outcome) => {
                if let Some(m) = outcome.moves.last() {
                    writeln!(out, "{}", narrate(&names, m))?;
                }
                writeln!(out, "{}", format_outcome(&names, &outcome))?;
                announce_round(&engine, out)?;
            }
            Step::GameOver { outcome, result } => {
                if let Some(m) = outcome.moves.last() {
                    writeln!(out, "{}", narrate(&names, m))?;
                }
                writeln!(out, "{}", format_outcome(&names, &outcome))?;
                writeln!(out, "{}", format_result(&names, &result))?;
            }
        }
    }

    writeln!(out, "Face-up cards:")?;
    let piles = engine
        .table()
        .seats()
        .iter()
        .map(|s| (s.name(), s.revealed()));
    for line in format_piles(piles) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn announce_round(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let starter = engine.table().name(engine.round().starter())?;
    writeln!(out, "New round, {} goes first.", starter)?;
    Ok(())
}
