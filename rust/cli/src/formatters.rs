//! Text rendering of moves, rounds and games for terminal output.
//!
//! Moves refer to seats by index, so every formatter takes the seat names in
//! registration order. An index with no name renders as `?`.
//!
//! ## Example
//!
//! ```rust
//! use roach_cli::formatters::{format_move_row, move_header, narrate};
//! use roach_engine::cards::CardType;
//! use roach_engine::player::PlayerId;
//! use roach_engine::round::Move;
//! use roach_engine::rules::ActionKind;
//!
//! let seats = vec!["ann".to_string(), "bo".to_string()];
//! let m = Move {
//!     actor: PlayerId(0),
//!     action: ActionKind::Play,
//!     target: Some(PlayerId(1)),
//!     card: Some(CardType::Rat),
//!     claim: Some(CardType::Bat),
//!     guess: None,
//!     reason: "bluff".into(),
//! };
//! assert_eq!(narrate(&seats, &m), "ann gives a RAT to bo and claims it is a BAT.");
//! assert_eq!(format_move_row(&seats, &m).len(), move_header().len());
//! ```

use roach_engine::cards::CardCounts;
use roach_engine::game::{GameResult, LossTally};
use roach_engine::player::PlayerId;
use roach_engine::round::{Move, RoundOutcome};
use roach_engine::rules::ActionKind;

pub const PLAYER_WIDTH: usize = 20;
pub const ACTION_WIDTH: usize = 7;
pub const CARD_WIDTH: usize = 9;
pub const GUESS_WIDTH: usize = 7;

/// Truncate to `width` characters, then right-justify.
///
/// ```rust
/// use roach_cli::formatters::rtrunc;
///
/// assert_eq!(rtrunc("RAT", 5), "  RAT");
/// assert_eq!(rtrunc("SCORPION", 4), "SCOR");
/// ```
pub fn rtrunc(s: &str, width: usize) -> String {
    let cut: String = s.chars().take(width).collect();
    format!("{:>width$}", cut, width = width)
}

fn seat(seats: &[String], id: PlayerId) -> &str {
    seats.get(id.index()).map_or("?", String::as_str)
}

fn opt_seat(seats: &[String], id: Option<PlayerId>) -> &str {
    id.map_or("", |id| seat(seats, id))
}

/// Sentence describing a move.
pub fn narrate(seats: &[String], m: &Move) -> String {
    let player = seat(seats, m.actor);
    let target = opt_seat(seats, m.target);
    let card = m.card.map(|c| c.name()).unwrap_or("card");
    let claim = m.claim.map(|c| c.name()).unwrap_or("?");
    match m.action {
        ActionKind::Forfeit => {
            format!("{} forfeits their turn with an invalid response.", player)
        }
        ActionKind::Play => format!(
            "{} gives a {} to {} and claims it is a {}.",
            player, card, target, claim
        ),
        ActionKind::Look => format!("{} looks at the {}.", player, card),
        ActionKind::Pass => format!(
            "{} passes the {} to {} and claims it is a {}.",
            player, card, target, claim
        ),
        ActionKind::Guess => {
            let claim_true = m.card.is_some() && m.card == m.claim;
            if m.guess_correct() == Some(true) {
                format!(
                    "{} correctly guessed that {} {} about the {}.",
                    player,
                    target,
                    if claim_true { "told the truth" } else { "lied" },
                    card
                )
            } else {
                format!(
                    "{} incorrectly thought that {} was {} about the {}. The claim was in fact {}.",
                    player,
                    target,
                    if claim_true { "lying" } else { "telling the truth" },
                    card,
                    if claim_true { "true" } else { "false" }
                )
            }
        }
    }
}

/// Column header matching [`format_move_row`].
pub fn move_header() -> String {
    [
        rtrunc("PLAYER", PLAYER_WIDTH),
        rtrunc("ACTION", ACTION_WIDTH),
        rtrunc("TARGET", PLAYER_WIDTH),
        rtrunc("CARD", CARD_WIDTH),
        rtrunc("CLAIM", CARD_WIDTH),
        rtrunc("GUESS", GUESS_WIDTH),
    ]
    .join(" ")
}

/// Fixed-width table row for a move.
pub fn format_move_row(seats: &[String], m: &Move) -> String {
    let guess = match m.guess {
        Some(true) => "TRUE",
        Some(false) => "FALSE",
        None => "",
    };
    [
        rtrunc(seat(seats, m.actor), PLAYER_WIDTH),
        rtrunc(m.action.as_str(), ACTION_WIDTH),
        rtrunc(opt_seat(seats, m.target), PLAYER_WIDTH),
        rtrunc(m.card.map(|c| c.name()).unwrap_or(""), CARD_WIDTH),
        rtrunc(m.claim.map(|c| c.name()).unwrap_or(""), CARD_WIDTH),
        rtrunc(guess, GUESS_WIDTH),
    ]
    .join(" ")
}

pub fn format_outcome(seats: &[String], outcome: &RoundOutcome) -> String {
    format!(
        "{} lost that round and takes the {}.",
        seat(seats, outcome.loser),
        outcome.card
    )
}

pub fn format_result(seats: &[String], result: &GameResult) -> String {
    format!(
        "Player {} loses: {}!",
        seat(seats, result.loser),
        result.reason
    )
}

/// One line per seat listing its face-up cards.
pub fn format_piles<'a, I>(piles: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a CardCounts)>,
{
    piles
        .into_iter()
        .map(|(name, pile)| format!("  {} has: {}.", name, pile))
        .collect()
}

pub fn format_tally(tally: &LossTally) -> String {
    format!("Losses: {}", tally)
}
