use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{GuessValue, Proposal};
use crate::cards::{CardCounts, CardType};
use crate::player::PlayerId;
use crate::table::Table;

/// Kind of a recorded move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Play,
    Look,
    Pass,
    Guess,
    Forfeit,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Play => "PLAY",
            ActionKind::Look => "LOOK",
            ActionKind::Pass => "PASS",
            ActionKind::Guess => "GUESS",
            ActionKind::Forfeit => "FORFEIT",
        }
    }
}

/// What the seat to move is allowed to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No card in flight yet: PLAY from hand
    Opening,
    /// Everyone else has seen the card: GUESS on the last claim
    ForcedGuess,
    /// This seat just looked: PASS the card on
    MustPass,
    /// LOOK (then pass) or GUESS now
    FreeChoice,
}

impl Phase {
    /// Derives the phase from the size of the remaining target pool and the
    /// previous move, in the fixed priority order Opening, ForcedGuess,
    /// MustPass, FreeChoice.
    ///
    /// ```
    /// use roach_engine::rules::{ActionKind, Phase};
    ///
    /// assert_eq!(Phase::derive(2, 3, None), Phase::Opening);
    /// assert_eq!(Phase::derive(0, 3, Some(ActionKind::Pass)), Phase::ForcedGuess);
    /// assert_eq!(Phase::derive(1, 3, Some(ActionKind::Look)), Phase::MustPass);
    /// assert_eq!(Phase::derive(1, 3, Some(ActionKind::Play)), Phase::FreeChoice);
    /// ```
    pub fn derive(
        remaining_targets: usize,
        total_players: usize,
        last_action: Option<ActionKind>,
    ) -> Phase {
        if remaining_targets == total_players.saturating_sub(1) {
            Phase::Opening
        } else if remaining_targets == 0 {
            Phase::ForcedGuess
        } else if last_action == Some(ActionKind::Look) {
            Phase::MustPass
        } else {
            Phase::FreeChoice
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Phase::Opening => "PLAY",
            Phase::ForcedGuess => "GUESS",
            Phase::MustPass => "PASS",
            Phase::FreeChoice => "LOOK or GUESS",
        }
    }
}

/// A proposal that passed validation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Play {
        card: CardType,
        target: PlayerId,
        claim: CardType,
    },
    Look,
    Pass {
        target: PlayerId,
        claim: CardType,
    },
    /// `truthful`: the guesser asserts the pending claim is true
    Guess { truthful: bool },
}

/// Why a proposal was rejected. Its text becomes the forfeit reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Missing key '{0}' in response.")]
    MissingField(&'static str),
    #[error("Action {found} is not allowed now, expected {expected}.")]
    UnexpectedAction {
        found: String,
        expected: &'static str,
    },
    #[error("Player {0} is not a valid target.")]
    IllegalTarget(String),
    #[error("{0} is an invalid type.")]
    UnknownCardType(String),
    #[error("No {0} in hand.")]
    CardNotHeld(CardType),
    #[error("Guess must be either TRUE or FALSE, got '{0}'.")]
    InvalidGuess(String),
    #[error("No usable response: {0}")]
    NoProposal(String),
}

/// The state a proposal is checked against.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub table: &'a Table,
    /// Hand of the seat to move
    pub hand: &'a CardCounts,
    /// Seats that may still receive the card this round
    pub targets: &'a [PlayerId],
}

/// Validates `proposal` field by field for `phase`.
///
/// Required fields are checked first, then the target, then card types, then
/// that a played card is actually held.
///
/// # Examples
///
/// ```
/// use roach_engine::agent::Proposal;
/// use roach_engine::cards::CardType;
/// use roach_engine::deck::full_deck;
/// use roach_engine::player::PlayerId;
/// use roach_engine::rules::{validate_proposal, Action, Phase, RuleContext, RuleViolation};
/// use roach_engine::table::Table;
///
/// let names = vec!["a".to_string(), "b".to_string()];
/// let deck = full_deck();
/// let table = Table::from_deal(&names, vec![deck[..32].to_vec(), deck[32..].to_vec()]).unwrap();
/// let ctx = RuleContext {
///     table: &table,
///     hand: table.hand(PlayerId(0)).unwrap(),
///     targets: &[PlayerId(1)],
/// };
///
/// // seat "a" holds the first 32 cards of the unshuffled deck: bats through frogs
/// let ok = validate_proposal(
///     Phase::Opening,
///     &ctx,
///     &Proposal::play(CardType::Bat, "b", CardType::Rat, "bluff"),
/// );
/// assert_eq!(
///     ok,
///     Ok(Action::Play { card: CardType::Bat, target: PlayerId(1), claim: CardType::Rat })
/// );
///
/// let absent = validate_proposal(
///     Phase::Opening,
///     &ctx,
///     &Proposal::play(CardType::Rat, "b", CardType::Rat, "honest"),
/// );
/// assert_eq!(absent, Err(RuleViolation::CardNotHeld(CardType::Rat)));
/// ```
pub fn validate_proposal(
    phase: Phase,
    ctx: &RuleContext<'_>,
    proposal: &Proposal,
) -> Result<Action, RuleViolation> {
    match phase {
        Phase::Opening => {
            check_action(proposal, phase, &["PLAY"])?;
            let card = required(&proposal.card, "card")?;
            let target = required(&proposal.target, "target")?;
            let claim = required(&proposal.claim, "claim")?;
            required(&proposal.reason, "reason")?;
            let target = resolve_target(ctx, target)?;
            let card = parse_card(card)?;
            if ctx.hand.count(card) == 0 {
                return Err(RuleViolation::CardNotHeld(card));
            }
            let claim = parse_card(claim)?;
            Ok(Action::Play {
                card,
                target,
                claim,
            })
        }
        Phase::MustPass => {
            check_action(proposal, phase, &["PASS"])?;
            let target = required(&proposal.target, "target")?;
            let claim = required(&proposal.claim, "claim")?;
            required(&proposal.reason, "reason")?;
            let target = resolve_target(ctx, target)?;
            let claim = parse_card(claim)?;
            Ok(Action::Pass { target, claim })
        }
        Phase::ForcedGuess => {
            check_action(proposal, phase, &["GUESS"])?;
            guess_action(proposal)
        }
        Phase::FreeChoice => {
            let action = required(&proposal.action, "action")?;
            match normalize(action).as_str() {
                "LOOK" => {
                    required(&proposal.reason, "reason")?;
                    Ok(Action::Look)
                }
                "GUESS" => guess_action(proposal),
                _ => Err(RuleViolation::UnexpectedAction {
                    found: action.to_string(),
                    expected: phase.expected(),
                }),
            }
        }
    }
}

/// Normalizes boolean-like input to a canonical truth value.
///
/// ```
/// use roach_engine::agent::GuessValue;
/// use roach_engine::rules::parse_guess;
///
/// assert_eq!(parse_guess(&GuessValue::Bool(false)), Ok(false));
/// assert_eq!(parse_guess(&GuessValue::Number(1)), Ok(true));
/// assert_eq!(parse_guess(&GuessValue::Text(" true ".into())), Ok(true));
/// assert!(parse_guess(&GuessValue::Text("maybe".into())).is_err());
/// ```
pub fn parse_guess(value: &GuessValue) -> Result<bool, RuleViolation> {
    match value {
        GuessValue::Bool(b) => Ok(*b),
        GuessValue::Number(1) => Ok(true),
        GuessValue::Number(0) => Ok(false),
        GuessValue::Number(n) => Err(RuleViolation::InvalidGuess(n.to_string())),
        GuessValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "0" => Ok(false),
            _ => Err(RuleViolation::InvalidGuess(s.clone())),
        },
    }
}

fn guess_action(proposal: &Proposal) -> Result<Action, RuleViolation> {
    let guess = proposal
        .guess
        .as_ref()
        .ok_or(RuleViolation::MissingField("guess"))?;
    required(&proposal.reason, "reason")?;
    let truthful = parse_guess(guess)?;
    Ok(Action::Guess { truthful })
}

fn required<'p>(field: &'p Option<String>, name: &'static str) -> Result<&'p str, RuleViolation> {
    field.as_deref().ok_or(RuleViolation::MissingField(name))
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// An explicit action must match the phase; an absent one is implied.
fn check_action(proposal: &Proposal, phase: Phase, allowed: &[&str]) -> Result<(), RuleViolation> {
    match proposal.action.as_deref() {
        Some(a) if !allowed.contains(&normalize(a).as_str()) => {
            Err(RuleViolation::UnexpectedAction {
                found: a.to_string(),
                expected: phase.expected(),
            })
        }
        _ => Ok(()),
    }
}

fn resolve_target(ctx: &RuleContext<'_>, name: &str) -> Result<PlayerId, RuleViolation> {
    ctx.table
        .seat_by_name(name.trim())
        .filter(|id| ctx.targets.contains(id))
        .ok_or_else(|| RuleViolation::IllegalTarget(name.to_string()))
}

fn parse_card(s: &str) -> Result<CardType, RuleViolation> {
    s.parse()
        .map_err(|_| RuleViolation::UnknownCardType(s.to_string()))
}
