//! The boundary between the rules engine and whatever decides a seat's moves.
//!
//! The engine hands an [`Agent`] a [`PlayerView`] and receives a raw
//! [`Proposal`]. Proposals are untrusted: every field is optional and free
//! text, and anything the move validator rejects ends the round as a forfeit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardCounts, CardType};
use crate::player::PlayerId;
use crate::rules::Phase;

/// A raw, unvalidated move proposal.
///
/// Which fields are required depends on the [`Phase`]:
///
/// | Phase        | Fields                                  |
/// |--------------|-----------------------------------------|
/// | Opening      | `card`, `target`, `claim`, `reason`     |
/// | ForcedGuess  | `guess`, `reason`                       |
/// | MustPass     | `target`, `claim`, `reason`             |
/// | FreeChoice   | `action` (LOOK or GUESS), `guess` when guessing, `reason` |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub claim: Option<String>,
    #[serde(default)]
    pub guess: Option<GuessValue>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Proposal {
    pub fn play(card: CardType, target: &str, claim: CardType, reason: &str) -> Self {
        Self {
            action: Some("PLAY".into()),
            card: Some(card.name().into()),
            target: Some(target.into()),
            claim: Some(claim.name().into()),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn look(reason: &str) -> Self {
        Self {
            action: Some("LOOK".into()),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn pass(target: &str, claim: CardType, reason: &str) -> Self {
        Self {
            action: Some("PASS".into()),
            target: Some(target.into()),
            claim: Some(claim.name().into()),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// `truthful` asserts that the pending claim is true.
    pub fn guess(truthful: bool, reason: &str) -> Self {
        Self {
            action: Some("GUESS".into()),
            guess: Some(GuessValue::Bool(truthful)),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// A guess as delivered by an agent: a real boolean, `0`/`1`, or
/// boolean-like text such as `"TRUE"`, `"false"` or `"yes"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GuessValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent produced no proposal: {0}")]
    NoProposal(String),
    #[error("agent response could not be parsed: {0}")]
    Unparseable(String),
}

/// One PLAY or PASS claim made earlier in the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub from: String,
    pub to: String,
    pub claim: CardType,
}

/// Everything a seat may know when asked to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: PlayerId,
    pub name: String,
    pub phase: Phase,
    /// The calling seat's own hand
    pub hand: CardCounts,
    /// Face-up piles of every seat, in registration order
    pub revealed: Vec<(String, CardCounts)>,
    /// Seat names that have not held the card this round
    pub targets: Vec<String>,
    /// Claims of the round in progress, oldest first
    pub claims: Vec<Claim>,
    /// The true type of the card in flight, once this seat has looked at it
    pub looked_card: Option<CardType>,
}

impl PlayerView {
    /// The claim currently awaiting judgement.
    pub fn pending_claim(&self) -> Option<&Claim> {
        self.claims.last()
    }

    pub fn revealed_of(&self, name: &str) -> Option<&CardCounts> {
        self.revealed
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }
}

/// Decision-maker for one seat.
///
/// Called once per turn, strictly sequentially. An `Err` is not fatal: the
/// engine records it as a forfeit of the current round.
pub trait Agent {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError>;

    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        (**self).propose(view)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
