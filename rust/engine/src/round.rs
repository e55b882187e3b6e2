//! One round: a single card travelling from its PLAY to a GUESS or FORFEIT.
//!
//! There is no explicit state enum. The phase is derived from the size of the
//! remaining target pool and the previous move (see [`Phase::derive`]), and
//! every proposal is validated and applied atomically, so a round can be
//! abandoned after any completed move without rollback.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::agent::{AgentError, Claim, PlayerView, Proposal};
use crate::cards::CardType;
use crate::errors::GameError;
use crate::player::PlayerId;
use crate::rules::{validate_proposal, Action, ActionKind, Phase, RuleContext, RuleViolation};
use crate::table::Table;

/// An applied move. Append-only within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Seat that made the move
    pub actor: PlayerId,
    pub action: ActionKind,
    /// Receiver for PLAY/PASS; the claimant for LOOK/GUESS
    #[serde(default)]
    pub target: Option<PlayerId>,
    /// The physical card; unset only for a forfeit that never resolved one
    #[serde(default)]
    pub card: Option<CardType>,
    /// The claim made (PLAY/PASS) or judged (LOOK/GUESS)
    #[serde(default)]
    pub claim: Option<CardType>,
    /// GUESS only: the claim was asserted to be true
    #[serde(default)]
    pub guess: Option<bool>,
    /// Agent's stated reason, or the diagnostic for a forfeit
    #[serde(default)]
    pub reason: String,
}

impl Move {
    fn new(actor: PlayerId, action: ActionKind, reason: String) -> Self {
        Self {
            actor,
            action,
            target: None,
            card: None,
            claim: None,
            guess: None,
            reason,
        }
    }

    /// For a GUESS: whether the guesser judged the claim correctly.
    pub fn guess_correct(&self) -> Option<bool> {
        match (self.action, self.guess, self.card, self.claim) {
            (ActionKind::Guess, Some(guess), Some(card), Some(claim)) => {
                Some(guess == (card == claim))
            }
            _ => None,
        }
    }

    pub fn is_claim(&self) -> bool {
        matches!(self.action, ActionKind::Play | ActionKind::Pass)
    }
}

/// How a round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Correct guess: the last claimant takes the card
    ClaimantCaught,
    /// Wrong guess: the guesser takes the card
    GuesserWrong,
    /// Invalid proposal: the forfeiting seat takes the card
    Forfeit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Seat that took the card face up; starts the next round
    pub loser: PlayerId,
    pub card: CardType,
    pub resolution: Resolution,
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone)]
pub struct Round {
    starter: PlayerId,
    current: PlayerId,
    seat_count: usize,
    /// Seats that have not seen the card yet, registration order
    targets: Vec<PlayerId>,
    in_flight: Option<CardType>,
    moves: Vec<Move>,
    complete: bool,
}

impl Round {
    pub fn new(starter: PlayerId, seat_count: usize) -> Self {
        let targets = (0..seat_count)
            .map(PlayerId)
            .filter(|&p| p != starter)
            .collect();
        Self {
            starter,
            current: starter,
            seat_count,
            targets,
            in_flight: None,
            moves: Vec::new(),
            complete: false,
        }
    }

    pub fn starter(&self) -> PlayerId {
        self.starter
    }
    pub fn current(&self) -> PlayerId {
        self.current
    }
    pub fn targets(&self) -> &[PlayerId] {
        &self.targets
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    pub fn in_flight(&self) -> Option<CardType> {
        self.in_flight
    }
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn phase(&self) -> Phase {
        Phase::derive(
            self.targets.len(),
            self.seat_count,
            self.moves.last().map(|m| m.action),
        )
    }

    /// The most recent PLAY or PASS.
    pub fn pending_claim(&self) -> Option<&Move> {
        self.moves.iter().rev().find(|m| m.is_claim())
    }

    pub fn claims(&self, table: &Table) -> Result<Vec<Claim>, GameError> {
        let mut claims = Vec::new();
        for m in self.moves.iter().filter(|m| m.is_claim()) {
            let (Some(to), Some(claim)) = (m.target, m.claim) else {
                continue;
            };
            claims.push(Claim {
                from: table.name(m.actor)?.to_string(),
                to: table.name(to)?.to_string(),
                claim,
            });
        }
        Ok(claims)
    }

    /// Snapshot for the seat to move. Other seats' hands are never included.
    pub fn view(&self, table: &Table) -> Result<PlayerView, GameError> {
        let phase = self.phase();
        let targets = self
            .targets
            .iter()
            .map(|&t| table.name(t).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PlayerView {
            seat: self.current,
            name: table.name(self.current)?.to_string(),
            phase,
            hand: *table.hand(self.current)?,
            revealed: table
                .seats()
                .iter()
                .map(|s| (s.name().to_string(), *s.revealed()))
                .collect(),
            targets,
            claims: self.claims(table)?,
            looked_card: match phase {
                Phase::MustPass => self.in_flight,
                _ => None,
            },
        })
    }

    /// Validates and applies the current seat's response.
    ///
    /// Returns the outcome once the move ends the round. A rejected or
    /// missing proposal ends the round as a forfeit; only invariant
    /// violations are returned as errors.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        table: &mut Table,
        response: Result<Proposal, AgentError>,
        rng: &mut R,
    ) -> Result<Option<RoundOutcome>, GameError> {
        if self.complete {
            return Err(GameError::RoundComplete);
        }
        let phase = self.phase();
        let hand = *table.hand(self.current)?;
        let (verdict, reason) = match response {
            Ok(proposal) => {
                let ctx = RuleContext {
                    table: &*table,
                    hand: &hand,
                    targets: &self.targets,
                };
                (
                    validate_proposal(phase, &ctx, &proposal),
                    proposal.reason.unwrap_or_default(),
                )
            }
            Err(e) => (Err(RuleViolation::NoProposal(e.to_string())), String::new()),
        };

        match verdict {
            Ok(Action::Play {
                card,
                target,
                claim,
            }) => {
                table.take_from_hand(self.current, card)?;
                self.in_flight = Some(card);
                let mut m = Move::new(self.current, ActionKind::Play, reason);
                m.target = Some(target);
                m.card = Some(card);
                m.claim = Some(claim);
                self.record(m);
                self.hand_to(target);
                Ok(None)
            }
            Ok(Action::Look) => {
                let card = self.in_flight.ok_or(GameError::NoCardInFlight)?;
                let (claimant, claim) = self.claimant()?;
                let mut m = Move::new(self.current, ActionKind::Look, reason);
                m.target = Some(claimant);
                m.card = Some(card);
                m.claim = Some(claim);
                self.record(m);
                Ok(None)
            }
            Ok(Action::Pass { target, claim }) => {
                let card = self.in_flight.ok_or(GameError::NoCardInFlight)?;
                let mut m = Move::new(self.current, ActionKind::Pass, reason);
                m.target = Some(target);
                m.card = Some(card);
                m.claim = Some(claim);
                self.record(m);
                self.hand_to(target);
                Ok(None)
            }
            Ok(Action::Guess { truthful }) => {
                let card = self.in_flight.ok_or(GameError::NoCardInFlight)?;
                let (claimant, claim) = self.claimant()?;
                let correct = truthful == (card == claim);
                let (loser, resolution) = if correct {
                    (claimant, Resolution::ClaimantCaught)
                } else {
                    (self.current, Resolution::GuesserWrong)
                };
                table.reveal(loser, card)?;
                let mut m = Move::new(self.current, ActionKind::Guess, reason);
                m.target = Some(claimant);
                m.card = Some(card);
                m.claim = Some(claim);
                m.guess = Some(truthful);
                self.record(m);
                Ok(Some(self.finish(loser, card, resolution)))
            }
            Err(violation) => {
                let card = match self.in_flight {
                    Some(card) => card,
                    None => {
                        // PLAY itself failed: the forfeiting seat gives up a random card from hand
                        let card = *hand
                            .present_types()
                            .choose(rng)
                            .ok_or(GameError::EmptyHandForfeit(self.current))?;
                        table.take_from_hand(self.current, card)?;
                        card
                    }
                };
                warn!(
                    seat = %self.current,
                    card = %card,
                    reason = %violation,
                    "proposal rejected, round forfeited"
                );
                table.reveal(self.current, card)?;
                let mut m = Move::new(self.current, ActionKind::Forfeit, violation.to_string());
                m.card = Some(card);
                self.record(m);
                Ok(Some(self.finish(self.current, card, Resolution::Forfeit)))
            }
        }
    }

    fn claimant(&self) -> Result<(PlayerId, CardType), GameError> {
        self.pending_claim()
            .and_then(|m| m.claim.map(|c| (m.actor, c)))
            .ok_or(GameError::NoCardInFlight)
    }

    fn record(&mut self, m: Move) {
        debug!(
            seat = %m.actor,
            action = m.action.as_str(),
            target = ?m.target,
            claim = ?m.claim,
            "move applied"
        );
        self.moves.push(m);
    }

    fn hand_to(&mut self, target: PlayerId) {
        self.current = target;
        self.targets.retain(|&t| t != target);
    }

    fn finish(&mut self, loser: PlayerId, card: CardType, resolution: Resolution) -> RoundOutcome {
        self.complete = true;
        self.current = loser;
        RoundOutcome {
            loser,
            card,
            resolution,
            moves: self.moves.clone(),
        }
    }
}
