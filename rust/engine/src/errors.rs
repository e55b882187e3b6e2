use thiserror::Error;

use crate::cards::CardType;
use crate::player::PlayerId;

/// Fatal errors: the rules engine reached an unsound state or was driven
/// incorrectly. Malformed agent proposals never surface here; they become
/// forfeits (see [`crate::rules::RuleViolation`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No {card} left to remove")]
    CardUnderflow { card: CardType },
    #[error("Card total drifted to {actual} (expected {expected})")]
    ConservationViolated { expected: usize, actual: usize },
    #[error("Unknown player id {0}")]
    UnknownPlayer(PlayerId),
    #[error("At least {minimum} seats are required, got {actual}")]
    NotEnoughPlayers { minimum: usize, actual: usize },
    #[error("Seat name '{0}' is used twice")]
    DuplicateSeatName(String),
    #[error("Player {0} forfeited with an empty hand and no card in flight")]
    EmptyHandForfeit(PlayerId),
    #[error("No card in flight")]
    NoCardInFlight,
    #[error("Round already resolved")]
    RoundComplete,
    #[error("Game already over")]
    GameOver,
    #[error("{seats} seats but {chunks} dealt hands")]
    DealMismatch { seats: usize, chunks: usize },
    #[error("Expected {expected} agents, got {actual}")]
    AgentCountMismatch { expected: usize, actual: usize },
}
