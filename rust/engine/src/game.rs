use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::player::PlayerId;

/// Why a seat lost the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "card", rename_all = "snake_case")]
pub enum LossReason {
    /// The seat had to start a round with no cards in hand
    EmptyHand,
    /// Four face-up copies of one type in front of the seat
    FourOfAKind(CardType),
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossReason::EmptyHand => f.write_str("No more cards in hand"),
            LossReason::FourOfAKind(card) => write!(f, "4x {}", card),
        }
    }
}

/// The declared loser of a finished game; every other seat wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub loser: PlayerId,
    pub reason: LossReason,
    /// Rounds resolved before the loss was detected
    pub rounds: u32,
}

/// Losses per seat name, accumulated across many games.
///
/// Owned by whoever runs the series and handed to each game's bookkeeping;
/// never global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LossTally {
    losses: BTreeMap<String, u32>,
    games: u32,
}

impl LossTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `name` is listed even with zero losses.
    pub fn register(&mut self, name: &str) {
        self.losses.entry(name.to_string()).or_insert(0);
    }

    pub fn record(&mut self, loser: &str) {
        *self.losses.entry(loser.to_string()).or_insert(0) += 1;
        self.games += 1;
    }

    pub fn losses(&self, name: &str) -> u32 {
        self.losses.get(name).copied().unwrap_or(0)
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.losses.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl fmt::Display for LossTally {
    /// `"alice: 2, bob: 0"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, n)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, n)?;
        }
        Ok(())
    }
}
