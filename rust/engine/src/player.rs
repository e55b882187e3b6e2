use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::CardCounts;

/// Stable seat identifier: the seat's index in registration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant: a private hand and a public face-up pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Display name, unique within a game
    name: String,
    /// Face-down cards only this seat may see
    hand: CardCounts,
    /// Face-up cards visible to everyone
    revealed: CardCounts,
}

impl Seat {
    pub fn new(name: impl Into<String>, hand: CardCounts) -> Self {
        Self {
            name: name.into(),
            hand,
            revealed: CardCounts::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &CardCounts {
        &self.hand
    }
    pub fn revealed(&self) -> &CardCounts {
        &self.revealed
    }

    pub(crate) fn hand_mut(&mut self) -> &mut CardCounts {
        &mut self.hand
    }
    pub(crate) fn revealed_mut(&mut self) -> &mut CardCounts {
        &mut self.revealed
    }
}
