use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::GameError;

/// Number of distinct creature types in the deck.
pub const TYPE_COUNT: usize = 8;

/// Copies of each creature type in a full deck.
pub const CARDS_PER_TYPE: u8 = 8;

/// Size of the full deck (8 types x 8 cards).
pub const DECK_SIZE: usize = TYPE_COUNT * CARDS_PER_TYPE as usize;

/// Revealed copies of one type that end the game for their owner.
pub const LOSING_PILE_COUNT: u8 = 4;

/// One of the eight creature types printed on the cards.
///
/// Variants are declared in alphabetical order of their names so that the
/// derived `Ord` gives the stable display order used everywhere.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Bat,
    Cockroach,
    Fly,
    Frog,
    Rat,
    Scorpion,
    Spider,
    Stinkbug,
}

/// All card types in display order.
pub const ALL_CARD_TYPES: [CardType; TYPE_COUNT] = [
    CardType::Bat,
    CardType::Cockroach,
    CardType::Fly,
    CardType::Frog,
    CardType::Rat,
    CardType::Scorpion,
    CardType::Spider,
    CardType::Stinkbug,
];

impl CardType {
    pub fn name(self) -> &'static str {
        match self {
            CardType::Bat => "BAT",
            CardType::Cockroach => "COCKROACH",
            CardType::Fly => "FLY",
            CardType::Frog => "FROG",
            CardType::Rat => "RAT",
            CardType::Scorpion => "SCORPION",
            CardType::Spider => "SPIDER",
            CardType::Stinkbug => "STINKBUG",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when text does not name one of the eight card types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a card type")]
pub struct UnknownCardType(pub String);

impl FromStr for CardType {
    type Err = UnknownCardType;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_CARD_TYPES
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCardType(s.to_string()))
    }
}

/// A multiset of card types: a hidden hand or a face-up pile.
///
/// Backed by one counter per type, since the type domain is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCounts {
    counts: [u8; TYPE_COUNT],
}

impl CardCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[CardType]) -> Self {
        let mut counts = Self::new();
        for &card in cards {
            counts.add(card);
        }
        counts
    }

    pub fn count(&self, card: CardType) -> u8 {
        self.counts[card.index()]
    }

    pub fn add(&mut self, card: CardType) {
        self.counts[card.index()] += 1;
    }

    /// Removes one copy of `card`.
    ///
    /// # Errors
    ///
    /// [`GameError::CardUnderflow`] when no copy is present; the counts are
    /// left untouched.
    pub fn remove(&mut self, card: CardType) -> Result<(), GameError> {
        let slot = &mut self.counts[card.index()];
        if *slot == 0 {
            return Err(GameError::CardUnderflow { card });
        }
        *slot -= 1;
        Ok(())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CardType, u8)> + '_ {
        ALL_CARD_TYPES
            .iter()
            .map(|&t| (t, self.count(t)))
            .filter(|&(_, c)| c > 0)
    }

    pub fn present_types(&self) -> Vec<CardType> {
        self.iter().map(|(t, _)| t).collect()
    }

    /// The type with the highest count, ties broken by display order.
    pub fn max_count(&self) -> Option<(CardType, u8)> {
        self.iter()
            .fold(None, |best: Option<(CardType, u8)>, (t, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((t, c)),
            })
    }
}

impl fmt::Display for CardCounts {
    /// `"1x COCKROACH, 3x SCORPION"`; zero counts are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (card, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}x {}", count, card)?;
        }
        Ok(())
    }
}
