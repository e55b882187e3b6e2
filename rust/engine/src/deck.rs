use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{CardType, ALL_CARD_TYPES, CARDS_PER_TYPE, DECK_SIZE};

/// The 64-card population in type order, 8 of each.
pub fn full_deck() -> Vec<CardType> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &t in &ALL_CARD_TYPES {
        for _ in 0..CARDS_PER_TYPE {
            v.push(t);
        }
    }
    v
}

/// Splits `cards` into `players` contiguous chunks whose sizes differ by at
/// most one; the first `len % players` chunks receive the extra card.
///
/// Returns no chunks when `players` is zero.
pub fn deal_equally(cards: &[CardType], players: usize) -> Vec<Vec<CardType>> {
    if players == 0 {
        return Vec::new();
    }
    let base = cards.len() / players;
    let extra = cards.len() % players;
    let mut chunks = Vec::with_capacity(players);
    let mut start = 0;
    for i in 0..players {
        let size = base + usize::from(i < extra);
        chunks.push(cards[start..start + size].to_vec());
        start += size;
    }
    chunks
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<CardType>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restores the full population and shuffles it uniformly.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn cards(&self) -> &[CardType] {
        &self.cards
    }

    pub fn deal_equally(&self, players: usize) -> Vec<Vec<CardType>> {
        deal_equally(&self.cards, players)
    }
}
