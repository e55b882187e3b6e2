use std::collections::HashSet;

use crate::cards::{CardCounts, CardType, DECK_SIZE, LOSING_PILE_COUNT};
use crate::errors::GameError;
use crate::game::LossReason;
use crate::player::{PlayerId, Seat};

/// Authoritative card state of one game: every seat's hand and face-up pile.
///
/// Cards in flight during a round are counted by nobody; see
/// [`Table::verify_conservation`] for when the 64-card total must hold.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
}

impl Table {
    /// Builds a table from seat names and one dealt chunk per seat.
    pub fn from_deal(names: &[String], chunks: Vec<Vec<CardType>>) -> Result<Self, GameError> {
        if names.len() != chunks.len() {
            return Err(GameError::DealMismatch {
                seats: names.len(),
                chunks: chunks.len(),
            });
        }
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateSeatName(name.clone()));
            }
        }
        let seats = names
            .iter()
            .zip(chunks)
            .map(|(name, cards)| Seat::new(name.clone(), CardCounts::from_cards(&cards)))
            .collect();
        Ok(Self { seats })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.seats.len()).map(PlayerId)
    }

    pub fn seat(&self, id: PlayerId) -> Result<&Seat, GameError> {
        self.seats.get(id.index()).ok_or(GameError::UnknownPlayer(id))
    }

    fn seat_mut(&mut self, id: PlayerId) -> Result<&mut Seat, GameError> {
        self.seats
            .get_mut(id.index())
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub fn seat_by_name(&self, name: &str) -> Option<PlayerId> {
        self.seats
            .iter()
            .position(|s| s.name() == name)
            .map(PlayerId)
    }

    pub fn name(&self, id: PlayerId) -> Result<&str, GameError> {
        self.seat(id).map(Seat::name)
    }

    pub fn hand(&self, id: PlayerId) -> Result<&CardCounts, GameError> {
        self.seat(id).map(Seat::hand)
    }

    pub fn revealed(&self, id: PlayerId) -> Result<&CardCounts, GameError> {
        self.seat(id).map(Seat::revealed)
    }

    /// Takes one `card` out of a seat's hand (it is then in flight).
    pub fn take_from_hand(&mut self, id: PlayerId, card: CardType) -> Result<(), GameError> {
        self.seat_mut(id)?.hand_mut().remove(card)
    }

    /// Lays `card` face up in front of a seat.
    pub fn reveal(&mut self, id: PlayerId, card: CardType) -> Result<(), GameError> {
        self.seat_mut(id)?.revealed_mut().add(card);
        Ok(())
    }

    /// Cards held in hands plus cards face up.
    pub fn total_cards(&self) -> usize {
        self.seats
            .iter()
            .map(|s| s.hand().total() + s.revealed().total())
            .sum()
    }

    /// Checks the 64-card total. Only meaningful between rounds, when no card
    /// is in flight.
    pub fn verify_conservation(&self) -> Result<(), GameError> {
        let actual = self.total_cards();
        if actual != DECK_SIZE {
            return Err(GameError::ConservationViolated {
                expected: DECK_SIZE,
                actual,
            });
        }
        Ok(())
    }

    /// First losing seat in registration order: empty hands are scanned
    /// before four-of-a-kind piles.
    pub fn find_loser(&self) -> Option<(PlayerId, LossReason)> {
        let empty = self
            .player_ids()
            .zip(&self.seats)
            .find(|(_, seat)| seat.hand().is_empty())
            .map(|(id, _)| (id, LossReason::EmptyHand));
        empty.or_else(|| {
            self.player_ids().zip(&self.seats).find_map(|(id, seat)| {
                seat.revealed()
                    .iter()
                    .find(|&(_, count)| count >= LOSING_PILE_COUNT)
                    .map(|(card, _)| (id, LossReason::FourOfAKind(card)))
            })
        })
    }
}
