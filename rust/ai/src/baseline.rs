//! Card-counting heuristic agent.
//!
//! Counts every copy of a type it can see (its own hand plus all face-up
//! piles) to judge how plausible a claim is, and aims cards at the seat whose
//! pile is closest to four of a kind.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roach_engine::agent::{Agent, AgentError, PlayerView, Proposal};
use roach_engine::cards::{CardType, ALL_CARD_TYPES, CARDS_PER_TYPE, LOSING_PILE_COUNT};
use roach_engine::rules::Phase;

/// How often the opening claim is a lie.
const BLUFF_RATE: f64 = 0.4;

/// Below this many unseen copies a claim is considered a lie.
const BELIEVE_THRESHOLD: u8 = 3;

/// Reference heuristic used as the default opponent.
///
/// # Strategy
///
/// - **Opening:** plays its most plentiful type at the seat with the largest
///   face-up pile, bluffing some of the time with the type that seat fears most.
/// - **Free choice:** looks and passes the card on when a wrong guess would
///   take its own pile dangerously close to four; otherwise guesses.
/// - **Guessing:** a claim is believed while enough unseen copies of the
///   claimed type remain; a claim for a type with no unseen copy is a lie.
/// - **Passing:** passes the looked-at card to the seat most hurt by it.
///
/// # Example
///
/// ```rust
/// use roach_ai::baseline::BaselineAgent;
/// use roach_engine::agent::Agent;
///
/// let agent = BaselineAgent::new(42);
/// assert_eq!(agent.name(), "baseline");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAgent {
    rng: ChaCha20Rng,
}

impl BaselineAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Copies of `card` this seat can account for.
    fn visible(view: &PlayerView, card: CardType) -> u8 {
        let piles: u8 = view.revealed.iter().map(|(_, p)| p.count(card)).sum();
        view.hand.count(card) + piles
    }

    /// Copies of `card` that could still be the card in flight.
    fn unseen(view: &PlayerView, card: CardType) -> u8 {
        CARDS_PER_TYPE.saturating_sub(Self::visible(view, card))
    }

    fn own_pile(view: &PlayerView, card: CardType) -> u8 {
        view.revealed_of(&view.name).map_or(0, |p| p.count(card))
    }

    /// Target whose face-up pile holds the most of `card`, earliest on ties.
    fn most_exposed(view: &PlayerView, card: Option<CardType>) -> Option<&str> {
        let score = |name: &str| {
            view.revealed_of(name).map_or(0, |p| match card {
                Some(c) => p.count(c),
                None => p.max_count().map_or(0, |(_, n)| n),
            })
        };
        let mut best: Option<(&str, u8)> = None;
        for name in &view.targets {
            let s = score(name);
            if best.is_none_or(|(_, b)| s > b) {
                best = Some((name.as_str(), s));
            }
        }
        best.map(|(name, _)| name)
    }

    fn judge(view: &PlayerView) -> Result<(bool, String), AgentError> {
        let claim = view
            .pending_claim()
            .ok_or_else(|| AgentError::NoProposal("no claim to judge".into()))?;
        let unseen = Self::unseen(view, claim.claim);
        if unseen == 0 {
            return Ok((
                false,
                format!("every {} is accounted for", claim.claim),
            ));
        }
        let believe = unseen >= BELIEVE_THRESHOLD;
        let reason = format!("{} unseen {} left", unseen, claim.claim);
        Ok((believe, reason))
    }

    fn open(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        let (card, _) = view
            .hand
            .max_count()
            .ok_or_else(|| AgentError::NoProposal("empty hand".into()))?;
        let target = Self::most_exposed(view, None)
            .ok_or_else(|| AgentError::NoProposal("no target".into()))?
            .to_string();

        if self.rng.random_bool(BLUFF_RATE) {
            let feared = view
                .revealed_of(&target)
                .and_then(|p| p.max_count())
                .map(|(c, _)| c)
                .filter(|&c| c != card);
            let claim = match feared {
                Some(c) => c,
                None => self.other_type(card)?,
            };
            return Ok(Proposal::play(card, &target, claim, "bluffing"));
        }
        Ok(Proposal::play(card, &target, card, "telling the truth"))
    }

    fn pass_on(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        let card = view
            .looked_card
            .ok_or_else(|| AgentError::NoProposal("nothing was looked at".into()))?;
        let target = Self::most_exposed(view, Some(card))
            .ok_or_else(|| AgentError::NoProposal("no target".into()))?
            .to_string();
        let claim = if self.rng.random_bool(0.5) {
            card
        } else {
            self.other_type(card)?
        };
        let reason = if claim == card {
            "passing it on honestly"
        } else {
            "passing it on with a new story"
        };
        Ok(Proposal::pass(&target, claim, reason))
    }

    fn other_type(&mut self, card: CardType) -> Result<CardType, AgentError> {
        let others: Vec<CardType> = ALL_CARD_TYPES.into_iter().filter(|&c| c != card).collect();
        others
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| AgentError::NoProposal("no other card type".into()))
    }
}

impl Agent for BaselineAgent {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        match view.phase {
            Phase::Opening => self.open(view),
            Phase::MustPass => self.pass_on(view),
            Phase::ForcedGuess => {
                let (truthful, reason) = Self::judge(view)?;
                Ok(Proposal::guess(truthful, &reason))
            }
            Phase::FreeChoice => {
                let claim = view
                    .pending_claim()
                    .ok_or_else(|| AgentError::NoProposal("no claim to judge".into()))?;
                if Self::own_pile(view, claim.claim) + 1 >= LOSING_PILE_COUNT - 1 {
                    return Ok(Proposal::look("too risky to guess"));
                }
                let (truthful, reason) = Self::judge(view)?;
                Ok(Proposal::guess(truthful, &reason))
            }
        }
    }

    fn name(&self) -> &str {
        "baseline"
    }
}
