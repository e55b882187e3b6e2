//! Agent that moves uniformly at random among the moves the phase allows.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roach_engine::agent::{Agent, AgentError, PlayerView, Proposal};
use roach_engine::cards::ALL_CARD_TYPES;
use roach_engine::rules::Phase;

/// Picks a random card, target and claim; looks or guesses with even odds.
///
/// Always produces a proposal that passes validation, as long as the view is
/// consistent (a non-empty hand when opening, a non-empty target pool when
/// passing).
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        let claim = *ALL_CARD_TYPES
            .choose(&mut self.rng)
            .ok_or_else(|| AgentError::NoProposal("no card types".into()))?;
        match view.phase {
            Phase::Opening => {
                let held = view.hand.present_types();
                let card = *held
                    .choose(&mut self.rng)
                    .ok_or_else(|| AgentError::NoProposal("empty hand".into()))?;
                let target = self.pick_target(view)?;
                Ok(Proposal::play(card, &target, claim, "random play"))
            }
            Phase::MustPass => {
                let target = self.pick_target(view)?;
                Ok(Proposal::pass(&target, claim, "random pass"))
            }
            Phase::ForcedGuess => Ok(Proposal::guess(self.rng.random_bool(0.5), "coin flip")),
            Phase::FreeChoice => {
                if self.rng.random_bool(0.5) {
                    Ok(Proposal::look("curious"))
                } else {
                    Ok(Proposal::guess(self.rng.random_bool(0.5), "coin flip"))
                }
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

impl RandomAgent {
    fn pick_target(&mut self, view: &PlayerView) -> Result<String, AgentError> {
        view.targets
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| AgentError::NoProposal("no one left to pass to".into()))
    }
}
