#![allow(dead_code)]

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use roach_engine::agent::{Agent, AgentError, PlayerView, Proposal};
use roach_engine::cards::ALL_CARD_TYPES;
use roach_engine::deck::{deal_equally, full_deck};
use roach_engine::rules::Phase;
use roach_engine::table::Table;

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Unshuffled deal for seats a, b, c:
/// a = 8 BAT, 8 COCKROACH, 6 FLY
/// b = 2 FLY, 8 FROG, 8 RAT, 3 SCORPION
/// c = 5 SCORPION, 8 SPIDER, 8 STINKBUG
pub fn fixed_table() -> Table {
    let seats = names(&["a", "b", "c"]);
    Table::from_deal(&seats, deal_equally(&full_deck(), 3)).unwrap()
}

/// Picks uniformly among legal-looking moves; lies freely.
pub struct ChaosAgent {
    rng: ChaCha8Rng,
}

impl ChaosAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for ChaosAgent {
    fn propose(&mut self, view: &PlayerView) -> Result<Proposal, AgentError> {
        let claim = *ALL_CARD_TYPES.choose(&mut self.rng).unwrap();
        let target = view.targets.choose(&mut self.rng).cloned();
        Ok(match view.phase {
            Phase::Opening => {
                let hand = view.hand.present_types();
                let card = *hand.choose(&mut self.rng).unwrap();
                Proposal::play(card, &target.unwrap(), claim, "chaos")
            }
            Phase::MustPass => Proposal::pass(&target.unwrap(), claim, "chaos"),
            Phase::ForcedGuess => Proposal::guess(self.rng.random_bool(0.5), "chaos"),
            Phase::FreeChoice => {
                if self.rng.random_bool(0.5) {
                    Proposal::look("chaos")
                } else {
                    Proposal::guess(self.rng.random_bool(0.5), "chaos")
                }
            }
        })
    }

    fn name(&self) -> &str {
        "chaos"
    }
}

/// Always answers with garbage.
pub struct BrokenAgent;

impl Agent for BrokenAgent {
    fn propose(&mut self, _view: &PlayerView) -> Result<Proposal, AgentError> {
        Err(AgentError::Unparseable("no braces in output".into()))
    }

    fn name(&self) -> &str {
        "broken"
    }
}
