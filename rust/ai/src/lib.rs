//! # roach-ai: Agents for Cockroach Poker
//!
//! Decision-makers that plug into the engine through
//! [`roach_engine::agent::Agent`]. Each agent sees only its own
//! [`PlayerView`](roach_engine::agent::PlayerView) and answers with a raw
//! proposal; the engine validates it.
//!
//! ## Agent Kinds
//!
//! - `"baseline"` - [`baseline::BaselineAgent`], card-counting heuristic
//! - `"random"` - [`random::RandomAgent`], uniformly random moves and claims
//!
//! [`scripted::ScriptedAgent`] replays a fixed queue of proposals and is
//! built directly rather than through [`create_agent`].
//!
//! ## Quick Start
//!
//! ```rust
//! use roach_ai::create_agent;
//! use roach_engine::engine::Engine;
//!
//! let names = vec!["ann".to_string(), "bo".to_string(), "cy".to_string()];
//! let mut engine = Engine::new(names, Some(42)).unwrap();
//! let mut agents: Vec<_> = (0..3)
//!     .map(|i| create_agent("baseline", 42 + i).unwrap())
//!     .collect();
//!
//! let result = engine.play_game(&mut agents).unwrap();
//! println!("{} lost after {} rounds", result.loser, result.rounds);
//! ```

use roach_engine::agent::Agent;
use thiserror::Error;

pub mod baseline;
pub mod random;
pub mod scripted;

/// Kinds accepted by [`create_agent`].
pub const AGENT_KINDS: [&str; 2] = ["baseline", "random"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown agent kind '{0}' (expected one of: baseline, random)")]
pub struct UnknownAgentKind(pub String);

pub fn is_known_kind(kind: &str) -> bool {
    AGENT_KINDS.contains(&kind)
}

/// Builds an agent by kind name.
///
/// ```rust
/// use roach_ai::create_agent;
///
/// let agent = create_agent("random", 7).unwrap();
/// assert_eq!(agent.name(), "random");
/// assert!(create_agent("oracle", 7).is_err());
/// ```
pub fn create_agent(kind: &str, seed: u64) -> Result<Box<dyn Agent>, UnknownAgentKind> {
    match kind {
        "baseline" => Ok(Box::new(baseline::BaselineAgent::new(seed))),
        "random" => Ok(Box::new(random::RandomAgent::new(seed))),
        other => Err(UnknownAgentKind(other.to_string())),
    }
}
