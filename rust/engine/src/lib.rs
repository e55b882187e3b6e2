//! # roach-engine: Cockroach Poker Rules Engine
//!
//! The authoritative rules state machine for multi-agent games of Cockroach
//! Poker. Tracks every seat's hidden hand and face-up pile, enforces which
//! moves are legal at each point of a round, resolves rounds and detects the
//! losing seat. Move decisions come from external [`agent::Agent`]s.
//!
//! ## Core Modules
//!
//! - [`cards`] - The eight card types and the `CardCounts` multiset
//! - [`deck`] - 64-card deck, seeded shuffling and equal dealing
//! - [`table`] - Hands and face-up piles of all seats
//! - [`round`] - Round state machine (PLAY, LOOK, PASS, GUESS, FORFEIT)
//! - [`rules`] - Phase derivation and proposal validation
//! - [`engine`] - Game controller running rounds until someone loses
//! - [`agent`] - The agent contract: views, proposals, the `Agent` trait
//! - [`game`] - Game results and the multi-game loss tally
//! - [`logger`] - JSONL game transcripts
//! - [`errors`] - Fatal error types
//!
//! ## Quick Start
//!
//! ```rust
//! use roach_engine::agent::Proposal;
//! use roach_engine::engine::{Engine, Step};
//! use roach_engine::player::PlayerId;
//!
//! let names = vec!["ann".to_string(), "bo".to_string(), "cy".to_string()];
//! let mut engine = Engine::with_starter(names, Some(42), PlayerId(0)).unwrap();
//!
//! // The opening seat plays the first card it holds to "bo", telling the truth
//! let view = engine.view().unwrap();
//! let (card, _) = view.hand.iter().next().unwrap();
//! let step = engine.submit(Ok(Proposal::play(card, "bo", card, "honest start"))).unwrap();
//! assert!(matches!(step, Step::Moved(_)));
//! assert_eq!(engine.current_seat().unwrap(), PlayerId(1));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The shuffle, the starting seat and forfeit draws all derive from the seed:
//!
//! ```rust
//! use roach_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod agent;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
pub mod table;
