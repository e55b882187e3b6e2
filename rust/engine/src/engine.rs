use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{error, info};

use crate::agent::{Agent, AgentError, PlayerView, Proposal};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameResult;
use crate::logger::GameRecord;
use crate::player::PlayerId;
use crate::round::{Move, Round, RoundOutcome};
use crate::rules::Phase;
use crate::table::Table;

/// Fewest seats a game can be set up with. Three or more make passing meaningful.
pub const MIN_SEATS: usize = 2;

const DEFAULT_SEED: u64 = 0xC0C4_2042;

/// Result of submitting one response to [`Engine::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The move was applied and the round continues
    Moved(Move),
    /// The round ended and the next one is ready
    RoundOver(RoundOutcome),
    /// The round ended and a loser was found
    GameOver {
        outcome: RoundOutcome,
        result: GameResult,
    },
}

/// Game controller: owns the table, runs rounds one move at a time and
/// checks the loss conditions between rounds.
///
/// # Examples
///
/// ```
/// use roach_engine::engine::Engine;
///
/// let names = vec!["ann".to_string(), "bo".to_string(), "cy".to_string()];
/// let engine = Engine::new(names, Some(7)).unwrap();
///
/// assert_eq!(engine.table().total_cards(), 64);
/// assert!(engine.result().is_none());
/// ```
#[derive(Debug)]
pub struct Engine {
    table: Table,
    round: Round,
    /// Starting seat and forfeit backfill draws
    rng: ChaCha20Rng,
    seed: u64,
    /// Resolved rounds, oldest first
    rounds: Vec<RoundOutcome>,
    result: Option<GameResult>,
}

impl Engine {
    /// Shuffles a fresh deck, deals it across `names` and draws a random
    /// starting seat.
    pub fn new(names: Vec<String>, seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let table = deal_table(&names, seed)?;
        let mut rng = side_rng(seed);
        let starter = PlayerId(rng.random_range(0..names.len()));
        Self::build(table, starter, rng, seed)
    }

    /// Like [`Engine::new`] but with a chosen starting seat.
    pub fn with_starter(
        names: Vec<String>,
        seed: Option<u64>,
        starter: PlayerId,
    ) -> Result<Self, GameError> {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let table = deal_table(&names, seed)?;
        Self::build(table, starter, side_rng(seed), seed)
    }

    /// Continues from an arbitrary table, which must hold all 64 cards.
    pub fn from_table(table: Table, starter: PlayerId, seed: u64) -> Result<Self, GameError> {
        if table.len() < MIN_SEATS {
            return Err(GameError::NotEnoughPlayers {
                minimum: MIN_SEATS,
                actual: table.len(),
            });
        }
        table.verify_conservation()?;
        Self::build(table, starter, side_rng(seed), seed)
    }

    fn build(
        table: Table,
        starter: PlayerId,
        rng: ChaCha20Rng,
        seed: u64,
    ) -> Result<Self, GameError> {
        table.seat(starter)?;
        let round = Round::new(starter, table.len());
        let mut engine = Self {
            table,
            round,
            rng,
            seed,
            rounds: Vec::new(),
            result: None,
        };
        engine.check_for_loser()?;
        Ok(engine)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn rounds(&self) -> &[RoundOutcome] {
        &self.rounds
    }
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn seat_names(&self) -> Vec<String> {
        self.table
            .seats()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// The seat whose agent must answer next.
    pub fn current_seat(&self) -> Result<PlayerId, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(self.round.current())
    }

    pub fn phase(&self) -> Result<Phase, GameError> {
        self.current_seat()?;
        Ok(self.round.phase())
    }

    /// Snapshot handed to the current seat's agent.
    pub fn view(&self) -> Result<PlayerView, GameError> {
        self.current_seat()?;
        self.round.view(&self.table)
    }

    /// Applies whatever the current seat's agent delivered.
    ///
    /// Errors from applying the move are fatal for the game and are logged
    /// before they are returned.
    pub fn submit(&mut self, response: Result<Proposal, AgentError>) -> Result<Step, GameError> {
        let seat = self.current_seat()?;
        self.apply(response).map_err(|e| fatal(seat, e))
    }

    fn apply(&mut self, response: Result<Proposal, AgentError>) -> Result<Step, GameError> {
        let Some(outcome) = self
            .round
            .step(&mut self.table, response, &mut self.rng)?
        else {
            let last = self
                .round
                .moves()
                .last()
                .cloned()
                .ok_or(GameError::NoCardInFlight)?;
            return Ok(Step::Moved(last));
        };

        self.table.verify_conservation()?;
        info!(
            round = self.rounds.len() + 1,
            loser = %outcome.loser,
            card = %outcome.card,
            resolution = ?outcome.resolution,
            "round resolved"
        );
        self.rounds.push(outcome.clone());

        if let Some(result) = self.check_for_loser()? {
            return Ok(Step::GameOver { outcome, result });
        }
        self.round = Round::new(outcome.loser, self.table.len());
        Ok(Step::RoundOver(outcome))
    }

    /// Drives one full round, asking `agents[seat]` for each move.
    pub fn play_round<A: Agent>(&mut self, agents: &mut [A]) -> Result<RoundOutcome, GameError> {
        self.check_agents(agents.len())?;
        loop {
            let seat = self.current_seat()?;
            let view = self.view()?;
            let response = agents[seat.index()].propose(&view);
            match self.submit(response)? {
                Step::Moved(_) => continue,
                Step::RoundOver(outcome) | Step::GameOver { outcome, .. } => return Ok(outcome),
            }
        }
    }

    /// Plays rounds until a loser is found.
    pub fn play_game<A: Agent>(&mut self, agents: &mut [A]) -> Result<GameResult, GameError> {
        self.check_agents(agents.len())?;
        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            self.play_round(agents)?;
        }
    }

    /// Transcript of the game so far.
    pub fn record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: Some(self.seed),
            seats: self.seat_names(),
            rounds: self.rounds.clone(),
            result: self.result,
            ts: None,
            meta: None,
        }
    }

    fn check_agents(&self, count: usize) -> Result<(), GameError> {
        if count != self.table.len() {
            return Err(GameError::AgentCountMismatch {
                expected: self.table.len(),
                actual: count,
            });
        }
        Ok(())
    }

    fn check_for_loser(&mut self) -> Result<Option<GameResult>, GameError> {
        let Some((loser, reason)) = self.table.find_loser() else {
            return Ok(None);
        };
        let result = GameResult {
            loser,
            reason,
            rounds: self.rounds.len() as u32,
        };
        info!(
            loser = self.table.name(loser)?,
            reason = %reason,
            rounds = result.rounds,
            "game over"
        );
        self.result = Some(result);
        Ok(Some(result))
    }
}

fn deal_table(names: &[String], seed: u64) -> Result<Table, GameError> {
    if names.len() < MIN_SEATS {
        return Err(GameError::NotEnoughPlayers {
            minimum: MIN_SEATS,
            actual: names.len(),
        });
    }
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    Table::from_deal(names, deck.deal_equally(names.len()))
}

fn fatal(seat: PlayerId, e: GameError) -> GameError {
    error!(seat = %seat, error = %e, "invariant violated, game aborted");
    e
}

/// Independent stream for in-game draws so they never disturb the shuffle.
fn side_rng(seed: u64) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(1);
    rng
}
