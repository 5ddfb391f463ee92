//! Monte Carlo equity against a number of random opponent hands.
//!
//! Every trial shuffles the unseen cards, completes the board, deals two
//! cards to each opponent and compares seven-card scores. Ties count half.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::evaluate;
use crate::hand::{Board, HoleCards};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Trial count the calculator ships with.
pub const DEFAULT_TRIALS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: usize,
    /// Fixed seed for reproducible runs; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: DEFAULT_TRIALS, seed: None }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(v) => ChaCha8Rng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                ChaCha8Rng::from_seed(seed)
            }
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("both hero cards must be chosen before simulating")]
    MissingHeroCards,
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("deck exhausted: {needed} cards needed per trial, {available} available")]
    DeckExhausted { needed: usize, available: usize },
    #[error("simulation cancelled after {completed} trials")]
    Cancelled { completed: usize },
}

/// Win, tie and loss counts over the trials that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EquityResult {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    pub trials: usize,
}

impl EquityResult {
    /// `(wins + ties / 2) / trials`, in 0..=1.
    pub fn win_probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / self.trials as f64
    }

    pub fn tie_probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.ties as f64 / self.trials as f64
    }

    pub fn loss_probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.losses as f64 / self.trials as f64
    }

    /// Win probability as a percentage rounded to one decimal.
    pub fn percentage(&self) -> f64 {
        (self.win_probability() * 1000.0).round() / 10.0
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% ({} wins, {} ties, {} losses over {} trials)",
            self.percentage(),
            self.wins,
            self.ties,
            self.losses,
            self.trials
        )
    }
}

/// Stateless apart from its configuration, so one simulator may serve
/// several threads at once.
///
/// ```
/// use holdem_advisor::equity::{EquitySimulator, SimulationConfig};
/// use holdem_advisor::hand::{Board, HoleCards};
///
/// let sim = EquitySimulator::new(SimulationConfig::default().with_trials(200).with_seed(1));
/// let hero: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "Qs Js Ts".parse().unwrap();
/// let result = sim.run(&hero, &board, 1, 2).unwrap();
/// assert_eq!(result.win_probability(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EquitySimulator {
    config: SimulationConfig,
}

impl EquitySimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the configured number of trials with the configured seed.
    pub fn run(
        &self,
        hero: &HoleCards,
        board: &Board,
        deck_count: usize,
        opponents: usize,
    ) -> Result<EquityResult, SimulationError> {
        let mut rng = self.config.rng();
        self.simulate(&mut rng, hero, board, deck_count, opponents, None)
    }

    /// Run with a caller-supplied random source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        hero: &HoleCards,
        board: &Board,
        deck_count: usize,
        opponents: usize,
    ) -> Result<EquityResult, SimulationError> {
        self.simulate(rng, hero, board, deck_count, opponents, None)
    }

    /// Like [`run`](Self::run), but checks `stop` between trials and bails
    /// out with [`SimulationError::Cancelled`] once it is set.
    pub fn run_cancellable(
        &self,
        hero: &HoleCards,
        board: &Board,
        deck_count: usize,
        opponents: usize,
        stop: &AtomicBool,
    ) -> Result<EquityResult, SimulationError> {
        let mut rng = self.config.rng();
        self.simulate(&mut rng, hero, board, deck_count, opponents, Some(stop))
    }

    /// Entry point over nullable UI slots.
    pub fn run_slots(
        &self,
        hero: [Option<Card>; 2],
        board: [Option<Card>; 5],
        deck_count: usize,
        opponents: usize,
    ) -> Result<EquityResult, SimulationError> {
        let hero = HoleCards::from_slots(hero).ok_or(SimulationError::MissingHeroCards)?;
        self.run(&hero, &Board::from_slots(board), deck_count, opponents)
    }

    fn simulate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        hero: &HoleCards,
        board: &Board,
        deck_count: usize,
        opponents: usize,
        stop: Option<&AtomicBool>,
    ) -> Result<EquityResult, SimulationError> {
        let trials = self.config.trials;
        if trials == 0 {
            return Err(SimulationError::NoTrials);
        }

        let mut known = Vec::with_capacity(2 + board.len());
        known.extend_from_slice(&hero.as_array());
        known.extend_from_slice(board.as_slice());

        let mut unseen = Deck::with_decks(deck_count);
        let dead = unseen.remove_known(&known);

        let missing_board = 5usize.saturating_sub(board.len());
        let needed = missing_board + 2 * opponents;
        if needed > unseen.len() {
            return Err(SimulationError::DeckExhausted { needed, available: unseen.len() });
        }
        log::debug!(
            "simulating {trials} trials: {opponents} opponent(s), {deck_count} deck(s), {dead} dead card(s)"
        );

        let mut result = EquityResult::default();
        let mut community = Vec::with_capacity(5);
        let mut hand = [hero.first(); 7];
        for completed in 0..trials {
            if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                log::warn!("equity simulation cancelled after {completed} of {trials} trials");
                return Err(SimulationError::Cancelled { completed });
            }

            let mut deck = unseen.clone();
            deck.shuffle_with(rng);

            community.clear();
            community.extend_from_slice(board.as_slice());
            community.extend(deck.draw_n(missing_board));

            hand[..2].copy_from_slice(&hero.as_array());
            hand[2..].copy_from_slice(&community);
            let hero_score = evaluate(&hand);

            let mut best_opponent = None;
            for _ in 0..opponents {
                let hole = deck.draw_n(2);
                hand[..2].copy_from_slice(&hole);
                let score = evaluate(&hand);
                best_opponent = best_opponent.max(Some(score));
            }

            match best_opponent {
                Some(best) if hero_score < best => result.losses += 1,
                Some(best) if hero_score == best => result.ties += 1,
                _ => result.wins += 1,
            }
            result.trials += 1;
        }

        log::debug!("equity {:.1}% over {} trials", result.percentage(), result.trials);
        Ok(result)
    }
}
