//! End-to-end "calculate": snapshot in, report out.

use crate::advice::{Action, AdviceSynthesizer, BetSizes, Situation, SizingScheme};
use crate::equity::{EquityResult, EquitySimulator, SimulationConfig, SimulationError};
use crate::features::{self, HandCategory};
use crate::hand::HandError;
use crate::lookup::{self, DrawOdds, Language};
use crate::snapshot::HandSnapshot;
use crate::texture::{self, BoardTexture};
use std::fmt;
use std::sync::atomic::AtomicBool;

/// Settings shared by every calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct AdvisorConfig {
    pub simulation: SimulationConfig,
    pub sizing: SizingScheme,
    pub language: Language,
}

impl AdvisorConfig {
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.simulation = self.simulation.with_trials(trials);
        self
    }

    /// Set a deterministic RNG seed for reproducible equity.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation = self.simulation.with_seed(seed);
        self
    }

    pub fn with_sizing(mut self, sizing: SizingScheme) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdvisorError {
    #[error("both hero cards must be chosen")]
    MissingHeroCards,
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Everything a front end shows after a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceReport {
    /// Equity in percent, one decimal.
    pub equity_percentage: f64,
    pub equity: EquityResult,
    pub pot_odds: f64,
    pub action: Action,
    pub rationale: String,
    pub hand_category: Option<HandCategory>,
    pub hand_category_label: Option<&'static str>,
    pub hand_category_advice: Option<&'static str>,
    pub texture: Option<BoardTexture>,
    pub texture_label: Option<&'static str>,
    pub draw_stats: Option<DrawOdds>,
    pub bet_sizes: Option<BetSizes>,
    pub is_bluff: bool,
    pub language: Language,
}

impl fmt::Display for AdviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ui = lookup::ui_text(self.language);
        writeln!(f, "{}: {:.1}%", ui.equity, self.equity_percentage)?;
        writeln!(f, "{}: {:.1}%", ui.pot_odds, self.pot_odds)?;
        if let (Some(label), Some(advice)) = (self.hand_category_label, self.hand_category_advice) {
            writeln!(f, "{}: {label} ({advice})", ui.hand)?;
        }
        if let Some(label) = self.texture_label {
            writeln!(f, "{}: {label}", ui.board)?;
        }
        write!(f, "{}: {}", ui.action, lookup::action_label(self.language, self.action))?;
        if self.is_bluff {
            write!(f, " [{}]", ui.bluff)?;
        }
        writeln!(f)?;
        if let Some(sizes) = &self.bet_sizes {
            writeln!(f, "{}: {sizes}", ui.bet_sizing)?;
        }
        write!(f, "{}", self.rationale)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Simulate, classify and advise for one snapshot.
    ///
    /// ```
    /// use holdem_advisor::advisor::{Advisor, AdvisorConfig};
    /// use holdem_advisor::advice::Action;
    /// use holdem_advisor::hand::{Board, HoleCards};
    /// use holdem_advisor::snapshot::HandSnapshot;
    ///
    /// let hero: HoleCards = "As Ks".parse().unwrap();
    /// let board: Board = "Qs Js Ts".parse().unwrap();
    /// let snapshot = HandSnapshot { main_pot: 100, stack: 1000, ..HandSnapshot::new(hero, &board) };
    ///
    /// let advisor = Advisor::new(AdvisorConfig::default().with_trials(100).with_seed(7));
    /// let report = advisor.calculate(&snapshot).unwrap();
    /// assert_eq!(report.equity_percentage, 100.0);
    /// assert_eq!(report.action, Action::CheckCall);
    /// ```
    pub fn calculate(&self, snapshot: &HandSnapshot) -> Result<AdviceReport, AdvisorError> {
        self.calculate_inner(snapshot, None)
    }

    /// Like [`calculate`](Self::calculate) but abortable through `stop`.
    pub fn calculate_cancellable(
        &self,
        snapshot: &HandSnapshot,
        stop: &AtomicBool,
    ) -> Result<AdviceReport, AdvisorError> {
        self.calculate_inner(snapshot, Some(stop))
    }

    fn calculate_inner(
        &self,
        snapshot: &HandSnapshot,
        stop: Option<&AtomicBool>,
    ) -> Result<AdviceReport, AdvisorError> {
        let hero = snapshot.hole_cards().ok_or(AdvisorError::MissingHeroCards)?;
        snapshot.validate()?;
        let board = snapshot.board_cards();

        let simulator = EquitySimulator::new(self.config.simulation);
        let opponents = snapshot.opponent_count();
        let equity = match stop {
            Some(stop) => simulator.run_cancellable(&hero, &board, snapshot.deck_count, opponents, stop)?,
            None => simulator.run(&hero, &board, snapshot.deck_count, opponents)?,
        };
        let category = features::classify(&hero, &board);
        let texture = texture::classify(board.as_slice());

        let situation = Situation {
            equity: equity.win_probability() * 100.0,
            pot_odds: snapshot.pot_odds(),
            call_amount: snapshot.call_amount(),
            total_pot: snapshot.total_pot(),
            stack: snapshot.remaining_stack(),
            street: board.street(),
            category: Some(category),
            texture,
            strategy: snapshot.strategy,
            position: snapshot.position,
        };
        let advice = AdviceSynthesizer::new(self.config.sizing, self.config.language).synthesize(&situation);
        log::debug!("{hero} on [{board}]: {category}, {} -> {}", equity.percentage(), advice.action);

        let lang = self.config.language;
        let category_text = lookup::category_text(lang, category);
        Ok(AdviceReport {
            equity_percentage: equity.percentage(),
            equity,
            pot_odds: situation.pot_odds,
            action: advice.action,
            is_bluff: advice.is_bluff(),
            rationale: advice.rationale,
            hand_category: Some(category),
            hand_category_label: Some(category_text.label),
            hand_category_advice: Some(category_text.advice),
            texture,
            texture_label: texture.map(|t| lookup::texture_text(lang, t).name),
            draw_stats: advice.draw_odds,
            bet_sizes: advice.bet_sizes,
            language: lang,
        })
    }
}
