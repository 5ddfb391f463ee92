//! Advice synthesis: turns equity, pot odds, hand category, board texture,
//! strategy and position into an action, a rationale and bet sizes.
//!
//! The action is decided by a base equity rule followed by overrides in a
//! fixed order (maniac bluff, speculative hands, made hands, position).
//! Texture and draw-odds text only ever extend the rationale.

use crate::features::HandCategory;
use crate::hand::Street;
use crate::lookup::{self, DrawOdds, Language};
use crate::texture::BoardTexture;
use std::fmt;
use std::str::FromStr;

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    CheckFold,
    CheckCall,
    Call,
    Raise,
    RaiseBluff,
    AllIn,
    AllInBluff,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Fold,
        Action::Check,
        Action::CheckFold,
        Action::CheckCall,
        Action::Call,
        Action::Raise,
        Action::RaiseBluff,
        Action::AllIn,
        Action::AllInBluff,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::CheckFold => "check_fold",
            Action::CheckCall => "check_call",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::RaiseBluff => "raise_bluff",
            Action::AllIn => "allin",
            Action::AllInBluff => "allin_bluff",
        }
    }

    /// Raise or all-in, bluff or not. These actions get bet sizes.
    pub const fn is_aggressive(self) -> bool {
        matches!(self, Action::Raise | Action::RaiseBluff | Action::AllIn | Action::AllInBluff)
    }

    pub const fn is_call(self) -> bool {
        matches!(self, Action::Call | Action::CheckCall)
    }

    pub const fn is_bluff(self) -> bool {
        matches!(self, Action::RaiseBluff | Action::AllInBluff)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseOptionError {
    #[error("unknown strategy: '{0}' (expected conservative, aggressive or maniac)")]
    Strategy(String),
    #[error("unknown position: '{0}' (expected early, middle, late or blinds)")]
    Position(String),
    #[error("unknown sizing scheme: '{0}' (expected standard or texture)")]
    Sizing(String),
    #[error("unknown language: '{0}' (expected en or zh)")]
    Language(String),
}

/// Player style the advice is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyMode {
    Conservative,
    #[default]
    Aggressive,
    Maniac,
}

impl FromStr for StrategyMode {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" | "tight" => Ok(StrategyMode::Conservative),
            "aggressive" => Ok(StrategyMode::Aggressive),
            "maniac" | "bluff" => Ok(StrategyMode::Maniac),
            _ => Err(ParseOptionError::Strategy(s.to_string())),
        }
    }
}

/// Table position of the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Early,
    Middle,
    Late,
    Blinds,
}

/// How a position shifts marginal decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionStyle {
    Tight,
    Neutral,
    Loose,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Early, Position::Middle, Position::Late, Position::Blinds];

    pub const fn style(self) -> PositionStyle {
        match self {
            Position::Early => PositionStyle::Tight,
            Position::Late => PositionStyle::Loose,
            Position::Middle | Position::Blinds => PositionStyle::Neutral,
        }
    }
}

impl FromStr for Position {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" | "ep" => Ok(Position::Early),
            "middle" | "mp" => Ok(Position::Middle),
            "late" | "lp" => Ok(Position::Late),
            "blinds" | "sb" | "bb" => Ok(Position::Blinds),
            _ => Err(ParseOptionError::Position(s.to_string())),
        }
    }
}

/// Which three bet sizes to suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingScheme {
    /// One-third, two-thirds and full pot.
    #[default]
    Standard,
    /// Texture-driven continuation bet, a value bet and a pot-sized bet.
    TextureAdjusted,
}

impl SizingScheme {
    /// Pot fractions of the three sizes, smallest first.
    pub fn fractions(self, texture: Option<BoardTexture>) -> [f64; 3] {
        match self {
            SizingScheme::Standard => [0.33, 0.66, 1.0],
            SizingScheme::TextureAdjusted => {
                let smart = texture.map_or(0.5, BoardTexture::cbet_fraction);
                [smart, 0.75, 1.0]
            }
        }
    }

    pub const fn labels(self) -> [&'static str; 3] {
        match self {
            SizingScheme::Standard => ["small", "medium", "large"],
            SizingScheme::TextureAdjusted => ["smart", "value", "pot"],
        }
    }
}

impl FromStr for SizingScheme {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(SizingScheme::Standard),
            "texture" | "texture-adjusted" | "smart" => Ok(SizingScheme::TextureAdjusted),
            _ => Err(ParseOptionError::Sizing(s.to_string())),
        }
    }
}

/// Three suggested bet amounts, each capped at the hero's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetSizes {
    pub scheme: SizingScheme,
    pub amounts: [u64; 3],
}

impl BetSizes {
    pub fn compute(scheme: SizingScheme, texture: Option<BoardTexture>, total_pot: u64, stack: u64) -> Self {
        let amounts = scheme
            .fractions(texture)
            .map(|frac| ((total_pot as f64 * frac).round() as u64).min(stack));
        Self { scheme, amounts }
    }

    /// `(label, amount)` pairs, smallest first.
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        let labels = self.scheme.labels();
        [(labels[0], self.amounts[0]), (labels[1], self.amounts[1]), (labels[2], self.amounts[2])]
    }
}

impl fmt::Display for BetSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.entries().iter().map(|(l, a)| format!("{l} {a}")).collect();
        f.write_str(&parts.join(" / "))
    }
}

/// Everything the synthesizer reads for one decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Situation {
    /// Hero equity in percent (0..=100).
    pub equity: f64,
    /// Pot odds in percent (0..=100).
    pub pot_odds: f64,
    pub call_amount: u64,
    pub total_pot: u64,
    pub stack: u64,
    pub street: Street,
    pub category: Option<HandCategory>,
    pub texture: Option<BoardTexture>,
    pub strategy: StrategyMode,
    pub position: Option<Position>,
}

/// Result of [`AdviceSynthesizer::synthesize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub action: Action,
    pub rationale: String,
    pub bet_sizes: Option<BetSizes>,
    pub draw_odds: Option<DrawOdds>,
}

impl Advice {
    pub fn is_bluff(&self) -> bool {
        self.action.is_bluff()
    }
}

/// Equity above which the base rule raises.
pub const RAISE_EQUITY: f64 = 70.0;
/// Required margin over pot odds for a call.
pub const CALL_MARGIN: f64 = 1.1;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceSynthesizer {
    pub sizing: SizingScheme,
    pub language: Language,
}

impl AdviceSynthesizer {
    pub fn new(sizing: SizingScheme, language: Language) -> Self {
        Self { sizing, language }
    }

    /// Decide an action and build the rationale.
    ///
    /// ```
    /// use holdem_advisor::advice::{Action, AdviceSynthesizer, Situation, StrategyMode};
    /// use holdem_advisor::hand::Street;
    ///
    /// let s = Situation {
    ///     equity: 82.0,
    ///     pot_odds: 25.0,
    ///     call_amount: 50,
    ///     total_pot: 300,
    ///     stack: 1000,
    ///     street: Street::Flop,
    ///     category: None,
    ///     texture: None,
    ///     strategy: StrategyMode::Aggressive,
    ///     position: None,
    /// };
    /// let advice = AdviceSynthesizer::default().synthesize(&s);
    /// assert_eq!(advice.action, Action::Raise);
    /// assert_eq!(advice.bet_sizes.unwrap().amounts, [99, 198, 300]);
    /// ```
    pub fn synthesize(&self, s: &Situation) -> Advice {
        let action = decide_action(s);
        let draw_odds = s.category.and_then(|c| c.draw_kind()).and_then(|k| lookup::draw_odds(k, s.street));
        let rationale = self.rationale(s, action, draw_odds.as_ref());
        let bet_sizes = action
            .is_aggressive()
            .then(|| BetSizes::compute(self.sizing, s.texture, s.total_pot, s.stack));
        Advice { action, rationale, bet_sizes, draw_odds }
    }

    fn rationale(&self, s: &Situation, action: Action, draw_odds: Option<&DrawOdds>) -> String {
        let lang = self.language;
        let ui = lookup::ui_text(lang);
        let mut text = format!("{}: {:.1}%", ui.pot_odds, s.pot_odds);

        if let Some(category) = s.category {
            let entry = lookup::category_text(lang, category);
            text = entry.reason.to_string();
            if category == HandCategory::StraightFlushLower {
                text = format!("{} ({})", entry.reason, ui.straight_flush_lower_warning);
            }
            if category.is_speculative() && action.is_call() {
                text = format!("{} ({})", entry.reason, ui.implied_odds_ok);
            }
        }

        let made = s.category.is_some_and(HandCategory::is_made);
        if let Some(texture) = s.texture {
            if s.call_amount == 0 && !made {
                let t = lookup::texture_text(lang, texture);
                text.push_str(&format!("\n[{}]: {}", t.name, t.description));
            }
        }
        if let Some(odds) = draw_odds {
            text.push('\n');
            text.push_str(&odds.describe(lang));
        }
        text
    }
}

/// Base equity rule followed by the ordered overrides.
pub fn decide_action(s: &Situation) -> Action {
    let mut action = if s.equity > RAISE_EQUITY {
        Action::Raise
    } else if s.equity > s.pot_odds * CALL_MARGIN {
        Action::Call
    } else {
        Action::Fold
    };

    if s.strategy == StrategyMode::Maniac && s.equity > 20.0 {
        log::trace!("maniac override: {action} -> raise_bluff");
        action = Action::RaiseBluff;
    }

    let speculative = s.category.is_some_and(HandCategory::is_speculative);
    if speculative {
        let deep = s.call_amount > 0 && s.stack as f64 / s.call_amount as f64 > 15.0;
        let cheap = (s.call_amount as f64) < s.stack as f64 * 0.2;
        if (s.strategy != StrategyMode::Conservative || deep) && cheap {
            let next = if s.equity > 35.0 { Action::Raise } else { Action::Call };
            log::trace!("speculative override: {action} -> {next}");
            action = next;
        }
    }

    if let Some(category) = s.category.filter(|c| c.forces_own_action()) {
        let next = category.recommended_action();
        log::trace!("made-hand override ({category}): {action} -> {next}");
        action = next;
    }

    if let Some(position) = s.position {
        match position.style() {
            PositionStyle::Tight if action == Action::Call && s.equity < 45.0 => {
                log::trace!("tight position: call -> fold");
                action = Action::Fold;
            }
            PositionStyle::Loose if action == Action::Fold && s.call_amount == 0 && s.equity > 25.0 => {
                log::trace!("loose position: fold -> check");
                action = Action::Check;
            }
            _ => {}
        }
    }
    action
}
