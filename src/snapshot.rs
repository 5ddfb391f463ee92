use crate::advice::{Position, StrategyMode};
use crate::cards::Card;
use crate::hand::{validate_cards, Board, HandError, HoleCards};

/// Immutable picture of the table at the moment advice is requested.
///
/// Card slots are nullable the way a card picker fills them. Chip figures
/// are whole chips.
///
/// ```
/// use holdem_advisor::snapshot::HandSnapshot;
///
/// let snap = HandSnapshot {
///     main_pot: 100,
///     hero_bet: 10,
///     opponent_bets: vec![40, 10],
///     stack: 500,
///     ..HandSnapshot::default()
/// };
/// assert_eq!(snap.total_pot(), 160);
/// assert_eq!(snap.call_amount(), 30);
/// assert!((snap.pot_odds() - 15.789).abs() < 0.01);
/// assert_eq!(snap.opponent_count(), 2);
/// assert_eq!(snap.remaining_stack(), 490);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSnapshot {
    pub hero: [Option<Card>; 2],
    pub board: [Option<Card>; 5],
    pub deck_count: usize,
    /// Opponents still in the hand. `None` counts the entries in
    /// `opponent_bets`, with at least one.
    pub opponents: Option<usize>,
    pub main_pot: u64,
    /// Hero's contribution in the current betting round.
    pub hero_bet: u64,
    /// Each active opponent's contribution in the current betting round.
    pub opponent_bets: Vec<u64>,
    pub stack: u64,
    pub strategy: StrategyMode,
    pub position: Option<Position>,
}

impl Default for HandSnapshot {
    fn default() -> Self {
        Self {
            hero: [None; 2],
            board: [None; 5],
            deck_count: 1,
            opponents: None,
            main_pot: 0,
            hero_bet: 0,
            opponent_bets: Vec::new(),
            stack: 0,
            strategy: StrategyMode::default(),
            position: None,
        }
    }
}

impl HandSnapshot {
    /// Snapshot with both hero cards set and the given revealed board.
    pub fn new(hero: HoleCards, board: &Board) -> Self {
        let mut slots = [None; 5];
        for (slot, card) in slots.iter_mut().zip(board.as_slice()) {
            *slot = Some(*card);
        }
        Self { hero: [Some(hero.first()), Some(hero.second())], board: slots, ..Self::default() }
    }

    pub fn hole_cards(&self) -> Option<HoleCards> {
        HoleCards::from_slots(self.hero)
    }

    pub fn board_cards(&self) -> Board {
        Board::from_slots(self.board)
    }

    /// Main pot plus every current-round bet, hero's included.
    pub fn total_pot(&self) -> u64 {
        self.main_pot + self.opponent_bets.iter().sum::<u64>() + self.hero_bet
    }

    pub fn opponent_count(&self) -> usize {
        self.opponents.unwrap_or_else(|| self.opponent_bets.len().max(1))
    }

    /// Stack behind after hero's current-round bet.
    pub fn remaining_stack(&self) -> u64 {
        self.stack.saturating_sub(self.hero_bet)
    }

    /// Chips hero must add to match the largest bet.
    pub fn call_amount(&self) -> u64 {
        let max_bet = self.opponent_bets.iter().copied().max().unwrap_or(0);
        max_bet.saturating_sub(self.hero_bet)
    }

    /// Percent of the final pot hero would be contributing by calling.
    pub fn pot_odds(&self) -> f64 {
        let call = self.call_amount();
        let pot = self.total_pot() + call;
        if pot == 0 {
            return 0.0;
        }
        call as f64 / pot as f64 * 100.0
    }

    /// Remaining stack over the current pot.
    pub fn spr(&self) -> Option<f64> {
        let behind = self.remaining_stack();
        let pot = self.total_pot();
        if behind == 0 || pot == 0 {
            return None;
        }
        Some(behind as f64 / pot as f64)
    }

    /// Check the chosen cards against the shoe size.
    pub fn validate(&self) -> Result<(), HandError> {
        match self.hole_cards() {
            Some(hole) => validate_cards(&hole, &self.board_cards(), self.deck_count),
            None if self.deck_count == 0 => Err(HandError::InvalidDeckCount),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pot_has_zero_odds_and_no_spr() {
        let snap = HandSnapshot { stack: 100, ..HandSnapshot::default() };
        assert_eq!(snap.total_pot(), 0);
        assert_eq!(snap.call_amount(), 0);
        assert_eq!(snap.pot_odds(), 0.0);
        assert_eq!(snap.spr(), None);
    }

    #[test]
    fn hero_leading_owes_nothing() {
        let snap = HandSnapshot {
            main_pot: 50,
            hero_bet: 40,
            opponent_bets: vec![20],
            stack: 260,
            ..HandSnapshot::default()
        };
        assert_eq!(snap.call_amount(), 0);
        assert_eq!(snap.pot_odds(), 0.0);
        assert_eq!(snap.remaining_stack(), 220);
        assert_eq!(snap.spr(), Some(2.0));
    }

    #[test]
    fn opponent_count_follows_bets_unless_set() {
        assert_eq!(HandSnapshot::default().opponent_count(), 1);
        let snap = HandSnapshot { opponent_bets: vec![10, 20, 30], ..HandSnapshot::default() };
        assert_eq!(snap.opponent_count(), 3);
        let snap = HandSnapshot { opponents: Some(2), ..snap };
        assert_eq!(snap.opponent_count(), 2);
    }

    #[test]
    fn overcommitted_bet_leaves_nothing_behind() {
        let snap = HandSnapshot { main_pot: 10, hero_bet: 80, stack: 50, ..HandSnapshot::default() };
        assert_eq!(snap.remaining_stack(), 0);
        assert_eq!(snap.spr(), None);
    }

    #[test]
    fn slots_round_trip_through_hole_and_board() {
        let hero: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "2c 7h 9s".parse().unwrap();
        let snap = HandSnapshot::new(hero, &board);
        assert_eq!(snap.hole_cards(), Some(hero));
        assert_eq!(snap.board_cards(), board);
        assert!(snap.validate().is_ok());
        assert!(HandSnapshot::default().hole_cards().is_none());
    }

    #[test]
    fn validate_respects_deck_count() {
        let hero: HoleCards = "As As".parse().unwrap();
        let mut snap = HandSnapshot::new(hero, &Board::empty());
        assert!(matches!(snap.validate(), Err(HandError::TooManyCopies { .. })));
        snap.deck_count = 2;
        assert!(snap.validate().is_ok());
    }
}
