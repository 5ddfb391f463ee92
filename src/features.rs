//! Maps hero cards plus the board onto a tactical [`HandCategory`]:
//! a pre-flop range bucket, a made-hand tier, a draw, or a fallback.

use crate::advice::Action;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{evaluate, flush_suit, Category};
use crate::hand::{Board, HoleCards};
use std::fmt;

/// Closed set of hand categories. Every variant has an entry in each
/// language table of [`crate::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    // pre-flop buckets
    PremiumPair,
    StrongPair,
    SmallPair,
    PremiumHigh,
    SuitedAce,
    SuitedConnector,
    Broadway,
    PreHighCard,
    PreTrash,
    // made hands
    StraightFlushNuts,
    StraightFlushLower,
    Quads,
    FullHouse,
    FlushNuts,
    Flush,
    Straight,
    /// Three of a kind, set or trips.
    Monster,
    TwoPair,
    // draws
    ComboDraw,
    NutFlushDraw,
    FlushDraw,
    OpenEndedDraw,
    // one pair
    TopPair,
    Overpair,
    MiddlePair,
    BottomPair,
    Underpair,
    // nothing made
    GutshotDraw,
    Overcards,
    HighCardWeak,
}

impl HandCategory {
    pub const ALL: [HandCategory; 30] = [
        HandCategory::PremiumPair,
        HandCategory::StrongPair,
        HandCategory::SmallPair,
        HandCategory::PremiumHigh,
        HandCategory::SuitedAce,
        HandCategory::SuitedConnector,
        HandCategory::Broadway,
        HandCategory::PreHighCard,
        HandCategory::PreTrash,
        HandCategory::StraightFlushNuts,
        HandCategory::StraightFlushLower,
        HandCategory::Quads,
        HandCategory::FullHouse,
        HandCategory::FlushNuts,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::Monster,
        HandCategory::TwoPair,
        HandCategory::ComboDraw,
        HandCategory::NutFlushDraw,
        HandCategory::FlushDraw,
        HandCategory::OpenEndedDraw,
        HandCategory::TopPair,
        HandCategory::Overpair,
        HandCategory::MiddlePair,
        HandCategory::BottomPair,
        HandCategory::Underpair,
        HandCategory::GutshotDraw,
        HandCategory::Overcards,
        HandCategory::HighCardWeak,
    ];

    /// Stable snake_case key.
    pub const fn key(self) -> &'static str {
        match self {
            HandCategory::PremiumPair => "pre_premium_pair",
            HandCategory::StrongPair => "pre_strong_pair",
            HandCategory::SmallPair => "pre_small_pair",
            HandCategory::PremiumHigh => "pre_premium_high",
            HandCategory::SuitedAce => "pre_suited_ace",
            HandCategory::SuitedConnector => "pre_suited_connector",
            HandCategory::Broadway => "pre_broadway",
            HandCategory::PreHighCard => "pre_high_card",
            HandCategory::PreTrash => "pre_trash",
            HandCategory::StraightFlushNuts => "made_straight_flush_nuts",
            HandCategory::StraightFlushLower => "made_straight_flush_lower",
            HandCategory::Quads => "made_quads",
            HandCategory::FullHouse => "made_full_house",
            HandCategory::FlushNuts => "made_flush_nuts",
            HandCategory::Flush => "made_flush",
            HandCategory::Straight => "made_straight",
            HandCategory::Monster => "monster",
            HandCategory::TwoPair => "two_pair",
            HandCategory::ComboDraw => "combo_draw",
            HandCategory::NutFlushDraw => "flush_draw_nut",
            HandCategory::FlushDraw => "flush_draw",
            HandCategory::OpenEndedDraw => "straight_draw_oesd",
            HandCategory::TopPair => "top_pair",
            HandCategory::Overpair => "overpair",
            HandCategory::MiddlePair => "middle_pair",
            HandCategory::BottomPair => "bottom_pair",
            HandCategory::Underpair => "pocket_pair_below",
            HandCategory::GutshotDraw => "straight_draw_gutshot",
            HandCategory::Overcards => "overcards",
            HandCategory::HighCardWeak => "high_card_weak",
        }
    }

    pub const fn is_preflop(self) -> bool {
        matches!(
            self,
            HandCategory::PremiumPair
                | HandCategory::StrongPair
                | HandCategory::SmallPair
                | HandCategory::PremiumHigh
                | HandCategory::SuitedAce
                | HandCategory::SuitedConnector
                | HandCategory::Broadway
                | HandCategory::PreHighCard
                | HandCategory::PreTrash
        )
    }

    /// Straight or better (the `made_` tiers).
    pub const fn is_made(self) -> bool {
        matches!(
            self,
            HandCategory::StraightFlushNuts
                | HandCategory::StraightFlushLower
                | HandCategory::Quads
                | HandCategory::FullHouse
                | HandCategory::FlushNuts
                | HandCategory::Flush
                | HandCategory::Straight
        )
    }

    /// Categories whose own recommended action overrides equity-driven advice.
    pub const fn forces_own_action(self) -> bool {
        self.is_made() || matches!(self, HandCategory::Monster | HandCategory::PremiumPair)
    }

    /// Pre-flop hands played for implied odds.
    pub const fn is_speculative(self) -> bool {
        matches!(
            self,
            HandCategory::SuitedConnector | HandCategory::SuitedAce | HandCategory::SmallPair
        )
    }

    pub const fn draw_kind(self) -> Option<DrawKind> {
        match self {
            HandCategory::ComboDraw => Some(DrawKind::Combo),
            HandCategory::NutFlushDraw => Some(DrawKind::NutFlush),
            HandCategory::FlushDraw => Some(DrawKind::Flush),
            HandCategory::OpenEndedDraw => Some(DrawKind::OpenEnded),
            HandCategory::GutshotDraw => Some(DrawKind::Gutshot),
            _ => None,
        }
    }

    /// The action this category suggests on its own, before equity.
    pub const fn recommended_action(self) -> Action {
        match self {
            HandCategory::PremiumPair
            | HandCategory::StrongPair
            | HandCategory::PremiumHigh
            | HandCategory::SuitedAce
            | HandCategory::FullHouse
            | HandCategory::FlushNuts
            | HandCategory::Straight
            | HandCategory::Monster
            | HandCategory::TwoPair
            | HandCategory::OpenEndedDraw
            | HandCategory::Overpair => Action::Raise,
            HandCategory::SmallPair
            | HandCategory::SuitedConnector
            | HandCategory::Broadway
            | HandCategory::StraightFlushLower
            | HandCategory::Flush
            | HandCategory::FlushDraw
            | HandCategory::TopPair => Action::Call,
            // slowplay
            HandCategory::StraightFlushNuts | HandCategory::Quads => Action::CheckCall,
            HandCategory::MiddlePair | HandCategory::Overcards => Action::CheckCall,
            HandCategory::PreHighCard
            | HandCategory::BottomPair
            | HandCategory::Underpair
            | HandCategory::GutshotDraw => Action::CheckFold,
            HandCategory::NutFlushDraw => Action::RaiseBluff,
            HandCategory::ComboDraw => Action::AllIn,
            HandCategory::PreTrash | HandCategory::HighCardWeak => Action::Fold,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind of drawing hand, used to look up outs and improvement odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Combo,
    NutFlush,
    Flush,
    OpenEnded,
    Gutshot,
}

impl DrawKind {
    pub const fn outs(self) -> u8 {
        match self {
            DrawKind::Combo => 15,
            DrawKind::NutFlush | DrawKind::Flush => 9,
            DrawKind::OpenEnded => 8,
            DrawKind::Gutshot => 4,
        }
    }
}

/// Draw facts for hero's cards combined with an unfinished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawInfo {
    /// Suit with exactly four cards, one of them hero's.
    pub flush_suit: Option<Suit>,
    /// Hero holds the Ace of `flush_suit`.
    pub nut_flush: bool,
    pub open_ended: bool,
    pub gutshot: bool,
}

impl DrawInfo {
    pub fn detect(hero: &HoleCards, cards: &[Card]) -> Self {
        let mut suit_counts = [0u8; 4];
        for c in cards {
            suit_counts[c.suit().index()] += 1;
        }
        let held = hero.as_array();
        let flush_suit = Suit::ALL
            .into_iter()
            .find(|s| suit_counts[s.index()] == 4 && held.iter().any(|c| c.suit() == *s));
        let nut_flush = flush_suit
            .is_some_and(|s| held.iter().any(|c| c.suit() == s && c.rank() == Rank::Ace));

        // bit v set when rank value v is present; the Ace also sets bit 1
        let mut present = 0u16;
        for c in cards {
            present |= rank_bits(c.rank());
        }
        let hero_bits = held.iter().fold(0u16, |acc, c| acc | rank_bits(c.rank()));
        let window = |lo: u8, len: u8| ((1u16 << len) - 1) << lo;

        // four in a row, a live card on both ends
        let open_ended = (2..=10u8).any(|lo| {
            let run = window(lo, 4);
            present & run == run && hero_bits & run != 0
        });
        // four of a five-rank window, any single gap
        let gutshot = (1..=10u8).any(|lo| {
            let span = window(lo, 5);
            (present & span).count_ones() == 4 && hero_bits & span & present != 0
        });

        Self { flush_suit, nut_flush, open_ended, gutshot }
    }

    pub fn has_flush_draw(&self) -> bool {
        self.flush_suit.is_some()
    }
}

fn rank_bits(rank: Rank) -> u16 {
    let bit = 1u16 << rank.value();
    if rank == Rank::Ace {
        bit | 0b10
    } else {
        bit
    }
}

/// Classify hero's hand against the revealed board.
///
/// ```
/// use holdem_advisor::features::{classify, HandCategory};
/// use holdem_advisor::hand::{Board, HoleCards};
///
/// let hero: HoleCards = "As Qd".parse().unwrap();
/// let board: Board = "Ah 7c 2d".parse().unwrap();
/// assert_eq!(classify(&hero, &board), HandCategory::TopPair);
/// assert_eq!(classify(&hero, &Board::empty()), HandCategory::PremiumHigh);
/// ```
pub fn classify(hero: &HoleCards, board: &Board) -> HandCategory {
    if board.is_empty() {
        classify_preflop(hero)
    } else {
        classify_postflop(hero, board)
    }
}

/// Slot-based entry: `None` until both hero cards are chosen.
pub fn classify_slots(hero: [Option<Card>; 2], board: [Option<Card>; 5]) -> Option<HandCategory> {
    let hero = HoleCards::from_slots(hero)?;
    Some(classify(&hero, &Board::from_slots(board)))
}

fn classify_preflop(hero: &HoleCards) -> HandCategory {
    let (hi, lo) = hero.high_low();
    if hero.is_pair() {
        return if hi >= 12 {
            HandCategory::PremiumPair
        } else if hi >= 10 {
            HandCategory::StrongPair
        } else {
            HandCategory::SmallPair
        };
    }
    if hi == 14 && lo >= 12 {
        return HandCategory::PremiumHigh;
    }
    if hero.is_suited() {
        if hi == 14 {
            return HandCategory::SuitedAce;
        }
        if hi - lo <= 2 {
            return HandCategory::SuitedConnector;
        }
    }
    if lo >= 10 {
        return HandCategory::Broadway;
    }
    if hi >= 11 {
        return HandCategory::PreHighCard;
    }
    HandCategory::PreTrash
}

fn classify_postflop(hero: &HoleCards, board: &Board) -> HandCategory {
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hero.as_array());
    cards.extend_from_slice(board.as_slice());

    // zero (fewer than five cards) falls through to draws and fallbacks
    let score = evaluate(&cards);
    if !score.is_zero() {
        match score.category() {
            Category::StraightFlush => {
                let top = score.primary_rank().map_or(0, |r| r.value());
                return if board.contains_rank(top) && top < Rank::Ace.value() {
                    HandCategory::StraightFlushLower
                } else {
                    HandCategory::StraightFlushNuts
                };
            }
            Category::FourOfAKind => return HandCategory::Quads,
            Category::FullHouse => return HandCategory::FullHouse,
            Category::Flush => {
                let ace_held = flush_suit(&cards).is_some_and(|s| hero.contains(Card::new(Rank::Ace, s)));
                return if ace_held { HandCategory::FlushNuts } else { HandCategory::Flush };
            }
            Category::Straight => return HandCategory::Straight,
            Category::ThreeOfAKind => return HandCategory::Monster,
            Category::TwoPair => return HandCategory::TwoPair,
            _ => {}
        }
    }

    let draws = if board.is_river() { DrawInfo::default() } else { DrawInfo::detect(hero, &cards) };
    if draws.has_flush_draw() && draws.open_ended {
        return HandCategory::ComboDraw;
    }
    if draws.nut_flush {
        return HandCategory::NutFlushDraw;
    }
    if draws.has_flush_draw() {
        return HandCategory::FlushDraw;
    }
    if draws.open_ended {
        return HandCategory::OpenEndedDraw;
    }

    if score.category() == Category::Pair {
        if let Some(pair) = score.primary_rank().and_then(|r| classify_pair(hero, board, r)) {
            return pair;
        }
    }

    if draws.gutshot {
        return HandCategory::GutshotDraw;
    }
    let (_, hero_low) = hero.high_low();
    match board.rank_span() {
        Some((max_board, _)) if hero_low > max_board => HandCategory::Overcards,
        _ => HandCategory::HighCardWeak,
    }
}

/// Position of hero's pair relative to the board. `None` when hero holds
/// no card of the pair rank (the pair is on the board).
fn classify_pair(hero: &HoleCards, board: &Board, pair: Rank) -> Option<HandCategory> {
    let held = hero.as_array().iter().filter(|c| c.rank() == pair).count();
    if held == 0 {
        return None;
    }
    let (max_board, min_board) = board.rank_span()?;
    let v = pair.value();
    let category = if held == 2 && !board.contains_rank(v) {
        if v > max_board {
            HandCategory::Overpair
        } else {
            HandCategory::Underpair
        }
    } else if v == max_board {
        HandCategory::TopPair
    } else if v > min_board {
        HandCategory::MiddlePair
    } else {
        HandCategory::BottomPair
    };
    Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(hero: &str, board: &str) -> HandCategory {
        let hero: HoleCards = hero.parse().unwrap();
        let board: Board = board.parse().unwrap();
        classify(&hero, &board)
    }

    #[test]
    fn preflop_buckets_in_priority_order() {
        assert_eq!(cat("As Ad", ""), HandCategory::PremiumPair);
        assert_eq!(cat("Qs Qd", ""), HandCategory::PremiumPair);
        assert_eq!(cat("Js Jd", ""), HandCategory::StrongPair);
        assert_eq!(cat("Ts Td", ""), HandCategory::StrongPair);
        assert_eq!(cat("9s 9d", ""), HandCategory::SmallPair);
        assert_eq!(cat("As Kd", ""), HandCategory::PremiumHigh);
        assert_eq!(cat("Ah Qh", ""), HandCategory::PremiumHigh);
        assert_eq!(cat("Ah 5h", ""), HandCategory::SuitedAce);
        assert_eq!(cat("9h 7h", ""), HandCategory::SuitedConnector);
        assert_eq!(cat("Kh Qd", ""), HandCategory::Broadway);
        assert_eq!(cat("Ks Jd", ""), HandCategory::Broadway);
        assert_eq!(cat("Js 4d", ""), HandCategory::PreHighCard);
        assert_eq!(cat("7s 6h", ""), HandCategory::PreTrash);
    }

    #[test]
    fn suited_gap_of_three_is_not_a_connector() {
        assert_eq!(cat("9h 6h", ""), HandCategory::PreTrash);
        assert_eq!(cat("Kh 9h", ""), HandCategory::PreHighCard);
    }

    #[test]
    fn made_tiers() {
        assert_eq!(cat("8s 8d", "Ah 8c 2d"), HandCategory::Monster);
        assert_eq!(cat("8s 8d", "8h 8c 2d"), HandCategory::Quads);
        assert_eq!(cat("8s 2s", "8h 8c 2d"), HandCategory::FullHouse);
        assert_eq!(cat("9s Td", "Jh Qc Kd"), HandCategory::Straight);
        assert_eq!(cat("Ks Qd", "Kh Qc 2d"), HandCategory::TwoPair);
    }

    #[test]
    fn straight_flush_nut_awareness() {
        // hero completes the top end
        assert_eq!(cat("7s 8s", "4s 5s 6s"), HandCategory::StraightFlushNuts);
        // hero under-fills the bottom; the six on the board tops it
        assert_eq!(cat("2s 3s", "4s 5s 6s"), HandCategory::StraightFlushLower);
        // royal
        assert_eq!(cat("2d 3c", "As Ks Qs Js Ts"), HandCategory::StraightFlushNuts);
    }

    #[test]
    fn flush_nut_awareness() {
        assert_eq!(cat("As 3d", "Ks 9s 4s 2s"), HandCategory::FlushNuts);
        assert_eq!(cat("Qs 3d", "Ks 9s 4s 2s"), HandCategory::Flush);
    }

    #[test]
    fn pair_positions() {
        assert_eq!(cat("As Qd", "Ah 7c 2d"), HandCategory::TopPair);
        assert_eq!(cat("7s Qd", "Ah 7c 2d"), HandCategory::MiddlePair);
        assert_eq!(cat("2s Qd", "Ah 7c 2d"), HandCategory::BottomPair);
        assert_eq!(cat("Ks Kd", "Qh 7c 2d"), HandCategory::Overpair);
        assert_eq!(cat("5s 5d", "Qh 7c 2d"), HandCategory::Underpair);
    }

    #[test]
    fn draws_need_an_unfinished_board() {
        assert_eq!(cat("As 5s", "Ks 9d 2s 7c"), HandCategory::NutFlushDraw);
        assert_eq!(cat("As 5s", "Ks 9d 2s 7c 3c"), HandCategory::HighCardWeak);
    }

    #[test]
    fn flush_draw_variants() {
        assert_eq!(cat("As 5s", "Ks 9d 2s"), HandCategory::NutFlushDraw);
        assert_eq!(cat("Qs 5s", "Ks 9d 2s"), HandCategory::FlushDraw);
        // four spades on board, none in hero's hand
        assert_eq!(cat("Qd 5c", "Ks 9s 2s 4s"), HandCategory::HighCardWeak);
    }

    #[test]
    fn straight_draws() {
        assert_eq!(cat("9c 8d", "7h 6s 2c"), HandCategory::OpenEndedDraw);
        assert_eq!(cat("9h 8h", "7h 6s 2h"), HandCategory::ComboDraw);
        assert_eq!(cat("9c 8d", "6h 5s Kc"), HandCategory::GutshotDraw);
        // A-2-3-4 only has the five
        assert_eq!(cat("Ac 2d", "3h 4s Kc"), HandCategory::GutshotDraw);
        // J-Q-K-A only has the ten
        assert_eq!(cat("Ac Kd", "Qh Js 3c"), HandCategory::GutshotDraw);
    }

    #[test]
    fn draw_overrides_pair_but_not_two_pair() {
        // top pair with an open-ender reads as the draw
        assert_eq!(cat("9c 8d", "9h 7s 6c"), HandCategory::OpenEndedDraw);
        assert_eq!(cat("9c 7d", "9h 7s 6c 2s"), HandCategory::TwoPair);
    }

    #[test]
    fn pair_beats_gutshot() {
        assert_eq!(cat("9c 8d", "9h 6s 5c"), HandCategory::TopPair);
    }

    #[test]
    fn board_pair_falls_through() {
        assert_eq!(cat("Ac Kd", "7h 7s 2c"), HandCategory::Overcards);
        assert_eq!(cat("Ac 3d", "7h 7s 2c"), HandCategory::HighCardWeak);
    }

    #[test]
    fn partial_board_uses_draws_and_fallbacks() {
        assert_eq!(cat("Ah Kd", "Qc"), HandCategory::Overcards);
        assert_eq!(cat("Ah Kh", "Qh 2h"), HandCategory::NutFlushDraw);
        assert_eq!(cat("Ah Kd", "Ac 2d"), HandCategory::HighCardWeak);
    }

    #[test]
    fn slots_need_both_hero_cards() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(classify_slots([Some(a), None], [None; 5]), None);
        let b = Card::new(Rank::Ace, Suit::Diamonds);
        assert_eq!(classify_slots([Some(a), Some(b)], [None; 5]), Some(HandCategory::PremiumPair));
    }

    #[test]
    fn forced_categories() {
        for c in HandCategory::ALL {
            let forced = c.is_made() || c == HandCategory::Monster || c == HandCategory::PremiumPair;
            assert_eq!(c.forces_own_action(), forced, "{c}");
        }
        assert!(HandCategory::ALL.iter().all(|c| !(c.is_made() && c.is_preflop())));
    }
}
