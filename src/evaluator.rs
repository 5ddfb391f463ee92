//! Hand evaluation for any 5..=7 (or more) card set.
//!
//! A [`HandScore`] is a single integer: the category tier times 1,000,000
//! plus the tie-breaking ranks written as base-15 digits, most significant
//! first. Comparing two scores compares the hands.
//!
//! Larger inputs are not enumerated as 5-card subsets. The analysis counts
//! ranks and suits once and each detector picks the best group and kickers
//! directly, which orders hands exactly like an exhaustive subset search.

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank, Suit};
use crate::hand::{Board, HoleCards};
use std::fmt;

/// Distance between two category floors.
pub const TIER: u32 = 1_000_000;

/// Positional base for tie-break digits; every rank value (2..=14) fits in one digit.
pub const RADIX: u32 = 15;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Lowest score in this category's tier.
    pub const fn floor(self) -> u32 {
        self as u32 * TIER
    }

    /// Number of tie-break digits the category encodes.
    pub const fn slots(self) -> u32 {
        match self {
            Category::HighCard | Category::Flush => 5,
            Category::Pair => 4,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::FullHouse | Category::FourOfAKind => 2,
            Category::Straight | Category::StraightFlush => 1,
        }
    }

    fn from_ordinal(v: u32) -> Category {
        match v {
            0 => Category::HighCard,
            1 => Category::Pair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            _ => Category::StraightFlush,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// Comparable hand strength. Higher is better; zero is the "not enough
/// cards" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HandScore(u32);

impl HandScore {
    pub const ZERO: HandScore = HandScore(0);

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Pack a category and its tie-break ranks, most significant first.
    /// Missing trailing digits count as zero so every score of a category
    /// uses the same number of digits.
    pub fn from_parts(category: Category, ranks_desc: &[Rank]) -> Self {
        let slots = category.slots() as usize;
        let mut digits: u32 = 0;
        for i in 0..slots {
            let d = ranks_desc.get(i).map_or(0, |r| r.value() as u32);
            digits = digits * RADIX + d;
        }
        HandScore(category.floor() + digits)
    }

    pub fn category(self) -> Category {
        Category::from_ordinal(self.0 / TIER)
    }

    /// Tie-break digits below the category floor.
    pub const fn remainder(self) -> u32 {
        self.0 % TIER
    }

    /// Rank of the defining group: pair rank, trips rank, top of a
    /// straight, highest flush card, and so on.
    pub fn primary_rank(self) -> Option<Rank> {
        if self.is_zero() {
            return None;
        }
        let shift = RADIX.pow(self.category().slots() - 1);
        Rank::from_value((self.remainder() / shift) as u8)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primary_rank() {
            Some(r) => write!(f, "{} ({}) [{}]", self.category(), r, self.0),
            None => write!(f, "no hand [{}]", self.0),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to evaluate: {0} given, at least 5 needed")]
    NotEnoughCards(usize),
}

/// Score the best five-card hand contained in `cards`.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::evaluator::{try_evaluate, Category};
///
/// let cards = parse_cards("4s 5s 6s 7s 8s 9d Tc").unwrap();
/// let score = try_evaluate(&cards).unwrap();
/// assert_eq!(score.category(), Category::StraightFlush);
/// ```
pub fn try_evaluate(cards: &[Card]) -> Result<HandScore, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.len() < 5 {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    let analysis = HandAnalysis::new(cards);
    let score = DETECTORS.iter().find_map(|d| d.score(&analysis));
    // HighCardDetector always matches
    Ok(score.unwrap_or(HandScore::ZERO))
}

/// Like [`try_evaluate`] but returns [`HandScore::ZERO`] for fewer than five cards.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::evaluator::{evaluate, HandScore};
///
/// assert_eq!(evaluate(&parse_cards("As Kd").unwrap()), HandScore::ZERO);
/// let wheel = evaluate(&parse_cards("Ad 2c 3h 4s 5d").unwrap());
/// assert_eq!(wheel.raw(), 4_000_005);
/// ```
pub fn evaluate(cards: &[Card]) -> HandScore {
    try_evaluate(cards).unwrap_or(HandScore::ZERO)
}

/// Score hero's hole cards together with whatever board is revealed.
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<HandScore, EvalError> {
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    try_evaluate(&cards)
}

/// The suit chosen as the flush suit of `cards`, if any suit has five or
/// more members. With several decks more than one suit can qualify; the
/// first in [`Suit::ALL`] order wins.
pub fn flush_suit(cards: &[Card]) -> Option<Suit> {
    suit_info::SuitInfo::detect(cards).flush_suit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn score(s: &str) -> HandScore {
        evaluate(&parse_cards(s).unwrap())
    }

    #[test]
    fn fewer_than_five_cards_is_sentinel() {
        assert_eq!(score("As Ks Qs Js"), HandScore::ZERO);
        assert!(matches!(
            try_evaluate(&parse_cards("As").unwrap()),
            Err(EvalError::NotEnoughCards(1))
        ));
    }

    #[test]
    fn exact_encodings_per_category() {
        assert_eq!(score("As Kd Qc Jh 9s").raw(), 14 * 15u32.pow(4) + 13 * 3375 + 12 * 225 + 11 * 15 + 9);
        assert_eq!(score("As Ad Qc Jh 9s").raw(), 1_000_000 + 14 * 3375 + 12 * 225 + 11 * 15 + 9);
        assert_eq!(score("Ks Kd Qc Qh 9s").raw(), 2_000_000 + 13 * 225 + 12 * 15 + 9);
        assert_eq!(score("Ts Td Tc Jh 9s").raw(), 3_000_000 + 10 * 225 + 11 * 15 + 9);
        assert_eq!(score("Ts 9d 8c 7h 6s").raw(), 4_000_010);
        assert_eq!(score("As Ks Qs Js 9s").raw(), 5_000_000 + 14 * 50625 + 13 * 3375 + 12 * 225 + 11 * 15 + 9);
        assert_eq!(score("As Ad Ac Kh Ks").raw(), 6_000_000 + 14 * 15 + 13);
        assert_eq!(score("7s 7d 7c 7h Ks").raw(), 7_000_000 + 7 * 15 + 13);
        assert_eq!(score("Td 9d 8d 7d 6d").raw(), 8_000_010);
        assert_eq!(score("Ah Kh Qh Jh Th").raw(), 8_000_014);
    }

    #[test]
    fn primary_rank_decodes_defining_group() {
        assert_eq!(score("8s 8d Ac 5h 2s").primary_rank(), Some(Rank::Eight));
        assert_eq!(score("Ad 2c 3h 4s 5d").primary_rank(), Some(Rank::Five));
        assert_eq!(score("Qs Qd Qc 2h 2s").primary_rank(), Some(Rank::Queen));
        assert_eq!(HandScore::ZERO.primary_rank(), None);
    }

    #[test]
    fn highest_within_tier_stays_below_next_floor() {
        let top_high = score("As Kd Qc Jh 9s");
        let top_pair = score("As Ad Kc Qh Js");
        let top_flush = score("As Ks Qs Js 9s");
        assert!(top_high.raw() < Category::Pair.floor());
        assert!(top_pair.raw() < Category::TwoPair.floor());
        assert!(top_flush.raw() < Category::FullHouse.floor());
    }

    #[test]
    fn holdem_combines_hole_and_board() {
        let hole: HoleCards = "8s 8d".parse().unwrap();
        let board: Board = "Ah 8c 2d".parse().unwrap();
        let s = evaluate_holdem(&hole, &board).unwrap();
        assert_eq!(s.category(), Category::ThreeOfAKind);
        assert!(evaluate_holdem(&hole, &Board::empty()).is_err());
    }

    #[test]
    fn flush_suit_prefers_enumeration_order() {
        let cards = parse_cards("2h 4h 6h 8h Th 3s 5s 7s 9s Js").unwrap();
        assert_eq!(flush_suit(&cards), Some(Suit::Spades));
        assert_eq!(flush_suit(&parse_cards("2h 4h 6h 8h Ts").unwrap()), None);
    }
}
