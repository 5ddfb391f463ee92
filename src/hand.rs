use crate::cards::{parse_cards, Card};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("deck count must be at least 1")]
    InvalidDeckCount,
    #[error("{card} appears {copies} times but only {deck_count} deck(s) are in play")]
    TooManyCopies { card: Card, copies: usize, deck_count: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Hero's two private cards. With several decks in the shoe both cards may
/// share rank and suit, so no distinctness check is made here; see
/// [`validate_cards`].
///
/// ```
/// use holdem_advisor::hand::HoleCards;
///
/// let hole: HoleCards = "As Kd".parse().unwrap();
/// assert!(!hole.is_suited());
/// assert!(!hole.is_pair());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub const fn new(a: Card, b: Card) -> Self {
        Self(a, b)
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    /// Build from two nullable UI slots; `None` until both are chosen.
    pub fn from_slots(slots: [Option<Card>; 2]) -> Option<Self> {
        match slots {
            [Some(a), Some(b)] => Some(Self(a, b)),
            _ => None,
        }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Ok(Self(*a, *b)),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }

    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }

    /// Higher then lower rank value.
    pub fn high_low(&self) -> (u8, u8) {
        let a = self.0.rank().value();
        let b = self.1.rank().value();
        (a.max(b), a.min(b))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Betting round implied by how many community cards are revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

/// Community cards revealed so far (0..=5).
///
/// ```
/// use holdem_advisor::hand::{Board, Street};
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.street(), Street::Flop);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        Ok(Self { cards })
    }

    /// Collect the revealed cards of five nullable street slots, in slot order.
    pub fn from_slots(slots: [Option<Card>; 5]) -> Self {
        Self { cards: slots.into_iter().flatten().collect() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn street(&self) -> Street {
        match self.cards.len() {
            0 => Street::Preflop,
            1..=3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    pub fn is_river(&self) -> bool {
        self.cards.len() == 5
    }

    /// Highest and lowest rank values on the board.
    pub fn rank_span(&self) -> Option<(u8, u8)> {
        let ranks = self.cards.iter().map(|c| c.rank().value());
        Some((ranks.clone().max()?, ranks.min()?))
    }

    pub fn contains_rank(&self, value: u8) -> bool {
        self.cards.iter().any(|c| c.rank().value() == value)
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Check that the known cards fit in a shoe of `deck_count` decks: no
/// (rank, suit) may be placed more often than there are decks.
///
/// The core assumes valid input; front ends call this before invoking it.
///
/// ```
/// use holdem_advisor::hand::{validate_cards, Board, HoleCards};
///
/// let hole: HoleCards = "As As".parse().unwrap();
/// let board = Board::empty();
/// assert!(validate_cards(&hole, &board, 1).is_err());
/// assert!(validate_cards(&hole, &board, 2).is_ok());
/// ```
pub fn validate_cards(hole: &HoleCards, board: &Board, deck_count: usize) -> Result<(), HandError> {
    if deck_count == 0 {
        return Err(HandError::InvalidDeckCount);
    }
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let mut copies: HashMap<Card, usize> = HashMap::new();
    for c in hole.as_array().iter().chain(board.as_slice()) {
        *copies.entry(*c).or_insert(0) += 1;
    }
    let mut over: Vec<(Card, usize)> =
        copies.into_iter().filter(|(_, n)| *n > deck_count).collect();
    over.sort();
    match over.first() {
        Some(&(card, copies)) => Err(HandError::TooManyCopies { card, copies, deck_count }),
        None => Ok(()),
    }
}
