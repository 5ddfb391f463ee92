use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A shoe of `deck_count` standard 52-card decks.
///
/// ```
/// use holdem_advisor::deck::Deck;
///
/// assert_eq!(Deck::standard().len(), 52);
/// assert_eq!(Deck::with_decks(3).len(), 156);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self::with_decks(1)
    }

    /// Build `deck_count` full decks. A count of zero yields an empty shoe.
    pub fn with_decks(deck_count: usize) -> Self {
        let mut cards = Vec::with_capacity(52 * deck_count);
        for _ in 0..deck_count {
            for s in Suit::ALL {
                for r in Rank::ALL {
                    cards.push(Card::new(r, s));
                }
            }
        }
        Self { cards }
    }

    /// Remove one physical copy per entry of `known`. Cards that are not in
    /// the shoe any more are skipped. Returns how many copies were removed.
    pub fn remove_known(&mut self, known: &[Card]) -> usize {
        let mut removed = 0;
        for k in known {
            if let Some(idx) = self.cards.iter().position(|c| c == k) {
                self.cards.swap_remove(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Copies of `card` still in the shoe.
    pub fn copies_of(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
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

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Fisher–Yates shuffle with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the shoe.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the shoe.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}
