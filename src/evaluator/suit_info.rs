use super::straight_info::StraightInfo;
use crate::cards::{Card, Rank, Suit};

/// Flush facts of a hand: the flush suit, its five best ranks, and the
/// best straight made only from cards of that suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub suit_counts: [u8; 4],
    pub flush_suit: Option<Suit>,
    /// Top five ranks of the flush suit, descending. Repeats are kept when
    /// several decks supply the same card.
    pub flush_ranks: Vec<Rank>,
    pub straight_flush: StraightInfo,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mut suit_counts = [0u8; 4];
        for c in cards {
            suit_counts[c.suit().index()] += 1;
        }
        let flush_suit = Suit::ALL.into_iter().find(|s| suit_counts[s.index()] >= 5);

        let Some(suit) = flush_suit else {
            return SuitInfo {
                suit_counts,
                flush_suit,
                flush_ranks: Vec::new(),
                straight_flush: StraightInfo { top_rank: None },
            };
        };

        let mut suited: Vec<Rank> =
            cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect();
        suited.sort_unstable_by(|a, b| b.cmp(a));
        let straight_flush = StraightInfo::detect(suited.iter().copied());
        suited.truncate(5);

        SuitInfo { suit_counts, flush_suit, flush_ranks: suited, straight_flush }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
