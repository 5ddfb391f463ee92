use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a hand of five or more cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(cards.iter().map(|c| c.rank()));

        Self { rank_groups, suit_info, straight_info }
    }
}
