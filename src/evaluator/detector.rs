use super::hand_analysis::HandAnalysis;
use super::{Category, HandScore};

/// Each category detector scores the hand if it belongs to its category.
pub trait CategoryDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks within the flush suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = analysis.suit_info.straight_flush.top_rank?;
        Some(HandScore::from_parts(Category::StraightFlush, &[top]))
    }
}

/// Four of a Kind plus the best remaining rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let quad = analysis.rank_groups.quad()?;
        let mut parts = vec![quad];
        parts.extend(analysis.rank_groups.kickers(&[quad], 1));
        Some(HandScore::from_parts(Category::FourOfAKind, &parts))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        Some(HandScore::from_parts(Category::FullHouse, &[trips, pair]))
    }
}

/// Flush: the five best cards of the flush suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        analysis
            .suit_info
            .is_flush()
            .then(|| HandScore::from_parts(Category::Flush, &analysis.suit_info.flush_ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = analysis.straight_info.top_rank?;
        Some(HandScore::from_parts(Category::Straight, &[top]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let trips = analysis.rank_groups.trips()?;
        let mut parts = vec![trips];
        parts.extend(analysis.rank_groups.kickers(&[trips], 2));
        Some(HandScore::from_parts(Category::ThreeOfAKind, &parts))
    }
}

/// Two Pair: the two highest pairs and the best remaining rank
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let pairs = analysis.rank_groups.pairs();
        let &[hi, lo, ..] = &pairs[..] else {
            return None;
        };
        let mut parts = vec![hi, lo];
        parts.extend(analysis.rank_groups.kickers(&[hi, lo], 1));
        Some(HandScore::from_parts(Category::TwoPair, &parts))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let pair = *analysis.rank_groups.pairs().first()?;
        let mut parts = vec![pair];
        parts.extend(analysis.rank_groups.kickers(&[pair], 3));
        Some(HandScore::from_parts(Category::Pair, &parts))
    }
}

/// High Card: always matches as the fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn score(&self, analysis: &HandAnalysis) -> Option<HandScore> {
        let top = analysis.rank_groups.kickers(&[], 5);
        Some(HandScore::from_parts(Category::HighCard, &top))
    }
}

/// All detectors in priority order (highest category first).
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn first_match(s: &str) -> Category {
        let analysis = HandAnalysis::new(&parse_cards(s).unwrap());
        DETECTORS.iter().find_map(|d| d.score(&analysis)).unwrap().category()
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(first_match("9h Th Jh Qh Kh Ks Kd"), Category::StraightFlush);
        assert_eq!(first_match("Ks Kd Kh Kc Qh Qs Qd"), Category::FourOfAKind);
        assert_eq!(first_match("Ks Kd Kh 2h 5h 7h 2d"), Category::FullHouse);
        assert_eq!(first_match("2h 5h 7h 9h Jh Th Qd"), Category::Flush);
        assert_eq!(first_match("9h Td Jc Qs Ks 9d 9c"), Category::Straight);
        assert_eq!(first_match("9h 9d 9c Qs Ks 2d 4c"), Category::ThreeOfAKind);
        assert_eq!(first_match("9h 9d Qc Qs Ks 2d 4c"), Category::TwoPair);
        assert_eq!(first_match("9h 9d Jc Qs Ks 2d 4c"), Category::Pair);
        assert_eq!(first_match("9h 7d Jc Qs Ks 2d 4c"), Category::HighCard);
    }

    #[test]
    fn test_each_detector_declines_other_categories() {
        let analysis = HandAnalysis::new(&parse_cards("9h 7d Jc Qs Ks 2d 4c").unwrap());
        assert!(StraightFlushDetector.score(&analysis).is_none());
        assert!(FourOfAKindDetector.score(&analysis).is_none());
        assert!(FullHouseDetector.score(&analysis).is_none());
        assert!(FlushDetector.score(&analysis).is_none());
        assert!(StraightDetector.score(&analysis).is_none());
        assert!(ThreeOfAKindDetector.score(&analysis).is_none());
        assert!(TwoPairDetector.score(&analysis).is_none());
        assert!(OnePairDetector.score(&analysis).is_none());
        assert!(HighCardDetector.score(&analysis).is_some());
    }
}
