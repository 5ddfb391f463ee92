use crate::cards::Card;
use std::fmt;

/// Qualitative shape of the community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardTexture {
    /// At least two board cards share a rank.
    Paired,
    /// Three or more board cards of one suit.
    Monotone,
    /// The most common suit appears exactly twice.
    TwoTone,
    /// Some three distinct ranks fit inside a five-rank window.
    Connected,
    /// Rainbow, no connection.
    Dry,
}

impl BoardTexture {
    pub const ALL: [BoardTexture; 5] = [
        BoardTexture::Paired,
        BoardTexture::Monotone,
        BoardTexture::TwoTone,
        BoardTexture::Connected,
        BoardTexture::Dry,
    ];

    /// Binary draw-richness signal used by the advice layer. Paired boards
    /// count as wet.
    pub const fn is_wet(self) -> bool {
        !matches!(self, BoardTexture::Dry)
    }

    pub const fn key(self) -> &'static str {
        match self {
            BoardTexture::Paired => "paired",
            BoardTexture::Monotone => "monotone",
            BoardTexture::TwoTone => "two_tone",
            BoardTexture::Connected => "connected",
            BoardTexture::Dry => "dry",
        }
    }

    /// Continuation-bet fraction of the pot suited to this texture.
    pub const fn cbet_fraction(self) -> f64 {
        match self {
            BoardTexture::Dry => 0.33,
            BoardTexture::TwoTone | BoardTexture::Connected => 0.5,
            BoardTexture::Monotone | BoardTexture::Paired => 0.75,
        }
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Classify revealed community cards. `None` until at least three are out.
///
/// The first matching label wins: paired, monotone, two-tone, connected, dry.
///
/// ```
/// use holdem_advisor::cards::parse_cards;
/// use holdem_advisor::texture::{classify, BoardTexture};
///
/// assert_eq!(classify(&parse_cards("Kh 7c 2d").unwrap()), Some(BoardTexture::Dry));
/// assert_eq!(classify(&parse_cards("9h 8h 2d").unwrap()), Some(BoardTexture::TwoTone));
/// assert_eq!(classify(&parse_cards("9h 8h").unwrap()), None);
/// ```
pub fn classify(board: &[Card]) -> Option<BoardTexture> {
    if board.len() < 3 {
        return None;
    }
    let mut suits = [0u8; 4];
    let mut rank_counts = [0u8; 15];
    for c in board {
        suits[c.suit().index()] += 1;
        rank_counts[c.rank().value() as usize] += 1;
    }

    if rank_counts.iter().any(|&n| n >= 2) {
        return Some(BoardTexture::Paired);
    }
    let max_suit = suits.iter().copied().max().unwrap_or(0);
    if max_suit >= 3 {
        return Some(BoardTexture::Monotone);
    }
    if max_suit == 2 {
        return Some(BoardTexture::TwoTone);
    }

    // ascending distinct ranks; board is unpaired here
    let ranks: Vec<u8> = (2..=14u8).filter(|&v| rank_counts[v as usize] > 0).collect();
    if ranks.windows(3).any(|w| w[2] - w[0] <= 4) {
        return Some(BoardTexture::Connected);
    }
    Some(BoardTexture::Dry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn tex(s: &str) -> Option<BoardTexture> {
        classify(&parse_cards(s).unwrap())
    }

    #[test]
    fn fewer_than_three_cards_has_no_texture() {
        assert_eq!(tex(""), None);
        assert_eq!(tex("Ah"), None);
        assert_eq!(tex("Ah Kh"), None);
    }

    #[test]
    fn paired_outranks_suit_labels() {
        assert_eq!(tex("7h 7d 2h"), Some(BoardTexture::Paired));
        assert_eq!(tex("7h 7h 2h"), Some(BoardTexture::Paired));
    }

    #[test]
    fn monotone_needs_three_of_a_suit() {
        assert_eq!(tex("Kh 9h 4h"), Some(BoardTexture::Monotone));
        assert_eq!(tex("Kh 9h 4h 2c"), Some(BoardTexture::Monotone));
    }

    #[test]
    fn two_tone_before_connected() {
        assert_eq!(tex("9h 8h 7c"), Some(BoardTexture::TwoTone));
    }

    #[test]
    fn connected_rainbow() {
        assert_eq!(tex("9h 8d 7c"), Some(BoardTexture::Connected));
        assert_eq!(tex("9h 7d 5c"), Some(BoardTexture::Connected));
        assert_eq!(tex("Kh 9d 4c"), Some(BoardTexture::Dry));
        // ace counts high only
        assert_eq!(tex("Ah 2d 3c"), Some(BoardTexture::Dry));
    }

    #[test]
    fn four_card_boards() {
        assert_eq!(tex("Kh 9d 4c 2s"), Some(BoardTexture::Dry));
        assert_eq!(tex("Kh 9d 4c 2h"), Some(BoardTexture::TwoTone));
    }

    #[test]
    fn only_dry_is_dry() {
        for t in BoardTexture::ALL {
            assert_eq!(t.is_wet(), t != BoardTexture::Dry);
        }
    }
}
