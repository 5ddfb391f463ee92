use holdem_advisor::cards::parse_cards;
use holdem_advisor::lookup::{texture_text, Language};
use holdem_advisor::texture::{classify, BoardTexture};

fn tex(s: &str) -> Option<BoardTexture> {
    classify(&parse_cards(s).unwrap())
}

#[test]
fn texture_priority_order() {
    // paired and monotone at once: paired wins
    assert_eq!(tex("Kh Kd 4h 2h"), Some(BoardTexture::Paired));
    // monotone and connected at once: monotone wins
    assert_eq!(tex("9h 8h 7h"), Some(BoardTexture::Monotone));
    assert_eq!(tex("Qs Jd 3s"), Some(BoardTexture::TwoTone));
    assert_eq!(tex("Qs Jd 9c"), Some(BoardTexture::Connected));
    assert_eq!(tex("Qs 7d 2c"), Some(BoardTexture::Dry));
}

#[test]
fn connected_window_spans_at_most_four() {
    assert_eq!(tex("Ts 8d 6c"), Some(BoardTexture::Connected));
    assert_eq!(tex("Ts 8d 5c"), Some(BoardTexture::Dry));
    // rainbow turn with three cards close together
    assert_eq!(tex("Ks 8d 9c 7h"), Some(BoardTexture::Connected));
    assert_eq!(tex("Ks 2d 9c 7h"), Some(BoardTexture::Dry));
}

#[test]
fn river_with_two_of_a_suit_is_two_tone() {
    assert_eq!(tex("Ks 2d 9c 4s Jh"), Some(BoardTexture::TwoTone));
}

#[test]
fn wet_collapse_includes_paired() {
    assert!(BoardTexture::Paired.is_wet());
    assert!(!BoardTexture::Dry.is_wet());
}

#[test]
fn every_texture_has_text() {
    for t in BoardTexture::ALL {
        for lang in Language::ALL {
            let text = texture_text(lang, t);
            assert!(!text.name.is_empty());
            assert!(!text.description.is_empty());
        }
    }
}
