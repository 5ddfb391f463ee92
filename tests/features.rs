use holdem_advisor::cards::Card;
use holdem_advisor::features::{classify, classify_slots, DrawKind, HandCategory};
use holdem_advisor::hand::{Board, HoleCards};

fn cat(hero: &str, board: &str) -> HandCategory {
    let hero: HoleCards = hero.parse().unwrap();
    let board: Board = board.parse().unwrap();
    classify(&hero, &board)
}

#[test]
fn preflop_reference_hands() {
    assert_eq!(cat("As Ad", ""), HandCategory::PremiumPair);
    // offsuit 7-6: no suitedness, no broadway, no high card
    assert_eq!(cat("7s 6h", ""), HandCategory::PreTrash);
    assert_eq!(cat("7h 6h", ""), HandCategory::SuitedConnector);
    assert_eq!(cat("Jc 4d", ""), HandCategory::PreHighCard);
}

#[test]
fn postflop_reference_hands() {
    assert_eq!(cat("As Qd", "Ah 7c 2d"), HandCategory::TopPair);
    assert_eq!(cat("8s 8d", "Ah 8c 2d"), HandCategory::Monster);
    assert_eq!(cat("As 5s", "Ks 9d 2s"), HandCategory::NutFlushDraw);
    assert_eq!(cat("Js 5s", "Ks 9d 2s"), HandCategory::FlushDraw);
}

#[test]
fn two_pair_is_its_own_tier() {
    assert_eq!(cat("As 7d", "Ah 7c 2d"), HandCategory::TwoPair);
}

#[test]
fn made_hands_carry_nut_awareness() {
    assert_eq!(cat("As 4s", "Ks 9s 2s"), HandCategory::FlushNuts);
    assert_eq!(cat("Qs 4s", "Ks 9s 2s"), HandCategory::Flush);
    assert_eq!(cat("2h 3h", "4h 5h 6h"), HandCategory::StraightFlushLower);
    assert_eq!(cat("7h 8h", "4h 5h 6h"), HandCategory::StraightFlushNuts);
    assert!(HandCategory::StraightFlushLower.is_made());
}

#[test]
fn draws_only_before_the_river() {
    assert_eq!(cat("9h 8h", "7h 6c 2h"), HandCategory::ComboDraw);
    assert_eq!(cat("9h 8c", "7d 6c 2h"), HandCategory::OpenEndedDraw);
    assert_eq!(cat("9h 8c", "7d 6c 2h Ks Qs"), HandCategory::HighCardWeak);
}

#[test]
fn draws_override_one_pair() {
    // top pair of kings with a flush draw
    assert_eq!(cat("Kh 4h", "Kc 9h 2h"), HandCategory::FlushDraw);
}

#[test]
fn board_pair_is_not_hero_pair() {
    assert_eq!(cat("Ah Kd", "7c 7d 2s"), HandCategory::Overcards);
    assert_eq!(cat("Ah 3d", "7c 7d 9s"), HandCategory::HighCardWeak);
}

#[test]
fn draw_categories_map_to_outs() {
    assert_eq!(HandCategory::ComboDraw.draw_kind().map(DrawKind::outs), Some(15));
    assert_eq!(HandCategory::OpenEndedDraw.draw_kind().map(DrawKind::outs), Some(8));
    assert_eq!(HandCategory::TopPair.draw_kind(), None);
}

#[test]
fn classification_is_pure() {
    for _ in 0..5 {
        assert_eq!(cat("Td 9d", "8d 7s 2c"), cat("Td 9d", "8d 7s 2c"));
    }
}

#[test]
fn slots_need_both_hero_cards() {
    let a: Card = "As".parse().unwrap();
    let k: Card = "Ks".parse().unwrap();
    assert_eq!(classify_slots([Some(a), None], [None; 5]), None);
    assert_eq!(classify_slots([Some(a), Some(k)], [None; 5]), Some(HandCategory::PremiumHigh));
}

#[test]
fn every_category_has_a_unique_key() {
    let mut keys: Vec<&str> = HandCategory::ALL.iter().map(|c| c.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), HandCategory::ALL.len());
}
