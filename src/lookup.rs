//! Read-only text tables keyed by language: hand category label, advice
//! and reason; texture name and description; action and position labels;
//! plus the draw-odds reference table.
//!
//! Every table is an exhaustive `match`, so adding a category or texture
//! without its text fails to compile.

use crate::advice::{Action, ParseOptionError, Position};
use crate::features::{DrawKind, HandCategory};
use crate::hand::Street;
use crate::texture::BoardTexture;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];
}

impl FromStr for Language {
    type Err = ParseOptionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" | "zh-tw" | "zh-hant" => Ok(Language::Zh),
            _ => Err(ParseOptionError::Language(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryText {
    pub label: &'static str,
    pub advice: &'static str,
    pub reason: &'static str,
}

const fn ct(label: &'static str, advice: &'static str, reason: &'static str) -> CategoryText {
    CategoryText { label, advice, reason }
}

pub fn category_text(lang: Language, category: HandCategory) -> CategoryText {
    match lang {
        Language::En => category_text_en(category),
        Language::Zh => category_text_zh(category),
    }
}

fn category_text_en(category: HandCategory) -> CategoryText {
    use HandCategory::*;
    match category {
        PremiumPair => ct(
            "Premium Pair (AA-QQ)",
            "Raise/4-Bet",
            "Absolute powerhouses. Build a massive pot immediately to isolate opponents.",
        ),
        StrongPair => ct(
            "Strong Pair (JJ-TT)",
            "Raise/Call",
            "Good value, but vulnerable to overcards (A/K/Q). Proceed with caution facing aggression.",
        ),
        SmallPair => ct(
            "Set Mining (99-22)",
            "Call Cheap",
            "Goal: Hit a Set (Three of a Kind). Implied odds are huge, but fold if you miss.",
        ),
        PremiumHigh => ct(
            "Premium High (AK/AQ)",
            "Raise for Value",
            "Dominating hands. If you hit top pair, you usually have the best kicker (TPTK).",
        ),
        SuitedAce => ct(
            "Suited Ace (Axs)",
            "Semi-Bluff/Blocker",
            "Nut flush potential + Ace blocker. Excellent candidate for 3-bet bluffs.",
        ),
        SuitedConnector => ct(
            "Suited Connector",
            "Speculate/Call",
            "Monster killers! Great playability post-flop. Play them in position with deep stacks.",
        ),
        Broadway => ct(
            "Broadways (KJ/QJ)",
            "Proceed with Caution",
            "Good top pair potential, but easily dominated by AK/AQ. Be careful if resistance is heavy.",
        ),
        PreHighCard => ct(
            "High Card (Jx+)",
            "Steal/Fold",
            "One high card and a weak kicker. Open from late position to steal, fold to resistance.",
        ),
        PreTrash => ct("Trash", "Fold", "Negative EV. Save your chips for better spots. Discipline wins games."),
        StraightFlushNuts => ct(
            "Straight Flush",
            "Slowplay/Trap",
            "The nuts! Focus solely on extracting maximum value from your opponent.",
        ),
        StraightFlushLower => ct(
            "Straight Flush (Low End)",
            "Call/Caution",
            "A higher straight flush can be made with the board cards. Avoid building a huge pot.",
        ),
        Quads => ct(
            "Quads",
            "Slowplay",
            "Invincible. Give opponents a chance to catch a hand so they can pay you off.",
        ),
        FullHouse => ct("Full House", "Value Bet", "Monster hand. Bet for value unless you fear a bigger boat."),
        FlushNuts => ct(
            "Nut Flush",
            "Value Bet",
            "Ace-high flush. Only a full house or better beats you, so bet for value.",
        ),
        Flush => ct(
            "Flush",
            "Value/Defend",
            "Strong hand. Beware of paired boards (Full House possibility). If Ace-high flush, you're golden.",
        ),
        Straight => ct(
            "Straight",
            "Aggressive",
            "Strong hand. Bet to deny equity to flush draws or extract value from sets.",
        ),
        Monster => ct(
            "Trips/Set",
            "Fast Play",
            "Sets are hidden monsters. Build the pot fast before the board gets scary.",
        ),
        TwoPair => ct(
            "Two Pair",
            "Value Bet",
            "Strong, but straights, flushes and a paired board can pass you. Bet for value and protection.",
        ),
        ComboDraw => ct(
            "Combo Draw",
            "All-In/Jam",
            "Flush + Straight draw. You often have >50% equity even against top pair. Aggression pays off!",
        ),
        NutFlushDraw => ct(
            "Nut Flush Draw",
            "Semi-Bluff",
            "Drawing to the Ace-high flush. Huge equity and fold equity combined.",
        ),
        FlushDraw => ct(
            "Flush Draw",
            "Call/Raise",
            "9 outs to a flush. Playable, but don't overcommit without the right odds.",
        ),
        OpenEndedDraw => ct(
            "Open-Ended Straight",
            "Aggressive",
            "8 outs. A very solid draw that can be played aggressively.",
        ),
        TopPair => ct(
            "Top Pair",
            "Value/Pot Control",
            "You likely have the best hand. Bet for value on dry boards; protect on wet boards.",
        ),
        Overpair => ct(
            "Overpair",
            "Strong Value",
            "Your pair is bigger than the board. Very strong, but watch out for sets.",
        ),
        MiddlePair => ct(
            "Middle Pair",
            "Bluff Catch",
            "Showdown value. Keep the pot small and try to get to showdown cheaply.",
        ),
        BottomPair => ct(
            "Bottom Pair",
            "Check/Fold",
            "Weak value. Only beats a bluff. Fold to significant aggression.",
        ),
        Underpair => ct("Underpair", "Check/Fold", "Your hand is counterfeited. Very little value."),
        GutshotDraw => ct(
            "Gutshot",
            "Caution",
            "Only 4 outs. Don't chase unless you have pot odds or backdoor equity.",
        ),
        Overcards => ct(
            "Overcards",
            "Float/Check",
            "No made hand, but 6 outs to top pair. Play carefully.",
        ),
        HighCardWeak => ct(
            "No Made Hand",
            "Fold/Pure Bluff",
            "Zero equity. Give up unless you have a specific read to bluff.",
        ),
    }
}

fn category_text_zh(category: HandCategory) -> CategoryText {
    use HandCategory::*;
    match category {
        PremiumPair => ct(
            "超級對子 (AA/KK/QQ)",
            "加注/4-Bet (造大底池)",
            "起手巔峰牌力！不要慢打，目標是在翻牌前就建立巨大底池，隔離對手。",
        ),
        StrongPair => ct(
            "強對子 (JJ/TT)",
            "加注/跟注 (小心高牌)",
            "有攤牌價值，但很怕翻出A/K/Q。如果翻前遭遇強烈反擊(4-Bet)，可以考慮棄牌。",
        ),
        SmallPair => ct(
            "小對子 (22-99)",
            "投機/埋伏 (Set Mining)",
            "目標只有一個：中暗三條(Set)。賠率便宜就看牌，沒中就跑，中了就清空對手。",
        ),
        PremiumHigh => ct(
            "核心高牌 (AK/AQ)",
            "加注/價值 (強勢開局)",
            "這是壓制牌。擊中頂對通常是頂踢腳(TPTK)。即使沒中，也有足夠的勝率去半詐唬。",
        ),
        SuitedAce => ct(
            "同花A (A2s-A9s)",
            "半詐唬/阻斷 (Nut Potential)",
            "最強的投機牌！A是阻斷牌，且能聽堅果同花。非常適合用來做3-Bet詐唬。",
        ),
        SuitedConnector => ct(
            "同花連張 (65s-JTs)",
            "投機/跟注 (由守轉攻)",
            "怪獸殺手！具有極強的成順/成花隱蔽性。適合深籌碼、有位置時入局。",
        ),
        Broadway => ct(
            "廣播道 (KJ/QJ/KQ)",
            "謹慎進攻 (注意踢腳)",
            "容易被主導(Dominated)的牌。擊中頂對但對手推All-in時，你的踢腳可能不夠大。",
        ),
        PreHighCard => ct(
            "單張高牌 (Jx+)",
            "後位偷盲/棄牌",
            "只有一張大牌，踢腳很弱。後位可以嘗試偷盲，遇到反擊就棄牌。",
        ),
        PreTrash => ct(
            "雜牌 (Trash)",
            "棄牌 (Fold)",
            "不要浪費籌碼。長期來看，玩這種牌是虧損的根源。耐心等待。",
        ),
        StraightFlushNuts => ct(
            "同花順 (Straight Flush)",
            "慢打/誘敵 (絕對堅果)",
            "你已經無敵了。現在唯一的問題是：怎麼讓對手把錢全送給你？",
        ),
        StraightFlushLower => ct(
            "同花順 (小端)",
            "跟注/謹慎",
            "公牌可以組成更大的同花順。不要把底池做得太大。",
        ),
        Quads => ct(
            "四條 (Quads)",
            "慢打 (Slowplay)",
            "不需要保護手牌，對手幾乎不可能反超。給對手一點希望，讓他們中牌或詐唬。",
        ),
        FullHouse => ct(
            "葫蘆 (Full House)",
            "價值下注 (Value Bet)",
            "極強的成牌。除非牌面有更大的公對子，否則你幾乎穩贏。開始建立底池吧。",
        ),
        FlushNuts => ct(
            "堅果同花 (Nut Flush)",
            "價值下注 (Value Bet)",
            "A花同花！只有葫蘆以上的牌能贏你，放心做價值下注。",
        ),
        Flush => ct(
            "同花 (Flush)",
            "價值/防守",
            "你已經完成了同花！注意：如果牌面有公對，對手可能有葫蘆。",
        ),
        Straight => ct(
            "順子 (Straight)",
            "積極進攻 (Aggressive)",
            "順子是大牌，很容易被低估。在同花面要小心，否則請積極下注。",
        ),
        Monster => ct(
            "三條 (Trips/Set)",
            "強力價值 (Fast Play)",
            "暗三條(Set)極其隱蔽，是贏取大底池的最佳牌型。除非牌面極其濕潤，否則應該快打。",
        ),
        TwoPair => ct(
            "兩對 (Two Pair)",
            "價值下注 (Value Bet)",
            "牌力很強，但怕順子、同花和公對子。下注取得價值並保護手牌。",
        ),
        ComboDraw => ct(
            "雙重聽牌 (Combo Draw)",
            "全壓/重注 (Monster Draw)",
            "同時聽花和順！你的勝率往往比成牌還高。這是最完美的半詐唬時機。",
        ),
        NutFlushDraw => ct(
            "堅果同花聽牌 (Nut Flush Draw)",
            "半詐唬/跟注",
            "A花聽牌！即使沒中也有機會靠A贏，且對手通常會忌憚A花。可以玩得非常激進。",
        ),
        FlushDraw => ct(
            "同花聽牌 (Flush Draw)",
            "跟注/半詐唬",
            "還需要1張同花。賠率合適可跟注，或者加注奪取主動權(Fold Equity)。",
        ),
        OpenEndedDraw => ct(
            "兩頭順聽牌 (OESD)",
            "積極進攻",
            "你有8張補牌成順。這是很強的聽牌，不要玩得太被動。",
        ),
        TopPair => ct(
            "頂對 (Top Pair)",
            "價值下注/控池",
            "你有頂對，通常領先。乾燥面可以下注價值；濕潤面要注意保護手牌。",
        ),
        Overpair => ct(
            "超對 (Overpair)",
            "強勢價值",
            "你的口袋對子比公牌都大。這通常是很好的牌，但要警惕暗三條或兩對。",
        ),
        MiddlePair => ct(
            "中對 (Middle Pair)",
            "抓詐唬/過牌 (Bluff Catch)",
            "具有攤牌價值，但很難承受大注。適合過牌控池，或者用來抓詐唬。",
        ),
        BottomPair => ct(
            "底對 (Bottom Pair)",
            "過牌/謹慎攤牌",
            "牌力較弱，只能贏詐唬。如果有任何進攻動作，通常建議棄牌。",
        ),
        Underpair => ct(
            "小口袋對 (Underpair)",
            "過牌/棄牌",
            "你的對子小於公牌，極易被壓制或被詐唬。幾乎沒有價值。",
        ),
        GutshotDraw => ct(
            "卡順聽牌 (Gutshot)",
            "謹慎/半詐唬",
            "只有4張補牌。除非極其便宜，否則別重注追。",
        ),
        Overcards => ct(
            "兩張高牌 (Overcards)",
            "觀望/飄打 (Float)",
            "暫無成牌，但有6張補牌成頂對。有位置時可以飄打一條街。",
        ),
        HighCardWeak => ct(
            "空氣牌 (Trash)",
            "棄牌/純詐唬",
            "毫無勝率。除非你確信對手很弱，否則快跑，別浪費錢。",
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureText {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn texture_text(lang: Language, texture: BoardTexture) -> TextureText {
    let (name, description) = match (lang, texture) {
        (Language::En, BoardTexture::Paired) => {
            ("Paired Board", "Trips and full houses are possible but draws are scarce. Small bets work well.")
        }
        (Language::En, BoardTexture::Monotone) => (
            "Monotone Board",
            "Three cards of one suit. Slow down without a flush or the Ace of the suit.",
        ),
        (Language::En, BoardTexture::TwoTone) => {
            ("Two-Tone Board", "Flush draws are live. Size up to charge the draws.")
        }
        (Language::En, BoardTexture::Connected) => (
            "Connected Board",
            "Many straight draws. Protect made hands and semi-bluff with draws.",
        ),
        (Language::En, BoardTexture::Dry) => {
            ("Dry Rainbow", "Few draws. A small continuation bet often takes the pot.")
        }
        (Language::Zh, BoardTexture::Paired) => ("公對面", "可能有三條或葫蘆，但聽牌很少。適合小注試探。"),
        (Language::Zh, BoardTexture::Monotone) => ("單色面", "三張同花色。沒有同花或該花色的A時要放慢。"),
        (Language::Zh, BoardTexture::TwoTone) => ("雙色面", "同花聽牌存在。加大下注讓聽牌付出代價。"),
        (Language::Zh, BoardTexture::Connected) => ("連張面", "順子聽牌很多。成牌要保護，聽牌可以半詐唬。"),
        (Language::Zh, BoardTexture::Dry) => ("乾燥面", "聽牌很少。小額持續下注通常就能拿下底池。"),
    };
    TextureText { name, description }
}

pub fn action_label(lang: Language, action: Action) -> &'static str {
    match (lang, action) {
        (Language::En, Action::Fold) => "Fold",
        (Language::En, Action::Check) => "Check",
        (Language::En, Action::CheckFold) => "Check/Fold",
        (Language::En, Action::CheckCall) => "Check/Call",
        (Language::En, Action::Call) => "Call",
        (Language::En, Action::Raise) => "Raise",
        (Language::En, Action::RaiseBluff) => "Bluff Raise",
        (Language::En, Action::AllIn) => "All-In",
        (Language::En, Action::AllInBluff) => "All-In Bluff",
        (Language::Zh, Action::Fold) => "棄牌 (Fold)",
        (Language::Zh, Action::Check) => "過牌 (Check)",
        (Language::Zh, Action::CheckFold) => "過牌/棄牌 (Check/Fold)",
        (Language::Zh, Action::CheckCall) => "過牌/跟注 (Check/Call)",
        (Language::Zh, Action::Call) => "跟注 (Call)",
        (Language::Zh, Action::Raise) => "加注 (Raise)",
        (Language::Zh, Action::RaiseBluff) => "詐唬加注 (Bluff Raise)",
        (Language::Zh, Action::AllIn) => "全壓 (All-In)",
        (Language::Zh, Action::AllInBluff) => "全壓詐唬 (All-In Bluff)",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionText {
    pub label: &'static str,
    pub description: &'static str,
}

pub fn position_text(lang: Language, position: Position) -> PositionText {
    let (label, description) = match (lang, position) {
        (Language::En, Position::Early) => ("Early Position (EP)", "Many players act after you. Play tight."),
        (Language::En, Position::Middle) => ("Middle Position (MP)", "Balanced ranges. Open solid hands."),
        (Language::En, Position::Late) => ("Late Position (LP)", "You act last. Widen your range and steal."),
        (Language::En, Position::Blinds) => ("Blinds (SB/BB)", "Out of position post-flop. Defend selectively."),
        (Language::Zh, Position::Early) => ("前位 (EP)", "後面還有很多玩家行動，要打得緊。"),
        (Language::Zh, Position::Middle) => ("中位 (MP)", "範圍均衡，用紮實的牌開局。"),
        (Language::Zh, Position::Late) => ("後位 (LP)", "你最後行動，可以放寬範圍偷盲。"),
        (Language::Zh, Position::Blinds) => ("盲注位 (SB/BB)", "翻牌後沒有位置，有選擇地防守。"),
    };
    PositionText { label, description }
}

/// Fixed interface strings used when assembling rationale and reports.
#[derive(Debug)]
pub struct UiText {
    pub equity: &'static str,
    pub pot_odds: &'static str,
    pub action: &'static str,
    pub hand: &'static str,
    pub board: &'static str,
    pub bet_sizing: &'static str,
    pub outs: &'static str,
    pub street_turn: &'static str,
    pub street_river: &'static str,
    pub turn_or_river: &'static str,
    pub implied_odds_ok: &'static str,
    pub straight_flush_lower_warning: &'static str,
    pub bluff: &'static str,
}

static UI_EN: UiText = UiText {
    equity: "Equity",
    pot_odds: "Pot Odds",
    action: "Action",
    hand: "Hand",
    board: "Board",
    bet_sizing: "Bet Sizing",
    outs: "Outs",
    street_turn: "Turn",
    street_river: "River",
    turn_or_river: "Turn or River",
    implied_odds_ok: "Implied Odds OK",
    straight_flush_lower_warning: "Idiot End of Straight Flush",
    bluff: "Bluff",
};

static UI_ZH: UiText = UiText {
    equity: "真實勝率",
    pot_odds: "底池賠率",
    action: "行動指南",
    hand: "牌型",
    board: "牌面",
    bet_sizing: "推薦加注額",
    outs: "補牌",
    street_turn: "轉牌圈",
    street_river: "河牌圈",
    turn_or_river: "轉牌或河牌",
    implied_odds_ok: "隱含賠率足夠",
    straight_flush_lower_warning: "同花順小端，小心更大的同花順",
    bluff: "詐唬",
};

pub fn ui_text(lang: Language) -> &'static UiText {
    match lang {
        Language::En => &UI_EN,
        Language::Zh => &UI_ZH,
    }
}

/// Improvement odds for a draw, by the rule of 2 and 4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOdds {
    pub kind: DrawKind,
    pub outs: u8,
    /// Percent chance to hit on the turn (shown on the flop).
    pub turn: Option<f64>,
    /// Percent chance to hit on the river (shown on the turn).
    pub river: Option<f64>,
    /// Percent chance to hit by the river (shown on the flop).
    pub turn_or_river: Option<f64>,
}

impl DrawOdds {
    pub fn describe(&self, lang: Language) -> String {
        let ui = ui_text(lang);
        let mut parts = vec![format!("{}: {}", ui.outs, self.outs)];
        if let Some(p) = self.turn {
            parts.push(format!("{}: {:.1}%", ui.street_turn, p));
        }
        if let Some(p) = self.turn_or_river {
            parts.push(format!("{}: {:.1}%", ui.turn_or_river, p));
        }
        if let Some(p) = self.river {
            parts.push(format!("{}: {:.1}%", ui.street_river, p));
        }
        parts.join(" | ")
    }
}

/// Draw odds for `kind` on `street`. Only the flop and turn have cards to come.
///
/// ```
/// use holdem_advisor::features::DrawKind;
/// use holdem_advisor::hand::Street;
/// use holdem_advisor::lookup::draw_odds;
///
/// let odds = draw_odds(DrawKind::OpenEnded, Street::Flop).unwrap();
/// assert_eq!(odds.outs, 8);
/// assert!(odds.river.is_none());
/// assert!(draw_odds(DrawKind::OpenEnded, Street::River).is_none());
/// ```
pub fn draw_odds(kind: DrawKind, street: Street) -> Option<DrawOdds> {
    let outs = kind.outs();
    let pct = |factor: f64| (outs as f64 * factor).min(100.0);
    let (turn, river, turn_or_river) = match street {
        Street::Flop => (Some(pct(2.1)), None, Some(pct(4.2))),
        Street::Turn => (None, Some(pct(2.2)), None),
        Street::Preflop | Street::River => return None,
    };
    Some(DrawOdds { kind, outs, turn, river, turn_or_river })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_text_in_every_language() {
        for lang in Language::ALL {
            for c in HandCategory::ALL {
                let t = category_text(lang, c);
                assert!(!t.label.is_empty() && !t.advice.is_empty() && !t.reason.is_empty(), "{c}");
            }
            for t in BoardTexture::ALL {
                assert!(!texture_text(lang, t).name.is_empty());
            }
            for a in Action::ALL {
                assert!(!action_label(lang, a).is_empty());
            }
            for p in Position::ALL {
                assert!(!position_text(lang, p).label.is_empty());
            }
        }
    }

    #[test]
    fn english_labels_follow_categories() {
        assert_eq!(category_text(Language::En, HandCategory::TopPair).label, "Top Pair");
        assert_eq!(category_text(Language::En, HandCategory::TwoPair).label, "Two Pair");
        assert_eq!(action_label(Language::Zh, Action::Fold), "棄牌 (Fold)");
    }

    #[test]
    fn combo_draw_odds_capped_at_hundred() {
        let flop = draw_odds(DrawKind::Combo, Street::Flop).unwrap();
        assert_eq!(flop.outs, 15);
        assert!((flop.turn.unwrap() - 31.5).abs() < 1e-9);
        assert!((flop.turn_or_river.unwrap() - 63.0).abs() < 1e-9);
        let turn = draw_odds(DrawKind::Gutshot, Street::Turn).unwrap();
        assert!((turn.river.unwrap() - 8.8).abs() < 1e-9);
        assert!(turn.turn.is_none() && turn.turn_or_river.is_none());
        assert!(draw_odds(DrawKind::Flush, Street::Preflop).is_none());
    }

    #[test]
    fn describe_lists_available_streets() {
        let flop = draw_odds(DrawKind::Flush, Street::Flop).unwrap();
        assert_eq!(flop.describe(Language::En), "Outs: 9 | Turn: 18.9% | Turn or River: 37.8%");
        let turn = draw_odds(DrawKind::OpenEnded, Street::Turn).unwrap();
        assert_eq!(turn.describe(Language::En), "Outs: 8 | River: 17.6%");
    }

    #[test]
    fn language_parsing() {
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
    }
}
