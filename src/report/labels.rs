//! Display labels
//!
//! Enum tags carry no presentation text; this table maps them to labels in
//! the supported locales.

use std::str::FromStr;

use crate::engine::TicketType;
use crate::entities::{BatterPosition, DefensivePosition, PitcherPosition, PositionTag};
use crate::probability::CardType;
use crate::skills::{PlayerType, Tier};

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    TraditionalChinese,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "zh-tw" | "zh_tw" | "zh" => Ok(Locale::TraditionalChinese),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

pub fn tier_label(tier: Tier, locale: Locale) -> &'static str {
    match (locale, tier) {
        (Locale::English, Tier::Bronze) => "Bronze",
        (Locale::English, Tier::Silver) => "Silver",
        (Locale::English, Tier::Gold) => "Gold",
        (Locale::English, Tier::Legend) => "Legend",
        (Locale::TraditionalChinese, Tier::Bronze) => "黃銅",
        (Locale::TraditionalChinese, Tier::Silver) => "炫銀",
        (Locale::TraditionalChinese, Tier::Gold) => "炫金",
        (Locale::TraditionalChinese, Tier::Legend) => "傳說",
    }
}

pub fn player_type_label(player_type: PlayerType, locale: Locale) -> &'static str {
    match (locale, player_type) {
        (Locale::English, PlayerType::Batter) => "Batter",
        (Locale::English, PlayerType::Pitcher) => "Pitcher",
        (Locale::TraditionalChinese, PlayerType::Batter) => "打者",
        (Locale::TraditionalChinese, PlayerType::Pitcher) => "投手",
    }
}

pub fn card_type_label(card_type: CardType, locale: Locale) -> &'static str {
    match (locale, card_type) {
        (Locale::English, CardType::Legend) => "Legend card",
        (Locale::English, CardType::Other) => "Other card",
        (Locale::TraditionalChinese, CardType::Legend) => "傳說卡",
        (Locale::TraditionalChinese, CardType::Other) => "其他卡",
    }
}

pub fn ticket_label(ticket: TicketType, locale: Locale) -> &'static str {
    match locale {
        Locale::English => match ticket {
            TicketType::Basic => "Skill Change Ticket",
            TicketType::Advanced => "Advanced Skill Change Ticket",
            TicketType::Premium => "Premium Skill Change Ticket",
            TicketType::LegendDirect => "Legend Skill Change Ticket",
            TicketType::LegendChoice => "Legend Skill Choice Ticket",
            TicketType::Protect => "Skill Protect Ticket",
            TicketType::Choice => "Skill Choice Ticket",
        },
        Locale::TraditionalChinese => match ticket {
            TicketType::Basic => "技能變更券",
            TicketType::Advanced => "高級技能變更券",
            TicketType::Premium => "最高級技能變更券",
            TicketType::LegendDirect => "傳說技能變更券",
            TicketType::LegendChoice => "傳說技能選擇變更券",
            TicketType::Protect => "技能變更保護券",
            TicketType::Choice => "技能選擇變更券",
        },
    }
}

fn pitcher_label(position: PitcherPosition, locale: Locale) -> &'static str {
    use PitcherPosition::*;

    match locale {
        Locale::English => match position {
            Starter1 => "Starter 1",
            Starter2 => "Starter 2",
            Starter3 => "Starter 3",
            Starter4 => "Starter 4",
            Starter5 => "Starter 5",
            BullpenWin1 => "Bullpen (Win) 1",
            BullpenWin2 => "Bullpen (Win) 2",
            BullpenLose3 => "Bullpen (Lose) 3",
            BullpenLose4 => "Bullpen (Lose) 4",
            BullpenLose5 => "Bullpen (Lose) 5",
            LongRelief => "Long Relief",
            Closer => "Closer",
        },
        Locale::TraditionalChinese => match position {
            Starter1 => "先發1",
            Starter2 => "先發2",
            Starter3 => "先發3",
            Starter4 => "先發4",
            Starter5 => "先發5",
            BullpenWin1 => "牛棚勝利組1",
            BullpenWin2 => "牛棚勝利組2",
            BullpenLose3 => "牛棚敗處組3",
            BullpenLose4 => "牛棚敗處組4",
            BullpenLose5 => "牛棚敗處組5",
            LongRelief => "長中繼1",
            Closer => "終結者1",
        },
    }
}

fn batter_label(position: BatterPosition, locale: Locale) -> &'static str {
    use BatterPosition::*;

    match locale {
        Locale::English => match position {
            Batting1 => "Batting 1",
            Batting2 => "Batting 2",
            Batting3 => "Batting 3",
            Batting4 => "Batting 4",
            Batting5 => "Batting 5",
            Batting6 => "Batting 6",
            Batting7 => "Batting 7",
            Batting8 => "Batting 8",
            Batting9 => "Batting 9",
            Sub1 => "Bench 1",
            Sub2 => "Bench 2",
            Sub3 => "Bench 3",
            Sub4 => "Bench 4",
            Sub5 => "Bench 5",
        },
        Locale::TraditionalChinese => match position {
            Batting1 => "1棒",
            Batting2 => "2棒",
            Batting3 => "3棒",
            Batting4 => "4棒",
            Batting5 => "5棒",
            Batting6 => "6棒",
            Batting7 => "7棒",
            Batting8 => "8棒",
            Batting9 => "9棒",
            Sub1 => "候補1",
            Sub2 => "候補2",
            Sub3 => "候補3",
            Sub4 => "候補4",
            Sub5 => "候補5",
        },
    }
}

pub fn position_label(position: PositionTag, locale: Locale) -> &'static str {
    match position {
        PositionTag::Pitcher(p) => pitcher_label(p, locale),
        PositionTag::Batter(b) => batter_label(b, locale),
    }
}

/// Fielding positions use the scorecard abbreviation in every locale
pub fn defensive_label(position: DefensivePosition) -> &'static str {
    position.abbreviation()
}

/// Label for an empty skill slot
pub fn empty_slot_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "(empty)",
        Locale::TraditionalChinese => "未設置",
    }
}
