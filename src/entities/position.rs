//! Roster positions
//!
//! Positions are plain tags. Display labels live in `report::labels`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::skills::PlayerType;

/// Pitching staff slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitcherPosition {
    Starter1,
    Starter2,
    Starter3,
    Starter4,
    Starter5,
    BullpenWin1,
    BullpenWin2,
    BullpenLose3,
    BullpenLose4,
    BullpenLose5,
    LongRelief,
    Closer,
}

impl PitcherPosition {
    pub const ALL: [PitcherPosition; 12] = [
        PitcherPosition::Starter1,
        PitcherPosition::Starter2,
        PitcherPosition::Starter3,
        PitcherPosition::Starter4,
        PitcherPosition::Starter5,
        PitcherPosition::BullpenWin1,
        PitcherPosition::BullpenWin2,
        PitcherPosition::BullpenLose3,
        PitcherPosition::BullpenLose4,
        PitcherPosition::BullpenLose5,
        PitcherPosition::LongRelief,
        PitcherPosition::Closer,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            PitcherPosition::Starter1 => "sp1",
            PitcherPosition::Starter2 => "sp2",
            PitcherPosition::Starter3 => "sp3",
            PitcherPosition::Starter4 => "sp4",
            PitcherPosition::Starter5 => "sp5",
            PitcherPosition::BullpenWin1 => "win1",
            PitcherPosition::BullpenWin2 => "win2",
            PitcherPosition::BullpenLose3 => "lose3",
            PitcherPosition::BullpenLose4 => "lose4",
            PitcherPosition::BullpenLose5 => "lose5",
            PitcherPosition::LongRelief => "lr",
            PitcherPosition::Closer => "cl",
        }
    }
}

/// Batting order and bench slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BatterPosition {
    Batting1,
    Batting2,
    Batting3,
    Batting4,
    Batting5,
    Batting6,
    Batting7,
    Batting8,
    Batting9,
    Sub1,
    Sub2,
    Sub3,
    Sub4,
    Sub5,
}

impl BatterPosition {
    pub const ALL: [BatterPosition; 14] = [
        BatterPosition::Batting1,
        BatterPosition::Batting2,
        BatterPosition::Batting3,
        BatterPosition::Batting4,
        BatterPosition::Batting5,
        BatterPosition::Batting6,
        BatterPosition::Batting7,
        BatterPosition::Batting8,
        BatterPosition::Batting9,
        BatterPosition::Sub1,
        BatterPosition::Sub2,
        BatterPosition::Sub3,
        BatterPosition::Sub4,
        BatterPosition::Sub5,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BatterPosition::Batting1 => "b1",
            BatterPosition::Batting2 => "b2",
            BatterPosition::Batting3 => "b3",
            BatterPosition::Batting4 => "b4",
            BatterPosition::Batting5 => "b5",
            BatterPosition::Batting6 => "b6",
            BatterPosition::Batting7 => "b7",
            BatterPosition::Batting8 => "b8",
            BatterPosition::Batting9 => "b9",
            BatterPosition::Sub1 => "sub1",
            BatterPosition::Sub2 => "sub2",
            BatterPosition::Sub3 => "sub3",
            BatterPosition::Sub4 => "sub4",
            BatterPosition::Sub5 => "sub5",
        }
    }

    /// Starting lineup (1-9) rather than the bench
    pub fn in_batting_order(&self) -> bool {
        !matches!(
            self,
            BatterPosition::Sub1
                | BatterPosition::Sub2
                | BatterPosition::Sub3
                | BatterPosition::Sub4
                | BatterPosition::Sub5
        )
    }
}

/// Identifies a roster slot, and through it the player type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionTag {
    Pitcher(PitcherPosition),
    Batter(BatterPosition),
}

impl PositionTag {
    pub fn player_type(&self) -> PlayerType {
        match self {
            PositionTag::Pitcher(_) => PlayerType::Pitcher,
            PositionTag::Batter(_) => PlayerType::Batter,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PositionTag::Pitcher(p) => p.tag(),
            PositionTag::Batter(b) => b.tag(),
        }
    }

    /// Any batter may take the field, bench included
    pub fn can_hold_defensive_position(&self) -> bool {
        matches!(self, PositionTag::Batter(_))
    }

    /// Batting order 1-9; only these compete for a fielding position
    pub fn in_batting_order(&self) -> bool {
        matches!(self, PositionTag::Batter(b) if b.in_batting_order())
    }

    /// Every roster slot, pitchers first
    pub fn all() -> impl Iterator<Item = PositionTag> {
        PitcherPosition::ALL
            .into_iter()
            .map(PositionTag::Pitcher)
            .chain(BatterPosition::ALL.into_iter().map(PositionTag::Batter))
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PositionTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PositionTag::all()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| format!("unknown position: {}", s))
    }
}

/// Fielding positions for the batting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DefensivePosition {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    RightField,
    CenterField,
    LeftField,
    DesignatedHitter,
}

impl DefensivePosition {
    pub const ALL: [DefensivePosition; 9] = [
        DefensivePosition::Catcher,
        DefensivePosition::FirstBase,
        DefensivePosition::SecondBase,
        DefensivePosition::ThirdBase,
        DefensivePosition::Shortstop,
        DefensivePosition::RightField,
        DefensivePosition::CenterField,
        DefensivePosition::LeftField,
        DefensivePosition::DesignatedHitter,
    ];

    /// Scorecard abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DefensivePosition::Catcher => "C",
            DefensivePosition::FirstBase => "1B",
            DefensivePosition::SecondBase => "2B",
            DefensivePosition::ThirdBase => "3B",
            DefensivePosition::Shortstop => "SS",
            DefensivePosition::RightField => "RF",
            DefensivePosition::CenterField => "CF",
            DefensivePosition::LeftField => "LF",
            DefensivePosition::DesignatedHitter => "DH",
        }
    }
}

impl fmt::Display for DefensivePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for DefensivePosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        DefensivePosition::ALL
            .into_iter()
            .find(|p| p.abbreviation() == wanted)
            .ok_or_else(|| format!("unknown defensive position: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tags_round_trip() {
        assert_eq!(PositionTag::all().count(), 26);
        for position in PositionTag::all() {
            assert_eq!(position.tag().parse::<PositionTag>(), Ok(position));
        }
    }

    #[test]
    fn test_player_type_from_position() {
        assert_eq!(PositionTag::Pitcher(PitcherPosition::Closer).player_type(), PlayerType::Pitcher);
        assert_eq!(PositionTag::Batter(BatterPosition::Sub2).player_type(), PlayerType::Batter);
    }

    #[test]
    fn test_defensive_eligibility() {
        assert!(PositionTag::Batter(BatterPosition::Batting9).can_hold_defensive_position());
        assert!(PositionTag::Batter(BatterPosition::Sub1).can_hold_defensive_position());
        assert!(!PositionTag::Pitcher(PitcherPosition::Starter1).can_hold_defensive_position());

        assert!(PositionTag::Batter(BatterPosition::Batting9).in_batting_order());
        assert!(!PositionTag::Batter(BatterPosition::Sub1).in_batting_order());
        assert!(!PositionTag::Pitcher(PitcherPosition::Closer).in_batting_order());
    }

    #[test]
    fn test_parse_defensive_position() {
        assert_eq!("ss".parse::<DefensivePosition>(), Ok(DefensivePosition::Shortstop));
        assert!("P".parse::<DefensivePosition>().is_err());
    }
}
