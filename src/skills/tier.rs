//! Skill tiers and player types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill rarity, ordered from most common to rarest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Legend,
}

impl Tier {
    /// All tiers in rarity order
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Legend];

    /// Tiers that make up the regular reroll pool
    pub const REGULAR: [Tier; 3] = [Tier::Bronze, Tier::Silver, Tier::Gold];

    /// Stable identifier used in data files and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Legend => "legend",
        }
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
            Tier::Legend => 3,
        }
    }

    pub fn is_legend(&self) -> bool {
        matches!(self, Tier::Legend)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which catalog and probability sub-table a player uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerType {
    Batter,
    Pitcher,
}

impl PlayerType {
    pub const ALL: [PlayerType; 2] = [PlayerType::Batter, PlayerType::Pitcher];

    pub fn tag(&self) -> &'static str {
        match self {
            PlayerType::Batter => "batter",
            PlayerType::Pitcher => "pitcher",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
