//! Skill catalog
//!
//! Fixed per-player-type, per-tier skill name lists. Probabilities computed
//! over "all skills of a tier" depend on these lists being stable, so the
//! order of each list is preserved exactly as loaded.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::skill::SkillKey;
use super::tier::{PlayerType, Tier};
use crate::error::DataError;

/// Skill names for one player type, grouped by tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLists {
    pub bronze: Vec<String>,
    pub silver: Vec<String>,
    pub gold: Vec<String>,
    pub legend: Vec<String>,
}

impl TierLists {
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Bronze => &self.bronze,
            Tier::Silver => &self.silver,
            Tier::Gold => &self.gold,
            Tier::Legend => &self.legend,
        }
    }

    /// Number of Bronze, Silver and Gold skills
    pub fn regular_len(&self) -> usize {
        self.bronze.len() + self.silver.len() + self.gold.len()
    }
}

/// Complete skill catalog for both player types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub batter: TierLists,
    pub pitcher: TierLists,
}

impl SkillCatalog {
    pub fn lists(&self, player_type: PlayerType) -> &TierLists {
        match player_type {
            PlayerType::Batter => &self.batter,
            PlayerType::Pitcher => &self.pitcher,
        }
    }

    /// Ordered skill names of one tier
    pub fn skills_of_tier(&self, player_type: PlayerType, tier: Tier) -> &[String] {
        self.lists(player_type).get(tier)
    }

    /// Draw-pool entries for a single tier
    pub fn tier_pool(&self, player_type: PlayerType, tier: Tier) -> Vec<SkillKey> {
        self.skills_of_tier(player_type, tier)
            .iter()
            .map(|name| SkillKey::new(name.clone(), tier))
            .collect()
    }

    /// Bronze, Silver and Gold skills in catalog order
    pub fn regular_pool(&self, player_type: PlayerType) -> Vec<SkillKey> {
        Tier::REGULAR
            .iter()
            .flat_map(|&tier| self.tier_pool(player_type, tier))
            .collect()
    }

    /// Check the catalog can serve every ticket type
    pub fn validate(&self) -> Result<(), DataError> {
        for player_type in PlayerType::ALL {
            let lists = self.lists(player_type);
            for tier in [Tier::Gold, Tier::Legend] {
                if lists.get(tier).is_empty() {
                    return Err(DataError::Invalid(format!(
                        "{} catalog has no {} skills",
                        player_type, tier
                    )));
                }
            }
            // Three distinct regular skills must fit, plus one to replace with
            if lists.regular_len() < 4 {
                return Err(DataError::Invalid(format!(
                    "{} catalog needs at least 4 regular skills, found {}",
                    player_type,
                    lists.regular_len()
                )));
            }
            if lists.legend.len() < 2 {
                return Err(DataError::Invalid(format!(
                    "{} catalog needs at least 2 legend skills",
                    player_type
                )));
            }
            for tier in Tier::ALL {
                let mut seen = HashSet::new();
                for name in lists.get(tier) {
                    if !seen.insert(name.as_str()) {
                        return Err(DataError::Invalid(format!(
                            "duplicate {} {} skill: {}",
                            player_type, tier, name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Built-in catalog used when no data file overrides it
pub fn default_catalog() -> SkillCatalog {
    SkillCatalog {
        batter: TierLists {
            bronze: names(&[
                "Pinch-Hit Specialist", "Eagle Eye", "Opposite-Field Hitter", "Pull Hitter",
                "Southpaw Killer", "Righty Killer", "Defensive General", "RBI Machine",
                "Fastball Killer", "Concentration", "Head-On Duel", "First-Pitch Attack",
            ]),
            silver: names(&[
                "Precision Hitting", "Big Swinger", "Training Addict", "Slugger Instinct",
                "Table Setter", "Exhaustion", "Ninjutsu", "Lower-Body Training",
                "Comeback Power", "Competitive Nature", "Animal Instinct", "Trust",
                "Overcome Weakness",
            ]),
            gold: names(&[
                "Laser Arm", "Ace Killer", "Super Slugger", "Five-Tool Player",
                "Supernatural Myth", "Precognition", "Stolen Base King", "Hitting Machine",
                "Self-Propelled Gun", "Spotlight", "Super Support", "Strength Enhancement",
                "Spray Hitter",
            ]),
            legend: names(&[
                "Batter Insight", "Pinpoint Hitting", "Bad-Ball Hitter", "Vanguard",
                "Born Star", "Chance Maker", "Batter Chemistry", "Strongest Hitter", "Veteran",
            ]),
        },
        pitcher: TierLists {
            bronze: names(&[
                "Pickoff King", "Composure", "Divine Blessing", "Crisis Escape",
                "Lightspeed Pitch", "Trick Pitch Master", "Lefty Hitter Killer",
                "Righty Hitter Killer", "Iron Man", "Crafty Veteran", "Strong Heart", "Ice Cold",
            ]),
            silver: names(&[
                "Power Pitcher", "Control Artist", "Slugger Killer", "National Treasure",
                "Comeback Master", "Sniper", "Field Commander", "Pitching Machine", "Setup",
                "Press the Advantage", "Firefighter", "Security", "Tempo Control",
            ]),
            gold: names(&[
                "Out Pitch", "Giant Killer", "Self-Reliance", "Innings Eater", "Ace",
                "Final Boss", "Untouchable", "Fighting Spirit", "Finesse Pitcher",
                "Dominant Pitcher", "Ace Closer", "Groundball Pitcher", "Crossfire",
                "Pitch Coordinator",
            ]),
            legend: names(&[
                "Pitcher Insight", "Pinpoint Control", "Fastball Pitcher", "Defense First",
                "Bullpen Day", "Combined Effort", "Pitcher Chemistry", "Workhorse", "Mr. Perfect",
            ]),
        },
    }
}
