//! Player entity

use serde::{Deserialize, Serialize};

use super::position::{DefensivePosition, PositionTag};
use crate::error::SkillChangeError;
use crate::probability::CardType;
use crate::session::SimulationStats;
use crate::skills::{level_sum, PlayerType, Skill, SkillSlots, SLOT_COUNT};

/// A rostered player and its three skill slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_type: PlayerType,
    pub position: PositionTag,
    /// Set when the player is created from a legend card. Not derived from skills.
    pub is_legend: bool,
    pub is_black_diamond: bool,
    pub skills: SkillSlots,
    pub defensive_position: Option<DefensivePosition>,
    pub stats: SimulationStats,
}

impl Player {
    /// Create a player with empty skills; the type follows the position
    pub fn new(position: PositionTag, is_legend: bool) -> Self {
        Self {
            player_type: position.player_type(),
            position,
            is_legend,
            is_black_diamond: true,
            skills: Default::default(),
            defensive_position: None,
            stats: SimulationStats::default(),
        }
    }

    /// Builder-style helper to start from known skills
    pub fn with_skills(mut self, skills: SkillSlots) -> Self {
        self.skills = skills;
        self
    }

    pub fn card_type(&self) -> CardType {
        CardType::from_legend_flag(self.is_legend)
    }

    pub fn skill(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot).and_then(|s| s.as_ref())
    }

    pub fn set_skill(&mut self, slot: usize, skill: Option<Skill>) -> Result<(), SkillChangeError> {
        if slot >= SLOT_COUNT {
            return Err(SkillChangeError::InvalidSlotIndex(slot));
        }
        self.skills[slot] = skill;
        Ok(())
    }

    /// Replace all three slots at once
    pub fn set_skills(&mut self, skills: SkillSlots) {
        self.skills = skills;
    }

    pub fn has_any_skill(&self) -> bool {
        self.skills.iter().any(Option::is_some)
    }

    pub fn has_legend_skill(&self) -> bool {
        self.skills.iter().flatten().any(Skill::is_legend)
    }

    pub fn is_legend_skill_in_slot(&self, slot: usize) -> bool {
        self.skill(slot).map(Skill::is_legend).unwrap_or(false)
    }

    /// Lowest slot index holding a legend skill
    pub fn first_legend_slot(&self) -> Option<usize> {
        (0..SLOT_COUNT).find(|&slot| self.is_legend_skill_in_slot(slot))
    }

    pub fn level_sum(&self) -> u8 {
        level_sum(&self.skills)
    }

    /// Clear skills, counters and fielding; the legend flags stay
    pub fn reset(&mut self) {
        self.skills = Default::default();
        self.stats.reset();
        self.defensive_position = None;
    }
}
