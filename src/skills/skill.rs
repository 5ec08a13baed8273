//! Skill values and the three-slot skill array

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tier::Tier;

/// Number of skill slots on every player
pub const SLOT_COUNT: usize = 3;

/// Lowest and highest skill level
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 3;

/// A player's skill slots, each possibly empty
pub type SkillSlots = [Option<Skill>; SLOT_COUNT];

/// Identity of a skill in a draw pool. Levels are not part of identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillKey {
    pub name: String,
    pub tier: Tier,
}

impl SkillKey {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self { name: name.into(), tier }
    }

    /// Attach a level, producing a slot-ready skill
    pub fn with_level(self, level: u8) -> Skill {
        Skill::new(self.name, self.tier, level)
    }
}

/// An immutable skill held in a slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub tier: Tier,
    pub level: u8,
}

impl Skill {
    /// Create a skill; the level is clamped to 1..=3
    pub fn new(name: impl Into<String>, tier: Tier, level: u8) -> Self {
        Self {
            name: name.into(),
            tier,
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
        }
    }

    pub fn key(&self) -> SkillKey {
        SkillKey::new(self.name.clone(), self.tier)
    }

    /// Same (name, tier) pair, ignoring level
    pub fn same_identity(&self, other: &Skill) -> bool {
        self.name == other.name && self.tier == other.tier
    }

    pub fn is_legend(&self) -> bool {
        self.tier.is_legend()
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Lv.{}", self.name, self.level)
    }
}

/// Sum of the levels of all filled slots
pub fn level_sum(slots: &SkillSlots) -> u8 {
    slots.iter().flatten().map(|s| s.level).sum()
}

/// Whether any two filled slots share a (name, tier) pair
pub fn has_duplicate_skills(slots: &SkillSlots) -> bool {
    let filled: Vec<&Skill> = slots.iter().flatten().collect();
    filled.iter().enumerate().any(|(i, a)| {
        filled[i + 1..].iter().any(|b| a.same_identity(b))
    })
}

/// Identities of every skill currently held
pub fn held_keys(slots: &SkillSlots) -> Vec<SkillKey> {
    slots.iter().flatten().map(Skill::key).collect()
}
