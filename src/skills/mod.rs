//! Skills, tiers and the skill catalog

pub mod tier;
pub mod skill;
pub mod catalog;

pub use tier::{Tier, PlayerType};
pub use skill::{Skill, SkillKey, SkillSlots, SLOT_COUNT, MIN_LEVEL, MAX_LEVEL, level_sum, has_duplicate_skills, held_keys};
pub use catalog::{SkillCatalog, TierLists, default_catalog};
