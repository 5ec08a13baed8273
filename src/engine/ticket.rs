//! Skill change tickets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SkillChangeError;
use crate::skills::SLOT_COUNT;

/// The seven ticket types, each with its own reroll rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketType {
    /// Rerolls all three slots
    Basic,
    /// Slot 0 may become a legend skill, otherwise a gold one
    Advanced,
    /// Advanced, redrawn until the level sum is high enough
    Premium,
    /// Advanced with the legend odds of the legend ticket table
    LegendDirect,
    /// Swaps the first legend skill for another legend skill
    LegendChoice,
    /// Keeps one slot and rerolls the other two
    Protect,
    /// Rerolls a single slot
    Choice,
}

impl TicketType {
    pub const ALL: [TicketType; 7] = [
        TicketType::Basic,
        TicketType::Advanced,
        TicketType::Premium,
        TicketType::LegendDirect,
        TicketType::LegendChoice,
        TicketType::Protect,
        TicketType::Choice,
    ];

    /// Stable identifier used in data files and on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            TicketType::Basic => "basic",
            TicketType::Advanced => "advanced",
            TicketType::Premium => "premium",
            TicketType::LegendDirect => "legend-direct",
            TicketType::LegendChoice => "legend-choice",
            TicketType::Protect => "protect",
            TicketType::Choice => "choice",
        }
    }

    /// Whether the ticket acts on a caller-chosen slot
    pub fn uses_slot(&self) -> bool {
        matches!(self, TicketType::Protect | TicketType::Choice)
    }

    /// Whether draw statistics (count, legend hits, level sums) track this ticket
    pub fn tracks_draw_stats(&self) -> bool {
        matches!(self, TicketType::Advanced | TicketType::Premium)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TicketType {
    type Err = SkillChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TicketType::ALL
            .into_iter()
            .find(|t| t.tag() == wanted)
            .ok_or_else(|| SkillChangeError::InvalidTicketType(s.to_string()))
    }
}

/// Extra inputs for slot-based tickets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOptions {
    /// Slot kept by Protect, or rerolled by Choice
    pub protected_slot: Option<usize>,
}

impl TicketOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(slot: usize) -> Self {
        Self { protected_slot: Some(slot) }
    }

    /// The selected slot, rejecting indices past the last slot
    pub fn checked_slot(&self) -> Result<Option<usize>, SkillChangeError> {
        match self.protected_slot {
            Some(slot) if slot >= SLOT_COUNT => Err(SkillChangeError::InvalidSlotIndex(slot)),
            other => Ok(other),
        }
    }
}
