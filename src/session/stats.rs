//! Per-player simulation statistics
//!
//! Pure bookkeeping, updated by the session after each engine call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::TicketType;
use crate::probability::{MAX_LEVEL_SUM, MIN_LEVEL_SUM};
use crate::skills::{level_sum, SkillSlots};

/// Counters accumulated for one player until reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Advanced and Premium draws recorded
    pub simulation_count: u64,
    /// Recorded draws with a legend skill in slot 0
    pub legend_count: u64,
    /// Recorded draws per level sum (3..=9)
    pub level_sum_counts: BTreeMap<u8, u64>,
    pub level_sum_count: u64,
    /// Every ticket use, whatever the type
    pub ticket_usage: BTreeMap<TicketType, u64>,
}

impl Default for SimulationStats {
    fn default() -> Self {
        Self {
            simulation_count: 0,
            legend_count: 0,
            level_sum_counts: (MIN_LEVEL_SUM..=MAX_LEVEL_SUM).map(|s| (s, 0)).collect(),
            level_sum_count: 0,
            ticket_usage: TicketType::ALL.into_iter().map(|t| (t, 0)).collect(),
        }
    }
}

impl SimulationStats {
    /// Record one ticket use and its result
    pub fn record(&mut self, ticket: TicketType, result: &SkillSlots) {
        *self.ticket_usage.entry(ticket).or_insert(0) += 1;
        if !ticket.tracks_draw_stats() {
            return;
        }

        self.simulation_count += 1;
        if result[0].as_ref().map(|s| s.is_legend()).unwrap_or(false) {
            self.legend_count += 1;
        }

        let sum = level_sum(result);
        if let Some(count) = self.level_sum_counts.get_mut(&sum) {
            *count += 1;
        }
        self.level_sum_count += 1;
    }

    pub fn ticket_uses(&self, ticket: TicketType) -> u64 {
        self.ticket_usage.get(&ticket).copied().unwrap_or(0)
    }

    pub fn level_sum_hits(&self, sum: u8) -> u64 {
        self.level_sum_counts.get(&sum).copied().unwrap_or(0)
    }

    /// Share of recorded draws with a legend in slot 0, 0 when nothing is recorded
    pub fn legend_rate(&self) -> f64 {
        ratio(self.legend_count, self.simulation_count)
    }

    /// Share of recorded draws with the given level sum
    pub fn level_sum_rate(&self, sum: u8) -> f64 {
        ratio(self.level_sum_hits(sum), self.level_sum_count)
    }

    pub fn total_ticket_uses(&self) -> u64 {
        self.ticket_usage.values().sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
