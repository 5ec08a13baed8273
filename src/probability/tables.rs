//! Probability tables
//!
//! Static per-player-type slot weights, legend appearance odds per ticket and
//! card type, and the skill level weights. The tables are plain data so they
//! can be loaded from `probabilities.ron` and validated before use.

use serde::{Deserialize, Serialize};

use super::levels::{LevelDistribution, LevelSumDistribution, MAX_LEVEL_SUM, MIN_LEVEL_SUM};
use crate::engine::TicketType;
use crate::error::{DataError, SkillChangeError};
use crate::skills::PlayerType;

/// Which legend-odds sub-table applies to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// The player's card is flagged legend
    Legend,
    /// Any other card
    Other,
}

impl CardType {
    pub fn from_legend_flag(is_legend: bool) -> Self {
        if is_legend {
            CardType::Legend
        } else {
            CardType::Other
        }
    }
}

/// Per-slot draw weights for one player type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotWeights {
    /// Used when all three slots are drawn from the full pool
    pub base: [f64; 3],
    /// Slot 0 is reserved for a legend outcome
    pub legend_precedence: [f64; 3],
    /// Remaining two slots while a legend skill is held
    pub legend_held: [f64; 2],
    /// Remaining two slots while no legend skill is held
    pub no_legend_held: [f64; 2],
}

impl SlotWeights {
    fn all(&self) -> impl Iterator<Item = f64> + '_ {
        self.base
            .iter()
            .chain(self.legend_precedence.iter())
            .chain(self.legend_held.iter())
            .chain(self.no_legend_held.iter())
            .copied()
    }
}

/// Chance that slot 0 becomes a legend skill, per ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOdds {
    pub advanced: f64,
    pub premium: f64,
    pub legend_direct: f64,
    pub legend_choice: f64,
}

impl LegendOdds {
    /// Odds for a ticket; tickets without a legend roll get 0
    pub fn for_ticket(&self, ticket: TicketType) -> f64 {
        match ticket {
            TicketType::Advanced => self.advanced,
            TicketType::Premium => self.premium,
            TicketType::LegendDirect => self.legend_direct,
            TicketType::LegendChoice => self.legend_choice,
            TicketType::Basic | TicketType::Protect | TicketType::Choice => 0.0,
        }
    }

    fn all(&self) -> [f64; 4] {
        [self.advanced, self.premium, self.legend_direct, self.legend_choice]
    }
}

/// The full probability model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityModel {
    pub batter_weights: SlotWeights,
    pub pitcher_weights: SlotWeights,
    pub legend_card: LegendOdds,
    pub other_card: LegendOdds,
    /// Relative weights of levels 1, 2 and 3
    pub level_weights: [f64; 3],
    /// Premium results are redrawn until the level sum reaches this
    pub premium_min_level_sum: u8,
}

impl ProbabilityModel {
    pub fn slot_weights(&self, player_type: PlayerType) -> &SlotWeights {
        match player_type {
            PlayerType::Batter => &self.batter_weights,
            PlayerType::Pitcher => &self.pitcher_weights,
        }
    }

    /// Weight of a slot when drawing from the full pool
    pub fn base_slot_weight(&self, player_type: PlayerType, slot: usize) -> f64 {
        self.slot_weights(player_type).base[slot]
    }

    pub fn legend_odds(&self, card_type: CardType) -> &LegendOdds {
        match card_type {
            CardType::Legend => &self.legend_card,
            CardType::Other => &self.other_card,
        }
    }

    /// Bernoulli parameter for a legend skill landing in slot 0
    pub fn legend_appearance_probability(&self, ticket: TicketType, card_type: CardType) -> f64 {
        self.legend_odds(card_type).for_ticket(ticket)
    }

    pub fn level_distribution(&self) -> Result<LevelDistribution, SkillChangeError> {
        LevelDistribution::new(self.level_weights)
    }

    /// Level sums of three independent draws
    pub fn level_sum_distribution_default(&self) -> Result<LevelSumDistribution, SkillChangeError> {
        Ok(LevelSumDistribution::from_levels(&self.level_distribution()?))
    }

    /// Level sums after the premium redraw constraint
    pub fn level_sum_distribution_premium(&self) -> Result<LevelSumDistribution, SkillChangeError> {
        Ok(self
            .level_sum_distribution_default()?
            .conditioned_at_least(self.premium_min_level_sum))
    }

    /// Reject tables the engine cannot draw from
    pub fn validate(&self) -> Result<(), DataError> {
        for player_type in PlayerType::ALL {
            if let Some(w) = self
                .slot_weights(player_type)
                .all()
                .find(|w| !w.is_finite() || *w <= 0.0)
            {
                return Err(DataError::Invalid(format!(
                    "{} slot weight {} must be positive",
                    player_type, w
                )));
            }
        }

        for odds in [&self.legend_card, &self.other_card] {
            if let Some(p) = odds.all().into_iter().find(|p| !(0.0..=1.0).contains(p)) {
                return Err(DataError::Invalid(format!(
                    "legend probability {} is outside [0, 1]",
                    p
                )));
            }
        }

        self.level_distribution()
            .map_err(|e| DataError::Invalid(e.to_string()))?;

        let min = self.premium_min_level_sum;
        if !(MIN_LEVEL_SUM..=MAX_LEVEL_SUM).contains(&min) {
            return Err(DataError::Invalid(format!(
                "premium minimum level sum {} is outside {}..={}",
                min, MIN_LEVEL_SUM, MAX_LEVEL_SUM
            )));
        }
        // The redraw loop must be able to terminate for non-legend players
        let reachable = self
            .level_sum_distribution_premium()
            .map_err(|e| DataError::Invalid(e.to_string()))?
            .total();
        if reachable <= 0.0 {
            return Err(DataError::Invalid(format!(
                "level weights make a level sum of {} unreachable",
                min
            )));
        }

        Ok(())
    }
}

impl Default for ProbabilityModel {
    fn default() -> Self {
        default_probability_model()
    }
}

/// Built-in tables. Slot weights are 1/pool-size for the shrinking pool.
pub fn default_probability_model() -> ProbabilityModel {
    ProbabilityModel {
        batter_weights: SlotWeights {
            base: [2.6316 / 100.0, 2.7027 / 100.0, 2.7778 / 100.0],
            legend_precedence: [1.0, 2.6316 / 100.0, 2.7027 / 100.0],
            legend_held: [2.7778 / 100.0, 2.8571 / 100.0],
            no_legend_held: [2.8571 / 100.0, 2.9412 / 100.0],
        },
        pitcher_weights: SlotWeights {
            base: [2.5641 / 100.0, 2.6316 / 100.0, 2.7027 / 100.0],
            legend_precedence: [1.0, 2.5641 / 100.0, 2.6316 / 100.0],
            legend_held: [2.7027 / 100.0, 2.7778 / 100.0],
            no_legend_held: [2.7778 / 100.0, 2.8571 / 100.0],
        },
        legend_card: LegendOdds {
            advanced: 0.20,
            premium: 0.25,
            legend_direct: 1.00,
            legend_choice: 1.00,
        },
        other_card: LegendOdds {
            advanced: 0.10,
            premium: 0.15,
            legend_direct: 1.00,
            legend_choice: 1.00,
        },
        level_weights: [0.34, 0.33, 0.33],
        premium_min_level_sum: 5,
    }
}
