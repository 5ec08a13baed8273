//! Skill change engine
//!
//! Applies a ticket to a player and returns the resulting three slots. The
//! player is never mutated here; committing a result is the caller's call.
//! Every random decision is drawn from the RNG passed in, so a seeded RNG
//! reproduces a result exactly.

use rand::Rng;

use super::sampler::SkillPool;
use super::ticket::{TicketOptions, TicketType};
use crate::entities::Player;
use crate::error::SkillChangeError;
use crate::probability::{LevelDistribution, ProbabilityModel};
use crate::skills::{held_keys, level_sum, Skill, SkillCatalog, SkillSlots, Tier, MAX_LEVEL, SLOT_COUNT};

/// Premium redraws allowed before giving up
pub const DEFAULT_MAX_PREMIUM_ATTEMPTS: u32 = 500;

/// Stand-in skill used when Choice targets an empty slot
pub const PLACEHOLDER_SKILL_NAME: &str = "Placeholder";

/// Runs ticket algorithms against a catalog and probability model
#[derive(Debug, Clone)]
pub struct SkillChangeEngine<'a> {
    catalog: &'a SkillCatalog,
    model: &'a ProbabilityModel,
    levels: LevelDistribution,
    max_premium_attempts: u32,
}

impl<'a> SkillChangeEngine<'a> {
    pub fn new(catalog: &'a SkillCatalog, model: &'a ProbabilityModel) -> Result<Self, SkillChangeError> {
        Ok(Self {
            catalog,
            model,
            levels: model.level_distribution()?,
            max_premium_attempts: DEFAULT_MAX_PREMIUM_ATTEMPTS,
        })
    }

    /// Override the premium redraw cap (at least one attempt is always made)
    pub fn with_max_premium_attempts(mut self, attempts: u32) -> Self {
        self.max_premium_attempts = attempts.max(1);
        self
    }

    pub fn catalog(&self) -> &SkillCatalog {
        self.catalog
    }

    pub fn model(&self) -> &ProbabilityModel {
        self.model
    }

    /// Apply a ticket and return the would-be skills
    pub fn apply_ticket(
        &self,
        player: &Player,
        ticket: TicketType,
        options: TicketOptions,
        rng: &mut impl Rng,
    ) -> Result<SkillSlots, SkillChangeError> {
        let slot = options.checked_slot()?;

        let result = match ticket {
            TicketType::Basic => self.reroll_all(player, rng)?,
            TicketType::Advanced | TicketType::LegendDirect => {
                self.reroll_with_legend_chance(player, ticket, rng)?
            }
            TicketType::Premium => self.reroll_premium(player, rng)?,
            TicketType::LegendChoice => self.swap_legend(player, rng)?,
            TicketType::Protect => {
                let slot = slot.ok_or(SkillChangeError::MissingSlotSelection(ticket))?;
                self.reroll_protected(player, slot, rng)?
            }
            TicketType::Choice => self.reroll_one(player, slot, rng)?,
        };

        log::debug!(
            "{} ticket on {}: level sum {}",
            ticket,
            player.position,
            level_sum(&result)
        );
        Ok(result)
    }

    /// Level for a freshly drawn skill; legend players always get the maximum
    fn draw_level(&self, player: &Player, rng: &mut impl Rng) -> u8 {
        if player.is_legend {
            MAX_LEVEL
        } else {
            self.levels.sample(rng)
        }
    }

    fn regular_pool(&self, player: &Player) -> SkillPool {
        SkillPool::new(self.catalog.regular_pool(player.player_type))
    }

    fn slot_weight(&self, player: &Player, slot: usize) -> f64 {
        self.model.base_slot_weight(player.player_type, slot)
    }

    /// Fill `slots` from the pool in order, each with its base slot weight
    fn fill_slots(
        &self,
        player: &Player,
        result: &mut SkillSlots,
        pool: &mut SkillPool,
        slots: impl IntoIterator<Item = usize>,
        rng: &mut impl Rng,
    ) -> Result<(), SkillChangeError> {
        for slot in slots {
            let key = pool.draw(self.slot_weight(player, slot), rng)?;
            result[slot] = Some(key.with_level(self.draw_level(player, rng)));
        }
        Ok(())
    }

    /// Basic: all three slots from the full regular pool
    fn reroll_all(&self, player: &Player, rng: &mut impl Rng) -> Result<SkillSlots, SkillChangeError> {
        let mut result = SkillSlots::default();
        let mut pool = self.regular_pool(player);
        self.fill_slots(player, &mut result, &mut pool, 0..SLOT_COUNT, rng)?;
        Ok(result)
    }

    /// Slot 0 is a legend skill with the ticket's odds, otherwise a gold one
    fn reroll_with_legend_chance(
        &self,
        player: &Player,
        ticket: TicketType,
        rng: &mut impl Rng,
    ) -> Result<SkillSlots, SkillChangeError> {
        let mut result = SkillSlots::default();
        let mut pool = self.regular_pool(player);

        let odds = self.model.legend_appearance_probability(ticket, player.card_type());
        let first = if rng.gen::<f64>() < odds {
            // Legend skills never enter the shared pool
            SkillPool::new(self.catalog.tier_pool(player.player_type, Tier::Legend)).pick(rng)?
        } else {
            let gold = SkillPool::new(self.catalog.tier_pool(player.player_type, Tier::Gold)).pick(rng)?;
            pool.remove(&gold);
            gold
        };
        result[0] = Some(first.with_level(self.draw_level(player, rng)));

        self.fill_slots(player, &mut result, &mut pool, 1..SLOT_COUNT, rng)?;
        Ok(result)
    }

    /// Premium: redraw with the advanced ticket until the level sum is high enough
    fn reroll_premium(&self, player: &Player, rng: &mut impl Rng) -> Result<SkillSlots, SkillChangeError> {
        let min_sum = self.model.premium_min_level_sum;
        let mut result = self.reroll_with_legend_chance(player, TicketType::Premium, rng)?;
        let mut attempts = 1;

        while !player.is_legend && level_sum(&result) < min_sum {
            if attempts >= self.max_premium_attempts {
                log::error!(
                    "premium ticket on {} found no level sum >= {} in {} attempts; check level weights",
                    player.position,
                    min_sum,
                    attempts
                );
                return Err(SkillChangeError::RejectionLimitExceeded { attempts });
            }
            result = self.reroll_with_legend_chance(player, TicketType::Advanced, rng)?;
            attempts += 1;
        }

        if attempts > 1 {
            log::debug!("premium ticket accepted after {} draws", attempts);
        }
        Ok(result)
    }

    /// LegendChoice: replace the first legend skill with another, keeping its level
    fn swap_legend(&self, player: &Player, rng: &mut impl Rng) -> Result<SkillSlots, SkillChangeError> {
        let slot = player
            .first_legend_slot()
            .ok_or(SkillChangeError::MissingLegendSkill)?;
        let current = player.skill(slot).ok_or(SkillChangeError::MissingLegendSkill)?;

        let mut pool = SkillPool::new(self.catalog.tier_pool(player.player_type, Tier::Legend));
        pool.exclude(held_keys(&player.skills).iter());
        let replacement = pool.pick(rng)?;

        let mut result = player.skills.clone();
        result[slot] = Some(replacement.with_level(current.level));
        Ok(result)
    }

    /// Protect: keep one slot as-is and reroll the other two
    fn reroll_protected(
        &self,
        player: &Player,
        protected: usize,
        rng: &mut impl Rng,
    ) -> Result<SkillSlots, SkillChangeError> {
        let mut result = SkillSlots::default();
        let mut pool = self.regular_pool(player);

        if let Some(kept) = player.skill(protected) {
            pool.remove(&kept.key());
            result[protected] = Some(kept.clone());
        }

        let others = (0..SLOT_COUNT).filter(|&slot| slot != protected);
        self.fill_slots(player, &mut result, &mut pool, others, rng)?;
        Ok(result)
    }

    /// Choice: reroll one slot, keeping its level
    fn reroll_one(
        &self,
        player: &Player,
        slot: Option<usize>,
        rng: &mut impl Rng,
    ) -> Result<SkillSlots, SkillChangeError> {
        let slot = match slot {
            Some(slot) => slot,
            None => rng.gen_range(0..SLOT_COUNT),
        };

        let current = match player.skill(slot) {
            Some(skill) => skill.clone(),
            None => Skill::new(PLACEHOLDER_SKILL_NAME, Tier::Bronze, self.draw_level(player, rng)),
        };

        let mut pool = self.regular_pool(player);
        pool.exclude(held_keys(&player.skills).iter());
        pool.remove(&current.key());

        let key = pool.draw(self.slot_weight(player, 0), rng)?;
        let level = if player.is_legend { MAX_LEVEL } else { current.level };

        let mut result = player.skills.clone();
        result[slot] = Some(key.with_level(level));
        Ok(result)
    }
}
