//! Session controller
//!
//! Owns the roster of players keyed by position. The engine only computes
//! results; the session records statistics and decides what gets committed.

use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::engine::{SkillChangeEngine, SkillPool, TicketOptions, TicketType, DEFAULT_MAX_PREMIUM_ATTEMPTS};
use crate::entities::{DefensivePosition, Player, PositionTag};
use crate::error::SessionError;
use crate::probability::ProbabilityModel;
use crate::skills::{SkillCatalog, SkillSlots, MAX_LEVEL, SLOT_COUNT};

/// A computed ticket result awaiting a keep/discard decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillChange {
    pub position: PositionTag,
    pub ticket: TicketType,
    pub before: SkillSlots,
    pub after: SkillSlots,
}

/// Which side of a change to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    Before,
    After,
}

/// Player store plus the data every engine call needs
#[derive(Debug, Clone)]
pub struct Session {
    catalog: SkillCatalog,
    model: ProbabilityModel,
    players: BTreeMap<PositionTag, Player>,
    current: Option<PositionTag>,
    max_premium_attempts: u32,
}

impl Session {
    pub fn new(catalog: SkillCatalog, model: ProbabilityModel) -> Self {
        Self {
            catalog,
            model,
            players: BTreeMap::new(),
            current: None,
            max_premium_attempts: DEFAULT_MAX_PREMIUM_ATTEMPTS,
        }
    }

    pub fn with_max_premium_attempts(mut self, attempts: u32) -> Self {
        self.max_premium_attempts = attempts;
        self
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &ProbabilityModel {
        &self.model
    }

    /// Select a roster slot, creating its player on first use.
    /// Re-selecting an existing player only updates its legend flag.
    pub fn select(&mut self, position: PositionTag, is_legend: bool) -> &Player {
        let player = self
            .players
            .entry(position)
            .and_modify(|p| p.is_legend = is_legend)
            .or_insert_with(|| {
                log::info!("Created {} player at {}", position.player_type(), position);
                Player::new(position, is_legend)
            });
        self.current = Some(position);
        player
    }

    pub fn current_position(&self) -> Option<PositionTag> {
        self.current
    }

    pub fn current(&self) -> Option<&Player> {
        self.current.and_then(|p| self.players.get(&p))
    }

    /// The selected position, or an error when nothing is selected
    pub fn require_current(&self) -> Result<PositionTag, SessionError> {
        self.current.ok_or(SessionError::NoPlayerSelected)
    }

    pub fn player(&self, position: PositionTag) -> Option<&Player> {
        self.players.get(&position)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    fn player_mut(&mut self, position: PositionTag) -> Result<&mut Player, SessionError> {
        self.players
            .get_mut(&position)
            .ok_or(SessionError::UnknownPlayer(position))
    }

    /// Run a ticket and record statistics without committing the result
    pub fn preview(
        &mut self,
        position: PositionTag,
        ticket: TicketType,
        options: TicketOptions,
        rng: &mut impl Rng,
    ) -> Result<SkillChange, SessionError> {
        options.checked_slot()?;
        let seeded = if ticket.uses_slot() {
            self.starting_skills(position, rng)?
        } else {
            None
        };

        let engine = SkillChangeEngine::new(&self.catalog, &self.model)?
            .with_max_premium_attempts(self.max_premium_attempts);
        let player = self
            .players
            .get_mut(&position)
            .ok_or(SessionError::UnknownPlayer(position))?;

        let after = match &seeded {
            Some(skills) => {
                let seeded_player = player.clone().with_skills(skills.clone());
                engine.apply_ticket(&seeded_player, ticket, options, rng)?
            }
            None => engine.apply_ticket(player, ticket, options, rng)?,
        };

        // Seeded skills only stick once the ticket itself succeeded
        if let Some(skills) = seeded {
            log::debug!("Seeded starting skills for {}", position);
            player.set_skills(skills);
        }
        player.stats.record(ticket, &after);

        Ok(SkillChange {
            position,
            ticket,
            before: player.skills.clone(),
            after,
        })
    }

    /// Write one side of a previewed change back to the player
    pub fn commit(&mut self, change: &SkillChange, keep: Keep) -> Result<(), SessionError> {
        let player = self.player_mut(change.position)?;
        let chosen = match keep {
            Keep::Before => &change.before,
            Keep::After => &change.after,
        };
        player.set_skills(chosen.clone());
        Ok(())
    }

    /// Preview and keep the new skills
    pub fn apply(
        &mut self,
        position: PositionTag,
        ticket: TicketType,
        options: TicketOptions,
        rng: &mut impl Rng,
    ) -> Result<SkillChange, SessionError> {
        let change = self.preview(position, ticket, options, rng)?;
        self.commit(&change, Keep::After)?;
        Ok(change)
    }

    /// Slot tickets need something to protect or replace, so a player with no
    /// skills at all gets three distinct regular skills first. Returns `None`
    /// when the player already has a skill.
    fn starting_skills(&self, position: PositionTag, rng: &mut impl Rng) -> Result<Option<SkillSlots>, SessionError> {
        let player = self
            .players
            .get(&position)
            .ok_or(SessionError::UnknownPlayer(position))?;
        if player.has_any_skill() {
            return Ok(None);
        }

        let levels = self.model.level_distribution()?;

        let mut pool = SkillPool::new(self.catalog.regular_pool(player.player_type));
        let mut seeded = SkillSlots::default();
        for slot in seeded.iter_mut().take(SLOT_COUNT) {
            let key = pool.draw(1.0, rng)?;
            let level = if player.is_legend { MAX_LEVEL } else { levels.sample(rng) };
            *slot = Some(key.with_level(level));
        }

        Ok(Some(seeded))
    }

    /// Set or clear a batter's fielding position.
    ///
    /// Within the batting order, a position already held by another batter is
    /// refused and the requester is left without one. Bench batters are not
    /// checked against anyone.
    pub fn assign_defensive_position(
        &mut self,
        position: PositionTag,
        defensive: Option<DefensivePosition>,
    ) -> Result<(), SessionError> {
        if !position.can_hold_defensive_position() {
            return Err(SessionError::DefensivePositionNotAllowed(position));
        }

        let contested = defensive.filter(|_| position.in_batting_order());
        let holder = contested.and_then(|wanted| {
            self.players
                .iter()
                .find(|(tag, p)| {
                    **tag != position
                        && tag.in_batting_order()
                        && p.defensive_position == Some(wanted)
                })
                .map(|(tag, _)| *tag)
        });

        let player = self.player_mut(position)?;
        match (contested, holder) {
            (Some(wanted), Some(holder)) => {
                player.defensive_position = None;
                log::warn!("{} is already playing {}", holder, wanted);
                Err(SessionError::DefensivePositionTaken { position: wanted, holder })
            }
            _ => {
                player.defensive_position = defensive;
                Ok(())
            }
        }
    }

    /// Clear one player's skills, counters and fielding
    pub fn reset_player(&mut self, position: PositionTag) -> Result<(), SessionError> {
        self.player_mut(position)?.reset();
        log::info!("Reset player at {}", position);
        Ok(())
    }

    /// Reset every player and drop the selection
    pub fn reset_all(&mut self) {
        for player in self.players.values_mut() {
            player.reset();
        }
        self.current = None;
        log::info!("Reset all {} players", self.players.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BatterPosition, PitcherPosition};
    use crate::error::SkillChangeError;
    use crate::probability::default_probability_model;
    use crate::skills::{default_catalog, has_duplicate_skills, Skill, Tier};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ACE: PositionTag = PositionTag::Pitcher(PitcherPosition::Starter1);
    const LEADOFF: PositionTag = PositionTag::Batter(BatterPosition::Batting1);
    const CLEANUP: PositionTag = PositionTag::Batter(BatterPosition::Batting4);

    fn make_session() -> Session {
        Session::new(default_catalog(), default_probability_model())
    }

    #[test]
    fn test_select_creates_then_updates() {
        let mut session = make_session();
        assert!(session.current().is_none());
        assert_eq!(session.require_current(), Err(SessionError::NoPlayerSelected));

        session.select(ACE, false);
        session.player_mut(ACE).unwrap().stats.simulation_count = 3;
        let player = session.select(ACE, true);

        assert!(player.is_legend);
        assert_eq!(player.stats.simulation_count, 3);
        assert_eq!(session.current_position(), Some(ACE));
    }

    #[test]
    fn test_apply_commits_and_records() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(30);
        session.select(ACE, false);

        let change = session.apply(ACE, TicketType::Premium, TicketOptions::new(), &mut rng).unwrap();
        let player = session.player(ACE).unwrap();

        assert_eq!(player.skills, change.after);
        assert_eq!(player.stats.simulation_count, 1);
        assert_eq!(player.stats.ticket_uses(TicketType::Premium), 1);
    }

    #[test]
    fn test_preview_keep_before() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(31);
        session.select(CLEANUP, false);
        session.apply(CLEANUP, TicketType::LegendDirect, TicketOptions::new(), &mut rng).unwrap();
        let kept = session.player(CLEANUP).unwrap().skills.clone();

        let change = session.preview(CLEANUP, TicketType::LegendChoice, TicketOptions::new(), &mut rng).unwrap();
        assert_eq!(change.before, kept);
        assert_ne!(change.after, kept);

        session.commit(&change, Keep::Before).unwrap();
        assert_eq!(session.player(CLEANUP).unwrap().skills, kept);
    }

    #[test]
    fn test_failed_ticket_leaves_skills() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(32);
        session.select(LEADOFF, false);
        session.apply(LEADOFF, TicketType::Basic, TicketOptions::new(), &mut rng).unwrap();
        let before = session.player(LEADOFF).unwrap().clone();

        let err = session
            .apply(LEADOFF, TicketType::LegendChoice, TicketOptions::new(), &mut rng)
            .unwrap_err();
        assert_eq!(err, SessionError::Engine(SkillChangeError::MissingLegendSkill));
        assert_eq!(session.player(LEADOFF).unwrap(), &before);
    }

    #[test]
    fn test_slot_ticket_seeds_empty_player() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(33);
        session.select(LEADOFF, true);

        let change = session
            .apply(LEADOFF, TicketType::Protect, TicketOptions::with_slot(1), &mut rng)
            .unwrap();

        assert!(change.before.iter().all(Option::is_some));
        assert!(!has_duplicate_skills(&change.before));
        assert_eq!(change.after[1], change.before[1]);
        assert!(change.after.iter().flatten().all(|s| s.level == 3));
    }

    #[test]
    fn test_invalid_slot_does_not_seed() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(34);
        session.select(LEADOFF, false);

        let err = session
            .apply(LEADOFF, TicketType::Choice, TicketOptions::with_slot(4), &mut rng)
            .unwrap_err();
        assert_eq!(err, SessionError::Engine(SkillChangeError::InvalidSlotIndex(4)));
        assert!(!session.player(LEADOFF).unwrap().has_any_skill());
    }

    #[test]
    fn test_unknown_player() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(35);
        assert_eq!(
            session.apply(ACE, TicketType::Basic, TicketOptions::new(), &mut rng),
            Err(SessionError::UnknownPlayer(ACE))
        );
    }

    #[test]
    fn test_defensive_position_conflicts() {
        let mut session = make_session();
        session.select(LEADOFF, false);
        session.select(CLEANUP, false);
        session.select(PositionTag::Batter(BatterPosition::Sub1), false);

        session.assign_defensive_position(LEADOFF, Some(DefensivePosition::Shortstop)).unwrap();
        session.assign_defensive_position(CLEANUP, Some(DefensivePosition::FirstBase)).unwrap();

        let err = session
            .assign_defensive_position(CLEANUP, Some(DefensivePosition::Shortstop))
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::DefensivePositionTaken { position: DefensivePosition::Shortstop, holder: LEADOFF }
        );
        assert_eq!(session.player(CLEANUP).unwrap().defensive_position, None);

        session.assign_defensive_position(LEADOFF, None).unwrap();
        assert_eq!(session.player(LEADOFF).unwrap().defensive_position, None);
    }

    #[test]
    fn test_bench_fielding_is_unchecked() {
        let bench = PositionTag::Batter(BatterPosition::Sub1);
        let mut session = make_session();
        session.select(ACE, false);
        session.select(LEADOFF, false);
        session.select(bench, false);

        session.assign_defensive_position(LEADOFF, Some(DefensivePosition::Catcher)).unwrap();
        session.assign_defensive_position(bench, Some(DefensivePosition::Catcher)).unwrap();
        assert_eq!(session.player(bench).unwrap().defensive_position, Some(DefensivePosition::Catcher));

        // The bench catcher does not block the order either
        session.assign_defensive_position(LEADOFF, None).unwrap();
        session.assign_defensive_position(LEADOFF, Some(DefensivePosition::Catcher)).unwrap();

        assert_eq!(
            session.assign_defensive_position(ACE, Some(DefensivePosition::Catcher)),
            Err(SessionError::DefensivePositionNotAllowed(ACE))
        );
    }

    #[test]
    fn test_reset_all() {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(36);
        session.select(ACE, true);
        session.select(LEADOFF, false);
        session.apply(ACE, TicketType::Advanced, TicketOptions::new(), &mut rng).unwrap();
        session.player_mut(LEADOFF).unwrap().skills[0] = Some(Skill::new("Trust", Tier::Silver, 2));

        session.reset_all();

        assert!(session.current().is_none());
        assert!(session.players().all(|p| !p.has_any_skill() && p.stats.total_ticket_uses() == 0));
        assert!(session.player(ACE).unwrap().is_legend);
    }
}
