//! Integration test: ticket invariants over many seeded draws
//!
//! Runs every ticket type through the session and the engine for both player
//! types and checks the properties that must hold for any draw: distinct
//! skills, forced levels for legend players, the premium level floor and the
//! advertised odds.

use rand::rngs::StdRng;
use rand::SeedableRng;

use skillreroll::engine::{SkillChangeEngine, TicketOptions, TicketType};
use skillreroll::entities::{BatterPosition, PitcherPosition, Player, PositionTag};
use skillreroll::error::{SessionError, SkillChangeError};
use skillreroll::probability::default_probability_model;
use skillreroll::session::Session;
use skillreroll::skills::{default_catalog, has_duplicate_skills, level_sum, Tier};

const ACE: PositionTag = PositionTag::Pitcher(PitcherPosition::Starter1);
const CLEANUP: PositionTag = PositionTag::Batter(BatterPosition::Batting4);

fn make_session() -> Session {
    Session::new(default_catalog(), default_probability_model())
}

fn options_for(ticket: TicketType, slot: usize) -> TicketOptions {
    if ticket.uses_slot() {
        TicketOptions::with_slot(slot)
    } else {
        TicketOptions::new()
    }
}

// =========================================================================
// Distinct skills
// =========================================================================

#[test]
fn test_no_duplicate_skills_for_any_ticket() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1000);

    for position in [ACE, CLEANUP] {
        for is_legend in [false, true] {
            session.select(position, is_legend);
            for round in 0..300 {
                for ticket in TicketType::ALL {
                    // Legend choice needs a legend skill to swap
                    if ticket == TicketType::LegendChoice {
                        session
                            .apply(position, TicketType::LegendDirect, TicketOptions::new(), &mut rng)
                            .unwrap();
                    }
                    let change = session
                        .apply(position, ticket, options_for(ticket, round % 3), &mut rng)
                        .unwrap();
                    assert!(
                        !has_duplicate_skills(&change.after),
                        "{} on {} produced duplicates: {:?}",
                        ticket,
                        position,
                        change.after
                    );
                }
            }
        }
    }
}

// =========================================================================
// Levels
// =========================================================================

#[test]
fn test_legend_player_levels_are_always_three() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1001);
    session.select(CLEANUP, true);

    for round in 0..200 {
        for ticket in TicketType::ALL {
            if ticket == TicketType::LegendChoice {
                session
                    .apply(CLEANUP, TicketType::LegendDirect, TicketOptions::new(), &mut rng)
                    .unwrap();
            }
            let change = session
                .apply(CLEANUP, ticket, options_for(ticket, round % 3), &mut rng)
                .unwrap();
            assert!(
                change.after.iter().flatten().all(|s| s.level == 3),
                "{} gave {:?}",
                ticket,
                change.after
            );
        }
    }
}

#[test]
fn test_premium_level_sum_floor() {
    let catalog = default_catalog();
    let model = default_probability_model();
    let engine = SkillChangeEngine::new(&catalog, &model).unwrap();
    let mut rng = StdRng::seed_from_u64(1002);

    for player in [Player::new(ACE, false), Player::new(CLEANUP, false)] {
        for _ in 0..10_000 {
            let result = engine
                .apply_ticket(&player, TicketType::Premium, TicketOptions::new(), &mut rng)
                .unwrap();
            let sum = level_sum(&result);
            assert!(sum >= 5, "premium level sum {} below floor", sum);
        }
    }
}

#[test]
fn test_basic_level_sums_match_distribution() {
    let catalog = default_catalog();
    let model = default_probability_model();
    let engine = SkillChangeEngine::new(&catalog, &model).unwrap();
    let expected = model.level_sum_distribution_default().unwrap();
    let mut rng = StdRng::seed_from_u64(1003);
    let player = Player::new(CLEANUP, false);

    let draws = 100_000;
    let mut counts = [0u32; 10];
    for _ in 0..draws {
        let result = engine
            .apply_ticket(&player, TicketType::Basic, TicketOptions::new(), &mut rng)
            .unwrap();
        counts[level_sum(&result) as usize] += 1;
    }

    for (sum, p) in expected.iter() {
        let observed = counts[sum as usize] as f64 / draws as f64;
        assert!(
            (observed - p).abs() < 0.01,
            "level sum {}: observed {:.4}, expected {:.4}",
            sum,
            observed,
            p
        );
    }
}

// =========================================================================
// Legend odds
// =========================================================================

#[test]
fn test_premium_legend_rate_on_legend_card() {
    let catalog = default_catalog();
    let model = default_probability_model();
    let engine = SkillChangeEngine::new(&catalog, &model).unwrap();
    let mut rng = StdRng::seed_from_u64(1004);
    let player = Player::new(ACE, true);

    let draws = 50_000;
    let legends = (0..draws)
        .filter(|_| {
            let result = engine
                .apply_ticket(&player, TicketType::Premium, TicketOptions::new(), &mut rng)
                .unwrap();
            result[0].as_ref().map(|s| s.tier) == Some(Tier::Legend)
        })
        .count();

    let rate = legends as f64 / draws as f64;
    assert!((rate - 0.25).abs() < 0.01, "legend rate {:.4}", rate);
}

#[test]
fn test_advanced_legend_rate_on_other_card() {
    let catalog = default_catalog();
    let model = default_probability_model();
    let engine = SkillChangeEngine::new(&catalog, &model).unwrap();
    let mut rng = StdRng::seed_from_u64(1005);
    let player = Player::new(CLEANUP, false);

    let draws = 50_000;
    let legends = (0..draws)
        .filter(|_| {
            let result = engine
                .apply_ticket(&player, TicketType::Advanced, TicketOptions::new(), &mut rng)
                .unwrap();
            result.iter().flatten().any(|s| s.is_legend())
        })
        .count();

    let rate = legends as f64 / draws as f64;
    assert!((rate - 0.10).abs() < 0.01, "legend rate {:.4}", rate);
}

// =========================================================================
// Slot tickets and failures
// =========================================================================

#[test]
fn test_legend_choice_without_legend_fails_cleanly() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1006);
    session.select(ACE, false);
    session.apply(ACE, TicketType::Basic, TicketOptions::new(), &mut rng).unwrap();
    let before = session.player(ACE).unwrap().clone();

    let err = session
        .apply(ACE, TicketType::LegendChoice, TicketOptions::new(), &mut rng)
        .unwrap_err();

    assert_eq!(err, SessionError::Engine(SkillChangeError::MissingLegendSkill));
    assert_eq!(session.player(ACE).unwrap(), &before);
}

#[test]
fn test_protect_keeps_chosen_slot() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1007);
    session.select(CLEANUP, false);
    session.apply(CLEANUP, TicketType::Basic, TicketOptions::new(), &mut rng).unwrap();

    for _ in 0..500 {
        let protected = session.player(CLEANUP).unwrap().skills[1].clone();
        let change = session
            .apply(CLEANUP, TicketType::Protect, TicketOptions::with_slot(1), &mut rng)
            .unwrap();
        assert_eq!(change.after[1], protected);
        assert!(!has_duplicate_skills(&change.after));
    }
}

#[test]
fn test_protect_requires_slot() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1008);
    session.select(CLEANUP, false);
    let before = session.player(CLEANUP).unwrap().clone();

    assert_eq!(
        session.apply(CLEANUP, TicketType::Protect, TicketOptions::new(), &mut rng),
        Err(SessionError::Engine(SkillChangeError::MissingSlotSelection(TicketType::Protect)))
    );
    // No starting skills are left behind by the failed ticket
    assert_eq!(session.player(CLEANUP).unwrap(), &before);
    assert!(!session.player(CLEANUP).unwrap().has_any_skill());
}

#[test]
fn test_seeded_skills_kept_after_successful_slot_ticket() {
    let mut session = make_session();
    let mut rng = StdRng::seed_from_u64(1009);
    session.select(ACE, false);

    let change = session
        .apply(ACE, TicketType::Choice, TicketOptions::with_slot(2), &mut rng)
        .unwrap();

    assert!(change.before.iter().all(Option::is_some));
    assert_eq!(change.after[0], change.before[0]);
    assert_eq!(change.after[1], change.before[1]);
    assert_eq!(session.player(ACE).unwrap().skills, change.after);
}

// =========================================================================
// Reproducibility
// =========================================================================

#[test]
fn test_same_seed_same_results() {
    let run = |seed: u64| {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(seed);
        session.select(ACE, false);
        session.select(CLEANUP, true);

        let mut results = Vec::new();
        for ticket in [TicketType::Premium, TicketType::LegendDirect, TicketType::LegendChoice, TicketType::Choice] {
            for position in [ACE, CLEANUP] {
                let change = session.apply(position, ticket, TicketOptions::new(), &mut rng).unwrap();
                results.push(change.after);
            }
        }
        results
    };

    assert_eq!(run(77), run(77));
    assert_ne!(run(77), run(78));
}

#[test]
fn test_basic_ticket_on_fresh_batter_is_reproducible() {
    let run = |seed: u64| {
        let mut session = make_session();
        let mut rng = StdRng::seed_from_u64(seed);
        session.select(CLEANUP, false);
        session
            .apply(CLEANUP, TicketType::Basic, TicketOptions::new(), &mut rng)
            .unwrap()
    };

    let first = run(2024);
    let second = run(2024);

    assert_eq!(first.before, [None, None, None]);
    assert_eq!(first, second);
    assert!(first.after.iter().flatten().all(|s| !s.is_legend()));
    assert!(!has_duplicate_skills(&first.after));
}
