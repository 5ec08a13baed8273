use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;

use skillreroll::engine::{SkillChangeEngine, TicketOptions, TicketType};
use skillreroll::entities::{BatterPosition, Player, PositionTag};
use skillreroll::probability::default_probability_model;
use skillreroll::session::{Session, MAX_SIMULATION_LIMIT};
use skillreroll::skills::default_catalog;

const CLEANUP: PositionTag = PositionTag::Batter(BatterPosition::Batting4);

fn bench_tickets(c: &mut Criterion) {
    let catalog = default_catalog();
    let model = default_probability_model();
    let engine = SkillChangeEngine::new(&catalog, &model).unwrap();
    let player = Player::new(CLEANUP, false);
    let mut rng = StdRng::seed_from_u64(7);

    for ticket in [TicketType::Basic, TicketType::Advanced, TicketType::Premium] {
        c.bench_function(&format!("{} ticket", ticket), |b| {
            b.iter(|| engine.apply_ticket(black_box(&player), ticket, TicketOptions::new(), &mut rng))
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    group.bench_function("premium x10000", |b| {
        b.iter(|| {
            let mut session = Session::new(default_catalog(), default_probability_model());
            let mut rng = StdRng::seed_from_u64(8);
            let cancel = AtomicBool::new(false);
            session.select(CLEANUP, false);
            session.simulate_batch(CLEANUP, TicketType::Premium, TicketOptions::new(), MAX_SIMULATION_LIMIT, &cancel, &mut rng)
        })
    });
    group.finish();
}

fn bench_level_sums(c: &mut Criterion) {
    let model = default_probability_model();
    c.bench_function("premium level sum table", |b| {
        b.iter(|| black_box(&model).level_sum_distribution_premium())
    });
}

criterion_group!(benches, bench_tickets, bench_batch, bench_level_sums);
criterion_main!(benches);
