//! Tick throughput.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use bomb_blast::game::{tick::tick, GameConfig, InputFrame, World};
use bomb_blast::runtime::ScriptedInput;

fn busy_config() -> GameConfig {
    GameConfig {
        wall_count: 120,
        max_bombs: 4,
        ..GameConfig::default()
    }
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut world = World::new(GameConfig::default(), 12345).unwrap();
    let input = InputFrame::new();

    c.bench_function("tick_idle", |b| {
        b.iter(|| tick(black_box(&mut world), black_box(&input)))
    });
}

fn bench_scripted_game(c: &mut Criterion) {
    let world = World::new(busy_config(), 12345).unwrap();
    let frames: Vec<InputFrame> = ScriptedInput::parse("RB*40 DB*40 LB*40 UB*40 .*200")
        .unwrap()
        .frames()
        .collect();

    c.bench_function("tick_scripted_360", |b| {
        b.iter_batched(
            || world.clone(),
            |mut world| {
                for input in &frames {
                    tick(&mut world, input);
                }
                world
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_state_hash(c: &mut Criterion) {
    let world = World::new(busy_config(), 12345).unwrap();

    c.bench_function("compute_hash", |b| b.iter(|| black_box(&world).compute_hash()));
}

criterion_group!(benches, bench_idle_tick, bench_scripted_game, bench_state_hash);
criterion_main!(benches);
