use criterion::{black_box, criterion_group, criterion_main, Criterion};

use war_engine::{GameConfig, GameState, RulesEngine, WarEvent, WarGameBuilder};

fn seeded_game(c: &mut Criterion) {
    let config = GameConfig::new(["Player 1", "Player 2", "Player 3"]).with_seed(42);

    c.bench_function("full game, 3 players", |b| {
        b.iter(|| {
            let (game, mut state) = WarGameBuilder::new(config.clone()).build().unwrap();
            let mut events = 0usize;
            let mut count = |_: &GameState, _: &WarEvent| events += 1;
            let result = game.play(&mut state, &mut count);
            black_box((result, events))
        })
    });

    c.bench_function("step clone", |b| {
        let (game, state) = WarGameBuilder::new(config.clone()).build().unwrap();
        b.iter(|| black_box(game.step(black_box(&state))))
    });
}

criterion_group!(benches, seeded_game);
criterion_main!(benches);
