//! Performance benchmarks for the scoring engine and full games
//!
//! - enumeration and selection validation over fixed rolls
//! - option listing for a six-die pool (every subset is tried)
//! - complete heuristic-vs-heuristic games

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use farkle_rs::{
    core::{Die, DieFace, DieId, PlayerId},
    game::{GameConfig, GameLoop, HeuristicController, TurnStateMachine, VerbosityLevel},
    scoring::{enumerate_combinations, scoring_selections, validate_selection},
};

fn faces(values: &[u8]) -> Vec<DieFace> {
    values.iter().map(|&v| DieFace::new(v)).collect()
}

const ROLLS: [(&str, [u8; 6]); 4] = [
    ("full_straight", [1, 2, 3, 4, 5, 6]),
    ("triple_and_singles", [5, 5, 5, 1, 2, 3]),
    ("six_of_a_kind", [4, 4, 4, 4, 4, 4]),
    ("bust", [2, 2, 3, 3, 4, 6]),
];

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_combinations");
    for (name, roll) in ROLLS {
        let roll = faces(&roll);
        group.bench_with_input(BenchmarkId::from_parameter(name), &roll, |b, roll| {
            b.iter(|| enumerate_combinations(black_box(roll)))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let roll = faces(&[5, 5, 5, 1, 2, 3]);
    let chosen = faces(&[5, 5, 5, 1]);
    c.bench_function("validate_selection", |b| {
        b.iter(|| validate_selection(black_box(&roll), black_box(&chosen)))
    });
}

fn bench_options(c: &mut Criterion) {
    let pool: Vec<Die> = [1, 1, 5, 5, 5, 2]
        .iter()
        .enumerate()
        .map(|(i, &v)| Die::new(DieId::new(i as u32), DieFace::new(v)))
        .collect();
    c.bench_function("scoring_selections_six_dice", |b| {
        b.iter(|| scoring_selections(black_box(&pool)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("heuristic_game", |b| {
        b.iter(|| {
            seed += 1;
            let mut machine = TurnStateMachine::with_seed(GameConfig::default(), seed)
                .expect("default config is valid");
            let mut p1 = HeuristicController::new(PlayerId::FIRST);
            let mut p2 = HeuristicController::new(PlayerId::SECOND);
            GameLoop::new(&mut machine)
                .with_verbosity(VerbosityLevel::Silent)
                .run_game(&mut p1, &mut p2)
                .expect("game completes")
        })
    });
}

criterion_group!(
    benches,
    bench_enumerate,
    bench_validate,
    bench_options,
    bench_full_game
);
criterion_main!(benches);
