//! Benchmarks for cave generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cavewalk::game::GameConfig;
use cavewalk::world::generation::{random_walk, smoothen};
use cavewalk::world::{generate_cave, Grid};

fn bench_random_walk(c: &mut Criterion) {
    c.bench_function("random_walk_60x45", |b| {
        let mut rng = StdRng::seed_from_u64(2873123);
        let mut grid = Grid::new(60, 45);
        b.iter(|| random_walk(black_box(&mut grid), 0.5, &mut rng))
    });
}

fn bench_smoothing(c: &mut Criterion) {
    let mut carved = Grid::new(60, 45);
    random_walk(&mut carved, 0.5, &mut StdRng::seed_from_u64(2873123));

    c.bench_function("smoothen_3_passes", |b| {
        b.iter(|| {
            let mut grid = carved.clone();
            smoothen(black_box(&mut grid), 3)
        })
    });
}

fn bench_generate_cave(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("generate_cave_reference", |b| {
        let mut rng = StdRng::seed_from_u64(2873123);
        b.iter(|| generate_cave(black_box(&config), &mut rng))
    });
}

criterion_group!(benches, bench_random_walk, bench_smoothing, bench_generate_cave);
criterion_main!(benches);
