//! Benchmarks for dungeon generation and the distance matrix.

use cavern::generation::{classify, DistanceMatrix, Edge, GridTopology};
use cavern::{Dungeon, DungeonConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_generation(c: &mut Criterion) {
    let config = DungeonConfig::for_testing(42).with_monsters(3);
    c.bench_function("generate 5x5 wrapped", |b| {
        b.iter(|| Dungeon::generate(black_box(&config)))
    });

    let large = DungeonConfig::new(8, 8)
        .with_wrapping(true)
        .with_interconnectivity(4)
        .with_seed(42);
    c.bench_function("generate 8x8 wrapped", |b| {
        b.iter(|| Dungeon::generate(black_box(&large)))
    });
}

fn bench_distances(c: &mut Criterion) {
    // Serpentine path through a 8x8 grid: the worst case for hop counts
    let topology = GridTopology::new(8, 8, false).expect("valid grid");
    let edges: Vec<Edge> = (0..63).map(|i| Edge::new(i, i + 1)).filter(|e| {
        let (a, b) = (topology.location(e.origin), topology.location(e.destination));
        a.row == b.row
    }).chain((0..7).map(|row| {
        let column = if row % 2 == 0 { 7 } else { 0 };
        Edge::new(row * 8 + column, (row + 1) * 8 + column)
    })).collect();
    let cells = classify::classify(&topology, &edges);

    c.bench_function("floyd-warshall 64 cells", |b| {
        b.iter(|| DistanceMatrix::compute(black_box(&topology), black_box(&cells)))
    });
}

criterion_group!(benches, bench_generation, bench_distances);
criterion_main!(benches);
