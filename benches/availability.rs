//! Performance measurement for the game-over predicate

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilemerge::engine::{has_available_moves, insert_tile_in_random_empty_cell};
use tilemerge::{Grid, Position, Tile};

/// Fill a board completely with spawned tiles from a fixed seed
fn full_board(size: usize, rng: &mut StdRng) -> Grid {
    let Ok(mut grid) = Grid::empty(size) else {
        unreachable!("Benchmark sizes are valid");
    };

    while let Ok(next) = insert_tile_in_random_empty_cell(&grid, rng) {
        grid = next;
    }

    grid
}

/// Measures the worst case: a full board that must be scanned end to end
fn bench_has_available_moves_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_available_moves_full");

    for size in &[4_usize, 8, 16] {
        let mut rng = StdRng::seed_from_u64(6789);
        let grid = full_board(*size, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(has_available_moves(black_box(&grid))));
        });
    }

    group.finish();
}

/// Measures the early-exit case: an empty cell near the scan start
fn bench_has_available_moves_sparse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(6789);
    let Ok(grid) = Grid::empty(4) else {
        unreachable!("4x4 grid is valid");
    };
    let grid = grid.with_tile(Position::new(3, 3), Tile::spawn(&mut rng));

    c.bench_function("has_available_moves_sparse_4x4", |b| {
        b.iter(|| black_box(has_available_moves(black_box(&grid))));
    });
}

criterion_group!(
    benches,
    bench_has_available_moves_full,
    bench_has_available_moves_sparse
);
criterion_main!(benches);
