//! Benchmarks for the depth-first auto-solver.
//!
//! Each benchmark generates a maze from a fixed seed once, then measures a full
//! [`Maze::auto_solve`] run on a fresh copy of it.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mazewalk_game::Maze;
use mazewalk_generator::{MazeGenerator, MazeSeed};

const SEEDS: [&str; 2] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SIZES: [usize; 3] = [21, 101, 301];

fn bench_auto_solve(c: &mut Criterion) {
    for size in SIZES {
        let generator = MazeGenerator::new(size).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = MazeSeed::from_str(seed).unwrap();
            let maze = Maze::from(generator.generate_with_seed(seed));
            c.bench_with_input(
                BenchmarkId::new(format!("auto_solve_{size}"), format!("seed_{i}")),
                &maze,
                |b, maze| {
                    b.iter_batched(
                        || hint::black_box(maze.clone()),
                        |mut maze| maze.auto_solve().unwrap(),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }
}

criterion_group!(benches, bench_auto_solve);
criterion_main!(benches);
