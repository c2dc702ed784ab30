use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use perfect_mazes::{
    maze::Maze,
    units::{Height, Width},
};

fn empty_maze_32() -> Maze {
    Maze::with_seed(Width(32), Height(32), "bench", 32).unwrap()
}

fn bench_prim_maze_32(c: &mut Criterion) {
    c.bench_function("prim_maze_32", |b| {
        b.iter_batched(empty_maze_32,
                       |mut m| m.generate_prim().unwrap(),
                       BatchSize::SmallInput)
    });
}

fn bench_growing_tree_random_maze_32(c: &mut Criterion) {
    c.bench_function("growing_tree_random_maze_32", |b| {
        b.iter_batched(empty_maze_32,
                       |mut m| m.generate_growing_tree(100, 0).unwrap(),
                       BatchSize::SmallInput)
    });
}

fn bench_growing_tree_backtracker_maze_32(c: &mut Criterion) {
    c.bench_function("growing_tree_backtracker_maze_32", |b| {
        b.iter_batched(empty_maze_32,
                       |mut m| m.generate_growing_tree(100, 100).unwrap(),
                       BatchSize::SmallInput)
    });
}

fn bench_growing_tree_default_maze_32(c: &mut Criterion) {
    c.bench_function("growing_tree_default_maze_32", |b| {
        b.iter_batched(empty_maze_32,
                       |mut m| m.generate_growing_tree(90, 30).unwrap(),
                       BatchSize::SmallInput)
    });
}

criterion_group!(
    benches,
    bench_prim_maze_32,
    bench_growing_tree_random_maze_32,
    bench_growing_tree_backtracker_maze_32,
    bench_growing_tree_default_maze_32
);
criterion_main!(benches);
