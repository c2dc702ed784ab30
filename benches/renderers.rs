use criterion::{criterion_group, criterion_main, Criterion};
use perfect_mazes::{
    maze::Maze,
    renderers,
    units::{Height, Width},
};

fn bench_render_maze_200(c: &mut Criterion) {
    let mut maze = Maze::with_seed(Width(200), Height(200), "bench", 200).unwrap();
    maze.generate_growing_tree(90, 30).unwrap();
    let render_options = renderers::RenderOptionsBuilder::new()
        .cell_side_pixels_length(4)
        .build();

    c.bench_function("render_maze_200", move |b| {
        b.iter(|| renderers::render(&maze, &render_options).unwrap())
    });
}

criterion_group!(benches, bench_render_maze_200);
criterion_main!(benches);
