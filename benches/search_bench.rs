use criterion::{criterion_group, criterion_main, Criterion};
use grid_search_trace::{search, SearchGrid};
use grid_util::grid::Grid;
use rand::prelude::*;
use std::hint::black_box;

// Board dimensions match the 50x20 grid of the interactive visualizer the
// tracer was written for.
fn trace_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for wall_density in [0.0, 0.3] {
        let mut board: SearchGrid = SearchGrid::new(50, 20, false);
        for y in 0..board.height() {
            for x in 0..board.width() {
                board.set(x, y, rng.gen_bool(wall_density));
            }
        }
        c.bench_function(format!("50x20 trace, density {wall_density}").as_str(), |b| {
            b.iter(|| {
                let mut grid = board.clone();
                black_box(search(&mut grid).unwrap());
            })
        });
    }
}

criterion_group!(benches, trace_bench);
criterion_main!(benches);
