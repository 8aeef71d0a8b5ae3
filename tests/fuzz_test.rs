/// Fuzzes the tracer by checking for many random grids that the finish shows
/// up in the visitation order exactly when a flood fill over the same
/// obstacle layout can reach it, and that every produced path is a valid
/// shortest path.
use grid_search_trace::{search, shortest_path, SearchGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> SearchGrid {
    let mut grid: SearchGrid = SearchGrid::new(w, h, false);
    for y in 0..h {
        for x in 0..w {
            grid.set(x, y, rng.gen_bool(0.4));
        }
    }
    grid
}

/// Independent reachability check over the obstacle flags alone.
fn flood_reaches_finish(grid: &SearchGrid) -> bool {
    let mut seen = vec![false; grid.width() * grid.height()];
    let start = grid.start();
    seen[start.y as usize * grid.width() + start.x as usize] = true;
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        if p == grid.finish() {
            return true;
        }
        for n in grid.neighbours(p) {
            let ix = n.y as usize * grid.width() + n.x as usize;
            if !seen[ix] && !grid.is_obstacle(n) {
                seen[ix] = true;
                stack.push(n);
            }
        }
    }
    false
}

fn visualize_grid(grid: &SearchGrid) {
    print!("{}", grid);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let reachable = flood_reaches_finish(&grid);
        let order = search(&mut grid).unwrap();
        // Show the grid if the trace disagrees with the flood fill
        if order.contains(&grid.finish()) != reachable {
            visualize_grid(&grid);
        }
        assert_eq!(order.contains(&grid.finish()), reachable);

        // Cells are finalized in non-decreasing distance order.
        let mut previous = 0;
        for p in &order {
            assert!(!grid.is_obstacle(*p));
            let d = grid.distance_to(*p).expect("visited cell has a distance");
            assert!(d >= previous);
            previous = d;
        }

        match shortest_path(&grid) {
            Some(path) => {
                assert!(reachable);
                assert_eq!(path[0], grid.start());
                assert_eq!(*path.last().unwrap(), grid.finish());
                assert_eq!(
                    path.len() as u32,
                    grid.distance_to(grid.finish()).unwrap() + 1
                );
                for pair in path.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
                }
            }
            None => assert!(!reachable),
        }
    }
}

#[test]
fn fuzz_reset_determinism() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let first = search(&mut grid).unwrap();
        let first_path = shortest_path(&grid);
        grid.reset();
        let second = search(&mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_path, shortest_path(&grid));
    }
}

/// Toggling a cell twice leaves the trace unchanged.
#[test]
fn fuzz_toggle_roundtrip() {
    const N: usize = 8;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let p = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let first = search(&mut grid).unwrap();
        grid.reset();
        if grid.toggle_obstacle(p).is_ok() {
            grid.toggle_obstacle(p).unwrap();
        }
        let second = search(&mut grid).unwrap();
        assert_eq!(first, second);
    }
}
