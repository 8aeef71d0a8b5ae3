use grid_search_trace::{reconstruct_path, search, shortest_path, SearchGrid};
use grid_util::point::Point;

// Here the finish is walled off completely:
//  ____
// |S   |
// |   #|
// |  #G|
//  ----
// The trace still covers every reachable cell, the finish never shows up in
// the visitation order and backtracking falls back to the finish cell alone.

fn main() {
    let mut grid = SearchGrid::with_endpoints(4, 3, Point::new(0, 0), Point::new(3, 2)).unwrap();
    grid.toggle_obstacle(Point::new(3, 1)).unwrap();
    grid.toggle_obstacle(Point::new(2, 2)).unwrap();
    println!("{}", grid);
    let order = search(&mut grid).unwrap();
    println!(
        "Visited {} cells; finish reached: {}",
        order.len(),
        order.contains(&grid.finish())
    );
    match shortest_path(&grid) {
        Some(path) => println!("Path of {} cells", path.len()),
        None => println!("No path; backtrack falls back to {:?}", reconstruct_path(&grid)),
    }
}
