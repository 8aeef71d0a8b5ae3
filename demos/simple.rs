use grid_search_trace::{search, shortest_path, SearchGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this example an expansion is traced on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ---
// where
// - # marks an obstacle
// - S marks the start
// - G marks the finish
//
// Cells have a 4-neighbourhood

fn main() {
    let mut grid: SearchGrid = SearchGrid::new(3, 3, false);
    grid.toggle_obstacle(Point::new(1, 1)).unwrap();
    println!("{}", grid);
    let order = search(&mut grid).unwrap();
    println!("Visited {} cells, in order:", order.len());
    for p in &order {
        println!("{:?}", p);
    }
    let path = shortest_path(&grid).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
