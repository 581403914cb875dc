use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Adjacency, Grid, Position};

/// A ready-to-search demo setup: grid with walls placed and both endpoints
/// designated, neighbor caches current.
pub struct Scenario {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
}

impl Scenario {
    /// Generates a random scenario: start in the upper-left quadrant, end in
    /// the lower-right, and up to `num_walls` walls placed with bounded
    /// attempts so dense requests terminate. A fixed seed reproduces the
    /// exact same layout.
    pub fn generate(
        size: usize,
        num_walls: usize,
        adjacency: Adjacency,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut grid = Grid::new(size, adjacency);

        let start = Position {
            row: rng.gen_range(0..size / 2),
            col: rng.gen_range(0..size / 2),
        };
        let end = Position {
            row: rng.gen_range(size / 2..size),
            col: rng.gen_range(size / 2..size),
        };
        grid.designate_start(start);
        grid.designate_end(end);

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position {
                row: rng.gen_range(0..size),
                col: rng.gen_range(0..size),
            };
            if pos != start && pos != end && !grid.cell(pos).is_wall() {
                grid.toggle_wall(pos);
                walls_placed += 1;
            }
            attempts += 1;
        }
        debug!("scenario: start {start}, end {end}, {walls_placed} walls");

        grid.recompute_all_neighbors();

        Scenario { grid, start, end }
    }
}
