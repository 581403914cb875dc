use std::fmt;
use std::time::Duration;

use pathfinding::prelude::astar;

use crate::algorithms::common::{manhattan, SearchResult};
use crate::grid::{CellState, Grid, Position};

/// Post-search summary assembled from the final grid state and the engine
/// outcome. The optimal length comes from an independent solver over the
/// same wall layout, so the report doubles as a sanity check on the
/// incremental engine.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: &'static str,
    pub path_length: Option<usize>,
    pub optimal_length: Option<usize>,
    pub route_efficiency: f64,
    pub open_cells: usize,
    pub closed_cells: usize,
    pub frames: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn new(
        grid: &Grid,
        result: &SearchResult,
        start: Position,
        end: Position,
        frames: usize,
        elapsed: Duration,
    ) -> Self {
        let outcome = match result {
            SearchResult::Found(_) => "success",
            SearchResult::Exhausted => "no path",
            SearchResult::Interrupted => "interrupted",
        };
        let path_length = result.path_length();
        let optimal_length = reference_optimal_length(grid, start, end);

        let route_efficiency = match (path_length, optimal_length) {
            (Some(found), Some(optimal)) if optimal > 0 => found as f64 / optimal as f64,
            _ => 0.0,
        };

        SearchReport {
            outcome,
            path_length,
            optimal_length,
            route_efficiency,
            open_cells: grid.count(CellState::Open),
            closed_cells: grid.count(CellState::Closed),
            frames,
            elapsed,
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outcome: {}", self.outcome)?;
        match self.path_length {
            Some(length) => writeln!(f, "Path length: {}", length)?,
            None => writeln!(f, "Path length: -")?,
        }
        match self.optimal_length {
            Some(length) => writeln!(f, "Optimal path length (reference A*): {}", length)?,
            None => writeln!(f, "Optimal path length (reference A*): unreachable")?,
        }
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route efficiency: {:.3}", self.route_efficiency)?;
        }
        writeln!(f, "Cells still open: {}", self.open_cells)?;
        writeln!(f, "Cells closed: {}", self.closed_cells)?;
        writeln!(f, "Render frames: {}", self.frames)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Shortest path length between `start` and `end` over the grid's live wall
/// layout, computed with the `pathfinding` crate's A*. Search markings
/// (Open/Closed/Path) do not affect the result.
pub fn reference_optimal_length(grid: &Grid, start: Position, end: Position) -> Option<usize> {
    let result = astar(
        &start,
        |p| {
            grid.neighbors_of(*p)
                .into_iter()
                .map(|neighbor| (neighbor, 1u32))
                .collect::<Vec<_>>()
        },
        |p| manhattan(*p, end),
        |p| *p == end,
    );
    result.map(|(path, _)| path.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Adjacency;

    #[test]
    fn reference_length_matches_manhattan_on_open_grid() {
        let mut grid = Grid::new(5, Adjacency::Orthogonal);
        grid.recompute_all_neighbors();
        let length = reference_optimal_length(&grid, Position::new(0, 0), Position::new(4, 4));
        assert_eq!(length, Some(8));
    }

    #[test]
    fn reference_reports_unreachable_targets() {
        let mut grid = Grid::new(3, Adjacency::Orthogonal);
        grid.toggle_wall(Position::new(1, 2));
        grid.toggle_wall(Position::new(2, 1));
        grid.recompute_all_neighbors();
        let length = reference_optimal_length(&grid, Position::new(0, 0), Position::new(2, 2));
        assert_eq!(length, None);
    }
}
