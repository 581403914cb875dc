use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::grid::{Adjacency, Grid, Position};

/// A node of an abstract road graph, identified by an external id and
/// positioned in arbitrary projected coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadNode {
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

/// A pre-projected road graph, typically exported from a real-world road
/// network. Coordinate loading and geographic projection happen upstream;
/// this type only consumes the resulting node/edge lists.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<RoadNode>,
    pub edges: Vec<(i64, i64)>,
}

impl RoadNetwork {
    pub fn load(path: &str) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read road network file '{}': {}", path, e))?;
        let network: RoadNetwork = serde_json::from_str(&raw)
            .map_err(|e| format!("invalid road network in '{}': {}", path, e))?;
        info!(
            "loaded road network: {} nodes, {} edges",
            network.nodes.len(),
            network.edges.len()
        );
        Ok(network)
    }

    /// Renders the network onto a fresh grid: every cell starts as a wall,
    /// node positions are normalized onto the grid and cleared, and each
    /// edge is carved as an L-shaped corridor of traversable cells (row run
    /// at the source column, then column run at the target row).
    ///
    /// Returns the grid together with the external-id-to-cell mapping.
    /// Edges referencing unknown node ids are skipped.
    pub fn rasterize(
        &self,
        size: usize,
        adjacency: Adjacency,
    ) -> Result<(Grid, FxHashMap<i64, Position>), String> {
        if self.nodes.is_empty() {
            return Err("road network has no nodes".to_string());
        }

        let min_x = self.nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
        let max_x = self.nodes.iter().map(|n| n.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
        let max_y = self.nodes.iter().map(|n| n.y).fold(f64::NEG_INFINITY, f64::max);

        if max_x <= min_x || max_y <= min_y {
            return Err("road network coordinates span a degenerate area".to_string());
        }
        debug!("coordinate bounds: x [{min_x}, {max_x}], y [{min_y}, {max_y}]");

        let mut grid = Grid::new(size, adjacency);
        for row in 0..size {
            for col in 0..size {
                grid.toggle_wall(Position { row, col });
            }
        }

        let to_grid = |x: f64, y: f64| -> Position {
            let col = ((x - min_x) / (max_x - min_x) * (size - 1) as f64) as usize;
            let row = ((y - min_y) / (max_y - min_y) * (size - 1) as f64) as usize;
            Position { row, col }
        };

        let mut positions: FxHashMap<i64, Position> = FxHashMap::default();
        for node in &self.nodes {
            let pos = to_grid(node.x, node.y);
            grid.clear_cell(pos);
            positions.insert(node.id, pos);
        }

        let mut skipped = 0usize;
        for (u, v) in &self.edges {
            match (positions.get(u), positions.get(v)) {
                (Some(&from), Some(&to)) => carve_corridor(&mut grid, from, to),
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("skipped {skipped} edges with unknown node ids");
        }

        grid.recompute_all_neighbors();
        Ok((grid, positions))
    }
}

/// Clears an L-shaped run of cells between two positions: first along the
/// rows at the source column, then along the columns at the target row.
fn carve_corridor(grid: &mut Grid, from: Position, to: Position) {
    let (r1, r2) = (from.row.min(to.row), from.row.max(to.row));
    for row in r1..=r2 {
        grid.clear_cell(Position { row, col: from.col });
    }
    let (c1, c2) = (from.col.min(to.col), from.col.max(to.col));
    for col in c1..=c2 {
        grid.clear_cell(Position { row: to.row, col });
    }
}
