use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Exclusive state tag of a cell. Exactly one holds at any time; the search
/// engine rewrites tags in place as the frontier advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Open,
    Closed,
    Wall,
    Start,
    End,
    Path,
}

/// Neighborhood rule used when neighbor lists are recomputed.
///
/// `Diagonal` extends the four orthogonal directions with the four diagonal
/// ones at the same unit step cost. Note that the Manhattan heuristic is
/// admissible only under `Orthogonal`; with `Diagonal` movement the search
/// stays heuristic-guided but loses its optimality guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    Orthogonal,
    Diagonal,
}

// Scan order: down, up, left, right, then diagonals. The order feeds the
// frontier insertion counter, so it is observable in tie-breaking.
const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub struct Cell {
    pos: Position,
    state: CellState,
    neighbors: Vec<Position>,
}

impl Cell {
    fn new(pos: Position) -> Self {
        Cell {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// Overwrites the state tag unconditionally.
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub fn is_wall(&self) -> bool {
        self.state == CellState::Wall
    }

    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    /// Cached adjacency, valid only after the owning grid's last
    /// `recompute_all_neighbors` call.
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }
}

/// A square matrix of cells. Owns all cell state; the search engine borrows
/// the grid and only mutates state tags.
///
/// At most one cell holds `Start` and at most one holds `End` at any time.
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
    start: Option<Position>,
    end: Option<Position>,
    adjacency: Adjacency,
    neighbors_stale: bool,
}

impl Grid {
    pub fn new(size: usize, adjacency: Adjacency) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Cell::new(Position { row, col })).collect())
            .collect();

        Grid {
            size,
            cells,
            start: None,
            end: None,
            adjacency,
            neighbors_stale: true,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row][pos.col]
    }

    pub fn state_at(&self, pos: Position) -> CellState {
        self.cells[pos.row][pos.col].state
    }

    /// True if a wall edit happened after the last neighbor recompute.
    /// Searching on a stale grid is a caller contract violation; the engine
    /// only checks this defensively in debug builds.
    pub fn neighbors_stale(&self) -> bool {
        self.neighbors_stale
    }

    /// Sets the cell to `Wall`. Requests against the current start or end
    /// cell are silently ignored.
    pub fn toggle_wall(&mut self, pos: Position) {
        let cell = &mut self.cells[pos.row][pos.col];
        if cell.is_start() || cell.is_end() {
            return;
        }
        cell.state = CellState::Wall;
        self.neighbors_stale = true;
    }

    /// Designates `pos` as the start cell, resetting any previous start to
    /// `Empty`. Silently ignored if `pos` currently holds the end role.
    pub fn designate_start(&mut self, pos: Position) {
        if self.end == Some(pos) {
            return;
        }
        if let Some(old) = self.start.take() {
            self.cells[old.row][old.col].state = CellState::Empty;
        }
        if self.cells[pos.row][pos.col].is_wall() {
            self.neighbors_stale = true;
        }
        self.cells[pos.row][pos.col].state = CellState::Start;
        self.start = Some(pos);
    }

    /// Designates `pos` as the end cell, resetting any previous end to
    /// `Empty`. Silently ignored if `pos` currently holds the start role.
    pub fn designate_end(&mut self, pos: Position) {
        if self.start == Some(pos) {
            return;
        }
        if let Some(old) = self.end.take() {
            self.cells[old.row][old.col].state = CellState::Empty;
        }
        if self.cells[pos.row][pos.col].is_wall() {
            self.neighbors_stale = true;
        }
        self.cells[pos.row][pos.col].state = CellState::End;
        self.end = Some(pos);
    }

    /// Resets the cell to `Empty`, dropping its start/end designation if it
    /// held one.
    pub fn clear_cell(&mut self, pos: Position) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        if self.cells[pos.row][pos.col].is_wall() {
            self.neighbors_stale = true;
        }
        self.cells[pos.row][pos.col].state = CellState::Empty;
    }

    /// Recreates every cell as `Empty` and clears both designations.
    pub fn reset(&mut self) {
        *self = Grid::new(self.size, self.adjacency);
    }

    /// Live adjacency scan for `pos` against the current wall layout,
    /// bypassing the per-cell cache.
    pub fn neighbors_of(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::new();
        self.scan_offsets(pos, &ORTHOGONAL_OFFSETS, &mut neighbors);
        if self.adjacency == Adjacency::Diagonal {
            self.scan_offsets(pos, &DIAGONAL_OFFSETS, &mut neighbors);
        }
        neighbors
    }

    fn scan_offsets(&self, pos: Position, offsets: &[(i32, i32)], out: &mut Vec<Position>) {
        let (row, col) = (pos.row as i32, pos.col as i32);
        for (dr, dc) in offsets {
            let nr = row + dr;
            let nc = col + dc;
            if nr >= 0 && nr < self.size as i32 && nc >= 0 && nc < self.size as i32 {
                let next = Position {
                    row: nr as usize,
                    col: nc as usize,
                };
                if !self.cells[next.row][next.col].is_wall() {
                    out.push(next);
                }
            }
        }
    }

    /// Rebuilds the cached neighbor list of a single cell.
    pub fn recompute_neighbors(&mut self, pos: Position) {
        let neighbors = self.neighbors_of(pos);
        self.cells[pos.row][pos.col].neighbors = neighbors;
    }

    /// Rebuilds every cell's cached neighbor list against the current wall
    /// layout. O(N²); expected once per wall-layout change, not per search
    /// step.
    pub fn recompute_all_neighbors(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                self.recompute_neighbors(Position { row, col });
            }
        }
        self.neighbors_stale = false;
    }

    /// Number of cells currently holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.state == state)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(4, Adjacency::Orthogonal);
        assert_eq!(grid.count(CellState::Empty), 16);
        assert_eq!(grid.start(), None);
        assert_eq!(grid.end(), None);
    }

    #[test]
    fn walling_over_endpoints_is_a_noop() {
        let mut grid = Grid::new(4, Adjacency::Orthogonal);
        grid.designate_start(Position::new(0, 0));
        grid.designate_end(Position::new(3, 3));

        grid.toggle_wall(Position::new(0, 0));
        grid.toggle_wall(Position::new(3, 3));

        assert_eq!(grid.state_at(Position::new(0, 0)), CellState::Start);
        assert_eq!(grid.state_at(Position::new(3, 3)), CellState::End);
    }

    #[test]
    fn redesignating_start_resets_the_old_cell() {
        let mut grid = Grid::new(4, Adjacency::Orthogonal);
        grid.designate_start(Position::new(0, 0));
        grid.designate_start(Position::new(1, 1));

        assert_eq!(grid.state_at(Position::new(0, 0)), CellState::Empty);
        assert_eq!(grid.state_at(Position::new(1, 1)), CellState::Start);
        assert_eq!(grid.start(), Some(Position::new(1, 1)));
    }

    #[test]
    fn designating_over_the_other_endpoint_is_a_noop() {
        let mut grid = Grid::new(4, Adjacency::Orthogonal);
        grid.designate_start(Position::new(0, 0));
        grid.designate_end(Position::new(0, 0));

        assert_eq!(grid.state_at(Position::new(0, 0)), CellState::Start);
        assert_eq!(grid.end(), None);
    }

    #[test]
    fn clear_cell_drops_designation() {
        let mut grid = Grid::new(4, Adjacency::Orthogonal);
        grid.designate_start(Position::new(2, 2));
        grid.clear_cell(Position::new(2, 2));

        assert_eq!(grid.start(), None);
        assert_eq!(grid.state_at(Position::new(2, 2)), CellState::Empty);
    }

    #[test]
    fn neighbors_exclude_walls_and_bounds() {
        let mut grid = Grid::new(3, Adjacency::Orthogonal);
        grid.toggle_wall(Position::new(0, 1));
        grid.recompute_all_neighbors();

        // Corner cell: two in-bounds neighbors, one of them walled off.
        assert_eq!(grid.cell(Position::new(0, 0)).neighbors(), &[Position::new(1, 0)]);
        // Center cell loses its walled neighbor.
        assert_eq!(grid.cell(Position::new(1, 1)).neighbors().len(), 3);
    }

    #[test]
    fn diagonal_adjacency_reaches_eight_neighbors() {
        let mut grid = Grid::new(3, Adjacency::Diagonal);
        grid.recompute_all_neighbors();
        assert_eq!(grid.cell(Position::new(1, 1)).neighbors().len(), 8);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut grid = Grid::new(5, Adjacency::Orthogonal);
        grid.toggle_wall(Position::new(2, 2));
        grid.toggle_wall(Position::new(3, 1));

        grid.recompute_all_neighbors();
        let first: Vec<Vec<Position>> = (0..5)
            .flat_map(|r| (0..5).map(move |c| Position::new(r, c)))
            .map(|p| grid.cell(p).neighbors().to_vec())
            .collect();

        grid.recompute_all_neighbors();
        let second: Vec<Vec<Position>> = (0..5)
            .flat_map(|r| (0..5).map(move |c| Position::new(r, c)))
            .map(|p| grid.cell(p).neighbors().to_vec())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn wall_edits_mark_neighbors_stale() {
        let mut grid = Grid::new(3, Adjacency::Orthogonal);
        grid.recompute_all_neighbors();
        assert!(!grid.neighbors_stale());

        grid.toggle_wall(Position::new(1, 1));
        assert!(grid.neighbors_stale());

        grid.recompute_all_neighbors();
        assert!(!grid.neighbors_stale());

        grid.clear_cell(Position::new(1, 1));
        assert!(grid.neighbors_stale());
    }

    #[test]
    fn reset_recreates_an_empty_grid() {
        let mut grid = Grid::new(3, Adjacency::Orthogonal);
        grid.designate_start(Position::new(0, 0));
        grid.toggle_wall(Position::new(1, 1));
        grid.reset();

        assert_eq!(grid.count(CellState::Empty), 9);
        assert_eq!(grid.start(), None);
    }
}
