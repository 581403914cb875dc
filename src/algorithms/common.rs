use crate::grid::Position;

/// Verdict returned by the step callback. `Cancel` makes the engine abandon
/// the search at its sole suspension point, leaving cell states as last
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchControl {
    Continue,
    Cancel,
}

/// Outcome of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A path was found; ordered start to end, both endpoints included.
    Found(Vec<Position>),
    /// The frontier emptied without reaching the end cell.
    Exhausted,
    /// The step callback cancelled the search.
    Interrupted,
}

impl SearchResult {
    /// Path length in steps, if a path was found.
    pub fn path_length(&self) -> Option<usize> {
        match self {
            SearchResult::Found(path) => Some(path.len().saturating_sub(1)),
            _ => None,
        }
    }
}

/// Manhattan distance on grid coordinates. Admissible and consistent for
/// orthogonal movement at unit step cost; an overestimate once diagonal
/// steps are allowed.
pub fn manhattan(a: Position, b: Position) -> u32 {
    ((a.row as i32 - b.row as i32).abs() + (a.col as i32 - b.col as i32).abs()) as u32
}
