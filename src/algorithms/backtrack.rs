use rustc_hash::FxHashMap;

use crate::algorithms::common::SearchControl;
use crate::grid::{CellState, Grid, Position};

/// Rebuilds the path from the predecessor map once the goal is reached.
///
/// Walks predecessors from `end` backward to (but not including) the start
/// cell, marking each interior cell `Path` and invoking the render callback
/// after every individual cell update so the final path animates in. The
/// start and end state tags are never touched here.
///
/// Returns the full path ordered start to end, or `None` if the callback
/// cancelled mid-animation.
pub fn backtrack<F>(
    grid: &mut Grid,
    came_from: &FxHashMap<Position, Position>,
    end: Position,
    on_step: &mut F,
) -> Option<Vec<Position>>
where
    F: FnMut(&Grid) -> SearchControl,
{
    let mut path = vec![end];
    let mut current = end;

    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
        // The start cell is the only one without a predecessor entry.
        if came_from.contains_key(&current) {
            grid.cell_mut(current).set_state(CellState::Path);
            if on_step(grid) == SearchControl::Cancel {
                return None;
            }
        }
    }

    path.reverse();
    Some(path)
}
