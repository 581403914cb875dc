use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::backtrack::backtrack;
use crate::algorithms::common::{SearchControl, SearchResult};
use crate::grid::{CellState, Grid, Position};

/// Frontier entry ordered by `(f_score, insertion_order)` ascending. The
/// insertion order is a strictly increasing counter that breaks f-score ties
/// deterministically in favor of earlier-inserted entries.
#[derive(Clone, Copy, PartialEq)]
struct FrontierEntry {
    f: u32,
    order: u64,
    pos: Position,
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap.
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.order.cmp(&self.order),
            ord => ord,
        }
    }
}

/// Incremental A* over the grid's cached neighbor lists.
///
/// The engine mutates cell state tags as it proceeds (`Open` on discovery,
/// `Closed` after expansion) and invokes `on_step` once per expansion so a
/// presentation layer can redraw between steps. The callback is the sole
/// suspension point: returning [`SearchControl::Cancel`] abandons the search
/// with cell states exactly as last rendered.
///
/// Preconditions (caller obligations, not checked in release builds): both
/// endpoints are designated on the grid, and neighbor lists have been
/// recomputed since the last wall edit.
///
/// The frontier has no decrease-key: when a cell's g-score improves while it
/// is already enqueued, the stale entry stays in the heap and is simply
/// re-processed when popped. Its relaxations fail the `tentative < g` test,
/// so this costs work but never correctness.
pub fn search<H, F>(
    grid: &mut Grid,
    start: Position,
    end: Position,
    heuristic: H,
    mut on_step: F,
) -> SearchResult
where
    H: Fn(Position, Position) -> u32,
    F: FnMut(&Grid) -> SearchControl,
{
    debug_assert!(
        !grid.neighbors_stale(),
        "search invoked with stale neighbor caches"
    );

    let mut g_score: FxHashMap<Position, u32> = FxHashMap::default();
    let mut f_score: FxHashMap<Position, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut in_frontier: FxHashSet<Position> = FxHashSet::default();
    let mut insertion_order: u64 = 0;

    g_score.insert(start, 0);
    f_score.insert(start, heuristic(start, end));
    frontier.push(FrontierEntry {
        f: f_score[&start],
        order: insertion_order,
        pos: start,
    });
    in_frontier.insert(start);

    let mut expansions = 0usize;

    while let Some(entry) = frontier.pop() {
        let current = entry.pos;
        in_frontier.remove(&current);

        if current == end {
            debug!("goal reached after {expansions} expansions");
            return match backtrack(grid, &came_from, end, &mut on_step) {
                Some(path) => {
                    // Discovery may have painted the end cell Open.
                    grid.cell_mut(end).set_state(CellState::End);
                    SearchResult::Found(path)
                }
                None => SearchResult::Interrupted,
            };
        }

        let current_g = g_score.get(&current).copied().unwrap_or(u32::MAX);
        let neighbors = grid.cell(current).neighbors().to_vec();

        for neighbor in neighbors {
            // Uniform step cost, diagonal or not.
            let tentative_g = current_g.saturating_add(1);

            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                let f = tentative_g.saturating_add(heuristic(neighbor, end));
                f_score.insert(neighbor, f);

                if !in_frontier.contains(&neighbor) {
                    insertion_order += 1;
                    frontier.push(FrontierEntry {
                        f,
                        order: insertion_order,
                        pos: neighbor,
                    });
                    in_frontier.insert(neighbor);
                    grid.cell_mut(neighbor).set_state(CellState::Open);
                }
            }
        }

        expansions += 1;
        if on_step(grid) == SearchControl::Cancel {
            debug!("search cancelled after {expansions} expansions");
            return SearchResult::Interrupted;
        }

        if current != start {
            grid.cell_mut(current).set_state(CellState::Closed);
        }
    }

    debug!("frontier exhausted after {expansions} expansions, no path");
    SearchResult::Exhausted
}
