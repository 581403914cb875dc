use std::thread;
use std::time::Duration;

use crate::algorithms::common::SearchControl;
use crate::grid::{CellState, Grid, Position};

/// Terminal presentation collaborator. Each frame clears the screen, redraws
/// every cell from its current state tag and sleeps for the configured
/// delay. With visualization disabled it only counts frames, which keeps
/// headless runs and tests fast.
pub struct TerminalRenderer {
    delay: Duration,
    enabled: bool,
    frames: usize,
}

impl TerminalRenderer {
    pub fn new(delay_ms: u64, enabled: bool) -> Self {
        TerminalRenderer {
            delay: Duration::from_millis(delay_ms),
            enabled,
            frames: 0,
        }
    }

    /// Number of times the engine called back so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Step callback for the search engine.
    pub fn frame(&mut self, grid: &Grid) -> SearchControl {
        self.frames += 1;
        if self.enabled {
            clear_screen();
            println!("=== SHORTEST PATH SEARCH === frame {}", self.frames);
            self.draw(grid);
            thread::sleep(self.delay);
        }
        SearchControl::Continue
    }

    /// Draws the grid without clearing, sleeping or counting; used for the
    /// final still frame after the search returns.
    pub fn draw(&self, grid: &Grid) {
        println!("Legend: S=Start, E=End, #=Wall, o=Open, x=Closed, *=Path, .=Empty");

        print!("   ");
        for col in 0..grid.size() {
            print!("{:2}", col % 10);
        }
        println!();

        for row in 0..grid.size() {
            print!("{:2} ", row);
            for col in 0..grid.size() {
                let glyph = glyph(grid.state_at(Position { row, col }));
                print!("{} ", glyph);
            }
            println!();
        }
        println!();
    }
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Open => 'o',
        CellState::Closed => 'x',
        CellState::Wall => '#',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Path => '*',
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
