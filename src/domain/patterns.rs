use super::{Cell, Grid, State};
use crate::config::MAX_HEAT;

/// A named shape that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at (x, y).
    /// Placed cells are alive at full heat; parts falling off the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let born = Cell::new(State::Alive, MAX_HEAT as i32);
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, born);
        }
    }

    /// Stamp the pattern centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (w, h) = grid.dimensions();
        let x = w.saturating_sub(self.width) / 2;
        let y = h.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y);
    }
}

/// Small library of classic shapes
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }
}
