use super::{Cell, Grid};

/// A reusable arrangement of live cells that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub width: i32,
    pub height: i32,
    /// Relative coordinates of alive cells
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at (x, y). Cells that land
    /// outside the grid are dropped by the grid's bounds policy.
    pub fn place_on(&self, grid: &mut Grid, x: i32, y: i32) {
        for &(dx, dy) in &self.cells {
            grid.set_tile(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic seed patterns
pub mod presets {
    use super::*;

    /// 2x2 block, the smallest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Period-2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Smallest spaceship, travels diagonally with period 4
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), glider()]
    }
}
