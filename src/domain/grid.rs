use super::Cell;

/// Grid owns the 2D cellular automaton state as an explicit double buffer:
/// `cells` is the live generation, `previous` is the snapshot the rule reads
/// from while a new generation is being written.
///
/// Coordinates are `i32` because the camera's inverse transform can produce
/// indices outside the map. Out-of-bounds reads are Dead and out-of-bounds
/// writes are silent no-ops; the boundary is a hard wall, never a torus.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    previous: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// The snapshot starts all-dead too, so reads through
    /// `get_previous_tile` are defined before the first advance.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            previous: vec![Cell::Dead; width * height],
        }
    }

    /// Grid dimensions in tiles
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert in-bounds 2D coordinates to a row-major index
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Read a tile; Dead when out of bounds.
    pub fn get_tile(&self, x: i32, y: i32) -> Cell {
        self.index_of(x, y).map_or(Cell::Dead, |i| self.cells[i])
    }

    /// Read a tile from the previous-generation snapshot; Dead when out of
    /// bounds or before the first advance.
    pub fn get_previous_tile(&self, x: i32, y: i32) -> Cell {
        self.index_of(x, y).map_or(Cell::Dead, |i| self.previous[i])
    }

    /// Overwrite a tile; out-of-bounds coordinates are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Count live cells in the Moore neighbourhood of (x, y).
    /// Off-grid neighbours contribute nothing, so the result is in [0, 8].
    /// `from_previous` selects the snapshot, which is what the generation
    /// update reads so that in-progress writes never leak into the count.
    pub fn count_neighbours(&self, x: i32, y: i32, from_previous: bool) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                if from_previous {
                    self.get_previous_tile(x + dx, y + dy)
                } else {
                    self.get_tile(x + dx, y + dy)
                }
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance the automaton by one generation.
    ///
    /// The live array is first copied into the snapshot, then every cell is
    /// rewritten from `Cell::evolve` fed exclusively with snapshot reads.
    /// Updating in place without the snapshot would let cells processed early
    /// in the pass distort the neighbour counts of cells processed later.
    pub fn advance_generation(&mut self) {
        self.previous.copy_from_slice(&self.cells);

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let current = self.get_previous_tile(x, y);
                let neighbours = self.count_neighbours(x, y, true);
                self.cells[y as usize * self.width + x as usize] = current.evolve(neighbours);
            }
        }
    }

    /// Reset every cell (and the snapshot) to dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.previous.fill(Cell::Dead);
    }

    /// Randomize the live cells (30% chance of alive); the snapshot resets
    /// so the next advance starts from a clean generation boundary.
    pub fn randomize(&mut self) {
        use rand::Rng;

        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random::<f32>() < 0.3 {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self.previous.fill(Cell::Dead);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get_tile(x, y)))
    }

    /// Number of live cells, for the HUD
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_round_trip() {
        let mut grid = Grid::new(8, 8);
        grid.set_tile(3, 5, Cell::Alive);
        assert_eq!(grid.get_tile(3, 5), Cell::Alive);
        grid.set_tile(3, 5, Cell::Dead);
        assert_eq!(grid.get_tile(3, 5), Cell::Dead);
    }

    #[test]
    fn test_out_of_bounds_reads_dead() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.get_tile(-1, 0), Cell::Dead);
        assert_eq!(grid.get_tile(0, -1), Cell::Dead);
        assert_eq!(grid.get_tile(4, 0), Cell::Dead);
        assert_eq!(grid.get_tile(0, 4), Cell::Dead);
        assert_eq!(grid.get_previous_tile(-3, 99), Cell::Dead);
    }

    #[test]
    fn test_out_of_bounds_write_is_noop() {
        let mut grid = Grid::new(4, 4);
        grid.set_tile(-1, 2, Cell::Alive);
        grid.set_tile(4, 2, Cell::Alive);
        grid.set_tile(2, 17, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_previous_tile_defined_before_first_advance() {
        let mut grid = Grid::new(4, 4);
        grid.set_tile(1, 1, Cell::Alive);
        // Live edit is not visible through the snapshot until an advance.
        assert_eq!(grid.get_previous_tile(1, 1), Cell::Dead);
    }

    #[test]
    fn test_neighbour_count_center_of_full_block() {
        let mut grid = Grid::new(5, 5);
        for y in 1..=3 {
            for x in 1..=3 {
                grid.set_tile(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.count_neighbours(2, 2, false), 8);
    }

    #[test]
    fn test_neighbour_count_never_wraps_at_corner() {
        let mut grid = Grid::new(4, 4);
        grid.set_tile(0, 0, Cell::Alive);
        grid.set_tile(1, 0, Cell::Alive);
        grid.set_tile(0, 1, Cell::Alive);
        grid.set_tile(1, 1, Cell::Alive);
        // Corner cell has only 3 real neighbours; the far edge must not
        // contribute as it would on a torus.
        assert_eq!(grid.count_neighbours(0, 0, false), 3);
        grid.set_tile(3, 3, Cell::Alive);
        assert_eq!(grid.count_neighbours(0, 0, false), 3);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut grid = Grid::new(6, 6);
        let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
        for &(x, y) in &block {
            grid.set_tile(x, y, Cell::Alive);
        }
        grid.advance_generation();
        for &(x, y) in &block {
            assert_eq!(grid.get_tile(x, y), Cell::Alive);
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(7, 7);
        for x in 2..=4 {
            grid.set_tile(x, 3, Cell::Alive);
        }

        grid.advance_generation();
        for y in 2..=4 {
            assert_eq!(grid.get_tile(3, y), Cell::Alive);
        }
        assert_eq!(grid.get_tile(2, 3), Cell::Dead);
        assert_eq!(grid.get_tile(4, 3), Cell::Dead);

        grid.advance_generation();
        for x in 2..=4 {
            assert_eq!(grid.get_tile(x, 3), Cell::Alive);
        }
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_advance_reads_only_the_snapshot() {
        // An R-shaped seed where naive in-place updating diverges from the
        // double-buffered result within one generation.
        let mut grid = Grid::new(6, 6);
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2), (3, 3)] {
            grid.set_tile(x, y, Cell::Alive);
        }
        grid.advance_generation();

        // (2, 2) had 4 live neighbours in the seed and must die even though
        // an in-place pass could have killed some of them first.
        assert_eq!(grid.get_tile(2, 2), Cell::Dead);
        // The snapshot now holds the seed generation.
        assert_eq!(grid.get_previous_tile(3, 3), Cell::Alive);
    }

    #[test]
    fn test_boundary_is_a_dead_wall() {
        // A blinker pressed against the top edge: its vertical phase loses
        // the off-grid cell, so the pattern collapses instead of wrapping.
        let mut grid = Grid::new(5, 5);
        for x in 1..=3 {
            grid.set_tile(x, 0, Cell::Alive);
        }
        grid.advance_generation();
        assert_eq!(grid.get_tile(2, 0), Cell::Alive);
        assert_eq!(grid.get_tile(2, 1), Cell::Alive);
        // Nothing appeared on the opposite edge.
        assert_eq!(grid.get_tile(2, 4), Cell::Dead);
    }

    #[test]
    fn test_clear_resets_both_buffers() {
        let mut grid = Grid::new(4, 4);
        grid.set_tile(1, 1, Cell::Alive);
        grid.advance_generation();
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get_previous_tile(1, 1), Cell::Dead);
    }
}
