use rand::Rng;

use super::{Cell, rules};

/// Offsets of the eight surrounding positions
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid is an immutable-per-generation snapshot of cells.
/// Each generation produces a fresh grid; the previous one is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead and cold
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        }
    }

    /// Create a grid of independently random cells with zero heat
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height).map(|_| Cell::random(rng)).collect();
        Self { width, height, cells }
    }

    /// Build a grid from row-major cells
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), width * height, "cell count does not match {width}x{height}");
        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors. Edges are hard walls: positions off the
    /// grid are skipped, there is no wraparound.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .map(|cell| cell.state.weight())
            .sum()
    }

    /// Produce the next generation. `visit` sees every current cell with its
    /// coordinates right before that cell's successor is computed.
    pub fn next_generation<F>(&self, mut visit: F) -> Self
    where
        F: FnMut(usize, usize, Cell),
    {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                visit(x, y, current);
                let neighbors = self.count_live_neighbors(x, y);
                rules::evolve(current, neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Next generation without observing the cells
    pub fn evolve(&self) -> Self {
        self.next_generation(|_, _, _| {})
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLS, MAX_HEAT, ROWS};
    use crate::domain::State;
    use rand::{SeedableRng, rngs::StdRng};

    fn live() -> Cell {
        Cell::new(State::Alive, MAX_HEAT as i32)
    }

    fn full(width: usize, height: usize) -> Grid {
        Grid::from_cells(width, height, vec![live(); width * height])
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = Grid::generate(20, 10, &mut StdRng::seed_from_u64(9));
        let b = Grid::generate(20, 10, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (20, 10));
        assert!(a.iter_cells().all(|(_, _, c)| c.heat() == 0));
    }

    #[test]
    fn test_corner_sees_three_neighbors() {
        let grid = full(COLS, ROWS);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(COLS - 1, ROWS - 1), 3);
        assert_eq!(grid.count_live_neighbors(COLS - 1, 0), 3);
    }

    #[test]
    fn test_edge_and_interior_counts() {
        let grid = full(COLS, ROWS);
        assert_eq!(grid.count_live_neighbors(5, 0), 5);
        assert_eq!(grid.count_live_neighbors(0, 5), 5);
        assert_eq!(grid.count_live_neighbors(40, 40), 8);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, live());
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        assert_eq!(grid.count_live_neighbors(3, 3), 1);
    }

    #[test]
    fn test_self_is_not_counted() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, live());
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.get(3, 0), None);
        grid.set(10, 10, live());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_empty_grid_is_fixed_point() {
        for (w, h) in [(1, 1), (3, 3), (7, 4), (80, 80)] {
            let grid = Grid::new(w, h);
            assert_eq!(grid.evolve(), grid);
        }
    }

    #[test]
    fn test_birth_in_interior() {
        // Three live cells around the dead centre of a 3x3 grid
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, live());
        grid.set(1, 0, live());
        grid.set(2, 0, live());

        let next = grid.evolve();
        assert_eq!(next.get(1, 1), Some(live()));
        // Row ends had one neighbor each and die, cooling by one
        assert_eq!(next.get(0, 0), Some(Cell::new(State::Dead, MAX_HEAT as i32 - 1)));
        assert_eq!(next.get(2, 0), Some(Cell::new(State::Dead, MAX_HEAT as i32 - 1)));
        // Middle had two neighbors and survives, cooling by one
        assert_eq!(next.get(1, 0), Some(Cell::new(State::Alive, MAX_HEAT as i32 - 1)));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid.set(x, 2, live());
        }

        let next = grid.evolve();
        let alive: Vec<_> = next
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);

        let back = next.evolve();
        let alive: Vec<_> = back
            .iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_next_generation_visits_every_old_cell_once() {
        let grid = Grid::generate(6, 4, &mut StdRng::seed_from_u64(1));
        let mut seen = Vec::new();
        let next = grid.next_generation(|x, y, cell| seen.push((x, y, cell)));

        let expected: Vec<_> = grid.iter_cells().collect();
        assert_eq!(seen, expected);
        assert_ne!(next, grid);
    }

    #[test]
    fn test_input_grid_untouched() {
        let grid = Grid::generate(10, 10, &mut StdRng::seed_from_u64(2));
        let copy = grid.clone();
        let _ = grid.evolve();
        assert_eq!(grid, copy);
    }

    #[test]
    fn test_dimensions_stable_over_many_steps() {
        let mut grid = Grid::generate(COLS, ROWS, &mut StdRng::seed_from_u64(5));
        for _ in 0..100 {
            grid = grid.evolve();
            assert_eq!(grid.dimensions(), (COLS, ROWS));
        }
    }

    #[test]
    fn test_heat_stays_in_range() {
        let mut grid = Grid::generate(30, 30, &mut StdRng::seed_from_u64(11));
        for _ in 0..60 {
            grid = grid.evolve();
            assert!(grid.iter_cells().all(|(_, _, c)| c.heat() <= MAX_HEAT));
        }
    }

    #[test]
    #[should_panic]
    fn test_from_cells_rejects_wrong_length() {
        let _ = Grid::from_cells(3, 3, vec![Cell::DEAD; 4]);
    }
}
