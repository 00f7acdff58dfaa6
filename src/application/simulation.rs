use rand::{SeedableRng, rngs::StdRng};

use crate::config::TICK_INTERVAL;
use crate::domain::{Grid, Pattern};
use crate::rendering::{self, DisplayList};

/// Simulation owns the current grid and everything the driver loop needs
/// to advance it. Each generation replaces `grid` with a fresh snapshot.
pub struct Simulation {
    pub grid: Grid,
    /// Draw calls issued during the last generation
    pub frame: DisplayList,
    pub is_running: bool,
    /// Whether the status line is drawn over the grid
    pub show_status: bool,
    pub generation: u64,
    pub update_timer: f32,
    rng: StdRng,
}

impl Simulation {
    /// Create a running simulation with a seeded random grid
    pub fn new(cols: usize, rows: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(cols, rows, &mut rng);
        let mut frame = DisplayList::new();
        rendering::fill_background(&mut frame);

        Self {
            grid,
            frame,
            is_running: true,
            show_status: false,
            generation: 0,
            update_timer: 0.0,
            rng,
        }
    }

    /// Advance one generation. Every cell is drawn in its pre-transition
    /// state while the next grid is computed.
    pub fn step(mut self) -> Self {
        let mut frame = std::mem::take(&mut self.frame);
        frame.clear();
        self.grid = self
            .grid
            .next_generation(|x, y, cell| rendering::draw_cell(&mut frame, x, y, cell));
        self.frame = frame;
        self.generation += 1;

        log::debug!("generation {} population {}", self.generation, self.population());
        self
    }

    /// Accumulate frame time and step once the tick interval has elapsed.
    /// At most one generation runs per call; leftover time is dropped.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= TICK_INTERVAL {
            self = self.step();
            self.update_timer = 0.0;
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        log::info!("{}", if self.is_running { "resumed" } else { "paused" });
        self
    }

    /// Show or hide the status line
    pub fn toggle_status(mut self) -> Self {
        self.show_status = !self.show_status;
        self
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(mut self) -> Self {
        let (cols, rows) = self.grid.dimensions();
        self.grid = Grid::new(cols, rows);
        self.reset_frame();
        log::info!("cleared {cols}x{rows} grid");
        self
    }

    /// Fill the grid with fresh random cells from the simulation's RNG
    pub fn reseed(mut self) -> Self {
        let (cols, rows) = self.grid.dimensions();
        self.grid = Grid::generate(cols, rows, &mut self.rng);
        self.reset_frame();
        log::info!("reseeded, population {}", self.population());
        self
    }

    /// Stamp a pattern at the centre of the grid
    pub fn drop_pattern(mut self, pattern: &Pattern) -> Self {
        pattern.place_centered(&mut self.grid);
        self.repaint();
        log::info!("placed {}", pattern.name);
        self
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    fn reset_frame(&mut self) {
        self.generation = 0;
        self.update_timer = 0.0;
        self.repaint();
    }

    /// Redraw the current grid as is, without stepping it
    fn repaint(&mut self) {
        self.frame.clear();
        rendering::fill_background(&mut self.frame);
        for (x, y, cell) in self.grid.iter_cells() {
            rendering::draw_cell(&mut self.frame, x, y, cell);
        }
    }
}
