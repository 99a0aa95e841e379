use log::{debug, info};

use super::Config;
use crate::domain::Grid;

/// GameState coordinates the simulation: it owns the grid, the run flag and
/// the update pacing. The camera is deliberately not in here; grid and camera
/// are independent peers owned by the main loop.
pub struct GameState {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl GameState {
    /// Create a paused state with an all-dead grid
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
        }
    }

    /// Toggle play/pause
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!(
            "simulation {}",
            if self.is_running { "running" } else { "paused" }
        );
        self
    }

    /// Wipe the grid and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        info!("grid cleared");
        self
    }

    /// Random soup seed; pauses so the result can be inspected first
    pub fn randomize(mut self) -> Self {
        self.grid.randomize();
        self.generation = 0;
        self.is_running = false;
        info!("grid randomized, population {}", self.grid.population());
        self
    }

    /// Adjust simulation speed in generations per second
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Per-frame update: runs at most one generation, and only once the
    /// update interval has elapsed while the simulation is running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid.advance_generation();
            self.generation += 1;
            self.update_timer = 0.0;
            debug!("generation {}", self.generation);
        }

        self
    }
}
