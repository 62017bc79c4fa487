//! Simulation controller: owns the grid and decides when generations advance

use crate::error::SimulationError;
use crate::game_of_life::{load_grid, save_grid, GameOfLifeRules, Grid};
use std::path::Path;
use std::time::{Duration, Instant};

/// Whether generations auto-advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Owns the current grid and reacts to user intents.
///
/// The host loop calls [`SimulationController::maybe_advance`] once per
/// frame and draws whatever [`SimulationController::snapshot`] returns.
#[derive(Debug, Clone)]
pub struct SimulationController {
    grid: Grid,
    rules: GameOfLifeRules,
    state: RunState,
    tick_interval: Duration,
    last_tick_time: Instant,
    generation: u64,
}

impl SimulationController {
    pub fn new(grid: Grid, rules: GameOfLifeRules, tick_interval: Duration) -> Self {
        Self {
            grid,
            rules,
            state: RunState::Paused,
            tick_interval,
            last_tick_time: Instant::now(),
            generation: 0,
        }
    }

    /// Read-only view of the latest committed grid
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn rules(&self) -> GameOfLifeRules {
        self.rules
    }

    /// Generations applied since startup or the last successful load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flip a cell. Only allowed while paused.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool, SimulationError> {
        if self.is_running() {
            return Err(SimulationError::NotPaused);
        }
        Ok(self.grid.toggle(x, y)?)
    }

    /// Switch between paused and running, returning the new state.
    ///
    /// Entering `Running` restarts the tick timer at `now`.
    pub fn toggle_run(&mut self, now: Instant) -> RunState {
        self.state = match self.state {
            RunState::Paused => {
                self.last_tick_time = now;
                RunState::Running
            }
            RunState::Running => RunState::Paused,
        };
        self.state
    }

    /// Apply one generation if running and the tick interval has elapsed.
    ///
    /// Returns whether a generation was applied.
    pub fn maybe_advance(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        if now.saturating_duration_since(self.last_tick_time) < self.tick_interval {
            return false;
        }

        self.grid = self.rules.advance(&self.grid);
        self.last_tick_time = now;
        self.generation += 1;
        true
    }

    /// Persist the current grid to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulationError> {
        save_grid(path, &self.grid)?;
        Ok(())
    }

    /// Replace the current grid with the one stored at `path`.
    ///
    /// The file must match the current dimensions. On error nothing changes.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SimulationError> {
        let (width, height) = self.grid.dimensions();
        let loaded = load_grid(path, width, height)?;
        self.grid = loaded;
        self.generation = 0;
        Ok(())
    }
}
