//! Game of Life rules implementation (B3/S23)

use super::Grid;
use crate::config::BoundaryCondition;

/// Game of Life rules engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOfLifeRules {
    boundary: BoundaryCondition,
}

impl GameOfLifeRules {
    pub fn new(boundary: BoundaryCondition) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Compute the next generation.
    ///
    /// Neighbor counts are read from `current` only and written into a fresh
    /// grid, so the input is never observed half-updated.
    pub fn advance(&self, current: &Grid) -> Grid {
        current.map_cells(|x, y, alive| {
            Self::should_be_alive(alive, current.count_neighbors(x, y, self.boundary))
        })
    }

    /// Advance the grid for multiple generations
    pub fn advance_generations(&self, mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = self.advance(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}
