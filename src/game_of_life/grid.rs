//! Grid representation and utilities for Game of Life

use crate::config::BoundaryCondition;
use crate::error::GridError;
use itertools::iproduct;
use rand::Rng;

/// Offsets of the eight Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size rectangle of cells addressed as `(x, y)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new_dead(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Create a grid where each cell is alive with probability `p_alive`
    pub fn random(width: usize, height: usize, p_alive: f64) -> Result<Self, GridError> {
        Self::random_with(width, height, p_alive, &mut rand::thread_rng())
    }

    /// Same as [`Grid::random`] but drawing from the given random source
    pub fn random_with<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        p_alive: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new_dead(width, height)?;
        if !(0.0..=1.0).contains(&p_alive) {
            return Err(GridError::InvalidProbability(p_alive));
        }
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(p_alive);
        }
        Ok(grid)
    }

    /// Build a grid from column-major data, `columns[x][y]`
    pub fn from_columns(columns: &[Vec<bool>]) -> Result<Self, GridError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let mut grid = Self::new_dead(width, height)?;

        for (x, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(GridError::InvalidDimensions {
                    width,
                    height: column.len(),
                });
            }
            for (y, &alive) in column.iter().enumerate() {
                let idx = grid.index(x, y);
                grid.cells[idx] = alive;
            }
        }
        Ok(grid)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x, y))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width_cells, height_cells)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get cell value at coordinates
    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a cell, returning its new value
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Unchecked read for coordinates already known to be in range
    #[inline]
    pub(crate) fn alive_at(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Count living neighbors of `(x, y)` under the given boundary policy.
    ///
    /// Every offset is resolved on its own, so a small grid may see the same
    /// cell through several offsets when wrapping.
    pub fn count_neighbors(&self, x: usize, y: usize, boundary: BoundaryCondition) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_neighbor_alive(x as isize + dx, y as isize + dy, boundary))
            .count() as u8
    }

    fn is_neighbor_alive(&self, x: isize, y: isize, boundary: BoundaryCondition) -> bool {
        let (w, h) = (self.width as isize, self.height as isize);
        match boundary {
            BoundaryCondition::Dead => {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    self.alive_at(x as usize, y as usize)
                } else {
                    false
                }
            }
            BoundaryCondition::Wrap => {
                self.alive_at(x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)
            }
        }
    }

    /// Build a same-sized grid whose cells are computed from this one
    pub(crate) fn map_cells<F>(&self, f: F) -> Grid
    where
        F: Fn(usize, usize, bool) -> bool,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter_cells().map(|(x, y, alive)| f(x, y, alive)).collect(),
        }
    }

    /// Iterate over `(x, y, alive)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        iproduct!(0..self.height, 0..self.width).map(move |(y, x)| (x, y, self.alive_at(x, y)))
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter_map(|(x, y, alive)| alive.then_some((x, y)))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Column-major copy of the cells, `columns[x][y]`
    pub fn to_columns(&self) -> Vec<Vec<bool>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.alive_at(x, y)).collect())
            .collect()
    }
}
