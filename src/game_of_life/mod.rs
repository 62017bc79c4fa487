//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod rules;

pub use grid::Grid;
pub use io::{load_grid, read_grid, save_grid, GridRecord};
pub use rules::GameOfLifeRules;
