//! Conway's Game of Life
//!
//! This library provides the simulation engine (grid, B3/S23 rules and
//! save files), a controller that drives it from a host frame loop, and an
//! interactive terminal front end.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod logging;
pub mod simulation;
pub mod ui;
pub mod utils;

pub use config::{BoundaryCondition, Settings};
pub use error::{GridError, PersistenceError, SimulationError};
pub use game_of_life::{GameOfLifeRules, Grid};
pub use simulation::{RunState, SimulationController};
