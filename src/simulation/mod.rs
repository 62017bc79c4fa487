//! Simulation state machine driven by the host frame loop

pub mod controller;

pub use controller::{RunState, SimulationController};
