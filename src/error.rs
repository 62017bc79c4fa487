//! Error types for the simulation core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by grid construction and cell access
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid alive probability {0}: must be within [0, 1]")]
    InvalidProbability(f64),

    #[error("cell ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised while saving or loading grid state
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("corrupt save file {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error(
        "incompatible grid dimensions: file has {found_width}x{found_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by the simulation controller
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("cells can only be edited while the simulation is paused")]
    NotPaused,
}
