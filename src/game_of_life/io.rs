//! Saving and restoring grid state
//!
//! A save file is a single JSON record holding the grid dimensions next to
//! the cell array, so a load can reject a file for the wrong board size
//! without guessing from the shape of the data.

use super::Grid;
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Current on-disk record version
pub const FORMAT_VERSION: u32 = 1;

/// On-disk representation of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRecord {
    pub version: u32,
    pub width_cells: usize,
    pub height_cells: usize,
    /// Indexed `cells[x][y]`, each value 0 (dead) or 1 (alive)
    pub cells: Vec<Vec<u8>>,
}

impl GridRecord {
    pub fn from_grid(grid: &Grid) -> Self {
        let cells = grid
            .to_columns()
            .into_iter()
            .map(|column| column.into_iter().map(u8::from).collect())
            .collect();
        Self {
            version: FORMAT_VERSION,
            width_cells: grid.width(),
            height_cells: grid.height(),
            cells,
        }
    }

    /// Validate the record and turn it into a grid.
    ///
    /// Returns a human readable reason on failure; callers attach the path.
    fn into_grid(self) -> Result<Grid, String> {
        if self.version != FORMAT_VERSION {
            return Err(format!("unsupported format version {}", self.version));
        }
        if self.cells.len() != self.width_cells {
            return Err(format!(
                "declared width {} but found {} columns",
                self.width_cells,
                self.cells.len()
            ));
        }

        let mut columns = Vec::with_capacity(self.width_cells);
        for (x, column) in self.cells.into_iter().enumerate() {
            if column.len() != self.height_cells {
                return Err(format!(
                    "declared height {} but column {} has {} cells",
                    self.height_cells,
                    x,
                    column.len()
                ));
            }
            let column = column
                .into_iter()
                .enumerate()
                .map(|(y, value)| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(format!("cell ({}, {}) has invalid value {}", x, y, other)),
                })
                .collect::<Result<Vec<bool>, String>>()?;
            columns.push(column);
        }

        Grid::from_columns(&columns).map_err(|e| e.to_string())
    }
}

/// Save a grid to `path`, replacing any existing file
pub fn save_grid<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(&GridRecord::from_grid(grid))
        .map_err(|e| io_err(std::io::Error::new(ErrorKind::InvalidData, e)))?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    // Write beside the target and rename so a failed write leaves the old file intact
    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, content) {
        let _ = std::fs::remove_file(&staging);
        return Err(io_err(e));
    }
    std::fs::rename(&staging, path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        io_err(e)
    })
}

/// Load a grid from `path`, requiring it to be `expected_width x expected_height`
pub fn load_grid<P: AsRef<Path>>(
    path: P,
    expected_width: usize,
    expected_height: usize,
) -> Result<Grid, PersistenceError> {
    let path = path.as_ref();
    let record = read_record(path)?;

    // Dimensions are compared before the cell payload is examined
    if (record.width_cells, record.height_cells) != (expected_width, expected_height) {
        return Err(PersistenceError::DimensionMismatch {
            expected_width,
            expected_height,
            found_width: record.width_cells,
            found_height: record.height_cells,
        });
    }

    record.into_grid().map_err(|reason| corrupt(path, reason))
}

/// Load a grid of whatever size the file declares
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, PersistenceError> {
    let path = path.as_ref();
    read_record(path)?
        .into_grid()
        .map_err(|reason| corrupt(path, reason))
}

fn read_record(path: &Path) -> Result<GridRecord, PersistenceError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PersistenceError::FileNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => corrupt(path, "file is not valid UTF-8".to_string()),
        _ => PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&content).map_err(|e| corrupt(path, e.to_string()))
}

fn corrupt(path: &Path, reason: String) -> PersistenceError {
    PersistenceError::CorruptData {
        path: path.to_path_buf(),
        reason,
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
