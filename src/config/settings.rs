//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width_cells: usize,
    pub height_cells: usize,
    pub p_alive: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub boundary_condition: BoundaryCondition,
}

/// How neighbor lookups treat coordinates that fall off the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Opposite edges are adjacent (torus)
    #[default]
    Wrap,
    /// Off-grid neighbors are always dead
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub save_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub frame_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width_cells: 40,
                height_cells: 30,
                p_alive: 0.2,
            },
            simulation: SimulationConfig {
                tick_interval_ms: 1000,
                boundary_condition: BoundaryCondition::Wrap,
            },
            storage: StorageConfig {
                save_path: PathBuf::from("game_state.json"),
            },
            ui: UiConfig { frame_delay_ms: 100 },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some(PathBuf::from("game_of_life.log")),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width_cells == 0 || self.grid.height_cells == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width_cells,
                self.grid.height_cells
            );
        }

        if !(0.0..=1.0).contains(&self.grid.p_alive) {
            anyhow::bail!("p_alive must be within [0, 1], got {}", self.grid.p_alive);
        }

        if self.simulation.tick_interval_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        if self.ui.frame_delay_ms == 0 {
            anyhow::bail!("Frame delay must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width_cells {
            self.grid.width_cells = width;
        }
        if let Some(height) = cli_overrides.height_cells {
            self.grid.height_cells = height;
        }
        if let Some(p_alive) = cli_overrides.p_alive {
            self.grid.p_alive = p_alive;
        }
        if let Some(tick) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = tick;
        }
        if let Some(boundary) = cli_overrides.boundary_condition {
            self.simulation.boundary_condition = boundary;
        }
        if let Some(ref save_path) = cli_overrides.save_path {
            self.storage.save_path = save_path.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width_cells: Option<usize>,
    pub height_cells: Option<usize>,
    pub p_alive: Option<f64>,
    pub tick_interval_ms: Option<u64>,
    pub boundary_condition: Option<BoundaryCondition>,
    pub save_path: Option<PathBuf>,
}
