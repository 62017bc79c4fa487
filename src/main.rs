//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{BoundaryCondition, CliOverrides, Settings},
    game_of_life::{read_grid, save_grid, GameOfLifeRules},
    logging, ui,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Interactive Conway's Game of Life")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in cells (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in cells (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Probability that a cell starts alive (overrides config)
        #[arg(long)]
        p_alive: Option<f64>,

        /// Milliseconds between generations (overrides config)
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Save file used by the save and load buttons (overrides config)
        #[arg(short, long)]
        save_path: Option<PathBuf>,

        /// Edge behavior for neighbor counting (overrides config)
        #[arg(short, long, value_enum)]
        boundary: Option<BoundaryCondition>,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a saved game state
    Show {
        /// Saved state file
        #[arg(short, long, default_value = "game_state.json")]
        file: PathBuf,

        /// Include row and column numbers
        #[arg(long)]
        coords: bool,
    },

    /// Advance a saved game state without the interactive UI
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Saved state file
        #[arg(short, long, default_value = "game_state.json")]
        file: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Edge behavior for neighbor counting (overrides config)
        #[arg(short, long, value_enum)]
        boundary: Option<BoundaryCondition>,

        /// Write the result back to the state file
        #[arg(short, long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            p_alive,
            tick_ms,
            save_path,
            boundary,
        } => {
            let overrides = CliOverrides {
                width_cells: width,
                height_cells: height,
                p_alive,
                tick_interval_ms: tick_ms,
                boundary_condition: boundary,
                save_path,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => {
            logging::init("warn", None)?;
            setup_command(directory, force)
        }
        Commands::Show { file, coords } => {
            logging::init("warn", None)?;
            show_command(file, coords)
        }
        Commands::Step {
            config,
            file,
            generations,
            boundary,
            write,
        } => {
            let settings = load_settings(&config)?;
            logging::init(&settings.logging.level, None)?;
            step_command(settings, file, generations, boundary, write)
        }
    }
}

/// Load configuration, falling back to defaults when the file is absent
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    logging::init(&settings.logging.level, settings.logging.file.as_deref())?;

    ui::run(&settings)
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: game_of_life run --config {}", config_path.display());

    Ok(())
}

fn show_command(file: PathBuf, coords: bool) -> Result<()> {
    let grid = read_grid(&file)
        .with_context(|| format!("Failed to read game state from {}", file.display()))?;

    println!("{}", ColorOutput::info(&GridFormatter::format_summary(&grid)));
    if coords {
        print!("{}", GridFormatter::format_grid_with_coords(&grid));
    } else {
        print!("{}", GridFormatter::format_grid_compact(&grid));
    }
    Ok(())
}

fn step_command(
    settings: Settings,
    file: PathBuf,
    generations: usize,
    boundary: Option<BoundaryCondition>,
    write: bool,
) -> Result<()> {
    let grid = read_grid(&file)
        .with_context(|| format!("Failed to read game state from {}", file.display()))?;

    let boundary = boundary.unwrap_or(settings.simulation.boundary_condition);
    let rules = GameOfLifeRules::new(boundary);
    let result = rules.advance_generations(grid, generations);
    info!(generations, ?boundary, alive = result.living_count(), "advanced saved state");

    println!(
        "{}",
        ColorOutput::info(&format!("After {} generation(s):", generations))
    );
    println!("{}", GridFormatter::format_summary(&result));
    print!("{}", GridFormatter::format_grid_compact(&result));

    if write {
        save_grid(&file, &result)
            .with_context(|| format!("Failed to write game state to {}", file.display()))?;
        println!("{}", ColorOutput::success(&format!("Saved to {}", file.display())));
    } else if result.is_empty() {
        warn!("population died out");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life::Grid;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config",
            "test.yaml",
            "--width",
            "20",
            "--boundary",
            "dead",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "run", "--boundary", "mirror"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        let config_path = temp_dir.path().join("config/default.yaml");
        assert!(config_path.exists());
        assert_eq!(Settings::from_file(&config_path).unwrap(), Settings::default());
    }

    #[test]
    fn test_step_command_writes_back() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("state.json");
        let mut grid = Grid::new_dead(5, 5).unwrap();
        for (x, y) in [(2, 1), (2, 2), (2, 3)] {
            grid.set(x, y, true).unwrap();
        }
        save_grid(&file, &grid).unwrap();

        step_command(Settings::default(), file.clone(), 1, None, true).unwrap();

        let stepped = read_grid(&file).unwrap();
        assert_eq!(stepped.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_show_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(show_command(temp_dir.path().join("missing.json"), false).is_err());
    }
}
