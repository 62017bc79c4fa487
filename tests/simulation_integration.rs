use std::time::{Duration, Instant};

use game_of_life::game_of_life::save_grid;
use game_of_life::{
    BoundaryCondition, GameOfLifeRules, Grid, PersistenceError, RunState, SimulationController,
    SimulationError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

const TICK: Duration = Duration::from_millis(1000);

fn controller_with(grid: Grid) -> SimulationController {
    SimulationController::new(grid, GameOfLifeRules::new(BoundaryCondition::Wrap), TICK)
}

fn controller_with_boundary(grid: Grid, boundary: BoundaryCondition) -> SimulationController {
    SimulationController::new(grid, GameOfLifeRules::new(boundary), TICK)
}

fn random_grid(seed: u64, width: usize, height: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::random_with(width, height, 0.3, &mut rng).unwrap()
}

fn advance_once(controller: &mut SimulationController) {
    let start = Instant::now();
    controller.toggle_run(start);
    assert!(controller.maybe_advance(start + TICK));
}

#[test]
fn vertical_blinker_becomes_horizontal_with_dead_edges() {
    let mut grid = Grid::new_dead(3, 3).unwrap();
    for (x, y) in [(1, 0), (1, 1), (1, 2)] {
        grid.set(x, y, true).unwrap();
    }
    let mut controller = controller_with_boundary(grid, BoundaryCondition::Dead);
    advance_once(&mut controller);

    assert_eq!(
        controller.snapshot().living_cells(),
        vec![(0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn vertical_blinker_becomes_horizontal_on_torus() {
    let mut grid = Grid::new_dead(5, 5).unwrap();
    for (x, y) in [(2, 1), (2, 2), (2, 3)] {
        grid.set(x, y, true).unwrap();
    }
    let mut controller = controller_with(grid);
    advance_once(&mut controller);

    assert_eq!(
        controller.snapshot().living_cells(),
        vec![(1, 2), (2, 2), (3, 2)]
    );
}

#[test]
fn cell_with_three_neighbors_is_born_or_survives() {
    let rules = GameOfLifeRules::new(BoundaryCondition::Wrap);
    for seed in 0..8 {
        let grid = random_grid(seed, 10, 8);
        let next = rules.advance(&grid);
        for (x, y, _) in grid.iter_cells() {
            if grid.count_neighbors(x, y, BoundaryCondition::Wrap) == 3 {
                assert!(next.get(x, y).unwrap(), "seed {} cell ({}, {})", seed, x, y);
            }
        }
    }
}

#[test]
fn live_cell_survival_thresholds() {
    let rules = GameOfLifeRules::new(BoundaryCondition::Wrap);
    for seed in 100..108 {
        let grid = random_grid(seed, 9, 9);
        let next = rules.advance(&grid);
        for (x, y, alive) in grid.iter_cells() {
            if !alive {
                continue;
            }
            let n = grid.count_neighbors(x, y, BoundaryCondition::Wrap);
            assert_eq!(next.get(x, y).unwrap(), n == 2 || n == 3);
        }
    }
}

#[test]
fn opposite_corners_are_neighbors_on_torus() {
    let mut grid = Grid::new_dead(6, 4).unwrap();
    grid.set(0, 0, true).unwrap();
    assert_eq!(grid.count_neighbors(5, 3, BoundaryCondition::Wrap), 1);

    let mut grid = Grid::new_dead(6, 4).unwrap();
    grid.set(5, 3, true).unwrap();
    assert_eq!(grid.count_neighbors(0, 0, BoundaryCondition::Wrap), 1);

    // Edge clamping treats off-grid neighbors as dead
    assert_eq!(grid.count_neighbors(0, 0, BoundaryCondition::Dead), 0);
}

#[test]
fn save_then_load_reproduces_grid() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("game_state.json");
    let mut controller = controller_with(random_grid(5, 40, 30));
    let saved = controller.snapshot().clone();

    controller.save(&path).unwrap();
    controller.toggle_cell(3, 4).unwrap();
    assert_ne!(controller.snapshot(), &saved);

    controller.load(&path).unwrap();
    assert_eq!(controller.snapshot(), &saved);
}

#[test]
fn mismatched_load_leaves_grid_unchanged() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("game_state.json");
    save_grid(&path, &random_grid(9, 20, 10)).unwrap();

    let mut controller = controller_with(random_grid(10, 40, 30));
    let before = controller.snapshot().clone();

    let err = controller.load(&path).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::Persistence(PersistenceError::DimensionMismatch {
            expected_width: 40,
            expected_height: 30,
            found_width: 20,
            found_height: 10,
        })
    ));
    assert_eq!(controller.snapshot(), &before);
}

#[test]
fn missing_file_load_leaves_grid_unchanged() {
    let temp_dir = tempdir().unwrap();
    let mut controller = controller_with(random_grid(3, 8, 8));
    let before = controller.snapshot().clone();

    let err = controller.load(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::Persistence(PersistenceError::FileNotFound(_))
    ));
    assert_eq!(controller.snapshot(), &before);
}

#[test]
fn corrupt_file_load_leaves_grid_unchanged() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("game_state.json");
    std::fs::write(&path, "{\"version\":1,\"width_cells\":8").unwrap();

    let mut controller = controller_with(random_grid(4, 8, 8));
    let before = controller.snapshot().clone();

    let err = controller.load(&path).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::Persistence(PersistenceError::CorruptData { .. })
    ));
    assert_eq!(controller.snapshot(), &before);
}

#[test]
fn toggle_while_running_has_no_effect() {
    let mut controller = controller_with(random_grid(6, 8, 8));
    controller.toggle_run(Instant::now());
    assert_eq!(controller.run_state(), RunState::Running);

    let before = controller.snapshot().clone();
    assert!(controller.toggle_cell(1, 1).is_err());
    assert_eq!(controller.snapshot(), &before);
}

#[test]
fn all_dead_grid_stays_dead_while_running() {
    let mut controller = controller_with(Grid::new_dead(12, 12).unwrap());
    let start = Instant::now();
    controller.toggle_run(start);

    for i in 1..=5 {
        assert!(controller.maybe_advance(start + TICK * i));
        assert!(controller.snapshot().is_empty());
    }
    assert_eq!(controller.generation(), 5);
}
