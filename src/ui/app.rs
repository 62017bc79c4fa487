//! Interactive frame loop tying the terminal to the simulation controller

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use tracing::{debug, info, warn};

use super::input::{InputHandler, Intent};
use super::layout::Layout;
use super::terminal::{FrameInfo, Session, TerminalUi};
use crate::config::Settings;
use crate::error::SimulationError;
use crate::game_of_life::{GameOfLifeRules, Grid};
use crate::simulation::SimulationController;

/// Build the controller described by `settings` with a freshly seeded grid
pub fn controller_from_settings(settings: &Settings) -> Result<SimulationController> {
    let grid = Grid::random(
        settings.grid.width_cells,
        settings.grid.height_cells,
        settings.grid.p_alive,
    )
    .context("Failed to create initial grid")?;

    Ok(SimulationController::new(
        grid,
        GameOfLifeRules::new(settings.simulation.boundary_condition),
        Duration::from_millis(settings.simulation.tick_interval_ms),
    ))
}

/// Run the interactive UI until the user quits
pub fn run(settings: &Settings) -> Result<()> {
    let mut controller = controller_from_settings(settings)?;
    info!(
        width = settings.grid.width_cells,
        height = settings.grid.height_cells,
        boundary = ?controller.rules().boundary(),
        "starting interactive session"
    );

    let mut term = TerminalUi::new();
    let result = with_session(&mut term, |term| event_loop(term, &mut controller, settings));
    info!(generation = controller.generation(), "session ended");
    result
}

/// Run `body` inside an entered session, restoring the session on every path.
///
/// `exit` also runs when `enter` fails part way, since raw mode may already be on.
pub fn with_session<S, T, F>(session: &mut S, body: F) -> Result<T>
where
    S: Session,
    F: FnOnce(&mut S) -> Result<T>,
{
    let result = session.enter().and_then(|()| body(session));

    // Always try to restore terminal state.
    let _ = session.exit();
    result
}

fn event_loop(
    term: &mut TerminalUi,
    controller: &mut SimulationController,
    settings: &Settings,
) -> Result<()> {
    let frame_delay = Duration::from_millis(settings.ui.frame_delay_ms);
    let save_path = settings.storage.save_path.as_path();
    let mut input = InputHandler::new();
    let mut status = String::from("space: start/stop  s: save  l: load  q: quit");

    loop {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        let (grid_width, grid_height) = controller.snapshot().dimensions();
        let layout = Layout::compute(width, height, grid_width, grid_height);

        term.draw(
            &layout,
            controller.snapshot(),
            FrameInfo {
                running: controller.is_running(),
                generation: controller.generation(),
                pressed: input.pressed(),
                status: &status,
            },
        )?;

        if event::poll(frame_delay)? {
            let event = event::read()?;
            if let Some(intent) = input.handle_event(&event, &layout, controller.is_running()) {
                if intent == Intent::Quit {
                    return Ok(());
                }
                if let Some(message) = apply_intent(controller, intent, save_path) {
                    status = message;
                }
            }
        }

        if controller.maybe_advance(Instant::now()) {
            debug!(generation = controller.generation(), "advanced");
        }
    }
}

/// Apply an intent, returning a new status line when there is something to report
pub fn apply_intent(
    controller: &mut SimulationController,
    intent: Intent,
    save_path: &Path,
) -> Option<String> {
    match intent {
        Intent::ToggleCell { x, y } => match controller.toggle_cell(x, y) {
            Ok(_) => None,
            Err(SimulationError::NotPaused) => Some("Stop the simulation to edit cells".to_string()),
            Err(e) => {
                warn!(error = %e, "toggle rejected");
                Some(format!("Error: {}", e))
            }
        },
        Intent::ToggleRun => {
            let state = controller.toggle_run(Instant::now());
            debug!(?state, "run state changed");
            None
        }
        Intent::Save => Some(match controller.save(save_path) {
            Ok(()) => {
                info!(path = %save_path.display(), "saved game state");
                format!("Saved to {}", save_path.display())
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                format!("Error: {}", e)
            }
        }),
        Intent::Load => Some(match controller.load(save_path) {
            Ok(()) => {
                info!(path = %save_path.display(), "loaded game state");
                format!("Loaded {}", save_path.display())
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                format!("Error: {}", e)
            }
        }),
        Intent::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryCondition;
    use crate::simulation::RunState;
    use tempfile::tempdir;

    fn small_settings() -> Settings {
        let mut settings = Settings::default();
        settings.grid.width_cells = 5;
        settings.grid.height_cells = 4;
        settings
    }

    #[derive(Default)]
    struct RecordingSession {
        fail_enter: bool,
        entered: bool,
        exited: bool,
    }

    impl Session for RecordingSession {
        fn enter(&mut self) -> Result<()> {
            self.entered = true;
            if self.fail_enter {
                anyhow::bail!("alternate screen unavailable");
            }
            Ok(())
        }

        fn exit(&mut self) -> Result<()> {
            self.exited = true;
            Ok(())
        }
    }

    #[test]
    fn test_session_restored_after_body() {
        let mut session = RecordingSession::default();
        let value = with_session(&mut session, |s| {
            assert!(s.entered && !s.exited);
            Ok(7)
        })
        .unwrap();
        assert_eq!(value, 7);
        assert!(session.exited);
    }

    #[test]
    fn test_session_restored_when_body_fails() {
        let mut session = RecordingSession::default();
        let result: Result<()> = with_session(&mut session, |_| anyhow::bail!("draw failed"));
        assert!(result.is_err());
        assert!(session.exited);
    }

    #[test]
    fn test_session_restored_when_enter_fails() {
        let mut session = RecordingSession {
            fail_enter: true,
            ..Default::default()
        };
        let mut body_ran = false;
        let result = with_session(&mut session, |_| {
            body_ran = true;
            Ok(())
        });

        assert!(result.is_err());
        assert!(!body_ran);
        assert!(session.exited);
    }

    #[test]
    fn test_controller_from_settings() {
        let controller = controller_from_settings(&small_settings()).unwrap();
        assert_eq!(controller.snapshot().dimensions(), (5, 4));
        assert_eq!(controller.rules().boundary(), BoundaryCondition::Wrap);
        assert_eq!(controller.tick_interval(), Duration::from_millis(1000));
        assert_eq!(controller.run_state(), RunState::Paused);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = small_settings();
        settings.grid.p_alive = 2.0;
        assert!(controller_from_settings(&settings).is_err());
    }

    #[test]
    fn test_apply_intents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        let mut controller = controller_from_settings(&small_settings()).unwrap();

        let before = controller.snapshot().get(0, 0).unwrap();
        assert_eq!(apply_intent(&mut controller, Intent::ToggleCell { x: 0, y: 0 }, &path), None);
        assert_ne!(controller.snapshot().get(0, 0).unwrap(), before);

        let status = apply_intent(&mut controller, Intent::Save, &path).unwrap();
        assert!(status.starts_with("Saved"));
        assert!(path.exists());

        apply_intent(&mut controller, Intent::ToggleRun, &path);
        assert!(controller.is_running());
        let status = apply_intent(&mut controller, Intent::ToggleCell { x: 0, y: 0 }, &path).unwrap();
        assert!(status.contains("Stop the simulation"));

        let status = apply_intent(&mut controller, Intent::Load, &path).unwrap();
        assert!(status.starts_with("Loaded"));
    }

    #[test]
    fn test_load_error_is_reported() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");
        let mut controller = controller_from_settings(&small_settings()).unwrap();
        let before = controller.snapshot().clone();

        let status = apply_intent(&mut controller, Intent::Load, &path).unwrap();
        assert!(status.starts_with("Error: save file not found"));
        assert_eq!(controller.snapshot(), &before);
    }
}
