//! TerminalUi: draws the grid, controls and status line with crossterm.
//!
//! Every frame is a full redraw inside a synchronized update, which keeps
//! the code small and is fast enough at human interaction rates.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate},
};

use super::layout::{Button, Layout, Rect};
use crate::game_of_life::Grid;

const DEAD_COLOR: Color = Color::White;
const ALIVE_COLOR: Color = Color::Black;
const BUTTON_COLOR: Color = Color::Green;
const BUTTON_PRESSED_COLOR: Color = Color::Red;
const LABEL_COLOR: Color = Color::Black;

/// Everything besides the grid that a frame shows
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub running: bool,
    pub generation: u64,
    pub pressed: Option<Button>,
    pub status: &'a str,
}

/// Terminal modes that are switched on for a session and must be undone after
pub trait Session {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

pub struct TerminalUi {
    stdout: io::Stdout,
}

impl Session for TerminalUi {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl TerminalUi {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    pub fn draw(&mut self, layout: &Layout, grid: &Grid, info: FrameInfo<'_>) -> Result<()> {
        queue!(
            self.stdout,
            BeginSynchronizedUpdate,
            ResetColor,
            terminal::Clear(ClearType::All)
        )?;

        self.draw_cells(layout, grid)?;

        let start_label = if info.running { "Stop" } else { "Start" };
        for (button, label) in [
            (Button::StartStop, start_label),
            (Button::Save, "Save"),
            (Button::Load, "Load"),
        ] {
            // Only save and load show pressed feedback
            let pressed = button != Button::StartStop && info.pressed == Some(button);
            self.draw_button(layout.button_rect(button), label, pressed)?;
        }

        let state = if info.running { "running" } else { "paused" };
        let line = format!(
            " {} | generation {} | {} alive | {}",
            state,
            info.generation,
            grid.living_count(),
            info.status
        );
        let line: String = line.chars().take(layout.surface_width as usize).collect();
        queue!(
            self.stdout,
            ResetColor,
            cursor::MoveTo(0, layout.status_row),
            Print(line),
            EndSynchronizedUpdate
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_cells(&mut self, layout: &Layout, grid: &Grid) -> Result<()> {
        for (x, y, alive) in grid.iter_cells() {
            let Some(rect) = layout.cell_rect(x, y) else {
                continue;
            };
            let color = if alive { ALIVE_COLOR } else { DEAD_COLOR };
            self.fill(rect, color)?;
        }
        Ok(())
    }

    fn draw_button(&mut self, rect: Rect, label: &str, pressed: bool) -> Result<()> {
        let color = if pressed { BUTTON_PRESSED_COLOR } else { BUTTON_COLOR };
        self.fill(rect, color)?;

        let label: String = label.chars().take(rect.width as usize).collect();
        let label_x = rect.x + (rect.width - label.chars().count() as u16) / 2;
        let label_y = rect.y + rect.height / 2;
        queue!(
            self.stdout,
            cursor::MoveTo(label_x, label_y),
            SetBackgroundColor(color),
            SetForegroundColor(LABEL_COLOR),
            Print(label)
        )?;
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<()> {
        let blank = " ".repeat(rect.width as usize);
        queue!(self.stdout, SetBackgroundColor(color))?;
        for row in rect.y..rect.y.saturating_add(rect.height) {
            queue!(self.stdout, cursor::MoveTo(rect.x, row), Print(&blank))?;
        }
        Ok(())
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}
