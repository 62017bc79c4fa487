//! Translates raw terminal events into simulation intents

use super::layout::{Button, Layout, Target};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A discrete user request for the simulation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ToggleCell { x: usize, y: usize },
    ToggleRun,
    Save,
    Load,
    Quit,
}

/// Tracks which button is held down so it can be drawn pressed
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: Option<Button>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button currently held down, if any
    pub fn pressed(&self) -> Option<Button> {
        self.pressed
    }

    pub fn handle_event(&mut self, event: &Event, layout: &Layout, running: bool) -> Option<Intent> {
        match event {
            Event::Key(key) => handle_key_event(*key),
            Event::Mouse(mouse) => self.handle_mouse_event(*mouse, layout, running),
            _ => None,
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, layout: &Layout, running: bool) -> Option<Intent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match layout.hit_test(mouse.column, mouse.row)? {
                    Target::Button(button) => {
                        self.pressed = Some(button);
                        Some(match button {
                            Button::StartStop => Intent::ToggleRun,
                            Button::Save => Intent::Save,
                            Button::Load => Intent::Load,
                        })
                    }
                    Target::Cell { x, y } if !running => Some(Intent::ToggleCell { x, y }),
                    Target::Cell { .. } => None,
                }
            }
            MouseEventKind::Up(_) => {
                self.pressed = None;
                None
            }
            _ => None,
        }
    }
}

/// Keyboard shortcuts
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Intent::ToggleRun),
        KeyCode::Char('s') => Some(Intent::Save),
        KeyCode::Char('l') => Some(Intent::Load),
        _ => None,
    }
}
