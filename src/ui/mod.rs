//! Terminal front end: rendering and input for the simulation

pub mod app;
pub mod input;
pub mod layout;
pub mod terminal;

pub use app::{apply_intent, controller_from_settings, run, with_session};
pub use input::{InputHandler, Intent};
pub use layout::{Button, Layout, Rect, Target};
pub use terminal::{Session, TerminalUi};
