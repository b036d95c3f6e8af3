//! User interface module
//!
//! Terminal rendering and keyboard input for the game loop.

pub mod terminal;
pub mod widgets;

pub use terminal::{translate_key, KeyAction, KeyboardInput, TerminalRenderer};
pub use widgets::{CaveView, TooSmallNotice};
