//! Collaborator interfaces for the game loop
//!
//! The loop owns no I/O itself. It reads tokens from an [`InputSource`],
//! draws through a [`RenderSink`], and stops when its [`StopSignal`] is raised.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::GameError;
use crate::world::Grid;

/// Non-blocking source of single-character input tokens
pub trait InputSource {
    /// Whether a token is ready. Must return immediately.
    fn has_input(&mut self) -> Result<bool, GameError>;

    /// Consume the next token. `None` if the pending event was not a token
    /// (a key release, a resize, ...).
    fn next_token(&mut self) -> Result<Option<char>, GameError>;
}

/// Draws the full grid once per loop iteration
pub trait RenderSink {
    fn render(&mut self, grid: &Grid) -> Result<(), GameError>;
}

/// Shared cancellation flag, checked once per loop iteration
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
