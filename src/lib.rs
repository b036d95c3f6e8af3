//! Cavewalk - a terminal cave explorer
//!
//! Carves a cave out of solid rock with a random walk, smooths it with a
//! few cellular passes, and lets a single avatar wander the result.

pub mod error;
pub mod game;
pub mod world;
pub mod ui;

// Re-export commonly used types
pub use error::{ConfigError, GameError};
pub use game::{Avatar, Direction, GameConfig, MoveOutcome, Session, StopSignal};
pub use world::{Grid, Position, Tile};
