//! Game module - movement rules, configuration and the session loop

mod direction;
mod config;
pub mod avatar;
pub mod io;
pub mod session;

pub use direction::Direction;
pub use config::{GameConfig, CONFIG_PATH_ENV, SEED_ENV};
pub use avatar::{can_move, is_valid_move, Avatar};
pub use io::{InputSource, RenderSink, StopSignal};
pub use session::{MoveOutcome, RunSummary, Session};
