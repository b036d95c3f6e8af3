//! Custom ratatui widgets

mod cave_view;

pub use cave_view::{CaveView, TooSmallNotice};
