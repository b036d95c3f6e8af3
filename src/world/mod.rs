//! World module
//!
//! Contains the grid, tiles, and procedural cave generation.

pub mod grid;
pub mod tile;
pub mod generation;

pub use grid::{Grid, Position};
pub use tile::Tile;
pub use generation::generate_cave;
