//! Procedural cave generation
//!
//! A random walk carves an open blob out of solid rock, then a few
//! smoothing passes fill in isolated wall cells.

pub mod walk;
pub mod smoothing;

pub use walk::{fill_target, random_walk};
pub use smoothing::{smoothen, smoothen_pass};

use rand::Rng;

use crate::game::GameConfig;
use super::{Grid, Tile};

/// Generate a cave grid: random-walk carve followed by smoothing
pub fn generate_cave(config: &GameConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(config.width, config.height);

    let carved = random_walk(&mut grid, config.fill_fraction, rng);
    let grown = smoothen(&mut grid, config.smoothing_iterations);

    log::info!(
        "Generated {}x{} cave: {} tiles carved, {} grown by {} smoothing passes ({} floor total)",
        config.width,
        config.height,
        carved,
        grown,
        config.smoothing_iterations,
        grid.count(Tile::Floor)
    );

    grid
}
