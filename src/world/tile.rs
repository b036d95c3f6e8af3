//! Tile definitions
//!
//! The three states a cave cell can be in and how they are drawn.

/// A single cell of the cave grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Solid rock, the state every cell starts in
    #[default]
    Wall,
    /// Open ground carved by the walker or grown by smoothing
    Floor,
    /// The cell the avatar currently stands on
    Avatar,
}

impl Tile {
    /// Anything but rock can be stepped onto
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '·',
            Tile::Avatar => '@',
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            Tile::Wall => (130, 110, 90),
            Tile::Floor => (80, 80, 80),
            Tile::Avatar => (255, 255, 200),
        }
    }

    pub fn bg_color(&self) -> (u8, u8, u8) {
        match self {
            Tile::Wall => (40, 35, 30),
            Tile::Floor | Tile::Avatar => (20, 18, 15),
        }
    }
}
