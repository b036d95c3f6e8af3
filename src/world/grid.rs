//! Grid data structure
//!
//! The fixed-size 2D array of tiles the cave lives in. Coordinates are
//! `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`; `+y` points up.

use super::tile::Tile;

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a unit offset
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A cave grid. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::Wall)
    }

    /// Create a new grid with every cell set to `tile`
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {}x{}", width, height);
        let cells = (width as usize)
            .checked_mul(height as usize)
            .filter(|&cells| cells <= i32::MAX as usize);
        let Some(cells) = cells else {
            panic!("grid of {}x{} cells is too large", width, height);
        };
        Self {
            width,
            height,
            tiles: vec![tile; cells],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Centre cell, rounding down like integer division
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "grid access out of bounds: ({}, {}) on {}x{} grid",
            x, y, self.width, self.height
        );
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Tile at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.tiles[self.xy_to_idx(x, y)]
    }

    /// Set the tile at `(x, y)`. Panics when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        let idx = self.xy_to_idx(x, y);
        self.tiles[idx] = tile;
    }

    /// Tile at `(x, y)`, or `None` off the grid
    pub fn get_tile(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    pub fn get_at(&self, pos: Position) -> Tile {
        self.get(pos.x, pos.y)
    }

    pub fn set_at(&mut self, pos: Position, tile: Tile) {
        self.set(pos.x, pos.y, tile);
    }

    /// Overwrite every cell with `tile`
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over every cell as `(position, tile)`, row by row from `y = 0`
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(idx, &tile)| {
            let (x, y) = self.idx_to_xy(idx);
            (Position::new(x, y), tile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(6, 4);
        assert_eq!(grid.count(Tile::Wall), 24);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 3, Tile::Floor);
        assert_eq!(grid.get(1, 3), Tile::Floor);
        // (3, 1) is a different cell
        assert_eq!(grid.get(3, 1), Tile::Wall);
    }

    #[test]
    fn test_get_tile_off_grid() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.get_tile(-1, 0), None);
        assert_eq!(grid.get_tile(0, 5), None);
        assert_eq!(grid.get_tile(4, 4), Some(Tile::Wall));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(5, 5);
        grid.get(5, 0);
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(60, 45).center(), Position::new(30, 22));
    }

    #[test]
    fn test_iter_positions() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Tile::Floor);
        let floors: Vec<Position> = grid
            .iter()
            .filter(|(_, t)| *t == Tile::Floor)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(floors, vec![Position::new(2, 1)]);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_oversized_grid_panics() {
        Grid::new(i32::MAX, 2);
    }
}
