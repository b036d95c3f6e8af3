//! Cellular smoothing
//!
//! Fills in wall cells that are mostly surrounded by floor. Passes run in
//! place over the interior, so a pass sees the cells it already changed.
//! Floor is never turned back into wall.

use crate::world::{Grid, Tile};

/// Wall cells with more than this many orthogonal floor neighbours become floor
const FLOOR_NEIGHBOR_THRESHOLD: usize = 2;

/// Run `iterations` smoothing passes. Returns the total cells turned to floor.
pub fn smoothen(grid: &mut Grid, iterations: u32) -> usize {
    let mut grown = 0;
    for pass in 0..iterations {
        let changed = smoothen_pass(grid);
        log::debug!("Smoothing pass {} grew {} floor tiles", pass + 1, changed);
        grown += changed;
    }
    grown
}

/// One sweep over the interior, row by row. The outer ring is left untouched.
pub fn smoothen_pass(grid: &mut Grid) -> usize {
    let mut changed = 0;
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            if grid.get(x, y) == Tile::Wall && count_floor_neighbors(grid, x, y) > FLOOR_NEIGHBOR_THRESHOLD {
                grid.set(x, y, Tile::Floor);
                changed += 1;
            }
        }
    }
    changed
}

/// Count floor neighbours (4-directional)
fn count_floor_neighbors(grid: &Grid, x: i32, y: i32) -> usize {
    [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
        .iter()
        .filter(|&&(nx, ny)| grid.get(nx, ny) == Tile::Floor)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::random_walk;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn on_border(grid: &Grid, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == grid.width() - 1 || y == grid.height() - 1
    }

    fn walked_grid(seed: u64) -> Grid {
        let mut grid = Grid::new(60, 45);
        random_walk(&mut grid, 0.5, &mut StdRng::seed_from_u64(seed));
        grid
    }

    #[test]
    fn test_wall_with_three_floor_neighbors_fills() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 2, Tile::Floor);
        grid.set(3, 2, Tile::Floor);
        grid.set(2, 3, Tile::Floor);

        assert_eq!(smoothen_pass(&mut grid), 1);
        assert_eq!(grid.get(2, 2), Tile::Floor);
    }

    #[test]
    fn test_wall_with_two_floor_neighbors_stays() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 2, Tile::Floor);
        grid.set(3, 2, Tile::Floor);

        assert_eq!(smoothen_pass(&mut grid), 0);
        assert_eq!(grid.get(2, 2), Tile::Wall);
    }

    #[test]
    fn test_pass_sees_its_own_updates() {
        // Filling (2, 2) gives (3, 2) its third floor neighbour in the same pass
        let mut grid = Grid::new(6, 5);
        for (x, y) in [(1, 2), (2, 1), (2, 3), (3, 1), (3, 3)] {
            grid.set(x, y, Tile::Floor);
        }

        assert_eq!(smoothen_pass(&mut grid), 2);
        assert_eq!(grid.get(2, 2), Tile::Floor);
        assert_eq!(grid.get(3, 2), Tile::Floor);
    }

    #[test]
    fn test_smoothing_is_deterministic() {
        let mut a = walked_grid(11);
        let mut b = a.clone();
        smoothen(&mut a, 3);
        smoothen(&mut b, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_floor_never_reverts() {
        let mut grid = walked_grid(12);
        for _ in 0..4 {
            let before = grid.clone();
            smoothen_pass(&mut grid);
            for (pos, tile) in before.iter() {
                if tile == Tile::Floor {
                    assert_eq!(grid.get_at(pos), Tile::Floor, "floor at {:?} reverted", pos);
                }
            }
            assert!(grid.count(Tile::Floor) >= before.count(Tile::Floor));
        }
    }

    #[test]
    fn test_border_untouched() {
        let mut grid = walked_grid(13);
        let before = grid.clone();
        smoothen(&mut grid, 3);
        for (pos, tile) in before.iter() {
            if on_border(&before, pos.x, pos.y) {
                assert_eq!(grid.get_at(pos), tile, "border cell {:?} changed", pos);
            }
        }
    }

    #[test]
    fn test_border_wall_surrounded_by_floor_stays() {
        let mut grid = Grid::filled(5, 5, Tile::Floor);
        grid.set(0, 2, Tile::Wall);
        smoothen(&mut grid, 3);
        assert_eq!(grid.get(0, 2), Tile::Wall);
    }

    #[test]
    fn test_zero_iterations_is_noop() {
        let mut grid = walked_grid(14);
        let before = grid.clone();
        assert_eq!(smoothen(&mut grid, 0), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_reported_growth_matches_floor_delta() {
        let mut grid = walked_grid(15);
        let before = grid.count(Tile::Floor);
        let grown = smoothen(&mut grid, 3);
        assert_eq!(grid.count(Tile::Floor), before + grown);
    }
}
