//! Random-walk carving
//!
//! A walker starts at the centre of an all-rock grid and stumbles in random
//! cardinal steps, turning every cell it stands on into floor. Steps that
//! would leave the grid are clamped to the edge rather than rejected, so the
//! walker can never get stuck and the carve leans toward the border once it
//! reaches it.

use rand::Rng;

use crate::game::Direction;
use crate::world::{Grid, Tile};

/// Number of newly carved cells that ends the walk: `ceil(fraction * cells)`,
/// capped one below the cell count so the walk always has somewhere new to go.
pub fn fill_target(width: i32, height: i32, fill_fraction: f64) -> usize {
    let total = (width.max(0) as usize).saturating_mul(height.max(0) as usize);
    let target = (fill_fraction.max(0.0) * total as f64).ceil() as usize;
    target.min(total.saturating_sub(1))
}

/// Reset `grid` to rock and carve it with a random walk.
///
/// Only steps onto a cell that is not already floor advance the walk. The walk
/// stops as soon as that count reaches [`fill_target`]; the cell reached by the
/// final step is left as it was, so the grid ends up with exactly `target`
/// floor cells (or just the centre when the target is zero).
///
/// Returns the number of counted steps.
pub fn random_walk(grid: &mut Grid, fill_fraction: f64, rng: &mut impl Rng) -> usize {
    let target = fill_target(grid.width(), grid.height(), fill_fraction);
    let max_x = grid.width() - 1;
    let max_y = grid.height() - 1;

    grid.fill(Tile::Wall);

    let mut walker = grid.center();
    grid.set_at(walker, Tile::Floor);

    let mut carved = 0;
    while carved < target {
        grid.set_at(walker, Tile::Floor);

        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        walker = walker.offset(direction.offset());
        walker.x = walker.x.clamp(0, max_x);
        walker.y = walker.y.clamp(0, max_y);

        if grid.get_at(walker) == Tile::Floor {
            continue;
        }
        carved += 1;
    }

    log::debug!("Random walk carved {} of {} target cells", carved, target);
    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fill_target_reference_grid() {
        // 60 * 45 = 2700, half is exactly 1350
        assert_eq!(fill_target(60, 45, 0.5), 1350);
    }

    #[test]
    fn test_fill_target_rounds_up() {
        // 5 * 5 * 0.5 = 12.5
        assert_eq!(fill_target(5, 5, 0.5), 13);
    }

    #[test]
    fn test_fill_target_capped_below_cell_count() {
        assert_eq!(fill_target(3, 3, 1.0), 8);
        assert_eq!(fill_target(1, 1, 0.5), 0);
    }

    #[test]
    fn test_fill_target_large_dimensions() {
        // 50000 * 50000 overflows i32 but not usize
        assert_eq!(fill_target(50_000, 50_000, 0.5), 1_250_000_000);
    }

    #[test]
    fn test_walk_reaches_fill_target() {
        for seed in 0..8 {
            let mut grid = Grid::new(60, 45);
            let mut rng = StdRng::seed_from_u64(seed);
            let target = fill_target(60, 45, 0.5);

            let carved = random_walk(&mut grid, 0.5, &mut rng);
            let floors = grid.count(Tile::Floor);

            assert_eq!(carved, target);
            assert!(floors >= target, "seed {}: {} floors < target {}", seed, floors, target);
            assert!(floors <= target + 10, "seed {}: {} floors overshoot target {}", seed, floors, target);
        }
    }

    #[test]
    fn test_walk_starts_from_center() {
        let mut grid = Grid::new(60, 45);
        random_walk(&mut grid, 0.5, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.get(30, 22), Tile::Floor);
    }

    #[test]
    fn test_walk_resets_previous_contents() {
        let mut grid = Grid::filled(20, 20, Tile::Floor);
        random_walk(&mut grid, 0.25, &mut StdRng::seed_from_u64(5));
        assert_eq!(grid.count(Tile::Floor), fill_target(20, 20, 0.25));
    }

    #[test]
    fn test_walk_is_deterministic_for_seed() {
        let mut a = Grid::new(30, 20);
        let mut b = Grid::new(30, 20);
        random_walk(&mut a, 0.5, &mut StdRng::seed_from_u64(42));
        random_walk(&mut b, 0.5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tiny_grid_terminates() {
        let mut grid = Grid::new(1, 1);
        assert_eq!(random_walk(&mut grid, 0.5, &mut StdRng::seed_from_u64(0)), 0);
        assert_eq!(grid.get(0, 0), Tile::Floor);

        let mut grid = Grid::new(3, 3);
        random_walk(&mut grid, 1.0, &mut StdRng::seed_from_u64(0));
        assert_eq!(grid.count(Tile::Floor), 8);
    }
}
