//! The avatar and its movement rules
//!
//! The avatar's position only changes through [`Avatar::apply_move`], which
//! keeps the grid's single `Avatar` tile in step with it.

use crate::world::{Grid, Position, Tile};
use super::Direction;

/// The player-controlled marker on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pos: Position,
}

impl Avatar {
    /// Put the avatar on the grid at `pos`, overwriting whatever was there
    pub fn place(grid: &mut Grid, pos: Position) -> Self {
        grid.set_at(pos, Tile::Avatar);
        Self { pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Step one cell in `direction`.
    ///
    /// Callers must check [`can_move`] first; moving into rock or off the grid
    /// is a bug and panics.
    pub fn apply_move(&mut self, direction: Direction, grid: &mut Grid) {
        let target = self.pos.offset(direction.offset());
        assert!(
            grid.get_tile(target.x, target.y).is_some_and(|t| t.is_walkable()),
            "illegal move {:?} from {:?}",
            direction,
            self.pos
        );

        grid.set_at(self.pos, Tile::Floor);
        self.pos = target;
        grid.set_at(self.pos, Tile::Avatar);
    }
}

/// Whether the avatar may step in `direction`: the target must be on the grid
/// and not rock.
pub fn can_move(direction: Direction, avatar: &Avatar, grid: &Grid) -> bool {
    let target = avatar.position().offset(direction.offset());
    match grid.get_tile(target.x, target.y) {
        Some(tile) => tile != Tile::Wall,
        None => false,
    }
}

/// Token-level check: tokens that are not directions are never valid moves
pub fn is_valid_move(token: char, avatar: &Avatar, grid: &Grid) -> bool {
    Direction::from_token(token).is_some_and(|dir| can_move(dir, avatar, grid))
}
