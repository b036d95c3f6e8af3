//! Movement directions and the key tokens that produce them

/// A single cardinal step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order the random walk draws from
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a movement token. `w`/`a`/`s`/`d` map to up/left/down/right;
    /// anything else is not a direction.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The token that produces this direction
    pub fn token(&self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Left => 'a',
            Direction::Down => 's',
            Direction::Right => 'd',
        }
    }

    /// Unit offset as `(dx, dy)`. Up is `+y`.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
