use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Add;

/// Levels larger than this in either dimension are rejected by the parser
/// so that every coordinate plus a two cell offset still fits in `i8`.
pub const MAX_SIZE: usize = 120;

/// A single cell of the board. `x` is the column, `y` is the row.
///
/// Ordering is by `x` first, then `y`. `SquareSet` relies on this order
/// being total and fixed so that scoring and hashing are reproducible.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    pub fn new(x: i8, y: i8) -> Self {
        Square { x, y }
    }

    pub fn dist(self, other: Square) -> u32 {
        let dx = (i32::from(self.x) - i32::from(other.x)).abs();
        let dy = (i32::from(self.y) - i32::from(other.y)).abs();
        (dx + dy) as u32
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Right,
    Left,
}

/// Fixed expansion order - successor generation must be deterministic.
pub const DIRECTIONS: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

impl Dir {
    /// `(dx, dy)` of one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Right => (1, 0),
            Dir::Left => (-1, 0),
        }
    }

    /// The two directions perpendicular to this one.
    pub fn sides(self) -> [Dir; 2] {
        match self {
            Dir::Up | Dir::Down => [Dir::Right, Dir::Left],
            Dir::Right | Dir::Left => [Dir::Down, Dir::Up],
        }
    }
}

impl Add<Dir> for Square {
    type Output = Square;

    fn add(self, dir: Dir) -> Square {
        let (dx, dy) = dir.offset();
        // wrapping so squares near the edge of the coordinate range can't panic,
        // whatever they wrap to isn't a floor anyway
        Square::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}
