//! Grid coordinates and compass directions.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// One discrete coordinate of the dungeon grid.
///
/// Equality and hashing are by coordinate pair; `y` grows upward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ZERO: Cell = Cell::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another cell.
    ///
    /// Widened to `i64` so corner-to-corner distances on large grids
    /// cannot overflow.
    pub const fn distance_sq(self, other: Cell) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// The 8 surrounding cells, in compass scan order.
    pub fn neighbors8(self) -> impl Iterator<Item = Cell> {
        Direction::iter().map(move |dir| self + dir.offset())
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Cell) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The 8 compass directions.
///
/// Declaration order is the fixed scan order used wherever all 8
/// neighbors of a cell are examined (wall fringes, the placeability
/// filter's short-circuit).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The 4 cardinal directions, the step set of the random walk.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset for this direction.
    pub const fn offset(self) -> Cell {
        match self {
            Direction::North => Cell::new(0, 1),
            Direction::NorthEast => Cell::new(1, 1),
            Direction::East => Cell::new(1, 0),
            Direction::SouthEast => Cell::new(1, -1),
            Direction::South => Cell::new(0, -1),
            Direction::SouthWest => Cell::new(-1, -1),
            Direction::West => Cell::new(-1, 0),
            Direction::NorthWest => Cell::new(-1, 1),
        }
    }
}
