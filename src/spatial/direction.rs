//! Compass directions and lattice positions
//!
//! Directions follow a fixed cyclic order starting at North and turning
//! clockwise. North increases `y`, East increases `x`.

use crate::io::configuration::DIRECTION_SEPARATOR;
use crate::io::error::{PlaneError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards increasing `y`
    North,
    /// Towards increasing `x` and `y`
    NorthEast,
    /// Towards increasing `x`
    East,
    /// Towards increasing `x`, decreasing `y`
    SouthEast,
    /// Towards decreasing `y`
    South,
    /// Towards decreasing `x` and `y`
    SouthWest,
    /// Towards decreasing `x`
    West,
    /// Towards decreasing `x`, increasing `y`
    NorthWest,
}

impl Direction {
    /// Number of directions around a tile
    pub const COUNT: usize = 8;

    /// All directions in cyclic order
    pub const ALL: [Self; Self::COUNT] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Position of this direction in the cycle, usable as a slot index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at a cycle index, wrapping modulo eight
    pub const fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            _ => Self::NorthWest,
        }
    }

    /// The direction four steps ahead in the cycle
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + Self::COUNT / 2)
    }

    /// Lattice offset `[dx, dy]` of one step in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, 1],
            Self::NorthEast => [1, 1],
            Self::East => [1, 0],
            Self::SouthEast => [1, -1],
            Self::South => [0, -1],
            Self::SouthWest => [-1, -1],
            Self::West => [-1, 0],
            Self::NorthWest => [-1, 1],
        }
    }

    /// Two-letter command code
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "NN",
            Self::NorthEast => "NE",
            Self::East => "EE",
            Self::SouthEast => "SE",
            Self::South => "SS",
            Self::SouthWest => "SO",
            Self::West => "OO",
            Self::NorthWest => "NO",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = PlaneError;

    fn from_str(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.code() == code)
            .ok_or_else(|| PlaneError::InvalidDirection {
                code: code.to_string(),
            })
    }
}

/// Parse a comma-separated list of direction codes
///
/// # Errors
///
/// Returns [`PlaneError::InvalidDirection`] for the first code outside the table,
/// including empty codes produced by stray separators
pub fn parse_directions(token: &str) -> Result<Vec<Direction>> {
    token.split(DIRECTION_SEPARATOR).map(str::parse).collect()
}

/// Integer lattice coordinate addressing a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column, growing eastwards
    pub x: i32,
    /// Row, growing northwards
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step away in `direction`
    ///
    /// `None` when the step would leave the `i32` lattice.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let [dx, dy] = direction.offset();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Iterate over the surrounding positions with their directions
    ///
    /// Yields eight entries except on the lattice edge, where steps that
    /// would overflow are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(direction).map(|next| (direction, next)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
