//! Fundamental grid geometry and simulation types.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Simulation time in ticks. One tick is one game second.
pub type Ticks = u64;

/// Single-letter plane identity shown to the operator.
pub type Callsign = char;

/// One of the eight compass directions, in clockwise order starting at North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    fn index(self) -> i32 {
        self as i32
    }

    /// Rotate clockwise by `n` eighth-turns. Negative `n` rotates counter-clockwise.
    pub fn right(self, n: i32) -> Direction {
        Self::ALL[(self.index() + n).rem_euclid(8) as usize]
    }

    /// Rotate counter-clockwise by `n` eighth-turns.
    pub fn left(self, n: i32) -> Direction {
        self.right(-n)
    }

    pub fn reverse(self) -> Direction {
        self.right(4)
    }

    /// Unit grid vector. `y` grows southward (row index).
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::NorthEast => IVec2::new(1, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::SouthEast => IVec2::new(1, 1),
            Direction::South => IVec2::new(0, 1),
            Direction::SouthWest => IVec2::new(-1, 1),
            Direction::West => IVec2::new(-1, 0),
            Direction::NorthWest => IVec2::new(-1, -1),
        }
    }

    /// Compass abbreviation ("N", "NE", ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

/// Returned when a compass abbreviation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.abbreviation() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Integer grid cell. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate `count` cells along `direction`. Diagonal steps move one
    /// cell on each axis; there is no diagonal scaling.
    pub fn moved(self, direction: Direction, count: i32) -> Position {
        (IVec2::from(self) + direction.offset() * count).into()
    }

    /// Chebyshev distance: a diagonal step costs the same as a straight one.
    pub fn distance(self, other: Position) -> i32 {
        (IVec2::from(other) - IVec2::from(self)).abs().max_element()
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:2}/{:2}", self.x, self.y)
    }
}
