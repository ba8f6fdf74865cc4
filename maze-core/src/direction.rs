//! Compass directions and the turn tables the policies are written against.
//!
//! Axis convention: East is +x and South is +y, so a pursuer with a larger y
//! than the agent lies to the South.

use crate::error::MazeError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];
    pub const ALL: [Direction; 5] = [Self::North, Self::South, Self::East, Self::West, Self::Stop];

    pub fn is_cardinal(self) -> bool {
        self != Self::Stop
    }

    pub fn checked_reverse(self) -> Option<Direction> {
        match self {
            Self::North => Some(Self::South),
            Self::South => Some(Self::North),
            Self::East => Some(Self::West),
            Self::West => Some(Self::East),
            Self::Stop => None,
        }
    }

    /// Quarter turn counter-clockwise: North -> West -> South -> East -> North.
    pub fn checked_left(self) -> Option<Direction> {
        match self {
            Self::North => Some(Self::West),
            Self::West => Some(Self::South),
            Self::South => Some(Self::East),
            Self::East => Some(Self::North),
            Self::Stop => None,
        }
    }

    pub fn checked_right(self) -> Option<Direction> {
        match self {
            Self::North => Some(Self::East),
            Self::East => Some(Self::South),
            Self::South => Some(Self::West),
            Self::West => Some(Self::North),
            Self::Stop => None,
        }
    }

    /// Panics on `Stop`, which has no opposite.
    pub fn reverse(self) -> Direction {
        match self.checked_reverse() {
            Some(dir) => dir,
            None => panic!("Direction::reverse called on Stop"),
        }
    }

    /// Panics on `Stop`, which has no left turn.
    pub fn left(self) -> Direction {
        match self.checked_left() {
            Some(dir) => dir,
            None => panic!("Direction::left called on Stop"),
        }
    }

    /// Panics on `Stop`, which has no right turn.
    pub fn right(self) -> Direction {
        match self.checked_right() {
            Some(dir) => dir,
            None => panic!("Direction::right called on Stop"),
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::Stop => (0, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Stop => "Stop",
        }
    }

    pub(crate) fn bit(self) -> u8 {
        match self {
            Self::North => 0x01,
            Self::South => 0x02,
            Self::East => 0x04,
            Self::West => 0x08,
            Self::Stop => 0x10,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            "stop" | "x" => Ok(Self::Stop),
            _ => Err(MazeError::UnknownDirection {
                name: s.to_string(),
            }),
        }
    }
}
