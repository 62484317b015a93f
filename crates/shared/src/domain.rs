use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Side length of the square table the robot moves on.
pub const GRID_SIZE: i32 = 5;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(RobotId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Builds any pair; whether it lies on the table is checked by the caller.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn on_grid(x: i32, y: i32) -> Result<Self, CommandError> {
        let coordinate = Self::new(x, y);
        if coordinate.is_on_grid() {
            Ok(coordinate)
        } else {
            Err(CommandError::invalid_argument(format!(
                "coordinate {coordinate} is outside the {GRID_SIZE}x{GRID_SIZE} grid"
            )))
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub fn is_on_grid(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    /// Returns `None` only when the translation overflows `i32`.
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (x, y) = raw
            .split_once(',')
            .ok_or_else(|| CommandError::invalid_argument(format!("expected X,Y but got '{raw}'")))?;
        Ok(Self::new(parse_axis(x, "x")?, parse_axis(y, "y")?))
    }
}

fn parse_axis(raw: &str, axis: &str) -> Result<i32, CommandError> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .map_err(|_| CommandError::invalid_argument(format!("{axis} must be an integer, got '{raw}'")))
}

/// Compass heading, declared in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    const CLOCKWISE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    pub fn left(self) -> Self {
        self.turn(3)
    }

    pub fn right(self) -> Self {
        self.turn(1)
    }

    /// Unit step for a forward move; north is +y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    fn turn(self, quarter_turns: usize) -> Self {
        Self::CLOCKWISE[(self as usize + quarter_turns) % Self::CLOCKWISE.len()]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::CLOCKWISE
            .into_iter()
            .find(|orientation| orientation.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| CommandError::invalid_argument(format!("unknown orientation '{raw}'")))
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
