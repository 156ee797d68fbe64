use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownName;

/// One of the four sides of a tile.
///
/// The declaration order is the clockwise order starting from the north side,
/// which is also the order used by [`Side::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// The side that this side moves to when its tile is turned a quarter clockwise.
    pub fn clockwise(self) -> Side {
        match self {
            Side::North => Side::East,
            Side::East => Side::South,
            Side::South => Side::West,
            Side::West => Side::North,
        }
    }

    /// The inverse of [`Self::clockwise()`].
    pub fn counterclockwise(self) -> Side {
        match self {
            Side::North => Side::West,
            Side::East => Side::North,
            Side::South => Side::East,
            Side::West => Side::South,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// The `(row, column)` step that leads to the neighbour on this side.
    ///
    /// Rows grow towards the south, columns towards the east.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Side::North => (-1, 0),
            Side::East => (0, 1),
            Side::South => (1, 0),
            Side::West => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a side name, ignoring case.
impl FromStr for Side {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName {
                expected: "side",
                found: String::from(s),
            })
    }
}

/// Position of a cell on the [board](crate::Board).
///
/// Coordinates are logical: a tile keeps its coordinates for the whole game,
/// even when the board grows to the north or to the west, so they can be
/// negative. The derived ordering is row first, then column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub row: i32,
    pub column: i32,
}

impl Coords {
    pub const ORIGIN: Coords = Coords { row: 0, column: 0 };

    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn neighbor(self, side: Side) -> Coords {
        let (delta_row, delta_column) = side.delta();
        Coords {
            row: self.row + delta_row,
            column: self.column + delta_column,
        }
    }

    /// The four neighbours, in the order of [`Side::ALL`].
    pub fn neighbors(self) -> [(Side, Coords); 4] {
        Side::ALL.map(|side| (side, self.neighbor(side)))
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
