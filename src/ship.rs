//! Ship definitions and the geometry of a placed run.

use alloc::string::String;
use core::fmt;

use crate::coord::Coord;

/// Direction a ship extends from its top-or-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Extends rightward along the row.
    Horizontal,
    /// Extends downward along the column.
    Vertical,
}

impl Direction {
    /// Both directions in the order placement strategies try them.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Cell `i` steps along this direction from `origin`.
    pub fn step(self, origin: Coord, i: usize) -> Coord {
        let i = i as i32;
        match self {
            Direction::Horizontal => Coord::new(origin.r, origin.c + i),
            Direction::Vertical => Coord::new(origin.r + i, origin.c),
        }
    }

    /// Iterator over the `length` cells of a run starting at `origin`.
    pub fn run(self, origin: Coord, length: usize) -> impl Iterator<Item = Coord> {
        (0..length).map(move |i| self.step(origin, i))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A registered kind of ship: its length, board symbol and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    length: usize,
    symbol: char,
    name: String,
}

impl ShipSpec {
    /// Build a spec. Validation happens when it is registered with a `Game`.
    pub fn new(length: usize, symbol: char, name: impl Into<String>) -> Self {
        Self {
            length,
            symbol,
            name: name.into(),
        }
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Ship's symbol on an owner's board.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ShipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' (length {})", self.name, self.symbol, self.length)
    }
}
