//! Grid coordinates and board extents.

use core::fmt;

use crate::random::RandomSource;

/// A (row, column) position. Signed so that candidate cells generated off the
/// edge of the board can be represented and then rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub r: i32,
    pub c: i32,
}

impl Coord {
    pub const fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// Coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.r + dr, self.c + dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((r, c): (i32, i32)) -> Self {
        Self::new(r, c)
    }
}

/// Row and column extent of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `p` lies on the board.
    pub fn contains(&self, p: Coord) -> bool {
        p.r >= 0 && (p.r as usize) < self.rows && p.c >= 0 && (p.c as usize) < self.cols
    }

    /// Row-major index of `p`, or `None` when off the board.
    pub fn index(&self, p: Coord) -> Option<usize> {
        if self.contains(p) {
            Some(p.r as usize * self.cols + p.c as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Dimensions::index`].
    pub fn coord_at(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let dims = *self;
        (0..dims.area()).map(move |i| dims.coord_at(i))
    }

    /// Uniformly random cell on the board.
    pub fn random_point<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Coord {
        let r = rng.rand_int(self.rows);
        let c = rng.rand_int(self.cols);
        Coord::new(r as i32, c as i32)
    }
}
