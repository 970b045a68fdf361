//! A rows×cols set of cells packed into a single unsigned integer.
//!
//! Used by the computer players to remember every cell they have already
//! fired at. The backing integer `T` bounds the board area; `u128` covers the
//! largest supported board.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::{Coord, Dimensions};

/// Errors returned by bit-grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// rows*cols exceeds the number of bits in `T`.
    AreaTooLarge { area: usize, capacity: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::AreaTooLarge { area, capacity } => {
                write!(f, "board area {} exceeds bit capacity {}", area, capacity)
            }
        }
    }
}

/// Set of cells on a board of fixed dimensions.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    dims: Dimensions,
    bits: T,
}

/// The grid used for shot histories; wide enough for a 10×10 board.
pub type ShotGrid = BitGrid<u128>;

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty grid over `dims`, or an error when `T` is too narrow for it.
    pub fn try_new(dims: Dimensions) -> Result<Self, BitGridError> {
        let capacity = mem::size_of::<T>() * 8;
        if dims.area() > capacity {
            Err(BitGridError::AreaTooLarge {
                area: dims.area(),
                capacity,
            })
        } else {
            Ok(Self {
                dims,
                bits: T::zero(),
            })
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True once every cell of the board is in the set.
    pub fn is_full(&self) -> bool {
        self.len() == self.dims.area()
    }

    /// Membership test; off-board cells are never members.
    pub fn contains(&self, p: Coord) -> bool {
        match self.dims.index(p) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `p`. Returns false if it was already present or is off the board.
    pub fn insert(&mut self, p: Coord) -> bool {
        match self.dims.index(p) {
            Some(idx) => {
                let bit = T::one() << idx;
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// First cell in row-major order not in the set.
    pub fn first_vacant(&self) -> Option<Coord> {
        self.dims.cells().find(|&p| !self.contains(p))
    }

    /// Iterator over members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.dims.cells().filter(move |&p| self.contains(p))
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.dims.rows(), self.dims.cols())?;
        for r in 0..self.dims.rows() {
            for c in 0..self.dims.cols() {
                let ch = if self.contains(Coord::new(r as i32, c as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
