use crate::checkers::Cell;
use derive_more::{Display, Error};

/// One of the four diagonal directions on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    #[display(fmt = "north-east")]
    NorthEast,
    #[display(fmt = "north-west")]
    NorthWest,
    #[display(fmt = "south-east")]
    SouthEast,
    #[display(fmt = "south-west")]
    SouthWest,
}

impl Direction {
    /// All four diagonal directions.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The file increment of a single step in this direction.
    #[inline(always)]
    pub fn dx(self) -> i8 {
        match self {
            Direction::NorthEast | Direction::SouthEast => 1,
            Direction::NorthWest | Direction::SouthWest => -1,
        }
    }

    /// The rank increment of a single step in this direction.
    #[inline(always)]
    pub fn dy(self) -> i8 {
        match self {
            Direction::NorthEast | Direction::NorthWest => 1,
            Direction::SouthEast | Direction::SouthWest => -1,
        }
    }
}

/// The reason why two cells do not share a [`Diagonal`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "cells do not share a diagonal")]
pub struct NotDiagonal;

/// The displacement between two cells that share a diagonal.
///
/// Holds the invariant `|dx| == |dy|`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Diagonal {
    dx: i8,
    dy: i8,
}

impl Diagonal {
    /// Constructs [`Diagonal`] from a pair of increments, if they have the same magnitude.
    #[inline(always)]
    pub fn new(dx: i8, dy: i8) -> Result<Self, NotDiagonal> {
        if dx.abs() == dy.abs() {
            Ok(Diagonal { dx, dy })
        } else {
            Err(NotDiagonal)
        }
    }

    /// The file increment.
    #[inline(always)]
    pub fn dx(&self) -> i8 {
        self.dx
    }

    /// The rank increment.
    #[inline(always)]
    pub fn dy(&self) -> i8 {
        self.dy
    }

    /// The number of single steps this displacement is made of.
    #[inline(always)]
    pub fn distance(&self) -> u8 {
        self.dx.unsigned_abs()
    }

    /// The [`Direction`] of this displacement, unless it is null.
    pub fn direction(&self) -> Option<Direction> {
        match (self.dx.signum(), self.dy.signum()) {
            (1, 1) => Some(Direction::NorthEast),
            (-1, 1) => Some(Direction::NorthWest),
            (1, -1) => Some(Direction::SouthEast),
            (-1, -1) => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// The cells strictly between `whence` and the end of this displacement.
    pub fn path(&self, whence: Cell) -> impl Iterator<Item = Cell> {
        let (sx, sy) = (self.dx.signum(), self.dy.signum());
        (1..self.dx.abs()).filter_map(move |i| whence.offset(sx * i, sy * i))
    }
}
