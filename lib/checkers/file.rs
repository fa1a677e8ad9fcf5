use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A column on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// This file's zero-based index.
    #[inline(always)]
    pub fn index(self) -> i8 {
        self as i8
    }

    /// The file at a zero-based index, if any.
    #[inline(always)]
    pub fn from_index(i: i8) -> Option<Self> {
        usize::try_from(i).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// An iterator over all files, from `a` to `h`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl Sub for File {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.index() - rhs.index()
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse file, expected letter in the range `({}..={})`",
    "File::A",
    "File::H"
)]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "A" => Ok(File::A),
            "b" | "B" => Ok(File::B),
            "c" | "C" => Ok(File::C),
            "d" | "D" => Ok(File::D),
            "e" | "E" => Ok(File::E),
            "f" | "F" => Ok(File::F),
            "g" | "G" => Ok(File::G),
            "h" | "H" => Ok(File::H),
            _ => Err(ParseFileError),
        }
    }
}
