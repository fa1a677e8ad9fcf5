use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// This rank's zero-based index.
    #[inline(always)]
    pub fn index(self) -> i8 {
        self as i8
    }

    /// The rank at a zero-based index, if any.
    #[inline(always)]
    pub fn from_index(i: i8) -> Option<Self> {
        usize::try_from(i).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// An iterator over all ranks, from `1` to `8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// This rank from the opponent's perspective.
    #[inline(always)]
    pub fn flip(self) -> Self {
        Self::ALL[7 - self as usize]
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.index() - rhs.index()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "failed to parse rank, expected digit in the range `({}..={})`",
    "Rank::First",
    "Rank::Eighth"
)]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Rank>>(), size_of::<Rank>());
    }

    #[proptest]
    fn subtracting_ranks_returns_distance(a: Rank, b: Rank) {
        assert_eq!(a - b, a.index() - b.index());
    }

    #[proptest]
    fn flipping_rank_returns_its_complement(r: Rank) {
        assert_eq!(r.flip().index(), 7 - r.index());
        assert_eq!(r.flip().flip(), r);
    }

    #[proptest]
    fn rank_can_be_recovered_from_its_index(r: Rank) {
        assert_eq!(Rank::from_index(r.index()), Some(r));
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_digit_between_1_and_8(
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
