use crate::checkers::{Diagonal, Direction, File, NotDiagonal, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A cell on the board.
///
/// Cells are ordered by [`File`] first, then by [`Rank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Cell(File, Rank);

impl Cell {
    /// The number of cells on the board.
    pub const COUNT: usize = 64;

    /// Constructs [`Cell`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Cell(f, r)
    }

    /// This cell's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        self.0
    }

    /// This cell's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.1
    }

    /// This cell's position in the range `(0..Cell::COUNT)`, consistent with its ordering.
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.file().index() * 8 + self.rank().index()) as usize
    }

    /// An iterator over all cells in order.
    pub fn iter() -> impl Iterator<Item = Self> {
        File::iter().flat_map(|f| Rank::iter().map(move |r| Cell(f, r)))
    }

    /// Whether pieces may stand on this cell.
    ///
    /// Only the dark cells, those whose file and rank have the same parity, are playable.
    #[inline(always)]
    pub fn is_playable(&self) -> bool {
        (self.file().index() + self.rank().index()) % 2 == 0
    }

    /// The cell displaced by some number of files and ranks, if it is on the board.
    #[inline(always)]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        let f = File::from_index(self.file().index() + dx)?;
        let r = Rank::from_index(self.rank().index() + dy)?;
        Some(Cell(f, r))
    }

    /// The neighboring cell in a [`Direction`], if it is on the board.
    #[inline(always)]
    pub fn step(&self, d: Direction) -> Option<Self> {
        self.offset(d.dx(), d.dy())
    }

    /// The [`Diagonal`] leading from this cell to another.
    #[inline(always)]
    pub fn diagonal(&self, whither: Cell) -> Result<Diagonal, NotDiagonal> {
        Diagonal::new(whither.file() - self.file(), whither.rank() - self.rank())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Cell`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCellError {
    #[display(fmt = "failed to parse cell")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse cell")]
    InvalidRank(ParseRankError),
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Cell::new(s[..i].parse()?, s[i..].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_cell_from_pair_of_file_and_rank(c: Cell) {
        assert_eq!(Cell::new(c.file(), c.rank()), c);
    }

    #[proptest]
    fn index_is_consistent_with_ordering(a: Cell, b: Cell) {
        assert_eq!(a.index().cmp(&b.index()), a.cmp(&b));
    }

    #[test]
    fn iter_visits_every_cell_once_in_order() {
        let cells: Vec<_> = Cell::iter().collect();
        assert_eq!(cells.len(), Cell::COUNT);
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(cells.iter().collect::<BTreeSet<_>>().len(), Cell::COUNT);
    }

    #[test]
    fn half_of_the_cells_are_playable() {
        assert_eq!(Cell::iter().filter(Cell::is_playable).count(), Cell::COUNT / 2);
    }

    #[proptest]
    fn diagonal_neighbors_share_playability(c: Cell, d: Direction) {
        if let Some(n) = c.step(d) {
            assert_eq!(n.is_playable(), c.is_playable());
        }
    }

    #[proptest]
    fn orthogonal_neighbors_differ_in_playability(c: Cell) {
        if let Some(n) = c.offset(1, 0) {
            assert_ne!(n.is_playable(), c.is_playable());
        }
    }

    #[proptest]
    fn diagonal_is_antisymmetric(a: Cell, b: Cell) {
        match (a.diagonal(b), b.diagonal(a)) {
            (Ok(ab), Ok(ba)) => {
                assert_eq!(ab.dx(), -ba.dx());
                assert_eq!(ab.dy(), -ba.dy());
            }

            (ab, ba) => {
                assert_eq!(ab, Err(NotDiagonal));
                assert_eq!(ba, Err(NotDiagonal));
            }
        }
    }

    #[proptest]
    fn following_a_diagonal_reaches_its_end(a: Cell, b: Cell) {
        if let Ok(d) = a.diagonal(b) {
            assert_eq!(a.offset(d.dx(), d.dy()), Some(b));
        }
    }

    #[test]
    fn stepping_off_the_board_yields_none() {
        let a1 = Cell::new(File::A, Rank::First);
        assert_eq!(a1.step(Direction::SouthWest), None);
        assert_eq!(a1.step(Direction::NorthWest), None);
        assert_eq!(a1.step(Direction::SouthEast), None);
        assert_eq!(
            a1.step(Direction::NorthEast),
            Some(Cell::new(File::B, Rank::Second))
        );
    }

    #[proptest]
    fn parsing_printed_cell_is_an_identity(c: Cell) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_cell_ignores_case_of_file(c: Cell) {
        assert_eq!(c.to_string().to_uppercase().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_cell_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c) && !('A'..='H').contains(&#c))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Cell>(),
            Err(ParseCellError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn parsing_cell_fails_if_rank_invalid(
        f: File,
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Cell>(),
            Err(ParseCellError::InvalidRank(ParseRankError))
        );
    }

    #[proptest]
    fn parsing_cell_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Cell>().ok(), None);
    }
}
