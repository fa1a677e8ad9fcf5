use crate::checkers::{Cell, Unit};
use crate::notation::ParseNotationError;
use std::fmt::{self, Write};
use std::str::FromStr;

/// A position token, such as `c3` or `c3_wbW`.
///
/// Names a [`Cell`] and, optionally, every [`Unit`] stacked on it from top to bottom.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    cell: Cell,
    units: Vec<Unit>,
}

impl Placement {
    /// Separates the cell from the units.
    pub const SEPARATOR: char = '_';

    /// Constructs [`Placement`] from a [`Cell`] and the [`Unit`]s on it, top first.
    pub fn new(cell: Cell, units: impl IntoIterator<Item = Unit>) -> Self {
        Placement {
            cell,
            units: units.into_iter().collect(),
        }
    }

    /// The [`Cell`] named.
    #[inline(always)]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The [`Unit`]s listed, top first.
    ///
    /// Empty if this is a bare cell.
    #[inline(always)]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Whether this token names a cell and nothing else.
    #[inline(always)]
    pub fn is_bare(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cell, f)?;

        if !self.is_bare() {
            f.write_char(Self::SEPARATOR)?;
            for u in &self.units {
                fmt::Display::fmt(u, f)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Placement {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cell, units) = match s.split_once(Self::SEPARATOR) {
            None => (s, None),
            Some((cell, units)) => (cell, Some(units)),
        };

        let cell = cell.parse()?;
        let units = match units {
            None => Vec::new(),
            Some("") => return Err(ParseNotationError::MissingUnits(s.into())),
            Some(us) => us.chars().map(Unit::try_from).collect::<Result<_, _>>()?,
        };

        Ok(Placement { cell, units })
    }
}
