use crate::notation::Placement;
use derive_more::Constructor;
use std::fmt::{self, Write};

/// The state of the board, as the position tokens of either side in order of their cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Snapshot {
    pub white: Vec<Placement>,
    pub black: Vec<Placement>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in [&self.white, &self.black] {
            for p in side {
                write!(f, "{} ", p)?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
