use crate::checkers::{Cell, Color};
use crate::rules::{Piece, Reason};
use std::array;
use tracing::trace;

/// The pieces on the board, indexed by [`Cell`].
#[derive(Debug, Clone)]
pub struct Board<P> {
    cells: [Option<P>; Cell::COUNT],
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Board {
            cells: array::from_fn(|_| None),
        }
    }
}

impl<P: Piece> Board<P> {
    /// Puts a piece on its [`Cell`], which must be playable and empty.
    pub fn place(&mut self, piece: P) -> Result<(), Reason> {
        let cell = piece.cell();

        if !cell.is_playable() {
            return Err(Reason::InvalidPiece(piece.color(), piece.placement()));
        }

        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return Err(Reason::Occupied(cell));
        }

        *slot = Some(piece);
        Ok(())
    }

    /// The piece on a [`Cell`], if any.
    #[inline(always)]
    pub fn get(&self, cell: Cell) -> Option<&P> {
        self.cells[cell.index()].as_ref()
    }

    /// The piece on a [`Cell`], if any.
    #[inline(always)]
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut P> {
        self.cells[cell.index()].as_mut()
    }

    /// An iterator over the pieces on the board, in the order of their cells.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.cells.iter().flatten()
    }

    /// An iterator over the pieces of some [`Color`], in the order of their cells.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &P> {
        self.iter().filter(move |p| p.color() == color)
    }

    /// Whether any piece of some [`Color`] is left.
    pub fn contains(&self, color: Color) -> bool {
        self.pieces(color).next().is_some()
    }

    /// Whether there are no pieces at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Moves the piece from one [`Cell`] to another, which must be empty.
    pub fn relocate(&mut self, whence: Cell, whither: Cell) -> Option<&mut P> {
        debug_assert!(self.get(whither).is_none());

        let mut piece = self.cells[whence.index()].take()?;
        piece.relocate(whither);
        Some(self.cells[whither.index()].insert(piece))
    }

    /// Lets the piece on `attacker` capture the piece on `victim`.
    ///
    /// A victim left with nothing to stand on falls off the board at once.
    pub fn capture(&mut self, attacker: Cell, victim: Cell) {
        let Some(mut prey) = self.cells[victim.index()].take() else {
            return;
        };

        if let Some(hunter) = self.get_mut(attacker) {
            hunter.capture(&mut prey);
        }

        if prey.is_valid() {
            self.cells[victim.index()] = Some(prey);
        } else {
            trace!(%victim, "piece fell off the board");
        }
    }

    /// Resets the transient state of every piece.
    pub fn unlock(&mut self) {
        for p in self.cells.iter_mut().flatten() {
            p.unlock();
        }
    }
}
