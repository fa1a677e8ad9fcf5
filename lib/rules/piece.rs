use crate::checkers::{Cell, Color};
use crate::notation::Placement;
use crate::rules::Reason;

/// The occupant of a cell, as seen by the rules.
///
/// A piece may carry transient state that lasts until the end of the current move,
/// namely whether it has been captured and whether it is due a promotion.
/// That state is reset by [`Piece::unlock`].
pub trait Piece: Sized {
    /// Sets up a piece of some [`Color`] as described by a [`Placement`].
    fn new(color: Color, placement: &Placement) -> Result<Self, Reason>;

    /// The [`Cell`] this piece stands on.
    fn cell(&self) -> Cell;

    /// Moves this piece to another [`Cell`].
    fn relocate(&mut self, whither: Cell);

    /// The side this piece belongs to.
    fn color(&self) -> Color;

    /// Whether this piece moves as a king.
    fn is_king(&self) -> bool;

    /// This piece written as a position token.
    fn placement(&self) -> Placement;

    /// Tags this piece for promotion, to take effect on [`Piece::promote`].
    fn tag_promotion(&mut self);

    /// Whether this piece is due a promotion.
    fn is_promotion_pending(&self) -> bool;

    /// Commits a pending promotion, if any.
    fn promote(&mut self);

    /// Marks this piece as captured.
    fn mark_beaten(&mut self);

    /// Whether this piece has been captured during the current move.
    fn is_beaten(&self) -> bool;

    /// Resets the transient state of this piece.
    fn unlock(&mut self);

    /// Whether this piece still has anything left to stand on the board.
    fn is_valid(&self) -> bool;

    /// Checks that a destination token agrees with this piece.
    ///
    /// A bare token names a cell only and always agrees.
    fn check_notation(&self, whither: &Placement, capturing: bool) -> Result<(), Reason>;

    /// Checks that a destination token agrees with what is taken from this piece.
    ///
    /// A bare token names a cell only and always agrees.
    fn check_captured(&self, whither: &Placement) -> Result<(), Reason>;

    /// Takes something from `victim` and marks it as captured.
    fn capture(&mut self, victim: &mut Self);

    /// Tags this piece for promotion if it is a man on its last rank.
    fn tag_promotion_on_last_rank(&mut self) {
        if !self.is_king() && self.cell().rank() == self.color().last_rank() {
            self.tag_promotion();
        }
    }
}
