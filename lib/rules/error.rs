use crate::checkers::{Cell, Color, NotDiagonal};
use crate::notation::{ParseNotationError, Placement};
use derive_more::{Display, Error};

/// The rule that made a move a [`IllegalMove::GeneralError`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum Reason {
    #[display(fmt = "failed to parse notation")]
    Notation(ParseNotationError),

    #[display(fmt = "`{}` does not describe a {} piece", _1, _0)]
    InvalidPiece(Color, Placement),

    #[display(fmt = "cell `{}` is already occupied", _0)]
    Occupied(#[error(not(source))] Cell),

    #[display(fmt = "there is no {} piece on `{}`", _0, _1)]
    Missing(Color, Cell),

    #[display(fmt = "`{}` does not match the piece it refers to", _0)]
    Mismatch(#[error(not(source))] Placement),

    #[display(fmt = "pieces move along diagonals")]
    NotDiagonal(NotDiagonal),

    #[display(fmt = "men cannot move {} cells away", _0)]
    OutOfReach(#[error(not(source))] u8),

    #[display(fmt = "there is nothing to capture on the way to `{}`", _0)]
    NothingToCapture(#[error(not(source))] Cell),

    #[display(fmt = "the piece on `{}` has already been captured", _0)]
    Recaptured(#[error(not(source))] Cell),

    #[display(fmt = "a friendly piece on `{}` is in the way", _0)]
    Obstructed(#[error(not(source))] Cell),

    #[display(fmt = "more than one piece is in the way, the second on `{}`", _0)]
    Crowded(#[error(not(source))] Cell),

    #[display(fmt = "`{}` does not match the unit captured", _0)]
    CapturedMismatch(#[error(not(source))] Placement),

    #[display(fmt = "the game is over")]
    GameOver,

    #[display(fmt = "{} must move while it has pieces left", _0)]
    MissingMove(#[error(not(source))] Color),

    #[display(fmt = "the board is empty")]
    EmptyBoard,
}

/// The reason why a turn could not be played.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalMove {
    /// The destination is occupied.
    #[display(fmt = "busy cell")]
    BusyCell(#[error(not(source))] Cell),

    /// The destination is not playable.
    #[display(fmt = "white cell")]
    WhiteCell(#[error(not(source))] Cell),

    /// The piece on this cell had a capture available that was not taken.
    #[display(fmt = "invalid move")]
    InvalidMove(#[error(not(source))] Cell),

    /// Any other rule was broken.
    #[display(fmt = "general error")]
    GeneralError(Reason),
}

impl From<ParseNotationError> for Reason {
    fn from(e: ParseNotationError) -> Self {
        Reason::Notation(e)
    }
}

impl From<NotDiagonal> for Reason {
    fn from(e: NotDiagonal) -> Self {
        Reason::NotDiagonal(e)
    }
}

impl From<Reason> for IllegalMove {
    fn from(r: Reason) -> Self {
        IllegalMove::GeneralError(r)
    }
}
