use crate::checkers::{ParseCellError, ParseUnitError};
use derive_more::{Display, Error, From};

/// The reason why parsing notation failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseNotationError {
    #[display(fmt = "failed to parse position token")]
    InvalidCell(ParseCellError),

    #[display(fmt = "failed to parse position token")]
    InvalidUnit(ParseUnitError),

    #[display(fmt = "position token `{}` does not list its units", _0)]
    #[from(ignore)]
    MissingUnits(#[error(not(source))] String),

    #[display(fmt = "`{}` is neither a step nor a capture", _0)]
    #[from(ignore)]
    InvalidMove(#[error(not(source))] String),

    #[display(fmt = "`{}` is not made of one or two moves", _0)]
    #[from(ignore)]
    InvalidTurn(#[error(not(source))] String),
}
