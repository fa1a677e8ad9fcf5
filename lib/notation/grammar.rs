use crate::notation::{Move, ParseNotationError, Placement, Turn};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether position tokens must list the units on their cells.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Bare cells such as `c3` are accepted.
    #[default]
    #[display(fmt = "optional")]
    Optional,

    /// Every token must look like `c3_w`.
    #[display(fmt = "required")]
    Required,
}

/// The notation of moves and turns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename = "grammar", default)]
pub struct Grammar {
    /// Separates the two cells of a step.
    pub step: char,

    /// Separates the cells of a capture chain.
    pub capture: char,

    /// Whether position tokens must list their units.
    pub units: Units,
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar {
            step: '-',
            capture: ':',
            units: Units::Optional,
        }
    }
}

impl Grammar {
    /// Separates the moves in a turn.
    pub const TURN: char = ' ';

    fn validate(self) -> Result<Self, ParseGrammarError> {
        for c in [self.step, self.capture] {
            if c.is_alphanumeric() || c.is_whitespace() || c == Placement::SEPARATOR {
                return Err(ParseGrammarError::InvalidSeparator(c));
            }
        }

        if self.step == self.capture {
            return Err(ParseGrammarError::AmbiguousSeparators);
        }

        Ok(self)
    }

    /// Parses a position token.
    pub fn parse_placement(&self, s: &str) -> Result<Placement, ParseNotationError> {
        let p: Placement = s.parse()?;

        if p.is_bare() && self.units == Units::Required {
            Err(ParseNotationError::MissingUnits(s.into()))
        } else {
            Ok(p)
        }
    }

    /// Parses a whitespace separated list of position tokens.
    pub fn parse_setup(&self, s: &str) -> Result<Vec<Placement>, ParseNotationError> {
        s.split_whitespace()
            .map(|t| self.parse_placement(t))
            .collect()
    }

    /// Parses either a step or a capture chain.
    pub fn parse_move(&self, s: &str) -> Result<Move, ParseNotationError> {
        if let Some((whence, whither)) = s.split_once(self.step) {
            return Ok(Move::Step {
                whence: self.parse_placement(whence)?,
                whither: self.parse_placement(whither)?,
            });
        }

        let mut tokens = s.split(self.capture);
        let whence = match tokens.next() {
            Some(t) => self.parse_placement(t)?,
            None => return Err(ParseNotationError::InvalidMove(s.into())),
        };

        let hops = tokens
            .map(|t| self.parse_placement(t))
            .collect::<Result<Vec<_>, _>>()?;

        if hops.is_empty() {
            Err(ParseNotationError::InvalidMove(s.into()))
        } else {
            Ok(Move::Capture { whence, hops })
        }
    }

    /// Parses white's move optionally followed by black's.
    pub fn parse_turn(&self, s: &str) -> Result<Turn, ParseNotationError> {
        let mut moves = s.split(Self::TURN);

        let white = match moves.next() {
            Some(m) if !m.is_empty() => self.parse_move(m)?,
            _ => return Err(ParseNotationError::InvalidTurn(s.into())),
        };

        let black = moves.next().map(|m| self.parse_move(m)).transpose()?;

        if moves.next().is_some() {
            return Err(ParseNotationError::InvalidTurn(s.into()));
        }

        Ok(Turn { white, black })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Grammar`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseGrammarError {
    #[display(fmt = "failed to parse grammar")]
    InvalidSyntax(ron::de::SpannedError),

    #[display(fmt = "`{:?}` cannot separate cells", _0)]
    InvalidSeparator(#[error(not(source))] char),

    #[display(fmt = "steps and captures must be told apart")]
    AmbiguousSeparators,
}

impl From<ron::de::SpannedError> for ParseGrammarError {
    fn from(e: ron::de::SpannedError) -> Self {
        ParseGrammarError::InvalidSyntax(e)
    }
}

impl FromStr for Grammar {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ron::de::from_str::<Grammar>(s)?.validate()
    }
}
