use crate::checkers::Color;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A single checker, the building block of a [`Tower`][`crate::checkers::Tower`].
///
/// Written as its color's initial, in upper case if it is a king.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Unit {
    color: Color,
    king: bool,
}

impl Unit {
    /// A regular checker of some [`Color`].
    #[inline(always)]
    pub fn man(color: Color) -> Self {
        Unit { color, king: false }
    }

    /// A king of some [`Color`].
    #[inline(always)]
    pub fn king(color: Color) -> Self {
        Unit { color, king: true }
    }

    /// This unit's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this unit has been promoted.
    #[inline(always)]
    pub fn is_king(&self) -> bool {
        self.king
    }

    /// Promotes this unit, which remains a king forever after.
    #[inline(always)]
    pub fn promote(&mut self) {
        self.king = true;
    }
}

impl TryFrom<char> for Unit {
    type Error = ParseUnitError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'w' => Ok(Unit::man(Color::White)),
            'W' => Ok(Unit::king(Color::White)),
            'b' => Ok(Unit::man(Color::Black)),
            'B' => Ok(Unit::king(Color::Black)),
            _ => Err(ParseUnitError),
        }
    }
}

impl From<Unit> for char {
    fn from(u: Unit) -> Self {
        match (u.color(), u.is_king()) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

/// The reason why parsing [`Unit`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse unit, expected one of `w`, `W`, `b` or `B`")]
pub struct ParseUnitError;

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseUnitError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn men_are_not_kings(c: Color) {
        assert!(!Unit::man(c).is_king());
        assert_eq!(Unit::man(c).color(), c);
    }

    #[proptest]
    fn promotion_preserves_color(mut u: Unit) {
        let c = u.color();
        u.promote();
        assert!(u.is_king());
        assert_eq!(u.color(), c);
    }

    #[proptest]
    fn promotion_is_idempotent(c: Color) {
        let mut u = Unit::man(c);
        u.promote();
        u.promote();
        assert_eq!(u, Unit::king(c));
    }

    #[proptest]
    fn kings_are_printed_in_upper_case(u: Unit) {
        let s = u.to_string();
        assert_eq!(u.is_king(), s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[proptest]
    fn parsing_printed_unit_is_an_identity(u: Unit) {
        assert_eq!(u.to_string().parse(), Ok(u));
    }

    #[proptest]
    fn parsing_unit_fails_if_not_one_of_wwbb(
        #[filter(!['w', 'W', 'b', 'B'].contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Unit>(), Err(ParseUnitError));
    }

    #[proptest]
    fn parsing_unit_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<Unit>(), Err(ParseUnitError));
    }
}
