use crate::checkers::{Cell, Color, Unit};
use crate::notation::Placement;
use crate::rules::{Piece, Reason};
use std::{collections::VecDeque, fmt};

/// A stack of [`Unit`]s standing on a [`Cell`].
///
/// The unit on top decides whom the tower belongs to and how it moves.
/// Capturing a tower takes only its top unit, which goes to the bottom of the captor.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tower {
    cell: Cell,
    units: VecDeque<Unit>,
    color: Color,
    beaten: bool,
    promotion: bool,
}

impl Tower {
    /// The [`Unit`] on top, unless this tower is empty.
    #[inline(always)]
    pub fn top(&self) -> Option<&Unit> {
        self.units.front()
    }

    /// The [`Unit`]s in this tower, top first.
    #[inline(always)]
    pub fn units(&self) -> impl DoubleEndedIterator<Item = &Unit> + ExactSizeIterator {
        self.units.iter()
    }

    /// The number of [`Unit`]s in this tower.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.units.len()
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.placement(), f)
    }
}

impl Piece for Tower {
    fn new(color: Color, placement: &Placement) -> Result<Self, Reason> {
        let units: VecDeque<_> = if placement.is_bare() {
            [Unit::man(color)].into()
        } else {
            placement.units().iter().copied().collect()
        };

        match units.front() {
            Some(top) if top.color() == color => Ok(Tower {
                cell: placement.cell(),
                units,
                color,
                beaten: false,
                promotion: false,
            }),

            _ => Err(Reason::InvalidPiece(color, placement.clone())),
        }
    }

    #[inline(always)]
    fn cell(&self) -> Cell {
        self.cell
    }

    #[inline(always)]
    fn relocate(&mut self, whither: Cell) {
        self.cell = whither;
    }

    #[inline(always)]
    fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    fn is_king(&self) -> bool {
        self.top().map_or(false, Unit::is_king)
    }

    fn placement(&self) -> Placement {
        Placement::new(self.cell, self.units.iter().copied())
    }

    #[inline(always)]
    fn tag_promotion(&mut self) {
        self.promotion = true;
    }

    #[inline(always)]
    fn is_promotion_pending(&self) -> bool {
        self.promotion
    }

    fn promote(&mut self) {
        if std::mem::take(&mut self.promotion) {
            if let Some(top) = self.units.front_mut() {
                top.promote();
            }
        }
    }

    #[inline(always)]
    fn mark_beaten(&mut self) {
        self.beaten = true;
    }

    #[inline(always)]
    fn is_beaten(&self) -> bool {
        self.beaten
    }

    fn unlock(&mut self) {
        if let Some(top) = self.top() {
            self.color = top.color();
        }

        self.beaten = false;
        self.promotion = false;
    }

    #[inline(always)]
    fn is_valid(&self) -> bool {
        !self.units.is_empty()
    }

    fn check_notation(&self, whither: &Placement, capturing: bool) -> Result<(), Reason> {
        if whither.is_bare() {
            return Ok(());
        }

        let units = whither.units();
        let agrees = match (capturing, units.split_last()) {
            (false, _) => units.iter().eq(self.units()),
            (true, Some((last, rest))) => {
                last.color() != self.color && rest.iter().eq(self.units())
            }
            (true, None) => false,
        };

        if agrees {
            Ok(())
        } else {
            Err(Reason::Mismatch(whither.clone()))
        }
    }

    fn check_captured(&self, whither: &Placement) -> Result<(), Reason> {
        match whither.units().last() {
            None => Ok(()),
            Some(u) if u.is_king() == self.is_king() => Ok(()),
            _ => Err(Reason::CapturedMismatch(whither.clone())),
        }
    }

    fn capture(&mut self, victim: &mut Self) {
        if let Some(u) = victim.units.pop_front() {
            self.units.push_back(u);
        }

        victim.mark_beaten();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{File, Rank};
    use test_strategy::proptest;

    fn tower(color: Color, token: &str) -> Tower {
        Tower::new(color, &token.parse().unwrap()).unwrap()
    }

    #[proptest]
    fn bare_cell_sets_up_a_single_man(c: Color, cell: Cell) {
        let t = Tower::new(c, &Placement::new(cell, []))?;
        assert_eq!(t.cell(), cell);
        assert_eq!(t.color(), c);
        assert_eq!(t.units().collect::<Vec<_>>(), [&Unit::man(c)]);
        assert!(!t.is_king());
        assert!(t.is_valid());
    }

    #[proptest]
    fn placement_of_new_tower_is_an_identity(c: Color, cell: Cell, king: bool, rest: Vec<Unit>) {
        let top = if king { Unit::king(c) } else { Unit::man(c) };
        let p = Placement::new(cell, [top].into_iter().chain(rest));
        assert_eq!(Tower::new(c, &p)?.placement(), p);
    }

    #[proptest]
    fn setting_up_tower_fails_if_top_unit_is_of_another_color(c: Color, cell: Cell) {
        let p = Placement::new(cell, [Unit::man(!c), Unit::man(c)]);
        assert_eq!(Tower::new(c, &p), Err(Reason::InvalidPiece(c, p)));
    }

    #[test]
    fn king_on_top_makes_a_king() {
        assert!(tower(Color::White, "c3_Wb").is_king());
        assert!(!tower(Color::White, "c3_wB").is_king());
    }

    #[test]
    fn capture_moves_the_top_unit_of_the_victim_to_the_bottom_of_the_captor() {
        let mut captor = tower(Color::White, "c3_wb");
        let mut victim = tower(Color::Black, "d4_Bww");

        captor.capture(&mut victim);

        assert_eq!(captor.placement().to_string(), "c3_wbB");
        assert_eq!(victim.placement().to_string(), "d4_ww");
        assert!(victim.is_beaten());
        assert!(victim.is_valid());
        assert_eq!(victim.color(), Color::Black);
    }

    #[test]
    fn unlock_recomputes_color_from_top_unit() {
        let mut captor = tower(Color::White, "c3_w");
        let mut victim = tower(Color::Black, "d4_bw");

        captor.capture(&mut victim);
        victim.unlock();

        assert_eq!(victim.color(), Color::White);
        assert!(!victim.is_beaten());
    }

    #[test]
    fn capturing_the_last_unit_invalidates_the_victim() {
        let mut captor = tower(Color::White, "c3_w");
        let mut victim = tower(Color::Black, "d4_b");

        captor.capture(&mut victim);
        victim.unlock();

        assert!(!victim.is_valid());
        assert_eq!(victim.color(), Color::Black);
        assert_eq!(captor.height(), 2);
    }

    #[proptest]
    fn capture_conserves_units(a: Color, b: Color, x: Vec<Unit>, y: Vec<Unit>, c: Cell, d: Cell) {
        let mut captor = Tower::new(a, &Placement::new(c, [Unit::man(a)].into_iter().chain(x)))?;
        let mut victim = Tower::new(b, &Placement::new(d, [Unit::man(b)].into_iter().chain(y)))?;
        let total = captor.height() + victim.height();

        captor.capture(&mut victim);

        assert_eq!(captor.height() + victim.height(), total);
    }

    #[test]
    fn promotion_takes_effect_only_once_committed() {
        let mut t = tower(Color::White, "c8_wb");
        t.tag_promotion_on_last_rank();

        assert!(t.is_promotion_pending());
        assert!(!t.is_king());

        t.promote();

        assert!(t.is_king());
        assert!(!t.is_promotion_pending());
        assert_eq!(t.placement().to_string(), "c8_Wb");
    }

    #[test]
    fn unlock_discards_pending_promotion() {
        let mut t = tower(Color::Black, "d1_b");
        t.tag_promotion_on_last_rank();
        t.unlock();
        t.promote();

        assert!(!t.is_king());
    }

    #[proptest]
    fn men_away_from_their_last_rank_are_not_tagged(
        c: Color,
        f: File,
        #[filter(#r != #c.last_rank())] r: Rank,
    ) {
        let mut t = Tower::new(c, &Placement::new(Cell::new(f, r), []))?;
        t.tag_promotion_on_last_rank();
        assert!(!t.is_promotion_pending());
    }

    #[test]
    fn kings_are_not_tagged() {
        let mut t = tower(Color::White, "b8_W");
        t.tag_promotion_on_last_rank();
        assert!(!t.is_promotion_pending());
    }

    #[test]
    fn step_notation_must_repeat_the_units() {
        let t = tower(Color::White, "c3_wb");

        assert_eq!(t.check_notation(&"d4_wb".parse().unwrap(), false), Ok(()));

        for token in ["d4_w", "d4_wbb", "d4_Wb"] {
            let p: Placement = token.parse().unwrap();
            assert_eq!(t.check_notation(&p, false), Err(Reason::Mismatch(p)));
        }
    }

    #[test]
    fn capture_notation_must_append_one_enemy_unit() {
        let t = tower(Color::White, "c3_wb");

        assert_eq!(t.check_notation(&"e5_wbb".parse().unwrap(), true), Ok(()));
        assert_eq!(t.check_notation(&"e5_wbB".parse().unwrap(), true), Ok(()));

        for token in ["e5_wb", "e5_wbw", "e5_wbbb", "e5_bbb"] {
            let p: Placement = token.parse().unwrap();
            assert_eq!(t.check_notation(&p, true), Err(Reason::Mismatch(p)));
        }
    }

    #[proptest]
    fn bare_notation_agrees_with_any_tower(
        c: Color,
        #[strategy(1usize..=4)] height: usize,
        whither: Cell,
        capturing: bool,
    ) {
        let whence = Cell::new(File::A, Rank::First);
        let t = Tower::new(c, &Placement::new(whence, vec![Unit::man(c); height]))?;
        let p = Placement::new(whither, []);

        assert_eq!(t.check_notation(&p, capturing), Ok(()));
        assert_eq!(t.check_captured(&p), Ok(()));
    }

    #[test]
    fn captured_unit_must_match_the_victim() {
        let man = tower(Color::Black, "d4_b");
        let king = tower(Color::Black, "d4_Bw");

        let p: Placement = "e5_wb".parse().unwrap();
        assert_eq!(man.check_captured(&p), Ok(()));
        assert_eq!(king.check_captured(&p), Err(Reason::CapturedMismatch(p)));

        let p: Placement = "e5_wB".parse().unwrap();
        assert_eq!(king.check_captured(&p), Ok(()));
        assert_eq!(man.check_captured(&p), Err(Reason::CapturedMismatch(p)));
    }

    #[test]
    fn tower_is_printed_as_its_placement() {
        assert_eq!(tower(Color::Black, "h8").to_string(), "h8_b");
    }
}
