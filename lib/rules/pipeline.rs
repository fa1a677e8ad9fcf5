use crate::checkers::{Cell, Color, Diagonal, Direction};
use crate::notation::{Move, Placement};
use crate::rules::{Board, IllegalMove, Piece, Reason};
use tracing::{debug, instrument, trace};

impl<P: Piece> Board<P> {
    /// Validates and plays a [`Move`] on behalf of one side.
    ///
    /// Checks are made as the move unfolds, so the board may be left partially
    /// updated if the move turns out to be illegal.
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(&mut self, side: Color, m: &Move) -> Result<(), IllegalMove> {
        match m {
            Move::Step { whence, whither } => self.step(side, whence, whither)?,
            Move::Capture { whence, hops } => self.chain(side, whence, hops)?,
        }

        self.unlock();
        Ok(())
    }

    fn actor(&self, side: Color, whence: &Placement) -> Result<&P, Reason> {
        match self.get(whence.cell()) {
            Some(p) if p.color() != side => Err(Reason::Missing(side, whence.cell())),
            Some(p) if !whence.is_bare() && p.placement() != *whence => {
                Err(Reason::Mismatch(whence.clone()))
            }
            Some(p) => Ok(p),
            None => Err(Reason::Missing(side, whence.cell())),
        }
    }

    fn step(
        &mut self,
        side: Color,
        whence: &Placement,
        whither: &Placement,
    ) -> Result<(), IllegalMove> {
        let piece = self.actor(side, whence)?;
        piece.check_notation(whither, false)?;
        let king = piece.is_king();

        for p in self.pieces(side) {
            self.check_obligation(p)?;
        }

        self.check_destination(whence.cell(), whither.cell(), king, 1)?;

        if let Some(p) = self.relocate(whence.cell(), whither.cell()) {
            p.tag_promotion_on_last_rank();
            p.promote();
            debug!(%whence, %whither, king = p.is_king(), "stepped");
        }

        Ok(())
    }

    fn chain(
        &mut self,
        side: Color,
        whence: &Placement,
        hops: &[Placement],
    ) -> Result<(), IllegalMove> {
        let mut cell = self.actor(side, whence)?.cell();

        for whither in hops {
            self.hop(cell, whither)?;
            cell = whither.cell();
        }

        if let Some(p) = self.get_mut(cell) {
            p.promote();
            debug!(%whence, whither = %cell, king = p.is_king(), "captured");
        }

        match self.get(cell) {
            Some(p) => self.check_obligation(p),
            None => Ok(()),
        }
    }

    fn hop(&mut self, whence: Cell, whither: &Placement) -> Result<(), IllegalMove> {
        let hunter = self.get(whence).ok_or(Reason::NothingToCapture(whither.cell()))?;
        hunter.check_notation(whither, true)?;

        let diagonal = self.check_destination(whence, whither.cell(), hunter.is_king(), 2)?;
        let prey = self.prey(hunter, whence, whither.cell(), diagonal)?;

        if let Some(victim) = self.get(prey) {
            if victim.is_beaten() {
                return Err(Reason::Recaptured(prey).into());
            }

            victim.check_captured(whither)?;
        }

        trace!(%whence, %prey, whither = %whither.cell(), "hop");
        self.capture(whence, prey);

        if let Some(p) = self.relocate(whence, whither.cell()) {
            p.tag_promotion_on_last_rank();
        }

        Ok(())
    }

    /// Checks that a piece may land on `whither`, returning the way there.
    fn check_destination(
        &self,
        whence: Cell,
        whither: Cell,
        king: bool,
        reach: u8,
    ) -> Result<Diagonal, IllegalMove> {
        if !whither.is_playable() {
            return Err(IllegalMove::WhiteCell(whither));
        }

        let diagonal = whence.diagonal(whither).map_err(Reason::from)?;

        if !king && diagonal.distance() != reach {
            return Err(Reason::OutOfReach(diagonal.distance()).into());
        }

        if self.get(whither).is_some() {
            return Err(IllegalMove::BusyCell(whither));
        }

        Ok(diagonal)
    }

    /// Finds the single enemy standing on the way.
    fn prey(
        &self,
        hunter: &P,
        whence: Cell,
        whither: Cell,
        diagonal: Diagonal,
    ) -> Result<Cell, Reason> {
        let mut prey = None;

        for cell in diagonal.path(whence) {
            match self.get(cell) {
                None => continue,
                Some(p) if p.color() == hunter.color() => return Err(Reason::Obstructed(cell)),
                Some(_) if prey.is_some() => return Err(Reason::Crowded(cell)),
                Some(_) => prey = Some(cell),
            }
        }

        prey.ok_or(Reason::NothingToCapture(whither))
    }

    /// Fails if a piece has a capture available.
    ///
    /// Men look at their neighbors, whereas kings look as far as the first piece on every diagonal.
    fn check_obligation(&self, piece: &P) -> Result<(), IllegalMove> {
        let reach = if piece.is_king() { 7 } else { 1 };

        for d in Direction::ALL {
            let mut cell = piece.cell();

            for _ in 0..reach {
                let Some(next) = cell.step(d) else { break };
                let Some(beyond) = next.step(d) else { break };

                match self.get(next) {
                    None => cell = next,
                    Some(p) if p.color() == piece.color() || p.is_beaten() => break,
                    Some(_) if self.get(beyond).is_some() => break,
                    Some(_) => {
                        debug!(whence = %piece.cell(), prey = %next, "capture available");
                        return Err(IllegalMove::InvalidMove(piece.cell()));
                    }
                }
            }
        }

        Ok(())
    }
}
