use crate::checkers::{Color, Tower};
use crate::notation::Grammar;
use crate::rules::{Board, IllegalMove, Piece, Reason, Snapshot};
use tracing::{debug, instrument};

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game<P = Tower> {
    grammar: Grammar,
    board: Board<P>,
    over: bool,
}

impl<P: Piece> Game<P> {
    /// Sets up a game from the position tokens of either side.
    pub fn new(grammar: Grammar, white: &str, black: &str) -> Result<Self, IllegalMove> {
        let mut board = Board::default();

        for (color, setup) in [(Color::White, white), (Color::Black, black)] {
            for placement in grammar.parse_setup(setup).map_err(Reason::from)? {
                board.place(P::new(color, &placement)?)?;
            }
        }

        Ok(Game {
            grammar,
            board,
            over: false,
        })
    }

    /// The [`Grammar`] turns are written in.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    /// Whether the game has ended.
    ///
    /// A game ends once a turn leaves black with nothing to move.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Plays a turn.
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(&mut self, turn: &str) -> Result<(), IllegalMove> {
        if self.over {
            return Err(Reason::GameOver.into());
        }

        let turn = self.grammar.parse_turn(turn).map_err(Reason::from)?;
        self.board.execute(Color::White, &turn.white)?;

        match &turn.black {
            Some(m) => self.board.execute(Color::Black, m)?,
            None if self.board.contains(Color::Black) => {
                return Err(Reason::MissingMove(Color::Black).into())
            }
            None => {
                debug!("black has nothing left to move");
                self.over = true;
            }
        }

        Ok(())
    }

    /// Plays every turn in order, then takes a [`Snapshot`] of the board.
    ///
    /// Stops at the first illegal turn.
    pub fn run<I>(mut self, turns: I) -> Result<Snapshot, IllegalMove>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for turn in turns {
            self.play(turn.as_ref())?;
        }

        self.snapshot()
    }

    /// The position tokens of either side, in order of their cells.
    pub fn snapshot(&self) -> Result<Snapshot, IllegalMove> {
        if self.board.is_empty() {
            return Err(Reason::EmptyBoard.into());
        }

        Ok(Snapshot::new(
            self.board.pieces(Color::White).map(P::placement).collect(),
            self.board.pieces(Color::Black).map(P::placement).collect(),
        ))
    }
}
