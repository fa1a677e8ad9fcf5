use crate::io::{Io, Pipe};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::checkers::Tower;
use lib::notation::Grammar;
use lib::rules::{Game, IllegalMove, Snapshot};
use std::io::{stdin, stdout, ErrorKind, Read};
use std::{fs::File, path::PathBuf};
use tracing::{info, instrument};

/// Replays a game and prints the final board.
///
/// The first line sets up the white pieces, the second line the black pieces,
/// and every other line is a turn.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The notation of moves and turns.
    #[clap(short, long, default_value_t)]
    grammar: Grammar,

    /// Where to read the game from, the standard input by default.
    path: Option<PathBuf>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let reader: Box<dyn Read> = match &self.path {
            None => Box::new(stdin()),
            Some(path) => Box::new(
                File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
            ),
        };

        let mut io = Pipe::new(stdout(), reader);
        self.replay(&mut io)
    }

    fn replay<I: Io>(&self, io: &mut I) -> Result<(), Anyhow> {
        let white = io.recv().context("failed to read the white setup")?;
        let black = io.recv().context("failed to read the black setup")?;

        match self.run(io, &white, &black)? {
            Ok(snapshot) => {
                for line in snapshot.to_string().lines() {
                    io.send(line)?;
                }
            }

            Err(e) => {
                info!(error = %e, "illegal move");
                io.send(&e.to_string())?;
            }
        }

        Ok(io.flush()?)
    }

    /// Plays every turn received, stopping at the first illegal move.
    fn run<I: Io>(
        &self,
        io: &mut I,
        white: &str,
        black: &str,
    ) -> Result<Result<Snapshot, IllegalMove>, Anyhow> {
        let mut game = match Game::<Tower>::new(self.grammar, white, black) {
            Ok(game) => game,
            Err(e) => return Ok(Err(e)),
        };

        loop {
            let turn = match io.recv() {
                Ok(turn) => turn,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(Anyhow::new(e).context("failed to read a turn")),
            };

            if let Err(e) = game.play(&turn) {
                return Ok(Err(e));
            }
        }

        Ok(game.snapshot())
    }
}
