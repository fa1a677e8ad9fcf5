use crate::notation::Placement;

/// A single side's move, as written in a turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Move {
    /// A move that captures nothing, such as `c3_w-d4_w`.
    Step { whence: Placement, whither: Placement },

    /// A chain of one or more captures, such as `c3_w:e5_wb:g7_wbb`.
    Capture {
        whence: Placement,
        hops: Vec<Placement>,
    },
}

impl Move {
    /// Where this move starts.
    pub fn whence(&self) -> &Placement {
        match self {
            Move::Step { whence, .. } | Move::Capture { whence, .. } => whence,
        }
    }

    /// Where this move ends.
    pub fn whither(&self) -> &Placement {
        match self {
            Move::Step { whither, .. } => whither,
            Move::Capture { whence, hops } => hops.last().unwrap_or(whence),
        }
    }

    /// Whether this is a capture.
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

/// A turn, made of white's move and, unless the game ends, black's reply.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Turn {
    pub white: Move,
    pub black: Option<Move>,
}
