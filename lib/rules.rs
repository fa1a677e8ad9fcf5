mod board;
mod error;
mod game;
mod piece;
mod pipeline;
mod snapshot;

pub use board::*;
pub use error::*;
pub use game::*;
pub use piece::*;
pub use snapshot::*;
