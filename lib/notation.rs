mod error;
mod grammar;
mod r#move;
mod placement;

pub use error::*;
pub use grammar::*;
pub use placement::*;
pub use r#move::*;
