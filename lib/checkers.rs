mod cell;
mod color;
mod file;
mod geometry;
mod rank;
mod tower;
mod unit;

pub use cell::*;
pub use color::*;
pub use file::*;
pub use geometry::*;
pub use rank::*;
pub use tower::*;
pub use unit::*;
