use std::io;

mod pipe;

pub use pipe::*;

/// Trait for types that communicate line by line.
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive a line.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] once there is nothing left to receive.
    fn recv(&mut self) -> io::Result<String>;

    /// Send a line.
    fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    fn flush(&mut self) -> io::Result<()>;
}
