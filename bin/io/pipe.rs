use super::Io;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// A generic [`Io`] interface.
#[derive(Debug)]
pub struct Pipe<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Pipe<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Pipe {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }
}

impl<W: Write, R: Read> From<(W, R)> for Pipe<W, R> {
    fn from((writer, reader): (W, R)) -> Self {
        Pipe::new(writer, reader)
    }
}

impl<W: Write, R: Read> Io for Pipe<W, R> {
    #[instrument(level = "trace", skip(self), ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(io::ErrorKind::UnexpectedEof)?
    }

    #[instrument(level = "trace", skip(self), err)]
    fn send(&mut self, msg: &str) -> io::Result<()> {
        self.writer.write_all(msg.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self), err)]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
