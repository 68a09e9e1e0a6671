//! Coil writer over any byte sink (std only).

use std::io::{self, Write};

use super::CoilWriter;

/// Writes each code as a single byte and flushes it immediately.
///
/// Suitable for character devices that latch every byte onto their data
/// lines, such as a line-printer port node.
#[derive(Debug)]
pub struct ByteSinkWriter<W: Write> {
    sink: W,
}

impl<W: Write> ByteSinkWriter<W> {
    /// Wrap `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Get the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> CoilWriter<u8> for ByteSinkWriter<W> {
    type Error = io::Error;

    fn write(&mut self, code: u8) -> Result<(), Self::Error> {
        self.sink.write_all(&[code])?;
        self.sink.flush()
    }
}
