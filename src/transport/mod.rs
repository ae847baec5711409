//! # Printer Transport Layer
//!
//! This module provides the byte sinks print jobs are written to.
//!
//! The receipt pipeline only needs the [`ByteSink`] capability: accept bytes
//! in order, and close. How the underlying connection is found, opened, or
//! permission-checked is up to whoever constructs the sink.
//!
//! ## Available Sinks
//!
//! - `Vec<u8>`: in-memory capture (tests, dry runs)
//! - [`WriterSink`]: any `std::io::Write` (files, sockets, pipes)
//! - [`serial`]: raw TTY serial device (Linux/macOS)

pub mod serial;

pub use serial::SerialTransport;

use std::io::Write;

use crate::error::{Result, StrukError};

/// Write-only destination for printer bytes.
///
/// Writes must be applied in call order. A failed write is reported as
/// `TransmissionFailure`; bytes accepted before it stay accepted.
pub trait ByteSink {
    /// Send one buffer.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Flush and release the sink.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Adapts any [`Write`] into a [`ByteSink`].
///
/// ```
/// use struk::transport::{ByteSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write(&[0x1B, 0x40])?;
/// assert_eq!(sink.into_inner(), vec![0x1B, 0x40]);
/// # Ok::<(), struk::StrukError>(())
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for WriterSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(|e| StrukError::TransmissionFailure(format!("Write failed: {}", e)))
    }

    fn close(&mut self) -> Result<()> {
        self.inner
            .flush()
            .map_err(|e| StrukError::TransmissionFailure(format!("Flush failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_vec_sink_appends() {
        // Vec<u8> is also io::Write, so call through the trait
        let mut sink: Vec<u8> = Vec::new();
        ByteSink::write(&mut sink, &[1, 2]).unwrap();
        ByteSink::write(&mut sink, &[3]).unwrap();
        ByteSink::close(&mut sink).unwrap();
        assert_eq!(sink, vec![1, 2, 3]);
    }

    #[test]
    fn test_borrowed_sink() {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = &mut buf;
            ByteSink::write(&mut sink, b"ok").unwrap();
        }
        assert_eq!(buf, b"ok");
    }

    #[test]
    fn test_writer_sink_errors_are_transmission_failures() {
        let mut sink = WriterSink::new(BrokenPipe);
        assert!(matches!(
            sink.write(b"x"),
            Err(StrukError::TransmissionFailure(_))
        ));
        assert!(matches!(
            sink.close(),
            Err(StrukError::TransmissionFailure(_))
        ));
    }
}
