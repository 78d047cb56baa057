//! Output sinks.
//!
//! Everything the interpreter emits (prompt, echoed characters, line breaks
//! and all handler output) goes through a [`Sink`]. A sink is expected to
//! fully consume or transmit each fragment; there is no buffering or flushing
//! contract.
//!
//! Any `FnMut(&[u8]) -> usize` closure or function is a sink, which keeps the
//! common case of a UART write routine a one-liner:
//!
//! ```rust
//! use libcli::sink::Sink;
//!
//! fn uart_write(bytes: &[u8]) -> usize {
//!     // Push bytes to the UART FIFO here
//!     bytes.len()
//! }
//!
//! let mut sink = uart_write;
//! sink.write(b"hello");
//! ```

/// Function signature for plain output routines.
pub type OutputFn = fn(&[u8]) -> usize;

/// A byte-consuming output channel.
pub trait Sink {
    /// Write `bytes` to the output and return how many were consumed.
    ///
    /// The interpreter ignores the returned count.
    fn write(&mut self, bytes: &[u8]) -> usize;

    /// Write a string slice.
    fn write_str(&mut self, text: &str) -> usize {
        self.write(text.as_bytes())
    }
}

impl<F> Sink for F
where
    F: FnMut(&[u8]) -> usize,
{
    fn write(&mut self, bytes: &[u8]) -> usize {
        self(bytes)
    }
}

/// Collects output into a fixed-capacity vector, dropping what does not fit.
impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let room = N - self.len();
        let taken = bytes.len().min(room);
        // Cannot fail: `taken` never exceeds the remaining capacity.
        let _ = self.extend_from_slice(&bytes[..taken]);
        taken
    }
}

/// Adapter that formats into a [`Sink`] through [`core::fmt::Write`].
///
/// ```rust
/// use core::fmt::Write as _;
/// use libcli::sink::FmtSink;
///
/// let mut out = heapless::Vec::<u8, 32>::new();
/// write!(FmtSink(&mut out), "{} items", 3).unwrap();
/// assert_eq!(&out[..], b"3 items");
/// ```
pub struct FmtSink<'a, S: Sink + ?Sized>(pub &'a mut S);

impl<S: Sink + ?Sized> core::fmt::Write for FmtSink<'_, S> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.write(s.as_bytes());
        Ok(())
    }
}

impl<S: Sink + ?Sized> core::fmt::Debug for FmtSink<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FmtSink")
    }
}

/// Sink writing to any [`std::io::Write`] implementation, e.g. stdout.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W: std::io::Write>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        match self.0.write_all(bytes).and_then(|()| self.0.flush()) {
            Ok(()) => bytes.len(),
            Err(_) => 0,
        }
    }
}
