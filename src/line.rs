//! Line accumulation and the feed/dispatch handoff.
//!
//! A [`LineBuffer`] is a single-slot, single-producer/single-consumer line
//! store. It is split into two halves:
//!
//! - [`Feeder`] appends raw input bytes. It is typically driven from a UART
//!   receive interrupt or a reader thread.
//! - [`Drain`] hands a completed line to the dispatcher and releases it
//!   afterwards.
//!
//! # State Machine
//!
//! ```text
//!            CR / LF              line released
//! Accumulating ───────▶ Line-Ready ───────────▶ Accumulating
//!      │                    │
//!      │ buffer full:       │ any byte:
//!      ▼ byte dropped       ▼ byte discarded
//! ```
//!
//! The line-ready flag is the only synchronization point. The feeder
//! publishes the buffer with a release store and the drain observes it with
//! an acquire load; the drain hands the buffer back the same way. While the
//! flag is set only the drain touches the bytes, while it is clear only the
//! feeder does.
//!
//! One byte is always kept free so the drain can terminate the line in
//! place.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Default input line capacity, terminator included.
pub const DEFAULT_LINE_SIZE: usize = 128;

/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;

/// What happened to a fed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Byte appended to the line.
    Accepted,
    /// Line is full; byte dropped.
    Dropped,
    /// A completed line is waiting for dispatch; byte discarded.
    Discarded,
    /// Byte was a line terminator; the line is ready for dispatch.
    LineReady,
}

/// Fixed-capacity input line shared between a [`Feeder`] and a [`Drain`].
pub struct LineBuffer<const N: usize = DEFAULT_LINE_SIZE> {
    bytes: UnsafeCell<[u8; N]>,
    filled: AtomicUsize,
    ready: AtomicBool,
}

// SAFETY: access to `bytes` is handed back and forth through `ready`
// (release/acquire). `split` hands out exactly one `Feeder` and one `Drain`,
// and each only touches the bytes on its side of the flag.
unsafe impl<const N: usize> Sync for LineBuffer<N> {}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line buffer in the accumulating state.
    ///
    /// # Panics
    ///
    /// When `N < 2`: at least one input byte and the terminator must fit.
    pub const fn new() -> Self {
        assert!(N >= 2, "line buffer needs room for one byte and a terminator");
        Self {
            bytes: UnsafeCell::new([0; N]),
            filled: AtomicUsize::new(0),
            ready: AtomicBool::new(false),
        }
    }

    /// Total capacity, terminator included.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Split into the feeding and the draining half.
    ///
    /// Borrowing `self` mutably guarantees a single feeder and a single
    /// drain for as long as the halves live.
    pub fn split(&mut self) -> (Feeder<'_, N>, Drain<'_, N>) {
        let line = &*self;
        (Feeder { line }, Drain { line })
    }
}

impl<const N: usize> core::fmt::Debug for LineBuffer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("capacity", &N)
            .field("filled", &self.filled.load(Ordering::Relaxed))
            .field("ready", &self.ready.load(Ordering::Relaxed))
            .finish()
    }
}

/// Feeding half of a [`LineBuffer`].
#[derive(Debug)]
pub struct Feeder<'a, const N: usize> {
    line: &'a LineBuffer<N>,
}

impl<const N: usize> Feeder<'_, N> {
    /// Feed one raw input byte.
    ///
    /// CR or LF completes the line. Other bytes are appended while there is
    /// room and no completed line is pending; otherwise they are silently
    /// lost and the returned [`Feed`] says why.
    pub fn feed(&mut self, byte: u8) -> Feed {
        if matches!(byte, ASCII_CR | ASCII_LF) {
            self.line.ready.store(true, Ordering::Release);
            return Feed::LineReady;
        }

        if self.line.ready.load(Ordering::Acquire) {
            return Feed::Discarded;
        }

        let filled = self.line.filled.load(Ordering::Relaxed);
        if filled >= N - 1 {
            return Feed::Dropped;
        }

        // SAFETY: `ready` is clear, so the drain does not access the bytes,
        // and `filled < N - 1` keeps the write in bounds.
        unsafe {
            self.line.bytes.get().cast::<u8>().add(filled).write(byte);
        }
        self.line.filled.store(filled + 1, Ordering::Relaxed);
        Feed::Accepted
    }

    /// Discard the current input and force the line-ready state with an
    /// empty line.
    ///
    /// The next dispatch then runs on an empty line, which only prints the
    /// prompt. Used to initialize or clear the interpreter.
    pub fn reset(&mut self) {
        self.line.filled.store(0, Ordering::Relaxed);
        self.line.ready.store(true, Ordering::Release);
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.line.filled.load(Ordering::Relaxed)
    }

    /// Whether no byte has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a completed line is waiting for dispatch.
    pub fn is_ready(&self) -> bool {
        self.line.ready.load(Ordering::Acquire)
    }
}

/// Draining half of a [`LineBuffer`].
#[derive(Debug)]
pub struct Drain<'a, const N: usize> {
    line: &'a LineBuffer<N>,
}

impl<const N: usize> Drain<'_, N> {
    /// Whether a completed line is waiting.
    pub fn is_ready(&self) -> bool {
        self.line.ready.load(Ordering::Acquire)
    }

    /// Take the completed line, if any.
    ///
    /// The line is terminated in place. Dropping the returned [`Line`]
    /// empties the buffer and returns it to the accumulating state.
    pub fn take(&mut self) -> Option<Line<'_>> {
        if !self.line.ready.load(Ordering::Acquire) {
            return None;
        }

        let filled = self.line.filled.load(Ordering::Relaxed).min(N - 1);
        // SAFETY: `ready` is set, so the feeder no longer writes the bytes,
        // and `&mut self` rules out a second live `Line`.
        let bytes = unsafe { &mut *self.line.bytes.get() };
        bytes[filled] = 0;

        Some(Line {
            bytes: &mut bytes[..=filled],
            filled: &self.line.filled,
            ready: &self.line.ready,
        })
    }
}

/// A completed, terminated input line on loan from a [`Drain`].
#[derive(Debug)]
pub struct Line<'a> {
    bytes: &'a mut [u8],
    filled: &'a AtomicUsize,
    ready: &'a AtomicBool,
}

impl Line<'_> {
    /// Line content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Line content followed by its terminator, for in-place tokenizing.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..]
    }

    /// Length without the terminator.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the line holds no input byte.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for Line<'_> {
    fn drop(&mut self) {
        self.filled.store(0, Ordering::Relaxed);
        self.ready.store(false, Ordering::Release);
    }
}
