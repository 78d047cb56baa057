//! Quote-aware, in-place line tokenizer.
//!
//! The tokenizer splits a terminated line into arguments without copying:
//! every argument is a slice of the caller's buffer. Splitting happens in two
//! passes driven by the same byte-level state machine, so they always agree:
//!
//! 1. [`Tokenizer::count`] only reads the line and reports how many
//!    arguments it holds.
//! 2. [`Tokenizer::split`] rewrites separators and quote characters to
//!    terminators (`0`) and returns the argument slices.
//!
//! # Rules
//!
//! - `'` and `"` toggle quoting and are removed; they neither start nor end
//!   an argument.
//! - Outside quotes, a space or terminator ends the current argument.
//! - Any other byte starts a new argument if none is in progress.
//! - An unclosed quote is closed by forcing the last byte of the line to a
//!   terminator.
//!
//! ```rust
//! use libcli::tokenizer::{Arguments, Tokenizer};
//!
//! let mut line = *b"argprint \"foo bar\" baz\0";
//! assert_eq!(Tokenizer::count(&line), 3);
//!
//! let args: Arguments<'_, 8> = Tokenizer::split(&mut line);
//! assert_eq!(args[0], "argprint");
//! assert_eq!(args[1], "foo bar");
//! assert_eq!(args[2], "baz");
//! ```

use crate::argument::Argument;
use crate::argument::ascii::{NUL, terminated_len};

/// Maximum number of arguments per line, including the command name.
pub const MAX_ARGS: usize = 16;

/// Argument vector produced by [`Tokenizer::split`].
pub type Arguments<'a, const N: usize = MAX_ARGS> = heapless::Vec<Argument<'a>, N>;

/// What the state machine decided for one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Byte belongs to the current argument (or to a run of separators).
    Keep,
    /// Byte starts a new argument.
    Start,
    /// Byte is a quote or separator and becomes a terminator.
    Cut,
}

/// Byte-level tokenizer state.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer {
    started: bool,
    escaped: bool,
}

impl Tokenizer {
    fn step(&mut self, byte: u8) -> Step {
        match byte {
            b'\'' | b'"' => {
                self.escaped = !self.escaped;
                Step::Cut
            }
            b' ' | NUL if !self.escaped => {
                self.started = false;
                Step::Cut
            }
            b' ' | NUL => Step::Keep,
            _ if !self.started => {
                self.started = true;
                Step::Start
            }
            _ => Step::Keep,
        }
    }

    /// Count the arguments in `line` without modifying it.
    pub fn count(line: &[u8]) -> usize {
        let mut state = Tokenizer::default();
        line.iter()
            .filter(|&&byte| state.step(byte) == Step::Start)
            .count()
    }

    /// Split `line` in place and return up to `N` arguments.
    ///
    /// Every separator and quote byte outside an argument's content is
    /// overwritten with a terminator, so each argument runs from its first
    /// byte to the next terminator. Arguments beyond `N` are left in the
    /// buffer but not returned; compare with [`count`](Self::count) to detect
    /// that.
    pub fn split<'a, const N: usize>(line: &'a mut [u8]) -> Arguments<'a, N> {
        let mut state = Tokenizer::default();
        let mut starts = heapless::Vec::<usize, N>::new();

        for (i, byte) in line.iter_mut().enumerate() {
            match state.step(*byte) {
                Step::Start => {
                    // Arguments past capacity are dropped.
                    let _ = starts.push(i);
                }
                Step::Cut => *byte = NUL,
                Step::Keep => {}
            }
        }

        if state.escaped {
            if let Some(last) = line.last_mut() {
                *last = NUL;
            }
        }

        let line: &'a [u8] = line;
        starts
            .iter()
            .map(|&start| {
                let rest = &line[start..];
                Argument::new(&rest[..terminated_len(rest)])
            })
            .collect()
    }
}
