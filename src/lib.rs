//! # libcli - Embedded command-line interpreter core
//!
//! A small command-line interpreter for devices that talk over a serial
//! port, a debug probe or any other byte stream. It accepts raw input bytes,
//! assembles them into a line, splits the line into a command name and
//! arguments, and runs the matching command handler with an output sink.
//! This library is designed for embedded systems and supports `no_std`
//! environments: no heap, no operating system, every buffer has a fixed
//! capacity chosen by the caller.
//!
//! ## Features
//!
//! ### Line Input
//! - Byte-by-byte accumulation with optional local echo
//! - Overlong input is dropped, never overflows
//! - Feeding can run in an interrupt while dispatch runs in the main loop
//!
//! ### Tokenizing
//! - Space separated arguments, `'` and `"` quoting
//! - Zero-copy: arguments are slices of the input buffer
//!
//! ### Commands
//! - Ordered registry of caller-owned command descriptors
//! - Prefix or exact name matching
//! - Optional built-in `help` listing and `-h` / `--help` flags
//!
//! ### Arguments
//! - Classification of decimal, hex, binary and byte-array literals
//! - Conversion and printing helpers
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use libcli::argument::{put_unsigned_hex, Argument};
//! use libcli::error::Error;
//! use libcli::interpreter::{Dispatch, Interpreter};
//! use libcli::line::LineBuffer;
//! use libcli::registry::{Command, HandlerResult};
//! use libcli::sink::Sink;
//!
//! fn print_hex(args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
//!     let value = args.first().and_then(|arg| arg.to_u32()).ok_or(Error::InvalidArgument)?;
//!     put_unsigned_hex(out, value);
//!     Ok(())
//! }
//!
//! static PRINT_HEX: Command<'static> =
//!     Command::new("printhex", "prints out a given argument as a hexadecimal Value", &print_hex);
//!
//! let mut line = LineBuffer::<128>::new();
//! let mut cli: Interpreter<'_, heapless::Vec<u8, 64>, 128> =
//!     Interpreter::new(&mut line, heapless::Vec::new());
//! cli.register(&PRINT_HEX).unwrap();
//!
//! // Normally fed from a UART receive routine
//! for &byte in b"printhex 255\r" {
//!     cli.feed(byte);
//! }
//! assert_eq!(cli.tick(), Dispatch::Executed(Ok(())));
//! assert_eq!(&cli.sink()[..], b"0xFF");
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices and host tools
//! - Any platform supporting Rust's `core` library and atomics
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Argument classification, conversion and number printing.
///
/// Decides whether an argument is a decimal, hexadecimal, binary or
/// byte-array literal and converts it accordingly.
pub mod argument;

/// Runtime interpreter configuration, loadable from JSON.
pub mod config;

/// Common error type.
pub mod error;

/// The interpreter instance: feeding, tokenizing and dispatching.
pub mod interpreter;

/// Line accumulation state machine and the feed/dispatch handoff.
pub mod line;

/// Command descriptors, handlers and the command registry.
pub mod registry;

/// Output sinks.
pub mod sink;

/// Quote-aware in-place tokenizer.
pub mod tokenizer;

pub use error::Error;
pub use interpreter::{Dispatch, Interpreter};
pub use line::{Feed, LineBuffer};
pub use registry::{Command, Handler, HandlerResult, MatchMode, Registry};
pub use sink::Sink;
