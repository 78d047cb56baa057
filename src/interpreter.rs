//! Interpreter instance: line accumulation plus command dispatch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Feeder        │───▶│   Tokenizer     │───▶│   Registry      │
//! │   (raw bytes)   │    │   (in place)    │    │   (first match) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             │
//!          ▼                                             ▼
//! ┌─────────────────┐                          ┌─────────────────┐
//! │   Line Buffer   │                          │   Handler +     │
//! │   (one line)    │                          │   Sink          │
//! └─────────────────┘                          └─────────────────┘
//! ```
//!
//! Bytes go in through [`Interpreter::feed`]; [`Interpreter::tick`] dispatches
//! a completed line. Both can be called back to back from a polling loop, or
//! the feeding half can be detached and driven from an interrupt while the
//! main loop keeps calling `tick`.
//!
//! # Usage
//!
//! ```rust
//! use libcli::argument::Argument;
//! use libcli::interpreter::{Dispatch, Interpreter};
//! use libcli::line::LineBuffer;
//! use libcli::registry::{Command, HandlerResult};
//! use libcli::sink::Sink;
//!
//! fn hello(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
//!     out.write(b"hello world!\n");
//!     Ok(())
//! }
//!
//! static HELLO: Command<'static> = Command::new("helloworld", "prints a simple Hello World", &hello);
//!
//! let mut line = LineBuffer::<64>::new();
//! let mut cli: Interpreter<'_, heapless::Vec<u8, 64>, 64> =
//!     Interpreter::new(&mut line, heapless::Vec::new());
//! cli.register(&HELLO).unwrap();
//!
//! assert_eq!(cli.input(b"helloworld\r"), Dispatch::Executed(Ok(())));
//! assert_eq!(&cli.sink()[..], b"hello world!\n");
//! ```

use crate::argument::Argument;
use crate::config::Config;
use crate::error::Error;
use crate::line::{Drain, Feed, Feeder, LineBuffer};
use crate::registry::{Command, HandlerResult, MAX_COMMANDS, MatchMode, Registry};
use crate::sink::Sink;
use crate::tokenizer::{Arguments, MAX_ARGS, Tokenizer};

/// Name of the built-in command listing.
pub const HELP_COMMAND: &str = "help";

/// Line break emitted before a matched command runs when echo is on.
const ECHO_BREAK: &[u8] = b"\n\r";

/// Outcome of one [`Interpreter::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// No completed line was waiting.
    Idle,
    /// The line held no arguments.
    Empty,
    /// No command matched the typed name.
    NotFound,
    /// Help text was printed instead of running a command.
    Help,
    /// The line held more arguments than the interpreter keeps; nothing ran.
    TooManyArguments,
    /// A handler ran and returned this result.
    Executed(HandlerResult),
}

/// Command-line interpreter over a caller-owned [`LineBuffer`].
///
/// * `S` - output sink
/// * `N` - line capacity, terminator included
/// * `C` - maximum number of registered commands
/// * `A` - maximum number of arguments per line, command name included
pub struct Interpreter<
    'a,
    S: Sink,
    const N: usize,
    const C: usize = MAX_COMMANDS,
    const A: usize = MAX_ARGS,
> {
    feeder: Option<Feeder<'a, N>>,
    drain: Drain<'a, N>,
    registry: Registry<'a, C>,
    sink: S,
    config: Config<'a>,
}

impl<'a, S: Sink, const N: usize, const C: usize, const A: usize> Interpreter<'a, S, N, C, A> {
    /// Create an interpreter with the default [`Config`] and no commands.
    pub fn new(line: &'a mut LineBuffer<N>, sink: S) -> Self {
        Self::with_config(line, sink, Config::default())
    }

    /// Create an interpreter with the given settings.
    pub fn with_config(line: &'a mut LineBuffer<N>, sink: S, config: Config<'a>) -> Self {
        let (feeder, drain) = line.split();
        Self {
            feeder: Some(feeder),
            drain,
            registry: Registry::new(),
            sink,
            config,
        }
    }

    /// Replace all settings at once.
    pub fn configure(&mut self, config: Config<'a>) {
        self.config = config;
    }

    /// Current settings.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Enable or disable local echo.
    pub fn set_echo(&mut self, enabled: bool) {
        self.config.echo = enabled;
    }

    /// Set or clear the prompt written after every dispatched line.
    pub fn set_prompt(&mut self, prompt: Option<&'a str>) {
        self.config.prompt = prompt;
    }

    /// Choose how typed names are matched against call names.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.config.match_mode = mode;
    }

    /// Enable or disable the built-in help.
    pub fn set_help(&mut self, enabled: bool) {
        self.config.help = enabled;
    }

    /// Register a command, see [`Registry::register`].
    pub fn register(&mut self, command: &'a Command<'a>) -> Result<(), Error> {
        self.registry.register(command)
    }

    /// Unregister a command, see [`Registry::unregister`].
    pub fn unregister(&mut self, command: &Command<'_>) -> Result<(), Error> {
        self.registry.unregister(command)
    }

    /// The command registry.
    pub fn registry(&self) -> &Registry<'a, C> {
        &self.registry
    }

    /// Mutable access to the command registry.
    pub fn registry_mut(&mut self) -> &mut Registry<'a, C> {
        &mut self.registry
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the output sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Hand the feeding half to another execution context.
    ///
    /// Afterwards [`feed`](Self::feed) discards every byte and
    /// [`reset`](Self::reset) does nothing; feed and reset through the
    /// returned [`Feeder`] instead. Local echo is then up to the caller.
    /// Returns `None` if the feeder was already detached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::interpreter::{Dispatch, Interpreter};
    /// use libcli::line::{Feed, LineBuffer};
    ///
    /// let mut line = LineBuffer::<32>::new();
    /// let mut cli: Interpreter<'_, heapless::Vec<u8, 32>, 32> =
    ///     Interpreter::new(&mut line, heapless::Vec::new());
    /// let mut feeder = cli.detach_feeder().unwrap();
    ///
    /// // Usually moved into the UART receive interrupt
    /// assert_eq!(feeder.feed(b'\r'), Feed::LineReady);
    /// assert_eq!(cli.feed(b'x'), Feed::Discarded);
    /// assert_eq!(cli.tick(), Dispatch::Empty);
    /// ```
    pub fn detach_feeder(&mut self) -> Option<Feeder<'a, N>> {
        self.feeder.take()
    }

    /// Feed one raw input byte.
    ///
    /// CR or LF completes the line; it is dispatched by the next
    /// [`tick`](Self::tick). With echo on, accepted bytes are written to the
    /// sink right away. Terminators, dropped and discarded bytes are never
    /// echoed.
    ///
    /// # Arguments
    ///
    /// * `byte` - Raw input byte, typically read from a UART
    ///
    /// # Returns
    ///
    /// * [`Feed::Accepted`] - Byte appended to the line
    /// * [`Feed::Dropped`] - Line is full, byte lost
    /// * [`Feed::Discarded`] - A line is waiting for dispatch, or the feeder
    ///   was detached; byte lost
    /// * [`Feed::LineReady`] - Byte was CR or LF
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::interpreter::Interpreter;
    /// use libcli::line::{Feed, LineBuffer};
    ///
    /// let mut line = LineBuffer::<4>::new();
    /// let mut cli: Interpreter<'_, heapless::Vec<u8, 16>, 4> =
    ///     Interpreter::new(&mut line, heapless::Vec::new());
    /// cli.set_echo(true);
    ///
    /// assert_eq!(cli.feed(b'a'), Feed::Accepted);
    /// assert_eq!(cli.feed(b'b'), Feed::Accepted);
    /// assert_eq!(cli.feed(b'c'), Feed::Accepted);
    /// // One byte stays free for the terminator
    /// assert_eq!(cli.feed(b'd'), Feed::Dropped);
    /// assert_eq!(cli.feed(b'\r'), Feed::LineReady);
    /// assert_eq!(&cli.sink()[..], b"abc");
    /// ```
    pub fn feed(&mut self, byte: u8) -> Feed {
        let Some(feeder) = self.feeder.as_mut() else {
            return Feed::Discarded;
        };

        let feed = feeder.feed(byte);
        if feed == Feed::Accepted && self.config.echo {
            self.sink.write(&[byte]);
        }
        feed
    }

    /// Drop any partial input and force an empty line to be dispatched on
    /// the next [`tick`](Self::tick), which prints the prompt.
    pub fn reset(&mut self) {
        if let Some(feeder) = self.feeder.as_mut() {
            feeder.reset();
        }
    }

    /// Feed `data` byte by byte, ticking after each one.
    ///
    /// Convenient when input arrives in chunks, e.g. from a host serial
    /// port read. Every completed line in `data` is dispatched in order.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw input bytes, may hold several lines
    ///
    /// # Returns
    ///
    /// The outcome of the last dispatched line, or [`Dispatch::Idle`] if
    /// `data` completed no line. A trailing partial line stays buffered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::argument::Argument;
    /// use libcli::interpreter::{Dispatch, Interpreter};
    /// use libcli::line::LineBuffer;
    /// use libcli::registry::{Command, HandlerResult};
    /// use libcli::sink::Sink;
    ///
    /// fn ping(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    ///     out.write(b"pong!\n");
    ///     Ok(())
    /// }
    ///
    /// static PING: Command<'static> = Command::new("ping", "prints a pong!", &ping);
    ///
    /// let mut line = LineBuffer::<32>::new();
    /// let mut cli: Interpreter<'_, heapless::Vec<u8, 32>, 32> =
    ///     Interpreter::new(&mut line, heapless::Vec::new());
    /// cli.register(&PING).unwrap();
    ///
    /// assert_eq!(cli.input(b"ping\rping\rpi"), Dispatch::Executed(Ok(())));
    /// assert_eq!(&cli.sink()[..], b"pong!\npong!\n");
    /// assert_eq!(cli.input(b"ng\r"), Dispatch::Executed(Ok(())));
    /// ```
    pub fn input(&mut self, data: &[u8]) -> Dispatch {
        let mut last = Dispatch::Idle;
        for &byte in data {
            self.feed(byte);
            match self.tick() {
                Dispatch::Idle => {}
                outcome => last = outcome,
            }
        }
        last
    }

    /// Dispatch the completed line, if there is one.
    ///
    /// Call this from the main loop. The line is tokenized in place and the
    /// first registered command whose name matches the first argument runs
    /// with the remaining arguments. Afterwards the line is released for new
    /// input and the prompt, if any, is written.
    ///
    /// Nothing is written to the sink for unknown commands, empty lines or
    /// lines with too many arguments; the returned [`Dispatch`] tells them
    /// apart.
    ///
    /// # Returns
    ///
    /// * [`Dispatch::Idle`] - No completed line was waiting; no prompt
    /// * [`Dispatch::Empty`] - The line held no arguments
    /// * [`Dispatch::TooManyArguments`] - More than `A` arguments, command
    ///   name included; no handler ran
    /// * [`Dispatch::NotFound`] - No command matched
    /// * [`Dispatch::Help`] - Built-in help was printed
    /// * [`Dispatch::Executed`] - A handler ran, with its result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::interpreter::{Dispatch, Interpreter};
    /// use libcli::line::LineBuffer;
    ///
    /// let mut line = LineBuffer::<32>::new();
    /// let mut cli: Interpreter<'_, heapless::Vec<u8, 32>, 32> =
    ///     Interpreter::new(&mut line, heapless::Vec::new());
    /// cli.set_prompt(Some("$> "));
    ///
    /// assert_eq!(cli.tick(), Dispatch::Idle);
    /// for &byte in b"unknown\r" {
    ///     cli.feed(byte);
    /// }
    /// assert_eq!(cli.tick(), Dispatch::NotFound);
    /// assert_eq!(&cli.sink()[..], b"$> ");
    /// ```
    pub fn tick(&mut self) -> Dispatch {
        let Self {
            drain,
            registry,
            sink,
            config,
            ..
        } = self;

        let outcome = {
            let Some(mut line) = drain.take() else {
                return Dispatch::Idle;
            };

            let bytes = line.as_mut_bytes();
            let total = Tokenizer::count(bytes);
            let args: Arguments<'_, A> = Tokenizer::split(bytes);

            if total > args.len() {
                #[cfg(feature = "defmt")]
                defmt::warn!("line has {=usize} arguments, capacity is {=usize}", total, A);
                Dispatch::TooManyArguments
            } else {
                match args.split_first() {
                    Some((name, rest)) => Self::dispatch(registry, sink, config, name, rest),
                    None => Dispatch::Empty,
                }
            }
        };

        if let Some(prompt) = config.prompt {
            sink.write(prompt.as_bytes());
        }
        outcome
    }

    fn dispatch(
        registry: &Registry<'a, C>,
        sink: &mut S,
        config: &Config<'a>,
        name: &Argument<'_>,
        rest: &[Argument<'_>],
    ) -> Dispatch {
        let mode = config.match_mode;

        if let Some(command) = registry.find(name.as_bytes(), mode) {
            if config.echo {
                sink.write(ECHO_BREAK);
            }

            if config.help && is_help_flag(rest) {
                sink.write(command.help.as_bytes());
                sink.write(b"\r\n");
                return Dispatch::Help;
            }

            #[cfg(feature = "defmt")]
            defmt::trace!("running {=str} with {=usize} argument(s)", command.name, rest.len());

            let result = command.handler.call(rest, sink);

            #[cfg(feature = "defmt")]
            if let Err(error) = result {
                defmt::debug!("{=str} failed: {}", command.name, error);
            }
            return Dispatch::Executed(result);
        }

        if config.help && mode.matches(name.as_bytes(), HELP_COMMAND.as_bytes()) {
            if config.echo {
                sink.write(ECHO_BREAK);
            }
            list_commands(registry, sink);
            return Dispatch::Help;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("no command matches {=[u8]}", name.as_bytes());
        Dispatch::NotFound
    }
}

impl<S: Sink + core::fmt::Debug, const N: usize, const C: usize, const A: usize> core::fmt::Debug
    for Interpreter<'_, S, N, C, A>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interpreter")
            .field("registry", &self.registry)
            .field("sink", &self.sink)
            .field("config", &self.config)
            .field("feeder_attached", &self.feeder.is_some())
            .finish_non_exhaustive()
    }
}

fn is_help_flag(rest: &[Argument<'_>]) -> bool {
    matches!(rest, [flag] if *flag == "-h" || *flag == "--help")
}

/// Print every registered command as `[name]`, its help text and a blank
/// line, in lookup order.
fn list_commands<S: Sink + ?Sized, const C: usize>(registry: &Registry<'_, C>, sink: &mut S) {
    for command in registry.iter() {
        sink.write(b"[");
        sink.write(command.name.as_bytes());
        sink.write(b"]\r\n");
        sink.write(command.help.as_bytes());
        sink.write(b"\r\n\r\n");
    }
}
