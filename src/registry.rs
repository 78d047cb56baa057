//! Command descriptors and the ordered command registry.
//!
//! A [`Command`] is plain caller-owned data: a call name, a help text and a
//! reference to a [`Handler`]. The [`Registry`] never allocates or frees
//! descriptors, it keeps references to them in registration order inside a
//! fixed-capacity vector.
//!
//! # Usage
//!
//! ```rust
//! use libcli::argument::Argument;
//! use libcli::registry::{Command, HandlerResult, MatchMode, Registry};
//! use libcli::sink::Sink;
//!
//! fn ping(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
//!     out.write(b"pong!\n");
//!     Ok(())
//! }
//!
//! static PING: Command<'static> = Command::new("ping", "prints a pong!", &ping);
//!
//! let mut registry: Registry<'_, 8> = Registry::new();
//! registry.register(&PING).unwrap();
//! assert!(registry.find(b"ping", MatchMode::Exact).is_some());
//!
//! registry.unregister(&PING).unwrap();
//! assert!(registry.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::argument::Argument;
use crate::error::Error;
use crate::sink::Sink;

/// Maximum number of commands a registry holds by default.
pub const MAX_COMMANDS: usize = 32;

/// Result type for command handlers.
pub type HandlerResult = Result<(), Error>;

/// Entry point of a command.
///
/// Handlers receive the arguments following the command name (empty when the
/// command was typed alone) and the interpreter's output sink. Plain
/// functions and non-capturing closures with the matching signature
/// implement this trait automatically.
///
/// # Examples
///
/// ```rust
/// use libcli::argument::Argument;
/// use libcli::error::Error;
/// use libcli::registry::{Handler, HandlerResult};
/// use libcli::sink::Sink;
///
/// struct Led {
///     pin: u8,
/// }
///
/// impl Handler for Led {
///     fn call(&self, args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
///         let state = args.first().ok_or(Error::InvalidArgument)?;
///         out.write(state.as_bytes());
///         Ok(())
///     }
/// }
/// ```
pub trait Handler: Sync {
    /// Run the command.
    fn call(&self, args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&[Argument<'_>], &mut dyn Sink) -> HandlerResult + Sync,
{
    fn call(&self, args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
        self(args, out)
    }
}

/// How a typed command name is compared against registered call names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The typed name matches if it starts with the full call name, so
    /// `pingpong` runs a command registered as `ping`.
    #[default]
    Prefix,
    /// The typed name must equal the call name.
    Exact,
}

impl MatchMode {
    /// Whether the typed `token` selects the call name `name`.
    pub fn matches(self, token: &[u8], name: &[u8]) -> bool {
        match self {
            MatchMode::Prefix => token.starts_with(name),
            MatchMode::Exact => token == name,
        }
    }
}

/// A registered command: call name, help text and handler.
///
/// Descriptors are usually `static` and must stay alive for as long as they
/// are registered.
#[derive(Clone, Copy)]
pub struct Command<'a> {
    /// The name typed by the user. Must not be empty.
    pub name: &'a str,
    /// Help text shown by the built-in `help` listing.
    pub help: &'a str,
    /// The code run when the command is invoked.
    pub handler: &'a dyn Handler,
}

impl<'a> Command<'a> {
    /// Create a command descriptor.
    pub const fn new(name: &'a str, help: &'a str, handler: &'a dyn Handler) -> Self {
        Self {
            name,
            help,
            handler,
        }
    }

    /// Whether `token` selects this command under `mode`.
    pub fn matches(&self, token: &[u8], mode: MatchMode) -> bool {
        mode.matches(token, self.name.as_bytes())
    }
}

impl core::fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of registered commands.
///
/// Lookup walks the commands in registration order and the first match
/// wins, so registration order matters when names overlap. Registering the
/// same call name twice is allowed; registering the same descriptor twice is
/// not.
#[derive(Debug)]
pub struct Registry<'a, const C: usize = MAX_COMMANDS> {
    commands: heapless::Vec<&'a Command<'a>, C>,
}

impl<const C: usize> Default for Registry<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const C: usize> Registry<'a, C> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
        }
    }

    /// Append `command` to the end of the registry.
    ///
    /// Lookup scans in registration order, so a command registered later
    /// never shadows an earlier one.
    ///
    /// # Arguments
    ///
    /// * `command` - Descriptor to register; it must outlive the registry
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command registered
    /// * `Err(Error::InvalidName)` - Empty call name
    /// * `Err(Error::AlreadyRegistered)` - This descriptor is already present
    /// * `Err(Error::RegistryFull)` - No free slot left
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::argument::Argument;
    /// use libcli::error::Error;
    /// use libcli::registry::{Command, HandlerResult, Registry};
    /// use libcli::sink::Sink;
    ///
    /// fn uptime(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    ///     out.write(b"12345 s\n");
    ///     Ok(())
    /// }
    ///
    /// static UPTIME: Command<'static> = Command::new("uptime", "Show system uptime", &uptime);
    ///
    /// let mut registry: Registry<'_, 1> = Registry::new();
    /// registry.register(&UPTIME).unwrap();
    /// assert_eq!(registry.register(&UPTIME), Err(Error::AlreadyRegistered));
    /// ```
    pub fn register(&mut self, command: &'a Command<'a>) -> Result<(), Error> {
        if command.name.is_empty() {
            return Err(Error::InvalidName);
        }
        if self.contains(command) {
            return Err(Error::AlreadyRegistered);
        }
        self.commands
            .push(command)
            .map_err(|_| Error::RegistryFull)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("registered command {=str}", command.name);
        Ok(())
    }

    /// Register every command of a static table, in table order.
    ///
    /// Stops at the first failure; commands registered before it stay
    /// registered.
    ///
    /// # Arguments
    ///
    /// * `commands` - Table of descriptors, usually a `static` array
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Every command registered
    /// * `Err(_)` - The first error of [`register`](Self::register)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::argument::Argument;
    /// use libcli::registry::{Command, HandlerResult, Registry};
    /// use libcli::sink::Sink;
    ///
    /// fn version(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    ///     out.write(b"Firmware v1.0.0\n");
    ///     Ok(())
    /// }
    ///
    /// fn info(_args: &[Argument<'_>], out: &mut dyn Sink) -> HandlerResult {
    ///     out.write(b"Device: IoT Controller\n");
    ///     Ok(())
    /// }
    ///
    /// static COMMANDS: [Command<'static>; 2] = [
    ///     Command::new("version", "Show firmware version", &version),
    ///     Command::new("info", "Show device information", &info),
    /// ];
    ///
    /// let mut registry: Registry<'_> = Registry::new();
    /// registry.register_all(&COMMANDS).unwrap();
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn register_all(&mut self, commands: &'a [Command<'a>]) -> Result<(), Error> {
        commands.iter().try_for_each(|command| self.register(command))
    }

    /// Remove `command`, keeping the order of the remaining commands.
    ///
    /// The descriptor may be registered again afterwards.
    ///
    /// # Arguments
    ///
    /// * `command` - The very descriptor passed to [`register`](Self::register)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command removed
    /// * `Err(Error::NotRegistered)` - The descriptor is not in the registry;
    ///   nothing changes
    pub fn unregister(&mut self, command: &Command<'_>) -> Result<(), Error> {
        let index = self.position(command).ok_or(Error::NotRegistered)?;
        self.commands.remove(index);

        #[cfg(feature = "defmt")]
        defmt::debug!("unregistered command {=str}", command.name);
        Ok(())
    }

    /// First command selected by `token`.
    ///
    /// # Arguments
    ///
    /// * `token` - The typed command name, without terminator
    /// * `mode` - How `token` is compared against call names
    ///
    /// # Returns
    ///
    /// The earliest registered command that `token` selects, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libcli::argument::Argument;
    /// use libcli::registry::{Command, HandlerResult, MatchMode, Registry};
    /// use libcli::sink::Sink;
    ///
    /// fn ping(_args: &[Argument<'_>], _out: &mut dyn Sink) -> HandlerResult {
    ///     Ok(())
    /// }
    ///
    /// static PING: Command<'static> = Command::new("ping", "prints a pong!", &ping);
    ///
    /// let mut registry: Registry<'_> = Registry::new();
    /// registry.register(&PING).unwrap();
    ///
    /// assert!(registry.find(b"pingpong", MatchMode::Prefix).is_some());
    /// assert!(registry.find(b"pingpong", MatchMode::Exact).is_none());
    /// ```
    pub fn find(&self, token: &[u8], mode: MatchMode) -> Option<&'a Command<'a>> {
        self.commands
            .iter()
            .copied()
            .find(|command| command.matches(token, mode))
    }

    /// Whether this very descriptor is registered.
    pub fn contains(&self, command: &Command<'_>) -> bool {
        self.position(command).is_some()
    }

    /// Registered commands in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Command<'a>> + '_ {
        self.commands.iter().copied()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Descriptor identity is the address, not the name.
    fn position(&self, command: &Command<'_>) -> Option<usize> {
        let target: *const () = (command as *const Command<'_>).cast();
        self.commands.iter().position(|&registered| {
            let registered: *const () = (registered as *const Command<'_>).cast();
            core::ptr::eq(registered, target)
        })
    }
}
