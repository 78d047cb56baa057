//! Common error type for interpreter operations

/// A common error type for registry, handler and configuration operations.
///
/// The interpreter core itself never reports input problems (overlong lines,
/// unknown commands) as errors; those degrade to "nothing happens" and are
/// surfaced through [`Feed`](crate::line::Feed) and
/// [`Dispatch`](crate::interpreter::Dispatch) instead. This enum is designed
/// to be simple and portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A command descriptor with an empty call name was registered.
    InvalidName,
    /// The registry has no free slot left.
    RegistryFull,
    /// This very descriptor is already part of the registry.
    AlreadyRegistered,
    /// The descriptor to remove is not part of the registry.
    NotRegistered,
    /// A handler received arguments it cannot interpret.
    InvalidArgument,
    /// A handler failed while executing.
    ExecutionFailed,
    /// A configuration document could not be parsed.
    InvalidConfig,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidName => defmt::write!(f, "InvalidName"),
            Error::RegistryFull => defmt::write!(f, "RegistryFull"),
            Error::AlreadyRegistered => defmt::write!(f, "AlreadyRegistered"),
            Error::NotRegistered => defmt::write!(f, "NotRegistered"),
            Error::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Error::ExecutionFailed => defmt::write!(f, "ExecutionFailed"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Error::InvalidName => "command name is empty",
            Error::RegistryFull => "command registry is full",
            Error::AlreadyRegistered => "command is already registered",
            Error::NotRegistered => "command is not registered",
            Error::InvalidArgument => "invalid argument",
            Error::ExecutionFailed => "command execution failed",
            Error::InvalidConfig => "invalid configuration",
        };
        f.write_str(text)
    }
}
