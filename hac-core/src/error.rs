//! Error kinds
//!
//! Every fallible operation in the stack returns `Result<_, Error>`. The
//! integer status of the external contract is available through
//! [`Error::code`].

use core::fmt;

use crate::io::PinGroup;

/// Failure kinds shared by all layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Sentinel "no pin" code where a real pin was required
    Code,
    /// Requested function differs from the one embedded in the pin code
    FunMismatch,
    /// Pin, peripheral or driver not present on this silicon or package
    Unavailable,
    /// Pin already connected or transport already opened
    Busy,
    /// Transport not opened or peripheral not set up
    State,
    /// Parameter outside the supported range
    Range,
    /// Bus wait exceeded its budget
    Timeout,
    /// Hardware did not report the expected status in time
    Hardware,
}

impl Error {
    /// Negative integer status
    pub const fn code(self) -> i32 {
        match self {
            Error::Code => -1,
            Error::FunMismatch => -2,
            Error::Unavailable => -3,
            Error::Busy => -4,
            Error::State => -5,
            Error::Range => -6,
            Error::Timeout => -7,
            Error::Hardware => -8,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::Code => "no pin code",
            Error::FunMismatch => "pin function mismatch",
            Error::Unavailable => "unavailable",
            Error::Busy => "busy",
            Error::State => "invalid state",
            Error::Range => "out of range",
            Error::Timeout => "timeout",
            Error::Hardware => "hardware fault",
        };
        f.write_str(s)
    }
}

/// Pin registry refusal
///
/// Keeps the rule that refused a connect. Converts into [`Error`] for
/// callers that only care about the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectError {
    Code,
    FunMismatch,
    Unavailable,
    Busy,
    /// Digital output requested on an analog-only pin
    AnalogOnly,
    /// Function group cannot be routed to an analog-capable pin
    AnalogPin(PinGroup),
    /// Function group not supported on this silicon
    Unsupported(PinGroup),
}

impl From<ConnectError> for Error {
    fn from(e: ConnectError) -> Self {
        match e {
            ConnectError::Code => Error::Code,
            ConnectError::FunMismatch => Error::FunMismatch,
            ConnectError::Busy => Error::Busy,
            ConnectError::Unavailable
            | ConnectError::AnalogOnly
            | ConnectError::AnalogPin(_)
            | ConnectError::Unsupported(_) => Error::Unavailable,
        }
    }
}
