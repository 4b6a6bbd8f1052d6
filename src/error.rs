//! Error type shared by the command, configuration and display layers.

use core::fmt;

/// Errors from talking to the display. `E` is the error type of the `DisplayInterface` in use.
///
/// Drawing into the frame buffer never fails; only the operations that touch the bus return
/// this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The interface failed to transmit a command or data byte.
    Interface(E),
    /// A command argument was outside the range accepted by the controller. Nothing was sent.
    ArgumentOutOfRange,
    /// A region does not lie within the panel, or is empty. Nothing was sent.
    OutOfBounds,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "display interface error: {:?}", e),
            Error::ArgumentOutOfRange => f.write_str("command argument out of range"),
            Error::OutOfBounds => f.write_str("region out of bounds"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
