//! Unified error type for nixie-clock.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! The button and transition state machines are total and never fail;
//! only the byte-level parsing edges return this type.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Protocol
    /// Command byte is not part of the companion I2C command set.
    UnknownCommand(u8),

    /// A frame had no bytes at all, so no command could be read.
    EmptyFrame,

    /// Frame payload exceeds the protocol data size (carries the length seen).
    PayloadTooLong(usize),

    // Display
    /// Byte does not map to a known per-digit display mode.
    InvalidDisplayMode(u8),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownCommand(b) => write!(f, "unknown I2C command 0x{:02x}", b),
            Error::EmptyFrame => f.write_str("empty I2C frame"),
            Error::PayloadTooLong(n) => write!(f, "I2C payload too long ({} bytes)", n),
            Error::InvalidDisplayMode(b) => write!(f, "invalid display mode {}", b),
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
