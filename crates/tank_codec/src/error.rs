//! Error types for the codec crate.

use std::io;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while reading from a cursor or encoding values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A read would run past the end of the buffer.
    #[error("out of bounds: requested {requested} bytes, {available} available")]
    OutOfBounds {
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of unconsumed bytes in the buffer.
        available: usize,
    },

    /// A str8 payload is longer than a single length byte can describe.
    #[error("str8 payload too long: {len} bytes (max {max})")]
    TooLong {
        /// Length of the rejected payload.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A varint input is larger than the 32-bit ceiling.
    #[error("value {value} out of range (max {max})")]
    OutOfRange {
        /// The rejected value.
        value: u64,
        /// Largest encodable value.
        max: u64,
    },

    /// Text contains a character outside the single-byte range.
    #[error("character {character:?} at position {position} is not single-byte encodable")]
    Encoding {
        /// Byte or character index of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A fixed-width integer width outside `1..=8`.
    #[error("invalid integer width {width} (must be 1..={max})")]
    InvalidWidth {
        /// The requested width in bytes.
        width: usize,
        /// Largest supported width.
        max: usize,
    },

    /// A compressed block is larger than the configured limit.
    #[error("compressed block of {len} bytes exceeds limit of {max}")]
    BlockTooLarge {
        /// Requested block length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The decompressor rejected its input.
    #[error("corrupt data: {0}")]
    CorruptData(String),

    /// The decompressor reported an I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(requested: usize, available: usize) -> Self {
        Self::OutOfBounds {
            requested,
            available,
        }
    }

    /// Create a corrupt data error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptData(message.into())
    }

    /// Returns `true` if this error was raised by a read past the buffer end.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
