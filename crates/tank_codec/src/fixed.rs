//! Fixed-width little-endian unsigned integers.

use bytes::BufMut;

use crate::cursor::ByteCursor;
use crate::error::{CodecError, CodecResult};

/// Widest supported fixed integer, in bytes.
pub const MAX_FIXED_WIDTH: usize = 8;

/// Encodes `value` as `width` little-endian bytes.
///
/// Bits above `width * 8` are dropped: `encode_fixed(0x1234, 1)` yields
/// `[0x34]`. Truncation is part of the wire contract, not an error.
///
/// # Errors
///
/// Returns [`CodecError::InvalidWidth`] unless `1 <= width <= 8`.
pub fn encode_fixed(value: u64, width: usize) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(width);
    encode_fixed_into(value, width, &mut out)?;
    Ok(out)
}

/// Appends the `width`-byte little-endian encoding of `value` to `buf`.
///
/// Nothing is written on error.
pub fn encode_fixed_into<B: BufMut>(value: u64, width: usize, buf: &mut B) -> CodecResult<()> {
    check_width(width)?;
    buf.put_slice(&value.to_le_bytes()[..width]);
    Ok(())
}

/// Reads a `width`-byte little-endian unsigned integer from `cursor`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidWidth`] for a width outside `1..=8` and
/// [`CodecError::OutOfBounds`] if fewer than `width` bytes remain. The
/// cursor does not move on error.
pub fn decode_fixed(cursor: &mut ByteCursor, width: usize) -> CodecResult<u64> {
    check_width(width)?;
    let bytes = cursor.consume(width)?;
    let value = bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (8 * i)));
    Ok(value)
}

fn check_width(width: usize) -> CodecResult<()> {
    if width == 0 || width > MAX_FIXED_WIDTH {
        return Err(CodecError::InvalidWidth {
            width,
            max: MAX_FIXED_WIDTH,
        });
    }
    Ok(())
}
