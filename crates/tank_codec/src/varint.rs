//! Variable-length unsigned integers.
//!
//! A value is split into 7-bit groups, least significant first. Every byte
//! but the last has [`CONTINUATION_BIT`] set. Values up to [`VARINT_MAX`]
//! are supported, which takes at most [`VARINT_MAX_LEN`] bytes.
//!
//! ## Wire layout
//!
//! | value range               | bytes |
//! |---------------------------|-------|
//! | `0 ..= 0x7F`              | 1     |
//! | `0x80 ..= 0x3FFF`         | 2     |
//! | `0x4000 ..= 0x1F_FFFF`    | 3     |
//! | `0x20_0000 ..= 0xFFF_FFFF`| 4     |
//! | `0x1000_0000 ..= u32::MAX`| 5     |
//!
//! The fifth byte is a terminator: it is taken whole, without a
//! continuation check. That only works because the value range stops at
//! 32 bits; widening the range needs a different decode loop.

use bytes::BufMut;

use crate::cursor::ByteCursor;
use crate::error::{CodecError, CodecResult};

/// Largest value a varint can carry.
pub const VARINT_MAX: u64 = u32::MAX as u64;

/// Longest varint encoding, in bytes.
pub const VARINT_MAX_LEN: usize = 5;

/// Bit offset of each byte's contribution to the decoded value.
pub const VARINT_SHIFTS: [u32; VARINT_MAX_LEN] = [0, 7, 14, 21, 28];

/// High bit marking "more bytes follow".
pub const CONTINUATION_BIT: u8 = 0x80;

/// Payload bits of a continued byte.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Returns the number of bytes `value` occupies on the wire.
pub const fn encoded_varint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// Encodes `value` as a varint.
///
/// # Errors
///
/// Returns [`CodecError::OutOfRange`] if `value` exceeds [`VARINT_MAX`].
pub fn encode_varint(value: u64) -> CodecResult<Vec<u8>> {
    let value = check_range(value)?;
    Ok(encode_varint_u32(value))
}

/// Encodes a `u32`, which always fits.
pub fn encode_varint_u32(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_varint_len(value));
    put_varint(value, &mut out);
    out
}

/// Appends the varint encoding of `value` to `buf`.
///
/// Nothing is written on error.
pub fn encode_varint_into<B: BufMut>(value: u64, buf: &mut B) -> CodecResult<()> {
    let value = check_range(value)?;
    put_varint(value, buf);
    Ok(())
}

/// Reads one varint from `cursor`.
///
/// The result is a `u64` because a fifth byte above `0x0F` (never
/// produced by the encoder) still contributes all eight of its bits at
/// shift 28.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the buffer ends before the
/// terminating byte. The cursor does not move on error.
pub fn decode_varint(cursor: &mut ByteCursor) -> CodecResult<u64> {
    let input = cursor.unconsumed();
    let mut result = 0u64;
    let mut len = 0;

    for (i, &shift) in VARINT_SHIFTS.iter().enumerate() {
        let Some(&byte) = input.get(i) else {
            return Err(CodecError::out_of_bounds(i + 1, input.len()));
        };
        len = i + 1;

        // The last group is a full byte; earlier ones stop on a clear high bit.
        if len == VARINT_MAX_LEN || byte & CONTINUATION_BIT == 0 {
            result |= u64::from(byte) << shift;
            break;
        }
        result |= u64::from(byte & PAYLOAD_MASK) << shift;
    }

    cursor.skip(len)?;
    Ok(result)
}

fn check_range(value: u64) -> CodecResult<u32> {
    u32::try_from(value).map_err(|_| CodecError::OutOfRange {
        value,
        max: VARINT_MAX,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn put_varint<B: BufMut>(mut value: u32, buf: &mut B) {
    while value > u32::from(PAYLOAD_MASK) {
        buf.put_u8((value as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}
