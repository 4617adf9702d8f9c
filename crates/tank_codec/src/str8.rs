//! Length-prefixed byte strings ("str8").
//!
//! One unsigned length byte followed by that many payload bytes. Text
//! payloads are restricted to ASCII so that every character is one byte.

use bytes::BufMut;

use crate::cursor::ByteCursor;
use crate::error::{CodecError, CodecResult};

/// Longest payload a str8 can carry.
pub const STR8_MAX_LEN: usize = u8::MAX as usize;

/// Encodes `bytes` as a str8.
///
/// # Errors
///
/// Returns [`CodecError::TooLong`] if `bytes` is longer than
/// [`STR8_MAX_LEN`].
pub fn encode_str8(bytes: &[u8]) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len() + 1);
    encode_str8_into(bytes, &mut out)?;
    Ok(out)
}

/// Encodes ASCII `text` as a str8.
///
/// # Errors
///
/// Returns [`CodecError::Encoding`] if `text` contains a non-ASCII
/// character and [`CodecError::TooLong`] if it is longer than
/// [`STR8_MAX_LEN`].
pub fn encode_str8_text(text: &str) -> CodecResult<Vec<u8>> {
    if let Some((position, character)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(CodecError::Encoding {
            position,
            character,
        });
    }
    encode_str8(text.as_bytes())
}

/// Appends the str8 encoding of `bytes` to `buf`.
///
/// Nothing is written on error.
pub fn encode_str8_into<B: BufMut>(bytes: &[u8], buf: &mut B) -> CodecResult<()> {
    let len = u8::try_from(bytes.len()).map_err(|_| CodecError::TooLong {
        len: bytes.len(),
        max: STR8_MAX_LEN,
    })?;
    buf.put_u8(len);
    buf.put_slice(bytes);
    Ok(())
}

/// Reads a str8 and returns its payload as text.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the buffer ends inside the
/// string and [`CodecError::Encoding`] if a payload byte is not ASCII.
/// The cursor does not move on error.
pub fn decode_str8(cursor: &mut ByteCursor) -> CodecResult<String> {
    let payload = peek_payload(cursor)?;
    if let Some(position) = payload.iter().position(|b| !b.is_ascii()) {
        return Err(CodecError::Encoding {
            position,
            character: char::from(payload[position]),
        });
    }
    // ASCII is valid UTF-8.
    let text = payload.iter().map(|&b| char::from(b)).collect();
    let len = payload.len();
    cursor.skip(1 + len)?;
    Ok(text)
}

/// Reads a str8 and returns its raw payload.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the buffer ends inside the
/// string. The cursor does not move on error.
pub fn decode_str8_bytes(cursor: &mut ByteCursor) -> CodecResult<Vec<u8>> {
    let payload = peek_payload(cursor)?.to_vec();
    cursor.skip(1 + payload.len())?;
    Ok(payload)
}

fn peek_payload(cursor: &ByteCursor) -> CodecResult<&[u8]> {
    let input = cursor.unconsumed();
    let Some((&len, rest)) = input.split_first() else {
        return Err(CodecError::out_of_bounds(1, 0));
    };
    let len = usize::from(len);
    if len > rest.len() {
        return Err(CodecError::out_of_bounds(1 + len, input.len()));
    }
    Ok(&rest[..len])
}
