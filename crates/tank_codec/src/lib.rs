//! # TANK Codec
//!
//! Byte-level primitives for the TANK client wire protocol.
//!
//! This crate provides:
//! - [`ByteCursor`], an owned buffer with a bounds-checked read offset
//! - fixed-width little-endian integers ([`encode_fixed`], [`decode_fixed`])
//! - varints up to `u32::MAX` ([`encode_varint`], [`decode_varint`])
//! - str8 strings, one length byte plus payload ([`encode_str8`], [`decode_str8`])
//! - embedded compressed blocks via a pluggable [`BlockDecompressor`]
//!
//! Network I/O and the protocol state machine live above this crate: they
//! feed received bytes into a cursor and call the decoders in whatever order
//! the message layout requires. Every decode advances the cursor by exactly
//! the bytes it consumed and leaves it untouched on error.
//!
//! ## Usage
//!
//! ```
//! use tank_codec::{decode_str8, decode_varint, encode_str8_text, encode_varint, ByteCursor};
//!
//! let mut cursor = ByteCursor::default();
//! cursor.append(&encode_varint(300).unwrap());
//! cursor.append(&encode_str8_text("orders").unwrap());
//!
//! assert_eq!(decode_varint(&mut cursor).unwrap(), 300);
//! assert_eq!(decode_str8(&mut cursor).unwrap(), "orders");
//! assert!(cursor.is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod config;
mod cursor;
mod error;
mod fixed;
mod str8;
mod varint;

#[cfg(feature = "snappy")]
pub use block::SnappyDecompressor;
pub use block::{decompress_next, BlockDecompressor};
pub use config::CursorConfig;
pub use cursor::ByteCursor;
pub use error::{CodecError, CodecResult};
pub use fixed::{decode_fixed, encode_fixed, encode_fixed_into, MAX_FIXED_WIDTH};
pub use str8::{
    decode_str8, decode_str8_bytes, encode_str8, encode_str8_into, encode_str8_text, STR8_MAX_LEN,
};
pub use varint::{
    decode_varint, encode_varint, encode_varint_into, encode_varint_u32, encoded_varint_len,
    CONTINUATION_BIT, PAYLOAD_MASK, VARINT_MAX, VARINT_MAX_LEN, VARINT_SHIFTS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_message_roundtrip() {
        let mut cursor = ByteCursor::default();
        cursor.put_fixed(0xBEEF, 2).unwrap();
        cursor.put_str8(b"events").unwrap();
        cursor.put_varint(u64::from(u32::MAX)).unwrap();
        cursor.put_fixed(7, 8).unwrap();

        assert_eq!(decode_fixed(&mut cursor, 2).unwrap(), 0xBEEF);
        assert_eq!(decode_str8(&mut cursor).unwrap(), "events");
        assert_eq!(decode_varint(&mut cursor).unwrap(), VARINT_MAX);
        assert_eq!(decode_fixed(&mut cursor, 8).unwrap(), 7);
        assert!(cursor.is_empty());
    }

    #[test]
    fn receive_loop_with_compaction() {
        let mut cursor = ByteCursor::with_config(
            Vec::<u8>::new(),
            CursorConfig::new().compact_threshold(Some(4)),
        );

        // First chunk ends in the middle of a varint.
        cursor.append(&[0x01, 0x02, 0x03, 0x04, 0x80]);
        for expected in 1..=4 {
            assert_eq!(decode_varint(&mut cursor).unwrap(), expected);
        }
        assert!(decode_varint(&mut cursor).unwrap_err().is_out_of_bounds());
        assert!(cursor.maybe_compact());
        assert_eq!(cursor.as_bytes(), &[0x80]);

        cursor.append(&[0x01]);
        assert_eq!(decode_varint(&mut cursor).unwrap(), 128);
    }

    #[test]
    fn rewind_and_reprocess() {
        let mut cursor = ByteCursor::new(encode_str8(b"abc").unwrap());
        let first = decode_str8_bytes(&mut cursor).unwrap();
        cursor.reset_offset();
        let second = decode_str8_bytes(&mut cursor).unwrap();
        assert_eq!(first, second);
    }
}
