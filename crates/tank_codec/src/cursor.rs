//! Owned byte buffer with a bounds-checked read offset.

use bytes::{Buf, BytesMut};
use tracing::trace;

use crate::config::CursorConfig;
use crate::error::{CodecError, CodecResult};
use crate::{fixed, str8, varint};

/// A growable byte buffer plus the offset of the next unread byte.
///
/// Every read is checked against the unconsumed length and fails with
/// [`CodecError::OutOfBounds`] instead of touching memory past the end.
/// A cursor has a single owner; share it across threads only behind
/// external synchronization.
///
/// # Invariants
///
/// - `offset <= buffer.len()` at all times
/// - a read of `n` bytes advances `offset` by exactly `n`, or not at all
#[derive(Debug, Clone)]
pub struct ByteCursor {
    buffer: BytesMut,
    offset: usize,
    config: CursorConfig,
}

impl ByteCursor {
    /// Creates a cursor over a copy of `data`, positioned at its start.
    pub fn new(data: impl AsRef<[u8]>) -> Self {
        Self::with_config(data, CursorConfig::default())
    }

    /// Creates a cursor with an explicit configuration.
    pub fn with_config(data: impl AsRef<[u8]>, config: CursorConfig) -> Self {
        let data = data.as_ref();
        let mut buffer = BytesMut::with_capacity(config.initial_capacity.max(data.len()));
        buffer.extend_from_slice(data);
        Self {
            buffer,
            offset: 0,
            config,
        }
    }

    /// Returns the configuration this cursor was built with.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Appends `bytes` to the end of the buffer. The offset is unchanged.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Returns the next `n` bytes and advances past them.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfBounds`] if fewer than `n` bytes remain;
    /// the offset is left unchanged.
    pub fn consume(&mut self, n: usize) -> CodecResult<&[u8]> {
        self.ensure(n)?;
        let start = self.offset;
        self.offset += n;
        Ok(&self.buffer[start..self.offset])
    }

    /// Reads a single byte.
    pub fn consume_u8(&mut self) -> CodecResult<u8> {
        self.ensure(1)?;
        let byte = self.buffer[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    /// Advances past `n` bytes without returning them.
    pub fn skip(&mut self, n: usize) -> CodecResult<()> {
        self.ensure(n)?;
        self.offset += n;
        Ok(())
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.buffer.get(self.offset).copied()
    }

    /// Number of unconsumed bytes.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Returns `true` if every buffered byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Total number of buffered bytes, consumed or not.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Number of bytes consumed since creation, the last compaction or
    /// the last rewind.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rewinds the read position to the start of the buffer.
    pub fn reset_offset(&mut self) {
        trace!(from = self.offset, "rewinding cursor");
        self.offset = 0;
    }

    /// Drops every consumed byte and resets the offset to zero.
    ///
    /// Unconsumed bytes keep their order. Calling this twice in a row is a
    /// no-op the second time.
    pub fn compact(&mut self) {
        if self.offset == 0 {
            return;
        }
        let reclaimed = self.offset;
        self.buffer.advance(reclaimed);
        self.offset = 0;
        trace!(reclaimed, remaining = self.buffer.len(), "compacted cursor");
    }

    /// Compacts if the consumed prefix has reached the configured threshold.
    ///
    /// Returns `true` if a compaction happened.
    pub fn maybe_compact(&mut self) -> bool {
        match self.config.compact_threshold {
            Some(threshold) if self.offset >= threshold => {
                self.compact();
                true
            }
            _ => false,
        }
    }

    /// Borrows the unconsumed bytes.
    pub fn unconsumed(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }

    /// Borrows the whole buffer, including consumed bytes not yet compacted.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the cursor and returns its buffer.
    pub fn into_inner(self) -> BytesMut {
        self.buffer
    }

    /// Appends `value` as a `width`-byte little-endian integer.
    pub fn put_fixed(&mut self, value: u64, width: usize) -> CodecResult<()> {
        fixed::encode_fixed_into(value, width, &mut self.buffer)
    }

    /// Appends `value` as a varint.
    pub fn put_varint(&mut self, value: u64) -> CodecResult<()> {
        varint::encode_varint_into(value, &mut self.buffer)
    }

    /// Appends `bytes` as a str8.
    pub fn put_str8(&mut self, bytes: &[u8]) -> CodecResult<()> {
        str8::encode_str8_into(bytes, &mut self.buffer)
    }

    fn ensure(&self, n: usize) -> CodecResult<()> {
        let available = self.remaining();
        if n > available {
            return Err(CodecError::out_of_bounds(n, available));
        }
        Ok(())
    }
}

impl Default for ByteCursor {
    fn default() -> Self {
        Self::new([0u8; 0])
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor() {
        let cursor = ByteCursor::default();
        assert!(cursor.is_empty());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.peek_u8(), None);
    }

    #[test]
    fn consume_advances_offset() {
        let mut cursor = ByteCursor::new([1, 2, 3, 4, 5]);
        assert_eq!(cursor.consume(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.consume(3).unwrap(), &[3, 4, 5]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn consume_zero_is_noop() {
        let mut cursor = ByteCursor::new([9]);
        assert!(cursor.consume(0).unwrap().is_empty());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn consume_past_end_fails_without_advancing() {
        let mut cursor = ByteCursor::new([1, 2, 3]);
        cursor.consume(1).unwrap();
        let err = cursor.consume(3).unwrap_err();
        assert!(matches!(
            err,
            CodecError::OutOfBounds {
                requested: 3,
                available: 2
            }
        ));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn consume_u8_on_empty_fails() {
        let mut cursor = ByteCursor::default();
        assert!(cursor.consume_u8().unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn append_keeps_offset() {
        let mut cursor = ByteCursor::new([1, 2]);
        cursor.consume(1).unwrap();
        cursor.append(&[3, 4]);
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.unconsumed(), &[2, 3, 4]);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut cursor = ByteCursor::new([7, 8]);
        assert_eq!(cursor.peek_u8(), Some(7));
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.consume_u8().unwrap(), 7);
        assert_eq!(cursor.peek_u8(), Some(8));
    }

    #[test]
    fn skip_checks_bounds() {
        let mut cursor = ByteCursor::new([1, 2, 3]);
        cursor.skip(2).unwrap();
        assert_eq!(cursor.offset(), 2);
        assert!(cursor.skip(2).is_err());
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn compact_drops_consumed_prefix() {
        let mut cursor = ByteCursor::new([1, 2, 3, 4]);
        cursor.consume(3).unwrap();
        cursor.compact();
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.buffered(), 1);
        assert_eq!(cursor.as_bytes(), &[4]);

        cursor.compact();
        assert_eq!(cursor.as_bytes(), &[4]);
    }

    #[test]
    fn compact_then_append() {
        let mut cursor = ByteCursor::new([1, 2]);
        cursor.consume(2).unwrap();
        cursor.compact();
        assert!(cursor.is_empty());
        cursor.append(&[5, 6]);
        assert_eq!(cursor.consume(2).unwrap(), &[5, 6]);
    }

    #[test]
    fn reset_offset_rewinds() {
        let mut cursor = ByteCursor::new([1, 2, 3]);
        cursor.consume(2).unwrap();
        cursor.reset_offset();
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.consume(3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn maybe_compact_respects_threshold() {
        let config = CursorConfig::new().compact_threshold(Some(4));
        let mut cursor = ByteCursor::with_config([0u8; 8], config);
        cursor.consume(3).unwrap();
        assert!(!cursor.maybe_compact());
        assert_eq!(cursor.offset(), 3);

        cursor.consume(1).unwrap();
        assert!(cursor.maybe_compact());
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.buffered(), 4);
    }

    #[test]
    fn maybe_compact_disabled() {
        let config = CursorConfig::new().compact_threshold(None);
        let mut cursor = ByteCursor::with_config([0u8; 8], config);
        cursor.consume(8).unwrap();
        assert!(!cursor.maybe_compact());
        assert_eq!(cursor.buffered(), 8);
    }

    #[test]
    fn put_helpers_append_encodings() {
        let mut cursor = ByteCursor::default();
        cursor.put_varint(300).unwrap();
        cursor.put_str8(b"hi").unwrap();
        cursor.put_fixed(0x0102, 2).unwrap();
        assert_eq!(cursor.as_bytes(), &[0xAC, 0x02, 2, b'h', b'i', 0x02, 0x01]);
    }

    #[test]
    fn put_helpers_leave_buffer_on_error() {
        let mut cursor = ByteCursor::new([1]);
        assert!(cursor.put_varint(u64::MAX).is_err());
        assert!(cursor.put_str8(&[0u8; 256]).is_err());
        assert!(cursor.put_fixed(1, 9).is_err());
        assert_eq!(cursor.as_bytes(), &[1]);
    }

    #[test]
    fn into_inner_returns_buffer() {
        let mut cursor = ByteCursor::from(vec![1, 2, 3]);
        cursor.consume(1).unwrap();
        let buffer = cursor.into_inner();
        assert_eq!(&buffer[..], &[1, 2, 3]);
    }
}
