//! Compressed blocks embedded in a cursor's buffer.
//!
//! The codec does not compress anything itself. It consumes the compressed
//! span and hands it to a [`BlockDecompressor`] supplied by the caller.

use tracing::{debug, warn};

use crate::cursor::ByteCursor;
use crate::error::{CodecError, CodecResult};

/// A pluggable block decompression routine.
///
/// Implemented for any `Fn(&[u8]) -> CodecResult<Vec<u8>>`, so a closure
/// can be passed wherever a decompressor is expected.
pub trait BlockDecompressor {
    /// Decompresses one complete block.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CorruptData`] for malformed input or
    /// [`CodecError::Io`] for failures reported by the underlying library.
    fn decompress(&self, input: &[u8]) -> CodecResult<Vec<u8>>;
}

impl<F> BlockDecompressor for F
where
    F: Fn(&[u8]) -> CodecResult<Vec<u8>>,
{
    fn decompress(&self, input: &[u8]) -> CodecResult<Vec<u8>> {
        self(input)
    }
}

/// Raw (unframed) Snappy blocks.
#[cfg(feature = "snappy")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SnappyDecompressor;

#[cfg(feature = "snappy")]
impl BlockDecompressor for SnappyDecompressor {
    fn decompress(&self, input: &[u8]) -> CodecResult<Vec<u8>> {
        snap::raw::Decoder::new()
            .decompress_vec(input)
            .map_err(|err| CodecError::corrupt(err.to_string()))
    }
}

/// Consumes the next `len` bytes of `cursor` and decompresses them.
///
/// The cursor advances by `len` once the span is available, even if the
/// decompressor then rejects it.
///
/// # Errors
///
/// - [`CodecError::BlockTooLarge`] if `len` exceeds the cursor's
///   `max_block_len`
/// - [`CodecError::OutOfBounds`] if fewer than `len` bytes remain
/// - whatever the decompressor returns, unchanged
pub fn decompress_next<D>(
    cursor: &mut ByteCursor,
    len: usize,
    decompressor: &D,
) -> CodecResult<Vec<u8>>
where
    D: BlockDecompressor + ?Sized,
{
    let max = cursor.config().max_block_len;
    if len > max {
        return Err(CodecError::BlockTooLarge { len, max });
    }

    let offset = cursor.offset();
    let compressed = cursor.consume(len)?;
    match decompressor.decompress(compressed) {
        Ok(block) => {
            debug!(
                offset,
                compressed = len,
                decompressed = block.len(),
                "decompressed block"
            );
            Ok(block)
        }
        Err(err) => {
            warn!(offset, compressed = len, error = %err, "block decompression failed");
            Err(err)
        }
    }
}
