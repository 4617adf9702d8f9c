//! Cursor configuration.

/// Configuration for a [`ByteCursor`](crate::ByteCursor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorConfig {
    /// Capacity reserved up front for the buffer.
    pub initial_capacity: usize,

    /// Consumed-prefix size at which `maybe_compact` reclaims memory
    /// (`None` = never).
    pub compact_threshold: Option<usize>,

    /// Largest compressed span `decompress_next` will accept.
    pub max_block_len: usize,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4 * 1024,          // 4 KB
            compact_threshold: Some(64 * 1024),  // 64 KB
            max_block_len: 64 * 1024 * 1024,     // 64 MB
        }
    }
}

impl CursorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial buffer capacity.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the automatic compaction threshold.
    #[must_use]
    pub const fn compact_threshold(mut self, threshold: Option<usize>) -> Self {
        self.compact_threshold = threshold;
        self
    }

    /// Sets the maximum compressed block length.
    #[must_use]
    pub const fn max_block_len(mut self, len: usize) -> Self {
        self.max_block_len = len;
        self
    }
}
