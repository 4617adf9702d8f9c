//! Property-based test generators using proptest.
//!
//! Provides strategies for generating values that stay inside the limits
//! of each wire format, plus a few that deliberately step outside them.

use proptest::prelude::*;

/// Largest value a varint can carry.
const VARINT_MAX: u64 = u32::MAX as u64;

/// Longest str8 payload.
const STR8_MAX_LEN: usize = 255;

/// Strategy for any value a varint can carry.
pub fn varint_value_strategy() -> impl Strategy<Value = u64> {
    0..=VARINT_MAX
}

/// Strategy biased towards the group boundaries 2^7, 2^14, 2^21 and 2^28.
pub fn varint_boundary_strategy() -> impl Strategy<Value = u64> {
    (0..5u32, -2i64..=1).prop_map(|(group, delta)| {
        let base = 1i64 << (7 * group);
        (base + delta).clamp(0, VARINT_MAX as i64) as u64
    })
}

/// Strategy for values a varint cannot carry.
pub fn varint_overflow_strategy() -> impl Strategy<Value = u64> {
    (VARINT_MAX + 1)..=u64::MAX
}

/// Strategy for str8 payloads (0 to 255 arbitrary bytes).
pub fn str8_payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=STR8_MAX_LEN)
}

/// Strategy for payloads one byte or more past the str8 limit.
pub fn oversized_payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), (STR8_MAX_LEN + 1)..1024)
}

/// Strategy for printable ASCII text that fits in a str8.
pub fn ascii_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,255}").expect("Invalid regex")
}

/// Strategy for a width in `1..=8` and a value that fits in it.
pub fn fixed_width_strategy() -> impl Strategy<Value = (u64, usize)> {
    (1usize..=8, any::<u64>()).prop_map(|(width, value)| {
        let value = if width == 8 {
            value
        } else {
            value & ((1u64 << (width * 8)) - 1)
        };
        (value, width)
    })
}

/// One value written to, then read back from, a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireOp {
    /// A varint
    Varint(u64),
    /// A str8 payload
    Str8(Vec<u8>),
    /// A fixed-width integer
    Fixed {
        /// Value, already fitting in `width` bytes
        value: u64,
        /// Width in bytes
        width: usize,
    },
}

impl WireOp {
    /// Number of bytes this operation occupies on the wire.
    pub fn wire_len(&self) -> usize {
        match self {
            Self::Varint(value) => match *value {
                0..=0x7F => 1,
                0x80..=0x3FFF => 2,
                0x4000..=0x1F_FFFF => 3,
                0x20_0000..=0x0FFF_FFFF => 4,
                _ => 5,
            },
            Self::Str8(payload) => 1 + payload.len(),
            Self::Fixed { width, .. } => *width,
        }
    }
}

/// Strategy for a single wire operation.
pub fn wire_op_strategy() -> impl Strategy<Value = WireOp> {
    prop_oneof![
        3 => varint_value_strategy().prop_map(WireOp::Varint),
        2 => str8_payload_strategy().prop_map(WireOp::Str8),
        2 => fixed_width_strategy().prop_map(|(value, width)| WireOp::Fixed { value, width }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn wire_op_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<WireOp>> {
    prop::collection::vec(wire_op_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
