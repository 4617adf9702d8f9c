//! Wire test vectors for the TANK codec.
//!
//! These vectors pin the exact bytes each format produces so that clients
//! written in other languages can be checked against the same data.

use serde::{Deserialize, Serialize};

/// A varint encoding vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarintVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Value to encode.
    pub value: u64,
    /// Expected encoding (hex), empty when encoding must fail.
    pub encoded_hex: String,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

/// A str8 encoding vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Str8Vector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Payload (hex).
    pub payload_hex: String,
    /// Expected encoding (hex), empty when encoding must fail.
    pub encoded_hex: String,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

/// A fixed-width integer vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Value to encode.
    pub value: u64,
    /// Width in bytes.
    pub width: usize,
    /// Expected encoding (hex).
    pub encoded_hex: String,
}

/// A byte sequence that must fail to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalformedVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Format the input is decoded as (`"varint"` or `"str8"`).
    pub format: String,
    /// Input bytes (hex).
    pub input_hex: String,
    /// Expected error kind.
    pub expected_error: String,
}

fn varint(id: &str, description: &str, value: u64, encoded_hex: &str) -> VarintVector {
    VarintVector {
        id: id.into(),
        description: description.into(),
        value,
        encoded_hex: encoded_hex.into(),
        expected_error: None,
    }
}

/// Varint encoding vectors.
pub fn varint_vectors() -> Vec<VarintVector> {
    vec![
        varint("varint_0", "Zero", 0, "00"),
        varint("varint_127", "Largest 1-byte value", 127, "7f"),
        varint("varint_128", "Smallest 2-byte value", 128, "8001"),
        varint("varint_300", "Two bytes, both groups non-zero", 300, "ac02"),
        varint("varint_16383", "Largest 2-byte value", 16_383, "ff7f"),
        varint("varint_16384", "Smallest 3-byte value", 16_384, "808001"),
        varint("varint_2097151", "Largest 3-byte value", 2_097_151, "ffff7f"),
        varint("varint_2097152", "Smallest 4-byte value", 2_097_152, "80808001"),
        varint("varint_268435455", "Largest 4-byte value", 268_435_455, "ffffff7f"),
        varint("varint_268435456", "Smallest 5-byte value", 268_435_456, "8080808001"),
        varint("varint_u32_max", "Largest encodable value", 4_294_967_295, "ffffffff0f"),
        VarintVector {
            id: "varint_u32_max_plus_one".into(),
            description: "First value past the 32-bit ceiling".into(),
            value: 4_294_967_296,
            encoded_hex: String::new(),
            expected_error: Some("OutOfRange".into()),
        },
    ]
}

/// Str8 encoding vectors.
pub fn str8_vectors() -> Vec<Str8Vector> {
    vec![
        Str8Vector {
            id: "str8_empty".into(),
            description: "Empty payload".into(),
            payload_hex: String::new(),
            encoded_hex: "00".into(),
            expected_error: None,
        },
        Str8Vector {
            id: "str8_topic".into(),
            description: "ASCII topic name".into(),
            payload_hex: "6f7264657273".into(),
            encoded_hex: "066f7264657273".into(),
            expected_error: None,
        },
        Str8Vector {
            id: "str8_binary".into(),
            description: "Raw bytes including high-bit values".into(),
            payload_hex: "00ff80".into(),
            encoded_hex: "0300ff80".into(),
            expected_error: None,
        },
        Str8Vector {
            id: "str8_max".into(),
            description: "255-byte payload".into(),
            payload_hex: "61".repeat(255),
            encoded_hex: format!("ff{}", "61".repeat(255)),
            expected_error: None,
        },
        Str8Vector {
            id: "str8_too_long".into(),
            description: "256-byte payload".into(),
            payload_hex: "61".repeat(256),
            encoded_hex: String::new(),
            expected_error: Some("TooLong".into()),
        },
    ]
}

/// Fixed-width integer vectors.
pub fn fixed_vectors() -> Vec<FixedVector> {
    let fixed = |id: &str, description: &str, value: u64, width: usize, hex: &str| FixedVector {
        id: id.into(),
        description: description.into(),
        value,
        width,
        encoded_hex: hex.into(),
    };
    vec![
        fixed("fixed_u8", "Single byte", 0xAB, 1, "ab"),
        fixed("fixed_u16", "Two bytes, low byte first", 0x1234, 2, "3412"),
        fixed("fixed_u32", "Four bytes", 0x1234_5678, 4, "78563412"),
        fixed("fixed_u64", "Eight bytes", 0x0102_0304_0506_0708, 8, "0807060504030201"),
        fixed("fixed_u24", "Odd width", 0x00AB_CDEF, 3, "efcdab"),
    ]
}

/// Inputs that must be rejected by the decoders.
pub fn malformed_vectors() -> Vec<MalformedVector> {
    let malformed = |id: &str, description: &str, format: &str, hex: &str| MalformedVector {
        id: id.into(),
        description: description.into(),
        format: format.into(),
        input_hex: hex.into(),
        expected_error: "OutOfBounds".into(),
    };
    vec![
        malformed("varint_empty", "No bytes at all", "varint", ""),
        malformed("varint_cut_2", "Continuation without a second byte", "varint", "80"),
        malformed("varint_cut_5", "Four continued groups, no terminator", "varint", "ffffffff"),
        malformed("str8_empty", "Missing length byte", "str8", ""),
        malformed("str8_short", "Length 4, two payload bytes", "str8", "046162"),
    ]
}

/// Generate all test vectors as JSON for cross-language use.
pub fn all_vectors_json() -> String {
    let vectors = AllTestVectors {
        varint: varint_vectors(),
        str8: str8_vectors(),
        fixed: fixed_vectors(),
        malformed: malformed_vectors(),
    };

    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    varint: Vec<VarintVector>,
    str8: Vec<Str8Vector>,
    fixed: Vec<FixedVector>,
    malformed: Vec<MalformedVector>,
}
