//! Hexadecimal helpers for test vectors.

/// Encodes bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes a hexadecimal string to bytes. Whitespace is ignored.
///
/// # Panics
///
/// Panics on malformed hex; vectors are fixtures, not user input.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    let hex = hex.replace([' ', '\n', '\r'], "");
    assert!(hex.len() % 2 == 0, "odd-length hex string: {hex}");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Invalid hex"))
        .collect()
}
