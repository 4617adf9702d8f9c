//! Benchmark utilities.

#![warn(missing_docs)]

use rand::Rng;
use tank_codec::ByteCursor;

/// Generate random bytes of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate varint inputs spread across all five encoded widths.
pub fn varint_values(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let bits = rng.gen_range(1u32..=32);
            rng.gen::<u64>() >> (64 - bits)
        })
        .collect()
}

/// Build a buffer of `count` records shaped like a message header:
/// `varint(seq) | str8(key) | fixed64(timestamp)`.
pub fn message_records(count: usize) -> ByteCursor {
    let mut rng = rand::thread_rng();
    let mut cursor = ByteCursor::default();
    for seq in 0..count {
        cursor.put_varint(seq as u64).expect("sequence fits in u32");
        let key = format!("key-{}", rng.gen_range(0..10_000));
        cursor.put_str8(key.as_bytes()).expect("short key");
        cursor.put_fixed(rng.gen(), 8).expect("valid width");
    }
    cursor
}
