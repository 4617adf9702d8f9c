//! Varint, str8 and fixed-width codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tank_bench::{random_data, varint_values};
use tank_codec::{
    decode_fixed, decode_str8_bytes, decode_varint, encode_str8, encode_varint,
    encode_varint_into, ByteCursor,
};

/// Benchmark varint encoding.
fn bench_varint_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint_encode");
    let values = varint_values(1024);
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("alloc", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(encode_varint(black_box(value)).unwrap());
            }
        });
    });

    group.bench_function("into_buffer", |b| {
        let mut out = Vec::with_capacity(values.len() * 5);
        b.iter(|| {
            out.clear();
            for &value in &values {
                encode_varint_into(black_box(value), &mut out).unwrap();
            }
            black_box(&out);
        });
    });

    group.finish();
}

/// Benchmark varint decoding per encoded width.
fn bench_varint_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint_decode");

    for value in [0x7Fu64, 0x3FFF, 0x1F_FFFF, 0x0FFF_FFFF, u64::from(u32::MAX)] {
        let encoded = encode_varint(value).unwrap();
        let mut buffer = Vec::new();
        for _ in 0..1024 {
            buffer.extend_from_slice(&encoded);
        }
        group.throughput(Throughput::Elements(1024));
        group.bench_with_input(
            BenchmarkId::new("width", encoded.len()),
            &buffer,
            |b, buffer| {
                let mut cursor = ByteCursor::new(buffer);
                b.iter(|| {
                    cursor.reset_offset();
                    while !cursor.is_empty() {
                        black_box(decode_varint(&mut cursor).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark str8 encode and decode.
fn bench_str8(c: &mut Criterion) {
    let mut group = c.benchmark_group("str8");

    for size in [8usize, 64, 255].iter() {
        let payload = random_data(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &payload, |b, payload| {
            b.iter(|| black_box(encode_str8(black_box(payload)).unwrap()));
        });

        let encoded = encode_str8(&payload).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            let mut cursor = ByteCursor::new(encoded);
            b.iter(|| {
                cursor.reset_offset();
                black_box(decode_str8_bytes(&mut cursor).unwrap());
            });
        });
    }

    group.finish();
}

/// Benchmark fixed-width decoding.
fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_decode");
    let data = random_data(8 * 1024);

    for width in [1usize, 2, 4, 8].iter() {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, &width| {
            let mut cursor = ByteCursor::new(&data);
            b.iter(|| {
                cursor.reset_offset();
                while cursor.remaining() >= width {
                    black_box(decode_fixed(&mut cursor, width).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_str8,
    bench_fixed
);

criterion_main!(benches);
