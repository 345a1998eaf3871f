//! Criterion benchmark for the address classifier.

use corelib::classify;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    let mapped: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 192, 168, 1, 1];
    let native: [u8; 16] = [
        0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2,
    ];

    c.bench_function("classify_mapped", |b| {
        b.iter(|| classify(black_box(&mapped)))
    });
    c.bench_function("classify_native", |b| {
        b.iter(|| classify(black_box(&native)))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
