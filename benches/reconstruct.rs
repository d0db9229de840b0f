use num_bigint::BigInt;
use secret_recovery::encoding::decode;
use secret_recovery::recovery::lagrange::{Point, reconstruct};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn points(k: i64) -> Vec<Point> {
    // f(x) = 1 + x + x² + ... + x^(k-1)
    (1..=k)
        .map(|x| {
            let y = (0..k).fold(BigInt::from(0), |acc, _| acc * x + 1);
            Point::new(x, y)
        })
        .collect()
}

pub fn bench_reconstruct(c: &mut Criterion) {
    for k in [3usize, 7, 16] {
        let p = points(k as i64);
        c.bench_function(&format!("reconstruct k={k}"), |b| {
            b.iter(|| reconstruct(black_box(&p), black_box(k)))
        });
    }
}

pub fn bench_decode(c: &mut Criterion) {
    let value = "1101001212122002212200012112022101111021011021201122220";
    c.bench_function("decode base 3", |b| {
        b.iter(|| decode(black_box(value), black_box(3)))
    });
}

criterion_group!(benches, bench_reconstruct, bench_decode);
criterion_main!(benches);
