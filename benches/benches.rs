use cloudproof_rand::{bytes, hex, string, Charset};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_bytes(c: &mut Criterion) {
    c.bench_function("rand/bytes/32", |b| {
        b.iter(|| {
            bytes(32).unwrap();
        });
    });
    c.bench_function("rand/bytes/4096", |b| {
        b.iter(|| {
            bytes(4096).unwrap();
        });
    });
}

fn bench_hex(c: &mut Criterion) {
    c.bench_function("rand/hex/64", |b| {
        b.iter(|| {
            hex(64).unwrap();
        });
    });
}

fn bench_string(c: &mut Criterion) {
    c.bench_function("rand/string/all/32", |b| {
        b.iter(|| {
            string(32, Charset::ALL).unwrap();
        });
    });
    c.bench_function("rand/string/digit/10", |b| {
        b.iter(|| {
            string(10, Charset::DIGIT).unwrap();
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(5000);
    targets =
        bench_bytes,
        bench_hex,
        bench_string
);

criterion_main!(benches);
