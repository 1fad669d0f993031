use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hzip::{compress, decompress};

fn text_sample(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let data = text_sample(64 * 1024);
    c.bench_function("compress_text_64k", |b| {
        b.iter(|| compress(black_box(&data)).unwrap())
    });

    let uniform = vec![0x41u8; 64 * 1024];
    c.bench_function("compress_uniform_64k", |b| {
        b.iter(|| compress(black_box(&uniform)).unwrap())
    });
}

fn bench_decompress(c: &mut Criterion) {
    let compressed = compress(&text_sample(64 * 1024)).unwrap();
    c.bench_function("decompress_text_64k", |b| {
        b.iter(|| decompress(black_box(&compressed)).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
