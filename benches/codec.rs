use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffpack::{compress, decompress};

fn text_input() -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs. "
        .repeat(256)
        .into_bytes()
}

fn huffman_compression(c: &mut Criterion) {
    let input = text_input();
    c.bench_function("huffman compression", |b| {
        b.iter(|| compress(black_box(&input)))
    });

    let random_input = (0..16384).map(|_| rand::random::<u8>()).collect::<Vec<u8>>();
    c.bench_function("huffman compression (random)", |b| {
        b.iter(|| compress(black_box(&random_input)))
    });
}

fn huffman_decompression(c: &mut Criterion) {
    let compressed = compress(&text_input()).unwrap();
    c.bench_function("huffman decompression", |b| {
        b.iter(|| decompress(black_box(&compressed)))
    });
}

criterion_group!(benches, huffman_compression, huffman_decompression);
criterion_main!(benches);
