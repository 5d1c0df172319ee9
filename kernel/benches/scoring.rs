//! Benchmarks for the scoring hot path: `score_combined` runs once per
//! solver hop, `score_english_detailed` once per popped node in English mode.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use descry_kernel::score::{score_combined, score_english_detailed, shannon_entropy};

const PROSE: &[u8] = b"We hold these truths to be self-evident, that all men are created \
equal, that they are endowed by their Creator with certain unalienable Rights, that among \
these are Life, Liberty and the pursuit of Happiness.";

fn bench_scoring(c: &mut Criterion) {
    let noise: Vec<u8> = (0..PROSE.len()).map(|i| (i * 37 % 256) as u8).collect();

    c.bench_function("score_combined/printable", |b| {
        b.iter(|| score_combined(black_box(PROSE), false));
    });
    c.bench_function("score_combined/entropy_fallback", |b| {
        b.iter(|| score_combined(black_box(&noise), false));
    });
    c.bench_function("shannon_entropy", |b| {
        b.iter(|| shannon_entropy(black_box(&noise)));
    });
    c.bench_function("score_english_detailed", |b| {
        b.iter(|| score_english_detailed(black_box(PROSE)));
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
