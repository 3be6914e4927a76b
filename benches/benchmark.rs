//! Benchmarks for frequency cryptanalysis operations.
//!
//! Measures the 26-way shift search, raw brute-force decoding, single-shot
//! rank analysis, and shift-search throughput scaling across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use freqbreak::{
    analyze_rank_cipher, analyze_shift_cipher, apply_shift, brute_force_shifts, ReferenceTable,
};

/// English paragraph used consistently across all benchmarks.
const BENCH_PARAGRAPH: &str = "counting letters in a long passage of ordinary \
    english shows a steady pattern the letter e leads followed by t and a \
    while q and z barely appear at all this uneven spread is the fingerprint \
    that lets a frequency attack break a simple substitution and the longer \
    the passage runs the sharper the fingerprint becomes";

/// Shift applied to the paragraph before each breaking benchmark.
const BENCH_SHIFT: i32 = 11;

/// Builds a token-cipher stream from the paragraph: every character becomes
/// a numeric token, preserving per-symbol frequency.
fn token_stream() -> String {
    let tokens: Vec<String> = BENCH_PARAGRAPH
        .chars()
        .map(|c| (c as u32 * 7 + 13).to_string())
        .collect();
    tokens.join(" ")
}

/// Benchmarks `analyze_shift_cipher()` over the full paragraph.
///
/// Each iteration runs the complete pipeline: 26 decodes, 26 normalization
/// passes, 26 frequency tables, 26 chi-squared scores.
fn bench_analyze_shift(c: &mut Criterion) {
    let ciphertext = apply_shift(BENCH_PARAGRAPH, BENCH_SHIFT);
    let reference = ReferenceTable::english_letters();

    c.bench_function("analyze_shift_cipher", |b| {
        b.iter(|| analyze_shift_cipher(black_box(&ciphertext), reference));
    });
}

/// Benchmarks the raw 26-way brute force without scoring.
fn bench_brute_force(c: &mut Criterion) {
    let ciphertext = apply_shift(BENCH_PARAGRAPH, BENCH_SHIFT);

    c.bench_function("brute_force_shifts", |b| {
        b.iter(|| brute_force_shifts(black_box(&ciphertext)).count());
    });
}

/// Benchmarks `analyze_rank_cipher()` over a per-character token stream.
fn bench_analyze_rank(c: &mut Criterion) {
    let ciphertext = token_stream();
    let reference = ReferenceTable::english_letters_with_space();

    c.bench_function("analyze_rank_cipher", |b| {
        b.iter(|| analyze_rank_cipher(black_box(&ciphertext), reference));
    });
}

/// Benchmarks shift analysis throughput across input sizes.
///
/// Shows how the bounded 26-way search scales with ciphertext length.
fn bench_shift_scaling(c: &mut Criterion) {
    let sizes: &[usize] = &[256, 1024, 4096];
    let reference = ReferenceTable::english_letters();

    let mut group = c.benchmark_group("analyze_shift_scaling");
    for &size in sizes {
        let mut plaintext = String::with_capacity(size);
        while plaintext.len() < size {
            plaintext.push_str(BENCH_PARAGRAPH);
        }
        plaintext.truncate(size);
        let ciphertext = apply_shift(&plaintext, BENCH_SHIFT);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ciphertext, |b, ct| {
            b.iter(|| analyze_shift_cipher(black_box(ct), reference));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_analyze_shift,
    bench_brute_force,
    bench_analyze_rank,
    bench_shift_scaling,
);
criterion_main!(benches);
