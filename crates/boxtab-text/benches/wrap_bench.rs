//! Benchmarks for the cell wrapping pipeline.

use boxtab_text::pad::pad_start;
use boxtab_text::wrap::{chunk_chars, wrap_words};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_wrap(c: &mut Criterion) {
    let short = "id name followers";
    let long = "This is a tall boy who doesn't like short boys but likes short girls. "
        .repeat(8);
    let unbroken = "x".repeat(512);

    c.bench_function("wrap_words/short", |b| {
        b.iter(|| wrap_words(black_box(short), black_box(18)));
    });
    c.bench_function("wrap_words/long", |b| {
        b.iter(|| wrap_words(black_box(&long), black_box(18)));
    });
    c.bench_function("wrap_words/unbroken", |b| {
        b.iter(|| wrap_words(black_box(&unbroken), black_box(18)));
    });
    c.bench_function("chunk_chars/long", |b| {
        b.iter(|| chunk_chars(black_box(&long), black_box(18)));
    });
    c.bench_function("pad_start/typical", |b| {
        b.iter(|| pad_start(black_box("followers "), black_box(20)));
    });
}

criterion_group!(benches, bench_wrap);
criterion_main!(benches);
