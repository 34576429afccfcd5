//! Scan benchmarks.
//!
//! Scan cost should follow the length of the text, not the size of the
//! vocabulary: the same text is scanned against 10 and 10,000 words.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sensdfa::{run_dfa_with_words, Dfa};

fn vocabulary(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("敏感词{i}")).collect()
}

fn clean_text(chars: usize) -> String {
    "这是一个很长的文本，".chars().cycle().take(chars).collect()
}

/// Benchmark scanning a text with no match, for growing vocabularies.
fn bench_vocabulary_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_vocabulary_size");
    let text = clean_text(10_000);
    group.throughput(Throughput::Elements(10_000));

    for size in [10, 10_000] {
        let mut dfa: Dfa = vocabulary(size).iter().map(String::as_str).collect();
        dfa.compile();

        group.bench_with_input(BenchmarkId::new("is_sensitive", size), &text, |b, text| {
            b.iter(|| black_box(dfa.is_sensitive(text)))
        });
    }

    group.finish();
}

/// Benchmark scanning texts of growing length against a fixed vocabulary.
fn bench_text_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_text_length");
    let mut dfa: Dfa = vocabulary(1_000).iter().map(String::as_str).collect();
    dfa.compile();

    for chars in [1_000, 10_000, 100_000] {
        let text = clean_text(chars);
        group.throughput(Throughput::Elements(chars as u64));
        group.bench_with_input(BenchmarkId::new("is_sensitive", chars), &text, |b, text| {
            b.iter(|| black_box(dfa.is_sensitive(text)))
        });
    }

    group.finish();
}

/// Benchmark reporting every occurrence in a match-dense text.
fn bench_find_all(c: &mut Criterion) {
    let mut dfa: Dfa = ["he", "she", "his", "hers"].into_iter().collect();
    dfa.compile();
    let text = "ushers his hers she ".repeat(500);

    c.bench_function("find_all_dense", |b| {
        b.iter(|| black_box(dfa.find_all(text.chars())).len())
    });
}

/// Benchmark the one-shot entry point, which builds and discards an
/// automaton per call.
fn bench_one_shot(c: &mut Criterion) {
    let words = vocabulary(100);
    let text = clean_text(1_000);

    c.bench_function("run_dfa_with_words_100", |b| {
        b.iter(|| black_box(run_dfa_with_words(&text, &words)))
    });
}

criterion_group!(
    benches,
    bench_vocabulary_size,
    bench_text_length,
    bench_find_all,
    bench_one_shot
);
criterion_main!(benches);
