//! Criterion benchmarks for antimat.
//!
//! Covers the hot paths of both engines:
//! - Edit distance
//! - Tokenization and re-segmentation
//! - Fuzzy scanning against lexicons of growing size
//! - Pattern matching per family
//! - Parallel batch masking

use std::hint::black_box;

use antimat::analysis::prepare_units;
use antimat::censor::{Censor, DEFAULT_MARKER, replace_all_parallel};
use antimat::fuzzy::FuzzyCensor;
use antimat::lexicon::provider::StaticLexiconProvider;
use antimat::pattern::{self, PatternFamily};
use antimat::util::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate test messages for benchmarking.
fn generate_messages(count: usize) -> Vec<String> {
    let words = [
        "привет", "как", "дела", "сегодня", "хорошая", "погода", "пр1мер", "текста", "и", "в",
        "новости", "читал", "х у й", "п р и м е р", "вечером", "hello", "world", "42",
    ];

    (0..count)
        .map(|i| {
            let len = 8 + (i % 24);
            (0..len)
                .map(|j| words[(i * 7 + j * 3) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn generate_lexicon(size: usize) -> StaticLexiconProvider {
    let roots = ["пример", "слово", "бяка", "бука", "ругань", "гадость", "мерзость", "дрянь"];
    let letters: Vec<char> = "абвгдежзик".chars().collect();
    let words: Vec<String> = (0..size)
        .map(|i| {
            let suffix: String = (i / roots.len())
                .to_string()
                .chars()
                .filter_map(|d| d.to_digit(10).map(|d| letters[d as usize]))
                .collect();
            format!("{}{suffix}", roots[i % roots.len()])
        })
        .collect();
    StaticLexiconProvider::from_words(words).unwrap()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("full_distance", |b| {
        b.iter(|| levenshtein_distance(black_box("пр1мерчик"), black_box("примерный")))
    });

    group.bench_function("threshold_distance", |b| {
        b.iter(|| levenshtein_distance_threshold(black_box("пр1мерчик"), black_box("примерный"), 2))
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let messages = generate_messages(100);

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("prepare_units", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(prepare_units(message).unwrap().count());
            }
        })
    });

    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy");
    let messages = generate_messages(100);

    for size in [10, 100, 1000] {
        let censor = FuzzyCensor::new(generate_lexicon(size));
        group.throughput(Throughput::Elements(messages.len() as u64));
        group.bench_function(format!("test_lexicon_{size}"), |b| {
            b.iter(|| {
                for message in &messages {
                    black_box(censor.test(message).unwrap());
                }
            })
        });
    }

    let censor = FuzzyCensor::new(generate_lexicon(100));
    group.bench_function("replace_lexicon_100", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(censor.replace(message, DEFAULT_MARKER).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    let messages = generate_messages(100);
    pattern::precompile().unwrap();

    for family in PatternFamily::ALL {
        let matcher = pattern::builtin(family).unwrap();
        group.throughput(Throughput::Elements(messages.len() as u64));
        group.bench_function(format!("replace_{family}"), |b| {
            b.iter(|| {
                for message in &messages {
                    black_box(matcher.replace(message, DEFAULT_MARKER).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let messages = generate_messages(1000);
    let censor = FuzzyCensor::new(generate_lexicon(100));

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("parallel_replace", |b| {
        b.iter(|| black_box(replace_all_parallel(&censor, &messages, DEFAULT_MARKER).unwrap()))
    });

    group.bench_function("sequential_replace", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(censor.replace(message, DEFAULT_MARKER).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_analysis,
    bench_fuzzy,
    bench_pattern,
    bench_parallel
);
criterion_main!(benches);
