// Criterion benchmarks for pwforge-wordlist.
//
// Run:
//   cargo bench -p pwforge-wordlist

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pwforge_core::config::{Pairing, WordlistConfig, YearRange};
use pwforge_wordlist::pipeline::mutate;
use pwforge_wordlist::{FanOut, WordlistGenerator};

const BASE_WORDS: &[&str] = &["summer", "rex", "berlin", "Anna"];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Per-word stages only: casing, leet, years, symbols. No combination.
fn bench_mutate(c: &mut Criterion) {
    let cfg = WordlistConfig::full();
    let bound = FanOut::from_config(&cfg).candidate_bound(BASE_WORDS.len());
    eprintln!("[bench_mutate] candidate bound: {bound}");

    c.bench_function("mutate_full_4_words", |b| {
        b.iter(|| mutate(black_box(BASE_WORDS), black_box(&cfg)))
    });
}

/// End-to-end generation at growing candidate counts, to show the quadratic
/// combination stage.
fn bench_generate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_scaling");
    group.sample_size(20);

    for end in [2000u32, 2002, 2005] {
        let cfg = WordlistConfig {
            casing: true,
            leet: true,
            years: true,
            year_range: YearRange::new(2000, end),
            max_candidates: None,
            ..WordlistConfig::default()
        };
        let generator = WordlistGenerator::new(cfg).expect("valid config");
        let candidates = mutate(BASE_WORDS, generator.config()).len();

        group.bench_with_input(BenchmarkId::from_parameter(candidates), &generator, |b, g| {
            b.iter(|| g.generate(black_box(BASE_WORDS)))
        });
    }
    group.finish();
}

/// Mirrored vs. directional pairing over the same candidate set.
fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");
    for pairing in [Pairing::Mirrored, Pairing::Directional] {
        let generator = WordlistGenerator::new(WordlistConfig {
            casing: true,
            leet: true,
            pairing,
            max_candidates: None,
            ..WordlistConfig::default()
        })
        .expect("valid config");
        group.bench_function(pairing.to_string(), |b| {
            b.iter(|| generator.generate(black_box(BASE_WORDS)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mutate, bench_generate_scaling, bench_pairing);
criterion_main!(benches);
