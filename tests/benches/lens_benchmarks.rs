//! # Nexus Secrets Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | canonicalize | all builtin lenses over one input |
//! | admission | submit into a store of growing size |
//! | wall | page build and page reads |

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ns_01_lens::{canonicalize, LensSet};
use ns_02_admission::{AdmissionApi, AdmissionService};
use ns_03_wall::{PageSet, Wall, WallConfig};
use rand::distributions::Alphanumeric;
use rand::Rng;

fn random_values(n: usize, len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect())
        .collect()
}

fn bench_canonicalize(c: &mut Criterion) {
    let lenses = LensSet::builtin();
    let mut group = c.benchmark_group("canonicalize");

    let inputs = [
        ("ascii", "The quick brown fox jumps over the lazy dog".to_string()),
        ("hex", hex_of("The quick brown fox")),
        ("cyrillic", "Тhе quiсk brоwn fох".to_string()),
        ("palindrome", "A man, a plan, a canal: Panama".to_string()),
    ];

    for (name, input) in &inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(canonicalize(&lenses, input)))
        });
    }
    group.finish();
}

fn hex_of(s: &str) -> String {
    s.bytes().map(|b| format!("{b:02x}")).collect()
}

fn bench_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    for preload in [0usize, 1_000, 10_000] {
        let values = random_values(preload, 16);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("submit", preload), &values, |b, values| {
            let service = AdmissionService::new();
            for v in values {
                service.submit(v, "bench");
            }
            let mut i = 0u64;
            b.iter(|| {
                i += 1;
                black_box(service.submit(&format!("fresh value {i}"), "bench"))
            })
        });
    }
    group.finish();
}

fn bench_wall(c: &mut Criterion) {
    let mut group = c.benchmark_group("wall");

    for n in [1_000usize, 10_000] {
        let values = random_values(n, 24);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("build_pages", n), &values, |b, values| {
            b.iter(|| black_box(PageSet::build(values, 1000)))
        });
    }

    let store = Arc::new(AdmissionService::new());
    for i in 0..5_000 {
        let half = format!("p{i}");
        let mirrored: String = half.chars().rev().collect();
        store.submit(&format!("{half}{mirrored}"), "bench");
    }
    let wall = Wall::new(store, WallConfig::default()).unwrap();
    group.bench_function("page", |b| b.iter(|| black_box(wall.page())));

    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_submit, bench_wall);
criterion_main!(benches);
