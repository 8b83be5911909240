//! Benchmarks for the scoring stage.
//!
//! The edit-distance table is quadratic in file length, so the interesting
//! numbers are how it scales with size and what normalization costs on top.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reposim::core_types::FetchedFile;
use reposim::similarity::{
    calculate_repo_similarity, calculate_similarity, cosine_similarity, normalize_code,
    MatchOptions,
};

/// Rust-looking source of roughly `len` characters, with comments.
fn synthetic_source(len: usize, seed: usize) -> String {
    let mut out = String::with_capacity(len + 64);
    let mut i = 0;
    while out.len() < len {
        out.push_str(&format!(
            "// step {}\nfn item_{}(x: u32) -> u32 {{ x * {} + {} }}\n",
            i,
            i,
            (i + seed) % 7,
            i % 5
        ));
        i += 1;
    }
    out.truncate(len);
    out
}

fn bench_levenshtein_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    for size in [256usize, 1024, 4096] {
        let a = synthetic_source(size, 0);
        let b = synthetic_source(size, 3);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(calculate_similarity(black_box(&a), black_box(&b))));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let source = synthetic_source(16 * 1024, 0);
    c.bench_function("normalize_16k", |b| {
        b.iter(|| black_box(normalize_code(black_box(&source))))
    });
}

fn bench_cosine(c: &mut Criterion) {
    let a = synthetic_source(4096, 0);
    let b = synthetic_source(4096, 3);
    c.bench_function("cosine_4k", |bench| {
        bench.iter(|| black_box(cosine_similarity(black_box(&a), black_box(&b))))
    });
}

fn bench_repo_similarity(c: &mut Criterion) {
    let files = |seed: usize| -> Vec<FetchedFile> {
        (0..20)
            .map(|i| {
                let content = synthetic_source(1024, seed + i);
                FetchedFile {
                    path: format!("src/module_{}.rs", i),
                    size: content.len() as u64,
                    content,
                }
            })
            .collect()
    };
    let files1 = files(0);
    let files2 = files(1);

    c.bench_function("repo_similarity_20x20", |b| {
        b.iter(|| {
            black_box(calculate_repo_similarity(
                black_box(&files1),
                black_box(&files2),
                &MatchOptions::default(),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_levenshtein_by_size,
    bench_normalize,
    bench_cosine,
    bench_repo_similarity
);
criterion_main!(benches);
