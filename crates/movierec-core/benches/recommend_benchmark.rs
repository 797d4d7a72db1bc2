//! Benchmarks for similarity construction and recommendation.
//!
//! Measures:
//! - Cosine similarity matrix build over a synthetic rating matrix
//! - Single `recommend()` calls for growing neighbourhood sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use movierec_core::{cosine_similarity_matrix, recommend, RecommendParams, UserItemMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const USERS: usize = 1_000;
const ITEMS: usize = 1_700;
/// Share of cells holding a rating, roughly the density of public movie datasets.
const DENSITY: f64 = 0.06;

fn synthetic_matrix(users: usize, items: usize) -> UserItemMatrix {
    let mut rng = StdRng::seed_from_u64(42);
    let ratings: Vec<f32> = (0..users * items)
        .map(|_| {
            if rng.gen_bool(DENSITY) {
                f32::from(rng.gen_range(1_u8..=5))
            } else {
                0.0
            }
        })
        .collect();
    UserItemMatrix::new(
        (0..users as u64).collect(),
        (0..items as u64).collect(),
        ratings,
    )
    .expect("synthetic matrix is well-formed")
}

fn bench_similarity_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine_similarity_matrix");
    for users in [100, 500, USERS] {
        let matrix = synthetic_matrix(users, ITEMS);
        group.throughput(Throughput::Elements((users * users) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(users), &matrix, |b, m| {
            b.iter(|| black_box(cosine_similarity_matrix(m).expect("similarity")));
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let matrix = synthetic_matrix(USERS, ITEMS);
    let similarity = cosine_similarity_matrix(&matrix).expect("similarity");

    let mut group = c.benchmark_group("recommend");
    for k in [1, 10, 100, USERS] {
        let params = RecommendParams::new(k, 10);
        group.bench_with_input(BenchmarkId::new("k", k), &params, |b, p| {
            b.iter(|| black_box(recommend(&matrix, &similarity, black_box(500), p)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_similarity_matrix, bench_recommend);
criterion_main!(benches);
