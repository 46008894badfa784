use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmeans_lloyd::ml::classic::k_means::{kmeans, KMeansConfig, Point};

/// Deterministic blobs around `k` centres, no RNG needed.
fn blobs(n: usize, k: usize, dim: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let centre = (i % k) as f64 * 100.0;
            (0..dim)
                .map(|d| centre + ((i * 31 + d * 17) % 97) as f64 / 97.0)
                .collect()
        })
        .collect()
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");
    for &n in &[1_000, 10_000] {
        let data = blobs(n, 8, 4);
        let config = KMeansConfig::new(8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| kmeans(black_box(data), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
