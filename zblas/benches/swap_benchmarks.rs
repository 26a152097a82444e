use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zblas::{level1, Complex64};

fn bench_zswap_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("zswap");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let mut x: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new(i as f64 * 0.001, i as f64 * 0.002))
            .collect();
        let mut y: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::zswap(n, &mut x, 1, &mut y, 1));
        });
    }
    group.finish();
}

fn bench_zswap_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("zswap_strided");
    for &n in &[64, 256, 1024, 4096] {
        let mut x: Vec<Complex64> = (0..2 * n)
            .map(|i| Complex64::new(i as f64 * 0.001, i as f64 * 0.002))
            .collect();
        let mut y: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::zswap(n, &mut x, 2, &mut y, 1));
        });
    }
    group.finish();
}

fn bench_zswap_offset_unchecked(c: &mut Criterion) {
    let mut group = c.benchmark_group("zswap_offset_unchecked");
    for &n in &[64, 256, 1024, 4096] {
        let mut x: Vec<Complex64> = (0..2 * n)
            .map(|i| Complex64::new(i as f64 * 0.001, i as f64 * 0.002))
            .collect();
        let mut y: Vec<Complex64> = vec![Complex64::new(0.0, 0.0); n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| unsafe { level1::zswap_offset_unchecked(n, &mut x, 2, 0, &mut y, 1, 0) });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_zswap_contiguous,
    bench_zswap_strided,
    bench_zswap_offset_unchecked
);
criterion_main!(benches);
