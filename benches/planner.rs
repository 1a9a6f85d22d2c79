use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use splitfft::Planner;
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn benchmark_planner_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("Planner f32");
    group.plot_config(
        criterion::PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic),
    );

    for n in LENGTHS.iter() {
        let len = 1 << n;

        group.bench_function(BenchmarkId::new("splitfft", len), |b| {
            b.iter(|| Planner::<f32>::new(len).unwrap());
        });

        group.bench_function(BenchmarkId::new("RustFFT", len), |b| {
            b.iter(|| {
                let mut planner = FftPlanner::<f32>::new();
                planner.plan_fft_forward(len)
            });
        });
    }
    group.finish();
}

fn benchmark_planner_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Planner f64");
    group.plot_config(
        criterion::PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic),
    );

    for n in LENGTHS.iter() {
        let len = 1 << n;

        group.bench_function(BenchmarkId::new("splitfft", len), |b| {
            b.iter(|| Planner::<f64>::new(len).unwrap());
        });

        group.bench_function(BenchmarkId::new("RustFFT", len), |b| {
            b.iter(|| {
                let mut planner = FftPlanner::<f64>::new();
                planner.plan_fft_forward(len)
            });
        });
    }
    group.finish();
}

fn benchmark_planner_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("Planner extend f64");

    for n in LENGTHS.iter().skip(1) {
        let len = 1 << n;

        group.bench_function(BenchmarkId::new("double", len), |b| {
            b.iter_batched(
                || Planner::<f64>::new(len >> 1).unwrap(),
                |mut planner| planner.build(len).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_planner_f32,
    benchmark_planner_f64,
    benchmark_planner_extend
);
criterion_main!(benches);
