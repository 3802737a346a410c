//! Throughput benchmarks for the transforms
//!
//! Run with: cargo bench --package deadreckon-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use deadreckon_core::{
    apply_zupt, detect_movement, low_pass, moving_average, MovingAverage, OnePoleLowPass,
    PipelineConfig, SampleFilter, SignalChain,
};

/// Walking-like accelerometer trace
fn create_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 50.0;
            let step = if i % 50 < 20 { 2.0 * (t * 7.85).sin().abs() } else { 0.0 };
            step + 0.02 * ((i * 31) as f64 * 0.1).sin()
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for &len in &[256usize, 4096, 65_536] {
        let input = create_signal(len);
        let mut output = vec![0.0; len];
        group.throughput(Throughput::Elements(len as u64));

        for &window in &[5usize, 25, 101] {
            group.bench_with_input(
                BenchmarkId::new(format!("moving_average_w{}", window), len),
                &input,
                |b, data| b.iter(|| moving_average(black_box(data), &mut output, window)),
            );
        }

        group.bench_with_input(BenchmarkId::new("low_pass", len), &input, |b, data| {
            b.iter(|| low_pass(black_box(data), &mut output, 5.0, 50.0))
        });

        group.bench_with_input(BenchmarkId::new("detect_movement", len), &input, |b, data| {
            b.iter(|| detect_movement(black_box(data), &mut output, 50.0, 0.5))
        });

        group.bench_with_input(BenchmarkId::new("apply_zupt", len), &input, |b, data| {
            b.iter(|| {
                let mut velocity = vec![1.0; data.len()];
                apply_zupt(black_box(data), &mut velocity, 0.01, 10)
            })
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let input = create_signal(4096);
    let mut group = c.benchmark_group("streaming");
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("moving_average_32", |b| {
        b.iter(|| {
            let mut filter = MovingAverage::<32>::new();
            input.iter().map(|&x| filter.push(black_box(x))).sum::<f64>()
        })
    });

    group.bench_function("one_pole", |b| {
        b.iter(|| {
            let mut filter = OnePoleLowPass::new(5.0, 50.0).unwrap();
            input.iter().map(|&x| filter.push(black_box(x))).sum::<f64>()
        })
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let chain = SignalChain::new(PipelineConfig::walking()).unwrap();
    let input = create_signal(4096);

    c.bench_function("signal_chain_4096", |b| {
        b.iter(|| chain.process(black_box(&input), None).unwrap())
    });
}

criterion_group!(benches, bench_batch, bench_streaming, bench_chain);
criterion_main!(benches);
