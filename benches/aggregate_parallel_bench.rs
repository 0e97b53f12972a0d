//! Compare sequential vs parallel chunk aggregation.
//!
//! Run with: `cargo bench --bench aggregate_parallel`
//! Or quick comparison: `cargo run --bin benchmark_parallel_speedup` (see src/bin)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hangman_scaling::game::PolicyKind;
use hangman_scaling::parallel::{
    aggregate, aggregate_sequential, partition, total_repetitions, uniform_work_list,
    RunSettings, WorkerPool,
};

fn bench_aggregate_sequential_vs_parallel(c: &mut Criterion) {
    let items = uniform_work_list("apple", 400, 50).expect("valid target");
    let settings = RunSettings::new(PolicyKind::Uniform, 6, 42);

    let mut group = c.benchmark_group("aggregate");
    group.sample_size(20);
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(Throughput::Elements(total_repetitions(&items)));

    let whole = partition(&items, 1).expect("one chunk");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(aggregate_sequential(&whole, &settings).expect("valid games")));
    });

    for workers in [2usize, 4, 8] {
        let chunks = partition(&items, workers).expect("positive chunk count");
        let pool = WorkerPool::with_workers(workers).expect("worker pool");
        group.bench_with_input(BenchmarkId::new("parallel", workers), &workers, |b, _| {
            b.iter(|| black_box(aggregate(&chunks, &pool, &settings).expect("valid games")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate_sequential_vs_parallel);
criterion_main!(benches);
