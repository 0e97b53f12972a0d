//! Simulator throughput benchmarks: games per second for each policy.
//!
//! Run with: `cargo bench --bench simulator`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hangman_scaling::game::{play, PolicyKind, Rng};

fn bench_simulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulator");
    group.sample_size(100);
    group.throughput(Throughput::Elements(1));

    let policies = [
        ("uniform", PolicyKind::Uniform),
        ("frequency", PolicyKind::frequency_weighted()),
    ];
    // Short word, long word with many repeats.
    for target in ["fig", "apple", "elderberry"] {
        for (name, policy) in policies {
            group.bench_with_input(BenchmarkId::new(name, target), &target, |b, &target| {
                let mut rng = Rng::new(7);
                b.iter(|| black_box(play(target, policy, 6, &mut rng).expect("valid game")));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_simulator);
criterion_main!(benches);
