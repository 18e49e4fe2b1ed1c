use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder_types::U256;
use cinder_work::{BurnMonitor, DifficultyController};

fn bench_retarget(c: &mut Criterion) {
    let mut group = c.benchmark_group("retarget");

    // Elapsed block counts around the 61440-block intended period.
    for elapsed in [1u64, 30_720, 61_440, 200_000] {
        group.bench_with_input(BenchmarkId::new("elapsed", elapsed), &elapsed, |b, &e| {
            b.iter(|| {
                let mut ctrl = DifficultyController::new(
                    U256::one() << 16,
                    U256::one() << 220,
                    1024,
                    2000,
                    61_440,
                    0,
                );
                black_box(ctrl.retarget(black_box(e)))
            });
        });
    }

    group.finish();
}

fn bench_burn_observe(c: &mut Criterion) {
    c.bench_function("burn_observe_cycle", |b| {
        b.iter(|| {
            let mut monitor = BurnMonitor::new();
            monitor.set_activation_block(0);
            monitor.observe(black_box(U256::from(1_000_000u64)), 1);
            monitor.observe(black_box(U256::from(500_000u64)), 2);
            black_box(monitor.observe(black_box(U256::from(2_000_000u64)), 3))
        });
    });
}

criterion_group!(benches, bench_retarget, bench_burn_observe);
criterion_main!(benches);
