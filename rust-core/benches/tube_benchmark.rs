use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tubegen::{BoundaryCondition, Chirality, TubeGen};

/// Benchmarks for the three generation stages.
/// Compare the serial and parallel paths with:
/// - cargo bench
/// - cargo bench --features parallel
fn bench_generation_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_stages");

    // (10, 10) is a small armchair cell, (17, 3) has several hundred atoms per cell
    let armchair = TubeGen::new(Chirality::new(10, 10).unwrap(), 1.42).unwrap();
    let chiral = TubeGen::new(Chirality::new(17, 3).unwrap(), 1.42).unwrap();

    group.bench_function("unit_cell_armchair", |b| {
        b.iter(|| black_box(&armchair).make_ucell())
    });

    group.bench_function("unit_cell_chiral", |b| {
        b.iter(|| black_box(&chiral).make_ucell())
    });

    group.bench_function("ribbon_armchair_50_cells", |b| {
        b.iter(|| {
            armchair.make_ribbon(
                black_box(50),
                BoundaryCondition::Periodic,
                BoundaryCondition::Open,
            )
        })
    });

    let ribbon = chiral
        .make_ribbon(10, BoundaryCondition::Periodic, BoundaryCondition::Periodic)
        .unwrap();
    group.bench_function("roll_chiral_10_cells", |b| {
        b.iter(|| chiral.roll_tube(black_box(&ribbon)))
    });

    group.finish();
}

criterion_group!(tube_benches, bench_generation_stages);
criterion_main!(tube_benches);
