use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emergence_core::spatial_hash::SpatialHash;

/// 2000 points scattered over a 1280x720 field.
fn field_positions() -> Vec<(f64, f64)> {
    (0..2000)
        .map(|i| {
            let x = f64::from((i * 7919) % 1280);
            let y = f64::from((i * 104_729) % 720);
            (x, y)
        })
        .collect()
}

fn bench_spatial_hash_build(c: &mut Criterion) {
    let positions = field_positions();
    let mut spatial = SpatialHash::new(60.0);

    c.bench_function("spatial_hash_rebuild_2000", |b| {
        b.iter(|| {
            spatial.build(black_box(&positions));
            black_box(spatial.len())
        })
    });
}

fn bench_spatial_hash_query(c: &mut Criterion) {
    let positions = field_positions();
    let mut spatial = SpatialHash::new(60.0);
    spatial.build(&positions);

    c.bench_function("spatial_hash_query_60_radius", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(640.0, 360.0, 60.0, &mut results);
            black_box(results.len())
        })
    });

    c.bench_function("spatial_hash_query_150_radius", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(640.0, 360.0, 150.0, &mut results);
            black_box(results.len())
        })
    });
}

fn bench_spatial_hash_count_nearby(c: &mut Criterion) {
    let positions = field_positions();
    let mut spatial = SpatialHash::new(60.0);
    spatial.build(&positions);

    c.bench_function("spatial_hash_count_nearby_100", |b| {
        b.iter(|| black_box(spatial.count_nearby(640.0, 360.0, 100.0)))
    });
}

criterion_group!(
    benches,
    bench_spatial_hash_build,
    bench_spatial_hash_query,
    bench_spatial_hash_count_nearby
);
criterion_main!(benches);
