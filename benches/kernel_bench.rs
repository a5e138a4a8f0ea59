use bezier_lane_kernel::{ArcLengthTable, ControlPoints, LaneSampler, StripMesh};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::Vec3;
use std::hint::black_box;

fn build_control_points(count: usize) -> ControlPoints {
    let points = (0..count)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f * 25.0, (f * 0.7).sin() * 2.0, (f * 1.3).cos() * 30.0)
        })
        .collect();
    ControlPoints::new(points).expect("Kontrollpunkte ungültig")
}

fn bench_arc_length_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_length_table");

    for &count in &[2usize, 4, 10] {
        let points = build_control_points(count);
        group.bench_with_input(BenchmarkId::new("build", count), &points, |b, points| {
            b.iter(|| {
                let table = ArcLengthTable::build(black_box(points.as_slice()));
                black_box(table.total_length())
            })
        });
    }

    group.finish();
}

fn bench_lane_sampling(c: &mut Criterion) {
    let points = build_control_points(4);
    let sampler = LaneSampler::default();

    c.bench_function("lanes_by_distance_1m", |b| {
        b.iter(|| {
            let lanes = sampler
                .by_distance(black_box(&points), 4.0, 1.0)
                .expect("Sampling fehlgeschlagen");
            black_box(lanes.len())
        })
    });
}

fn bench_strip_mesh(c: &mut Criterion) {
    let points = build_control_points(6);
    let lanes = LaneSampler::default()
        .by_count(&points, 4.0, 512)
        .expect("Sampling fehlgeschlagen");

    c.bench_function("strip_mesh_512", |b| {
        b.iter(|| {
            let mesh = StripMesh::from_lanes(black_box(&lanes)).expect("Mesh fehlgeschlagen");
            black_box(mesh.triangle_count())
        })
    });
}

criterion_group!(
    benches,
    bench_arc_length_table,
    bench_lane_sampling,
    bench_strip_mesh
);
criterion_main!(benches);
