//! Benchmarks for voxel traversal and surface-distance accumulation on a
//! production-sized 512x512 height grid.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use terrain_distance::{HeightField, VoxelCoord, surface_distance, traverse_voxels};

fn synthetic_field(width: usize, height: usize) -> HeightField {
    let samples = (0..width * height)
        .map(|i| {
            let x = (i % width) as f64;
            let y = (i / width) as f64;
            (128.0 + 100.0 * (x * 0.05).sin() * (y * 0.07).cos()) as u8
        })
        .collect();
    HeightField::from_samples(samples, width, height).unwrap()
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    group.bench_function("diagonal_511", |b| {
        b.iter(|| {
            traverse_voxels(
                black_box(VoxelCoord::new(0, 0)),
                black_box(VoxelCoord::new(510, 509)),
                511,
                511,
            )
        })
    });
    group.bench_function("shallow_slope_511", |b| {
        b.iter(|| {
            traverse_voxels(
                black_box(VoxelCoord::new(0, 100)),
                black_box(VoxelCoord::new(510, 180)),
                511,
                511,
            )
        })
    });
    group.finish();
}

fn bench_surface_distance(c: &mut Criterion) {
    let field = synthetic_field(512, 512);
    let mut group = c.benchmark_group("surface_distance");
    group.bench_function("diagonal_512", |b| {
        b.iter(|| {
            surface_distance(
                black_box(VoxelCoord::new(0, 0)),
                black_box(VoxelCoord::new(510, 509)),
                &field,
                30.0,
                11.0,
            )
            .unwrap()
        })
    });
    group.bench_function("axis_aligned_512", |b| {
        b.iter(|| {
            surface_distance(
                black_box(VoxelCoord::new(5, 250)),
                black_box(VoxelCoord::new(505, 250)),
                &field,
                30.0,
                11.0,
            )
            .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_traverse, bench_surface_distance);
criterion_main!(benches);
