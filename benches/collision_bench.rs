use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sat2d::{check, check_all, Body, Polygon, Vec2};

// --- Helper for building a grid of mixed bodies ---
fn mixed_grid(count: usize) -> Vec<Body> {
    let side = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let pos = Vec2::new((i % side) as f64 * 1.5, (i / side) as f64 * 1.5);
            match i % 3 {
                0 => Body::circle(pos, 0.8).unwrap(),
                1 => Body::rectangle(pos, 1.4, 1.0, i as f64 * 0.1).unwrap(),
                _ => Body::polygon(Polygon::regular(5, 0.9).unwrap(), pos, i as f64 * 0.2).unwrap(),
            }
        })
        .collect()
}

// Single pairwise queries for each narrow-phase routine
fn bench_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair");

    let ball_a = Body::circle(Vec2::new(0.0, 0.0), 1.0).unwrap();
    let ball_b = Body::circle(Vec2::new(1.5, 0.0), 1.0).unwrap();
    let box_a = Body::rectangle(Vec2::new(0.0, 0.0), 2.0, 2.0, 0.3).unwrap();
    let box_b = Body::rectangle(Vec2::new(1.5, 0.5), 2.0, 1.0, -0.4).unwrap();
    let far = Body::rectangle(Vec2::new(50.0, 0.0), 2.0, 2.0, 0.0).unwrap();

    group.bench_function("circle_circle", |b| b.iter(|| check(black_box(&ball_a), black_box(&ball_b))));
    group.bench_function("polygon_polygon", |b| b.iter(|| check(black_box(&box_a), black_box(&box_b))));
    group.bench_function("polygon_circle", |b| b.iter(|| check(black_box(&box_a), black_box(&ball_b))));
    group.bench_function("broad_phase_reject", |b| b.iter(|| check(black_box(&box_a), black_box(&far))));
    group.finish();
}

// All-pairs sweep over a packed grid
fn bench_check_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_all");

    for count in [10, 100, 500].iter() {
        let bodies = mixed_grid(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &bodies, |b, bodies| {
            b.iter(|| check_all(black_box(bodies.as_slice())).len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pair, bench_check_all);
criterion_main!(benches);
