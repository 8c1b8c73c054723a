use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use road_network_editor::shared::curve_math::points_to_bezier_curves;
use road_network_editor::{ControlPoint, NodeKind, RoadNetwork};
use std::hint::black_box;

/// Gitter aus `side × side` Kreuzungen, horizontal verbunden mit je einem Kontrollpunkt.
fn build_synthetic_network(side: usize) -> RoadNetwork {
    let mut network = RoadNetwork::new();
    let spacing = 100.0;

    for row in 0..side {
        let mut previous = None;
        for column in 0..side {
            let pos = Vec2::new(column as f32 * spacing, row as f32 * spacing);
            let id = network.add_node(pos, NodeKind::Junction);
            if let Some(prev) = previous {
                let bend = ControlPoint::new(pos.x - spacing * 0.5, pos.y + 15.0, 0.5);
                network
                    .add_segment(prev, id, vec![bend], 50.0)
                    .expect("Nodes existieren");
            }
            previous = Some(id);
        }
    }

    network
}

fn build_query_points(count: usize, extent: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1000) as f32 / 1000.0 * extent;
            let y = ((i * 71) % 1000) as f32 / 1000.0 * extent;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_find_node_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_node_at");

    for side in [10usize, 50, 100] {
        let network = build_synthetic_network(side);
        let queries = build_query_points(256, side as f32 * 100.0);

        group.bench_with_input(BenchmarkId::from_parameter(side * side), &side, |b, _| {
            b.iter(|| {
                let mut hits = 0usize;
                for query in &queries {
                    if network.find_node_at(black_box(*query), 20.0).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_find_segment_near(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_segment_near");

    for side in [10usize, 30] {
        let network = build_synthetic_network(side);
        let queries = build_query_points(32, side as f32 * 100.0);

        group.bench_with_input(
            BenchmarkId::from_parameter(network.segment_count()),
            &side,
            |b, _| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for query in &queries {
                        if network.find_segment_near(black_box(*query), 25.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_points_to_bezier_curves(c: &mut Criterion) {
    let points: Vec<ControlPoint> = (0..200)
        .map(|i| {
            let x = i as f32 * 10.0;
            ControlPoint::new(x, (x * 0.05).sin() * 40.0, (i % 5) as f32 * 0.25)
        })
        .collect();

    c.bench_function("points_to_bezier_curves_200", |b| {
        b.iter(|| black_box(points_to_bezier_curves(black_box(&points))).len())
    });
}

criterion_group!(
    benches,
    bench_find_node_at,
    bench_find_segment_near,
    bench_points_to_bezier_curves
);
criterion_main!(benches);
