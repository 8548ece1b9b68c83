// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `huddle_field` projection and picking.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use huddle_field::{FieldMapper, FieldType, MarkerStyle, hit_test};

fn grid(n: usize) -> Vec<(usize, Point)> {
    (0..n)
        .map(|i| {
            let x = -180.0 + (i % 19) as f64 * 20.0;
            let y = -480.0 + (i / 19) as f64 * 20.0;
            (i, Point::new(x, y))
        })
        .collect()
}

fn bench_markers(c: &mut Criterion) {
    let style = MarkerStyle::default();
    let mut group = c.benchmark_group("markers");
    for field_type in FieldType::ALL {
        let mapper = FieldMapper::new(field_type);
        let players = grid(200);
        group.bench_with_input(
            BenchmarkId::new("draw_200", field_type),
            &players,
            |b, players| {
                b.iter(|| {
                    let mut drawings = mapper.borders(&style).to_vec();
                    drawings.extend(players.iter().filter_map(|(i, p)| {
                        mapper.marker(*p, "#FF0000", *i == 0, &style)
                    }));
                    black_box(drawings)
                });
            },
        );
    }
    group.finish();
}

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");
    for n in [14_usize, 200] {
        let players = grid(n);
        let mapper = FieldMapper::new(FieldType::Full);
        let width = mapper.display_size().width;
        let at = mapper.project(Point::new(0.0, 0.0)).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("press", n), &players, |b, players| {
            b.iter(|| {
                let position = mapper.pick(black_box(at), width)?;
                hit_test(position, 10.0, players.iter().copied())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_markers, bench_picking);
criterion_main!(benches);
