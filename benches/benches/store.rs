// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `huddle_lens` stores driven by the editor's reducers.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use huddle_editor::{
    App, AppEvent, AppState, EditorConfig, HeightEvent, PageEvent, Player, ScenarioEvent, Tactic,
    TacticPlayerEvent, scenario_lens,
};
use huddle_lens::{Lens, Reducer, Store};

fn tactics(count: usize, players: u64) -> AppState {
    let tactic = |i: usize| Tactic {
        description: format!("tactic {i}"),
        height: 2.0,
        points: (1..=players)
            .map(|id| Player {
                id: id.into(),
                x: 0.0,
                y: -450.0 + 10.0 * id as f64,
                color: 0,
            })
            .collect(),
    };
    AppState::new(
        EditorConfig::default().palette,
        (0..count).map(tactic).collect(),
    )
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    for count in [1_usize, 16, 128] {
        group.bench_with_input(BenchmarkId::new("lifted_flush", count), &count, |b, &n| {
            b.iter_batched(
                || Store::new(tactics(n, 14)),
                |mut store| {
                    for _ in 0..32 {
                        let reducer = Reducer::update("height", |h: &mut f64| *h += 0.25);
                        let reducer = reducer.lift(huddle_lens::scope!(
                            huddle_editor::ScenarioState,
                            height
                        ));
                        store
                            .dispatch(reducer.lift(scenario_lens()))
                            .expect("store alive");
                    }
                    black_box(store.flush())
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("lens_get", count), &count, |b, &n| {
            let state = tactics(n, 14);
            b.iter(|| black_box(scenario_lens().get(black_box(&state))));
        });
    }
    group.finish();
}

fn bench_app(c: &mut Criterion) {
    let mut group = c.benchmark_group("app");
    group.bench_function("height_event", |b| {
        b.iter_batched(
            || App::new(EditorConfig::default(), tactics(16, 14)),
            |mut app| {
                black_box(app.handle(AppEvent::Player(TacticPlayerEvent::Scenario(
                    ScenarioEvent::Height(HeightEvent::Increment),
                ))))
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("duplicate_then_delete", |b| {
        b.iter_batched(
            || App::new(EditorConfig::default(), tactics(16, 14)),
            |mut app| {
                for event in [PageEvent::Duplicate, PageEvent::Delete] {
                    app.handle(AppEvent::Player(TacticPlayerEvent::Page(event)));
                }
                black_box(app.state().tactics.len())
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("render", |b| {
        let app = App::new(EditorConfig::default(), tactics(16, 14));
        b.iter(|| black_box(app.render()));
    });
    group.finish();
}

criterion_group!(benches, bench_store, bench_app);
criterion_main!(benches);
