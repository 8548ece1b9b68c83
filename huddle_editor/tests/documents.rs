// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `huddle_editor` crate.
//!
//! Loading and exporting documents, restructuring the tactic list, and painting.

use huddle_editor::{
    App, AppEvent, DescriptionEvent, EditorConfig, HeightEvent, ItemEvent, ListEvent,
    MemoryStorage, PageEvent, Payload, PlayerId, ScenarioEvent, Storage, Surface, Tab,
    TacticPlayerEvent, generate_player_id, scenario_lens,
};
use huddle_field::CanvasDescription;
use huddle_lens::Lens;
use tracing_subscriber::EnvFilter;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dev_app() -> App {
    init_logs();
    App::load(EditorConfig::default(), &mut MemoryStorage::new(), "?dev")
}

fn page(event: PageEvent) -> AppEvent {
    AppEvent::Player(TacticPlayerEvent::Page(event))
}

fn open_description() -> AppEvent {
    AppEvent::Player(TacticPlayerEvent::Scenario(ScenarioEvent::Description(
        DescriptionEvent::Open,
    )))
}

fn draft(app: &App) -> Option<&str> {
    app.player().scenario().description().draft()
}

const DOCUMENT: &str = r##"{
    "version": 1,
    "content": {
        "tactics": [
            {
                "description": "horizontal stack",
                "height": 2.5,
                "points": [
                    {"id": 1, "x": -50, "y": 100, "color": 2},
                    {"id": "cutter", "x": 50, "y": 100}
                ]
            },
            {"description": "zone", "height": 3, "points": []}
        ]
    }
}"##;

#[test]
fn stored_document_is_imported_once() {
    init_logs();
    let config = EditorConfig::default();
    let mut storage = MemoryStorage::new();
    storage.set(&config.storage_key, DOCUMENT.into());

    let app = App::load(config.clone(), &mut storage, "?dev");
    let state = app.state();
    assert_eq!(state.tactics.len(), 2);
    assert_eq!(state.display.len(), 2);
    assert_eq!(state.tactic_idx, 0);
    assert_eq!(state.tactics[0].description, "horizontal stack");
    assert_eq!(state.tactics[0].points[1].color, 0);
    assert_eq!(storage.get(&config.storage_key), None);

    let again = App::load(config, &mut storage, "");
    assert_eq!(again.state().tactics.len(), 1);
}

#[test]
fn any_json_number_is_a_player_id() {
    init_logs();
    let config = EditorConfig::default();
    let mut storage = MemoryStorage::new();
    let document = r#"{"version": 1, "content": {"tactics": [
        {"description": "imported", "height": 2, "points": [
            {"id": -1, "x": 10, "y": 20},
            {"id": 2.0, "x": 30, "y": 40},
            {"id": 1.5}
        ]}
    ]}}"#;
    storage.set(&config.storage_key, document.into());

    let app = App::load(config.clone(), &mut storage, "");
    let tactic = &app.state().tactics[0];
    assert_eq!(tactic.description, "imported");
    let ids: Vec<String> = tactic.points.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, ["-1", "2.0", "1.5"]);
    assert_eq!(tactic.points[0].x, 10.0);
    assert_eq!(storage.get(&config.storage_key), None);
    assert_eq!(generate_player_id(&tactic.points), PlayerId::from(3));

    let payload: Payload = serde_json::from_str(&app.export().unwrap()).unwrap();
    assert_eq!(payload.tactics[0].points, tactic.points);
}

#[test]
fn unreadable_document_stays_in_storage() {
    init_logs();
    let config = EditorConfig::default();
    let mut storage = MemoryStorage::new();
    let document = r#"{"version": 2, "content": {"tactics": []}}"#;
    storage.set(&config.storage_key, document.into());

    let app = App::load(config.clone(), &mut storage, "");
    assert_eq!(app.state().tactics.len(), 1);
    assert_eq!(storage.get(&config.storage_key).as_deref(), Some(document));
}

#[test]
fn export_matches_the_notebook_script() {
    let app = dev_app();
    let payload: Payload = serde_json::from_str(&app.export().unwrap()).unwrap();
    assert_eq!(payload.tactics, app.state().tactics);

    let script = app.notebook_script().unwrap();
    assert!(script.starts_with("localStorage.setItem(\"story\", "));
    assert!(script.ends_with(");"));
}

#[test]
fn duplicate_is_a_deep_copy() {
    let mut app = dev_app();
    app.handle(page(PageEvent::Duplicate));
    assert_eq!(app.state().tactics.len(), 3);
    assert_eq!(app.state().tactic_idx, 2);
    assert_eq!(app.state().tactics[1], app.state().tactics[2]);

    app.handle(AppEvent::Player(TacticPlayerEvent::Scenario(
        ScenarioEvent::Height(HeightEvent::Increment),
    )));
    assert_eq!(app.state().tactics[2].height, 3.75);
    assert_eq!(app.state().tactics[1].height, 3.5);
}

#[test]
fn lists_stay_aligned_through_restructuring() {
    let mut app = dev_app();
    let events = [
        PageEvent::Duplicate,
        PageEvent::MovePrev,
        PageEvent::MovePrev,
        PageEvent::MovePrev,
        PageEvent::Next,
        PageEvent::Delete,
        PageEvent::MoveNext,
        PageEvent::Duplicate,
        PageEvent::Delete,
        PageEvent::Delete,
        PageEvent::Delete,
        PageEvent::Delete,
    ];
    for event in events {
        app.handle(page(event));
        let state = app.state();
        assert_eq!(state.tactics.len(), state.display.len(), "after {event:?}");
        assert!(state.tactic_idx < state.tactics.len(), "after {event:?}");
    }
    assert_eq!(app.state().tactics.len(), 1);
}

#[test]
fn moving_carries_the_display_state_along() {
    let mut app = dev_app();
    app.handle(AppEvent::Player(TacticPlayerEvent::Tab(1)));
    assert_eq!(app.state().display[1].tab, Tab::Vision);

    app.handle(page(PageEvent::MovePrev));
    let state = app.state();
    assert_eq!(state.tactic_idx, 0);
    assert_eq!(state.tactics[0].description, "Second tactics");
    assert_eq!(state.display[0].tab, Tab::Vision);
    assert_eq!(state.display[1].tab, Tab::Field);
}

#[test]
fn moving_keeps_the_open_draft() {
    let mut app = dev_app();
    app.handle(open_description());
    assert_eq!(draft(&app), Some("Second tactics"));

    app.handle(page(PageEvent::MovePrev));
    assert_eq!(app.state().tactic_idx, 0);
    assert_eq!(draft(&app), Some("Second tactics"));
    assert!(app.state().display[0].edit_description);

    app.handle(page(PageEvent::MoveNext));
    assert_eq!(app.state().tactic_idx, 1);
    assert_eq!(draft(&app), Some("Second tactics"));

    app.handle(page(PageEvent::Prev));
    assert_eq!(draft(&app), None);
}

#[test]
fn deleting_a_middle_tactic_drops_its_draft() {
    let mut app = dev_app();
    app.handle(page(PageEvent::Duplicate));
    app.handle(page(PageEvent::Prev));
    assert_eq!(app.state().tactic_idx, 1);
    app.handle(open_description());
    assert!(draft(&app).is_some());

    let flush = app.handle(page(PageEvent::Delete));
    assert_eq!(flush.applied, 1);
    assert_eq!(app.state().tactics.len(), 2);
    assert_eq!(draft(&app), None);
}

#[test]
fn copies_start_without_a_draft() {
    let mut app = dev_app();
    app.handle(open_description());
    app.handle(page(PageEvent::Duplicate));
    assert_eq!(app.state().tactic_idx, 2);
    assert_eq!(draft(&app), None);
    assert!(!app.state().display[2].edit_description);
    let slots: Vec<u64> = app.state().display.iter().map(|d| d.slot).collect();
    assert_eq!(slots, [1, 2, 3]);
}

#[test]
fn scenario_lens_round_trips_through_the_app_state() {
    let app = dev_app();
    let state = app.state().clone();
    let scenario = scenario_lens().get(&state).unwrap();
    assert_eq!(scenario.description, "Second tactics");
    let mut written = state.clone();
    scenario_lens().set(&mut written, scenario).unwrap();
    assert_eq!(written, state);
}

#[test]
fn listing_entries_are_independent() {
    let mut app = dev_app();
    app.handle(AppEvent::SelectViewer("listing".into()));
    assert_eq!(app.listing().len(), 2);
    app.handle(AppEvent::Listing(ListEvent {
        item: 0,
        event: ItemEvent::Tab(2),
    }));
    assert_eq!(app.state().display[0].tab, Tab::Combo);
    assert_eq!(app.state().display[1].tab, Tab::Field);

    let flush = app.handle(AppEvent::Listing(ListEvent {
        item: 5,
        event: ItemEvent::Tab(1),
    }));
    assert!(flush.is_clean());
}

#[derive(Default)]
struct Canvases {
    attached: bool,
    painted: Vec<CanvasDescription>,
}

impl Surface for Canvases {
    fn is_attached(&self, _: &str) -> bool {
        self.attached
    }

    fn paint(&mut self, description: &CanvasDescription) {
        self.painted.push(description.clone());
    }
}

#[test]
fn late_canvas_is_painted_on_a_later_tick() {
    let mut app = dev_app();
    let mut surface = Canvases::default();
    let view = app.present(&mut surface, 0);
    assert!(view.contains_text(" 2 / 2 "));
    assert!(surface.painted.is_empty());

    surface.attached = true;
    assert_eq!(app.tick(&mut surface, 10), 0);
    assert_eq!(app.tick(&mut surface, 50), 1);
    assert_eq!(surface.painted.len(), 1);
    let painted = &surface.painted[0];
    assert_eq!(painted.id, "field-canvas");
    assert_eq!(painted.drawings.len(), 2 + 3);
    assert_eq!(painted.marker_count(), 3);
}

#[test]
fn vision_tab_has_no_canvas() {
    let mut app = dev_app();
    app.handle(AppEvent::Player(TacticPlayerEvent::Tab(1)));
    let frame = app.render();
    assert!(frame.canvases.is_empty());
    assert!(frame.view.contains_text("Height: 3.5"));
}
