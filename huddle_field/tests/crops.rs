// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `huddle_field` crate.
//!
//! These exercise crop switching end to end: the same set of players is drawn
//! through each crop and resolved back from pointer positions.

use huddle_field::{CanvasDescription, Drawing, FieldMapper, FieldType, MarkerStyle, hit_test};
use kurbo::Point;

fn players() -> Vec<(u32, Point)> {
    vec![
        (1, Point::new(0.0, 0.0)),
        (2, Point::new(-100.0, -400.0)),
        (3, Point::new(150.0, 420.0)),
    ]
}

fn drawings(mapper: &FieldMapper) -> Vec<Drawing> {
    let style = MarkerStyle::default();
    let mut out: Vec<Drawing> = mapper.borders(&style).into_iter().collect();
    out.extend(
        players()
            .into_iter()
            .filter_map(|(_, p)| mapper.marker(p, "#1f77b4", false, &style)),
    );
    out
}

#[test]
fn borders_come_before_markers() {
    let drawings = drawings(&FieldMapper::new(FieldType::Full));
    assert_eq!(drawings.len(), 5);
    assert!(drawings[..2].iter().all(|d| d.as_rect().is_some()));
    assert!(drawings[2..].iter().all(|d| d.as_circle().is_some()));
}

#[test]
fn switching_crop_filters_off_view_markers() {
    let count = |ft| {
        CanvasDescription {
            id: "field-canvas".into(),
            drawings: drawings(&FieldMapper::new(ft)),
        }
        .marker_count()
    };
    assert_eq!(count(FieldType::Full), 3);
    assert_eq!(count(FieldType::Middle), 1);
    assert_eq!(count(FieldType::UpZone), 1);
    assert_eq!(count(FieldType::DownZone), 1);
}

#[test]
fn a_click_on_a_drawn_marker_resolves_to_that_player() {
    for ft in FieldType::ALL {
        let mapper = FieldMapper::new(ft);
        let width = mapper.display_size().width;
        for (id, p) in players() {
            let Some(center) = mapper.project(p) else {
                continue;
            };
            // A few pixels off the center still hits.
            let click = Point::new(center.x + 2.0, center.y - 2.0);
            let at = mapper.pick(click, width).unwrap();
            assert_eq!(hit_test(at, 10.0, players()), Some(id), "{ft}");
        }
    }
}

#[test]
fn clicks_outside_the_crop_select_nothing() {
    let mapper = FieldMapper::new(FieldType::Middle);
    let size = mapper.display_size();
    for click in [
        Point::new(-5.0, 100.0),
        Point::new(size.width + 5.0, 100.0),
        Point::new(100.0, -5.0),
        Point::new(100.0, size.height + 5.0),
    ] {
        let picked = mapper
            .pick(click, size.width)
            .and_then(|at| hit_test(at, 10.0, players()));
        assert_eq!(picked, None);
    }
}

#[test]
fn a_smaller_display_keeps_proportions() {
    let big = FieldMapper::new(FieldType::UpZone);
    let small = FieldMapper::with_display_height(FieldType::UpZone, 200.0);
    let ratio = small.display_size().scale / big.display_size().scale;
    assert!((ratio - 0.5).abs() < 1e-9);

    let p = Point::new(-100.0, -400.0);
    let a = big.project(p).unwrap();
    let b = small.project(p).unwrap();
    assert!((b.x - a.x * 0.5).abs() < 1e-9);
    assert!((b.y - a.y * 0.5).abs() < 1e-9);
}
