// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Description of the 3D preview, for an external scene renderer.

use huddle_field::{FIELD_HEIGHT, FIELD_WIDTH, ZONE_HEIGHT};

use crate::model::Player;
use crate::view::{View, ViewError, palette_color};

/// Decimeters per scene unit. The scene is drawn at half scale.
const SCENE_DIVISOR: f64 = 20.0;
const PLAYER_ELEVATION: f64 = 0.9;
const PLAYER_RADIUS: f64 = 0.4;
const PLAYER_HEIGHT: f64 = 1.8;
const LINE_COLOR: &str = "white";
const CURSOR_COLOR: &str = "#FAFAFA";

/// Input of the 3D preview.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    /// Camera elevation, in scene units.
    pub height: f64,
    /// Players of the tactic.
    pub players: Vec<Player>,
    /// Player palette.
    pub colors: Vec<String>,
}

fn line(x: f64, z: f64, width: f64, depth: f64) -> View {
    View::el("a-box")
        .attr("position", format!("{x} 0 {z}"))
        .attr("width", width.to_string())
        .attr("height", "0.5")
        .attr("depth", depth.to_string())
        .attr("color", LINE_COLOR)
}

/// Side lines, then the two end lines and the two zone lines.
fn field_lines() -> Vec<View> {
    let half_width = FIELD_WIDTH / SCENE_DIVISOR / 2.0;
    let length = FIELD_HEIGHT / SCENE_DIVISOR;
    let zone = (FIELD_HEIGHT - 2.0 * ZONE_HEIGHT) / SCENE_DIVISOR / 2.0;
    let width = FIELD_WIDTH / SCENE_DIVISOR;
    vec![
        line(-half_width, 0.0, 0.1, length),
        line(half_width, 0.0, 0.1, length),
        line(0.0, -length / 2.0, width, 0.1),
        line(0.0, length / 2.0, width, 0.1),
        line(0.0, -zone, width, 0.1),
        line(0.0, zone, width, 0.1),
    ]
}

fn cylinder(player: &Player, colors: &[String]) -> Result<View, ViewError> {
    let color = palette_color(colors, player.color)?;
    let x = -player.x / SCENE_DIVISOR;
    let z = -player.y / SCENE_DIVISOR;
    Ok(View::el("a-cylinder")
        .attr("position", format!("{x:.2} {PLAYER_ELEVATION} {z:.2}"))
        .attr("radius", PLAYER_RADIUS.to_string())
        .attr("height", PLAYER_HEIGHT.to_string())
        .attr("color", color))
}

/// The whole scene: environment, field lines, players, and the camera.
pub fn scene_view(state: &SceneState) -> Result<View, ViewError> {
    let players = state
        .players
        .iter()
        .map(|p| cylinder(p, &state.colors))
        .collect::<Result<Vec<_>, _>>()?;
    let camera = View::el("a-entity")
        .attr("position", format!("0 {} 0", state.height))
        .attr("rotation", "0 180 0")
        .child(
            View::el("a-camera")
                .child(View::el("a-cursor").attr("color", CURSOR_COLOR)),
        );
    let scene = View::el("a-scene")
        .attr("environment", "preset: forest")
        .attr("embedded", "true")
        .children(field_lines())
        .children(players)
        .child(camera);
    Ok(View::div([scene]).class("view-3d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::create_player;
    use kurbo::Point;

    fn tagged<'a>(view: &'a View, tag: &'a str) -> impl Iterator<Item = &'a View> + 'a {
        view.walk().filter(move |n| n.tag() == Some(tag))
    }

    #[test]
    fn lines_are_mirrored_and_zones_sit_inside_the_ends() {
        let view = scene_view(&SceneState {
            height: 2.0,
            players: Vec::new(),
            colors: Vec::new(),
        })
        .unwrap();
        let positions: Vec<_> = tagged(&view, "a-box")
            .filter_map(|b| b.get_attr("position"))
            .collect();
        assert_eq!(
            positions,
            ["-9.5 0 0", "9.5 0 0", "0 0 -25", "0 0 25", "0 0 -16", "0 0 16"]
        );
    }

    #[test]
    fn players_are_mirrored_at_half_scale() {
        let view = scene_view(&SceneState {
            height: 3.5,
            players: vec![create_player(1.into(), Point::new(20.0, -450.0))],
            colors: vec!["red".into()],
        })
        .unwrap();
        let cylinder = tagged(&view, "a-cylinder").next().unwrap();
        assert_eq!(cylinder.get_attr("position"), Some("-1.00 0.9 22.50"));
        assert_eq!(cylinder.get_attr("color"), Some("red"));
        let camera = tagged(&view, "a-entity").next().unwrap();
        assert_eq!(camera.get_attr("position"), Some("0 3.5 0"));
    }

    #[test]
    fn unknown_color_fails() {
        let result = scene_view(&SceneState {
            height: 1.0,
            players: vec![create_player(1.into(), Point::ZERO)],
            colors: Vec::new(),
        });
        assert!(result.is_err());
    }
}
