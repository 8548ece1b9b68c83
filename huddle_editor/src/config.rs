// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor settings.

use huddle_field::{DEFAULT_DISPLAY_HEIGHT, MarkerStyle};
use serde::{Deserialize, Serialize};

/// Default player palette.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#ffd400", "#17becf",
];

/// Retry policy for painting a canvas that is not attached yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedrawConfig {
    /// Delay between attempts.
    pub interval_ms: u64,
    /// Retries before giving up.
    pub max_attempts: u32,
}

impl Default for RedrawConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawConfig {
    /// 50 retries, 50 ms apart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval_ms: 50,
            max_attempts: 50,
        }
    }
}

/// Everything tunable about the editor.
///
/// Missing keys take their default, so an empty JSON object is a valid config:
///
/// ```
/// use huddle_editor::EditorConfig;
///
/// let config = EditorConfig::from_json(r#"{ "debounce_ms": 100 }"#).unwrap();
/// assert_eq!(config.debounce_ms, 100);
/// assert_eq!(config.palette.len(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas height of every crop, in pixels.
    pub display_height: f64,
    /// Half-size of the square that resolves a press to a player, in decimeters.
    pub hit_tolerance: f64,
    /// Player marker radius, in decimeters.
    pub player_radius: f64,
    /// Border line thickness, in decimeters.
    pub border_width: f64,
    /// Description keystroke coalescing window.
    pub debounce_ms: u64,
    /// Height control step, in meters.
    pub height_step: f64,
    /// Lowest reachable height, in meters.
    pub height_min: f64,
    /// Canvas retry policy.
    pub redraw: RedrawConfig,
    /// Local storage key of an imported document.
    pub storage_key: String,
    /// Location query that selects the development fixture.
    pub dev_query: String,
    /// Player palette as CSS colors.
    pub palette: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            display_height: DEFAULT_DISPLAY_HEIGHT,
            hit_tolerance: 10.0,
            player_radius: 17.0,
            border_width: 5.0,
            debounce_ms: 250,
            height_step: 0.25,
            height_min: 0.0,
            redraw: RedrawConfig::new(),
            storage_key: "story".into(),
            dev_query: "?dev".into(),
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).into()).collect(),
        }
    }
}

impl EditorConfig {
    /// Parses a JSON config, filling in defaults for absent keys.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Marker sizing derived from this config.
    #[must_use]
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            radius: self.player_radius,
            border_width: self.border_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn nested_redraw_keys_are_partial() {
        let config = EditorConfig::from_json(r#"{ "redraw": { "max_attempts": 3 } }"#).unwrap();
        assert_eq!(config.redraw.max_attempts, 3);
        assert_eq!(config.redraw.interval_ms, 50);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EditorConfig::from_json(r#"{ "debounce_ms": "soon" }"#).is_err());
    }
}
