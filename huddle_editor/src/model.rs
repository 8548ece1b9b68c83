// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted records and the transient per-tactic display state.

use core::fmt;

use huddle_field::FieldType;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Stable identity of a player within its tactic.
///
/// Ids are numeric when created by the editor; imported documents may carry
/// strings or any JSON number, which are kept exactly as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerId {
    /// Numeric id, integral or not, of any sign.
    Number(serde_json::Number),
    /// Id from an imported document.
    Text(String),
}

impl PlayerId {
    /// Numeric value, for ids that are or spell a finite number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

impl From<u64> for PlayerId {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A player marker in centered field decimeters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Identity, unique within the owning tactic.
    pub id: PlayerId,
    /// Horizontal position.
    #[serde(default)]
    pub x: f64,
    /// Vertical position.
    #[serde(default)]
    pub y: f64,
    /// Palette index.
    #[serde(default)]
    pub color: usize,
}

impl Player {
    /// Position as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the player to `position`.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// One drawable scenario.
///
/// `Clone` copies the player list, so a cloned tactic never aliases its source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tactic {
    /// Free text shown above the field.
    #[serde(default)]
    pub description: String,
    /// Camera elevation of the 3D preview, in meters.
    #[serde(default)]
    pub height: f64,
    /// Players, in drawing order.
    #[serde(default)]
    pub points: Vec<Player>,
}

impl Tactic {
    /// Player with `id`.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.points.iter().find(|p| p.id == *id)
    }
}

/// Which panels a tactic shows.
///
/// Tab ids arrive from the renderer as raw integers. Ids no variant knows are
/// kept as [`Tab::Other`] so they can be shown instead of dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// 2D field editor.
    #[default]
    Field,
    /// Height control and 3D preview.
    Vision,
    /// Everything.
    Combo,
    /// An id no variant matches.
    Other(u32),
}

impl Tab {
    /// Tabs offered in the tab strip, in order.
    pub const KNOWN: [Self; 3] = [Self::Field, Self::Vision, Self::Combo];

    /// Decodes a tab id.
    #[must_use]
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => Self::Field,
            1 => Self::Vision,
            2 => Self::Combo,
            other => Self::Other(other),
        }
    }

    /// Id used by the renderer.
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::Field => 0,
            Self::Vision => 1,
            Self::Combo => 2,
            Self::Other(id) => id,
        }
    }

    /// Label in the tab strip, `None` for unknown ids.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Field => Some("Field"),
            Self::Vision => Some("3D vision"),
            Self::Combo => Some("Combo view"),
            Self::Other(_) => None,
        }
    }

    /// Whether the tab contains the 2D field.
    #[must_use]
    pub fn shows_field(self) -> bool {
        matches!(self, Self::Field | Self::Combo)
    }
}

/// Transient view state of one tactic. Never exported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TacticDisplay {
    /// Identity of the tactic this state belongs to, unique within the list.
    ///
    /// Moves carry it along; a copy gets a fresh one from
    /// [`AppState::fresh_display`].
    pub slot: u64,
    /// Visible tab.
    pub tab: Tab,
    /// Whether the description is being edited.
    pub edit_description: bool,
    /// Selected player, if any.
    pub selected: Option<PlayerId>,
    /// Visible crop of the pitch.
    pub field_type: FieldType,
}

/// Top-level presentation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Viewer {
    /// One tactic at a time, with pagination.
    #[default]
    Player,
    /// Every tactic, one after the other.
    Listing,
}

/// Root state of the editor.
///
/// `tactics` and `display` are index-aligned: every structural change applies
/// to both, so their lengths are always equal.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Player palette as CSS colors.
    pub colors: Vec<String>,
    /// Whether the help text is shown.
    pub show_help: bool,
    /// Active presentation.
    pub viewer: Viewer,
    /// 0-based index of the current tactic.
    pub tactic_idx: usize,
    /// Persisted tactics.
    pub tactics: Vec<Tactic>,
    /// Per-tactic display state, aligned with `tactics`.
    pub display: Vec<TacticDisplay>,
}

impl AppState {
    /// Wraps `tactics` with default display state, positioned on the first one.
    #[must_use]
    pub fn new(colors: Vec<String>, tactics: Vec<Tactic>) -> Self {
        let display = (1_u64..)
            .take(tactics.len())
            .map(|slot| TacticDisplay {
                slot,
                ..TacticDisplay::default()
            })
            .collect();
        Self {
            colors,
            show_help: false,
            viewer: Viewer::default(),
            tactic_idx: 0,
            tactics,
            display,
        }
    }

    /// Current tactic.
    #[must_use]
    pub fn current_tactic(&self) -> Option<&Tactic> {
        self.tactics.get(self.tactic_idx)
    }

    /// Display state of the current tactic.
    #[must_use]
    pub fn current_display(&self) -> Option<&TacticDisplay> {
        self.display.get(self.tactic_idx)
    }

    /// Default display state with a slot no entry of `display` uses.
    #[must_use]
    pub fn fresh_display(&self) -> TacticDisplay {
        let last = self.display.iter().map(|d| d.slot).max().unwrap_or(0);
        TacticDisplay {
            slot: last + 1,
            ..TacticDisplay::default()
        }
    }

    /// Returns `true` if `tactics` and `display` have the same length.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.tactics.len() == self.display.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_round_trip_and_keep_unknowns() {
        for tab in Tab::KNOWN {
            assert_eq!(Tab::from_id(tab.id()), tab);
            assert!(tab.label().is_some());
        }
        assert_eq!(Tab::from_id(9), Tab::Other(9));
        assert_eq!(Tab::Other(9).label(), None);
    }

    #[test]
    fn player_ids_accept_numbers_and_strings() {
        let ids: Vec<PlayerId> = serde_json::from_str(r#"[3, "7", "wing"]"#).unwrap();
        assert_eq!(
            ids,
            [
                PlayerId::from(3),
                PlayerId::Text("7".into()),
                PlayerId::Text("wing".into())
            ]
        );
        assert_eq!(ids[1].as_number(), Some(7.0));
        assert_eq!(ids[2].as_number(), None);
        assert_eq!(ids[2].to_string(), "wing");
    }

    #[test]
    fn negative_and_fractional_ids_survive_a_round_trip() {
        let text = r#"[-1,1.5,2.0]"#;
        let ids: Vec<PlayerId> = serde_json::from_str(text).unwrap();
        assert_eq!(ids[0].as_number(), Some(-1.0));
        assert_eq!(ids[1].as_number(), Some(1.5));
        assert_eq!(ids[2].to_string(), "2.0");
        assert_ne!(ids[2], PlayerId::from(2));
        assert_eq!(serde_json::to_string(&ids).unwrap(), text);
    }

    #[test]
    fn display_slots_are_unique() {
        let tactic = Tactic {
            description: String::new(),
            height: 2.0,
            points: Vec::new(),
        };
        let mut state = AppState::new(Vec::new(), vec![tactic.clone(), tactic]);
        let slots: Vec<u64> = state.display.iter().map(|d| d.slot).collect();
        assert_eq!(slots, [1, 2]);
        state.display.swap(0, 1);
        assert_eq!(state.fresh_display().slot, 3);
        assert_eq!(state.fresh_display().tab, Tab::Field);
    }

    #[test]
    fn viewer_parses_lowercase() {
        assert_eq!("listing".parse::<Viewer>(), Ok(Viewer::Listing));
        assert!("grid".parse::<Viewer>().is_err());
    }

    #[test]
    fn cloned_tactic_does_not_alias_players() {
        let original = Tactic {
            description: String::new(),
            height: 2.0,
            points: vec![Player {
                id: 1.into(),
                x: 0.0,
                y: 0.0,
                color: 0,
            }],
        };
        let mut copy = original.clone();
        copy.points[0].x = 50.0;
        assert_eq!(original.points[0].x, 0.0);
    }
}
