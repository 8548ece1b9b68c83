// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Huddle Editor: an interactive editor for Ultimate tactics.
//!
//! Tactics are lists of players on a 380 × 1000 decimeter pitch, with a
//! description and a camera height for a 3D preview. The editor keeps them in
//! one [`AppState`] owned by a [`huddle_lens::Store`], and splits the work
//! between components that never see the root:
//!
//! - [`FieldEditor`]: selection, dragging, creation, recoloring and cropping on
//!   the 2D field. Pointer moves give live feedback; a drag commits once, on
//!   release.
//! - [`HeightControl`], [`DescriptionEditor`], [`ColorPicker`], [`ModeButtons`].
//! - [`Scenario`]: one tactic with its tabs, composed from the above through
//!   lenses.
//! - [`TacticPlayer`]: one tactic at a time with a pager that moves, copies and
//!   deletes tactics while keeping their display state aligned.
//! - [`TacticList`]: every tactic, one [`Scenario`] instance per entry.
//!
//! [`App`] wires them to the store, renders [`View`] trees and canvas
//! descriptions, and drives a [`RedrawScheduler`] for painters whose canvases
//! appear late. Documents are loaded from and exported to a [`Storage`].
//!
//! ## Example
//!
//! ```rust
//! use huddle_editor::{App, AppEvent, EditorConfig, MemoryStorage, PageEvent, TacticPlayerEvent};
//!
//! let mut app = App::load(EditorConfig::default(), &mut MemoryStorage::new(), "?dev");
//! assert_eq!(app.state().tactics.len(), 2);
//!
//! app.handle(AppEvent::Player(TacticPlayerEvent::Page(PageEvent::Duplicate)));
//! assert_eq!(app.state().tactics.len(), 3);
//! assert_eq!(app.state().display.len(), 3);
//! assert_eq!(app.state().tactic_idx, 2);
//!
//! let frame = app.render();
//! assert!(frame.view.contains_text(" 3 / 3 "));
//! assert_eq!(frame.canvases[0].id, "field-canvas");
//! ```
//!
//! Logging goes through `tracing`; no subscriber is installed by this crate.

mod app;
mod colors;
mod config;
mod description;
mod field;
mod height;
mod model;
mod modes;
mod pager;
mod persist;
mod players;
mod redraw;
mod scenario;
mod scene;
mod tactic_list;
mod tactic_player;
mod view;

pub use app::{App, AppEvent, Frame, HELP_TEXT};
pub use colors::ColorPicker;
pub use config::{DEFAULT_PALETTE, EditorConfig, RedrawConfig};
pub use description::{DescriptionEditor, DescriptionEvent, DescriptionState};
pub use field::{FieldEditor, FieldEvent, FieldOutput, FieldState};
pub use height::{HeightControl, HeightEvent};
pub use model::{AppState, Player, PlayerId, Tab, Tactic, TacticDisplay, Viewer};
pub use modes::{ModeButtons, ModeState};
pub use pager::{PageAction, PageEvent, pager_view};
pub use persist::{
    DOCUMENT_VERSION, MemoryStorage, Payload, PersistError, Storage, StoredDocument,
    default_state, dev_state, export_payload, load_initial_state, notebook_script,
    parse_document,
};
pub use players::{create_player, generate_player_id};
pub use redraw::{RedrawScheduler, Surface};
pub use scenario::{Scenario, ScenarioEvent, ScenarioOutput, ScenarioState, tab_strip};
pub use scene::{SceneState, scene_view};
pub use tactic_list::{ItemEvent, ItemState, ListEvent, ListState, TacticList, list_lens};
pub use tactic_player::{
    PLAYER_CANVAS_ID, TacticPlayer, TacticPlayerEvent, pagination_lens, restructure,
    scenario_lens,
};
pub use view::{View, ViewError, fallback, palette_color};
