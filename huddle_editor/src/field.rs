// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive 2D field: selection, dragging, creation, recoloring, cropping.

use huddle_drag::drag::{DragController, DragPhase, DragUpdate};
use huddle_field::{CanvasDescription, FieldMapper, FieldType, MarkerStyle, hit_test};
use huddle_lens::{Keyed, Lens, Reducer, lens, scope};
use kurbo::Point;
use tracing::{debug, warn};

use crate::colors::ColorPicker;
use crate::config::EditorConfig;
use crate::model::{Player, PlayerId};
use crate::modes::{ModeButtons, ModeState};
use crate::players::{create_player, generate_player_id};
use crate::view::{View, ViewError, palette_color};

/// Input of the field editor.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    /// Player palette. Read only.
    pub colors: Vec<String>,
    /// Selected player.
    pub selected: Option<PlayerId>,
    /// Visible crop.
    pub field_type: FieldType,
    /// Players of the tactic.
    pub points: Vec<Player>,
}

/// Pointer and button input of the field editor.
///
/// Pointer positions are canvas pixels; `canvas_width` is the laid-out width of
/// the canvas the event came from.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    /// Button pressed on the canvas.
    PointerDown {
        /// Pointer position.
        at: Point,
        /// Canvas width in pixels.
        canvas_width: f64,
    },
    /// Pointer moved over the canvas.
    PointerMove {
        /// Pointer position.
        at: Point,
        /// Canvas width in pixels.
        canvas_width: f64,
    },
    /// Button released.
    PointerUp,
    /// Pointer left the canvas.
    PointerLeave,
    /// Double click on the canvas.
    DoubleClick {
        /// Pointer position.
        at: Point,
        /// Canvas width in pixels.
        canvas_width: f64,
    },
    /// Palette swatch clicked.
    PickColor(usize),
    /// Crop button clicked, with the crop's name.
    SelectMode(String),
    /// "Delete player" clicked.
    DeletePlayer,
    /// "Close" clicked.
    Close,
}

/// What one event produced.
#[derive(Debug, Default)]
pub struct FieldOutput {
    /// Mutations to commit, in order.
    pub reducers: Vec<Reducer<FieldState>>,
    /// Live position of the dragged player, for immediate feedback.
    pub live: Option<DragUpdate<PlayerId>>,
    /// Player whose drag was replaced by a new press without committing.
    pub abandoned: Option<PlayerId>,
}

type PlayerKey = fn(&Player, usize) -> PlayerId;

/// Players of the field, addressed by id.
fn players() -> Keyed<FieldState, Player, PlayerKey> {
    let key: PlayerKey = |p, _| p.id.clone();
    Keyed::new(scope!(FieldState, points), key)
}

fn modes() -> impl Lens<FieldState, Inner = ModeState> + Clone + 'static {
    lens(
        |s: &FieldState| ModeState::all(s.field_type),
        |s: &mut FieldState, m: ModeState| s.field_type = m.selected,
    )
}

fn select(label: &'static str, id: Option<PlayerId>) -> Reducer<FieldState> {
    Reducer::update(label, move |s: &mut Option<PlayerId>| *s = id)
        .lift(scope!(FieldState, selected))
}

/// Writes the final position of a drag. Rejected if the player is gone.
fn commit(update: DragUpdate<PlayerId>) -> Reducer<FieldState> {
    let DragUpdate { id, position } = update;
    players().lift(
        id,
        Reducer::update("commit-drag", move |p: &mut Player| p.set_position(position)),
    )
}

/// The field editor of one tactic.
///
/// Committed positions only change on release: pointer moves update a live
/// position that [`drawings`](Self::drawings) shows instead of the committed
/// one. The drag session lives here, not in the view, so it survives a view
/// that failed to render.
#[derive(Clone, Debug)]
pub struct FieldEditor {
    canvas_id: String,
    display_height: f64,
    hit_tolerance: f64,
    marker: MarkerStyle,
    drag: DragController<PlayerId>,
}

impl FieldEditor {
    /// An editor painting into the canvas element `canvas_id`.
    #[must_use]
    pub fn new(canvas_id: impl Into<String>, config: &EditorConfig) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            display_height: config.display_height,
            hit_tolerance: config.hit_tolerance,
            marker: config.marker_style(),
            drag: DragController::new(),
        }
    }

    /// Id of the target canvas element.
    #[must_use]
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    /// Phase of the drag session.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Live position of the dragged player.
    #[must_use]
    pub fn live(&self) -> Option<DragUpdate<PlayerId>> {
        self.drag.live()
    }

    fn mapper(&self, field_type: FieldType) -> FieldMapper {
        FieldMapper::with_display_height(field_type, self.display_height)
    }

    /// Player under a canvas position, if the position is inside the crop.
    fn player_at(&self, state: &FieldState, at: Point, canvas_width: f64) -> Hit {
        let Some(position) = self.mapper(state.field_type).pick(at, canvas_width) else {
            return Hit::Outside;
        };
        let candidates = state.points.iter().map(|p| (p, p.position()));
        match hit_test(position, self.hit_tolerance, candidates) {
            Some(player) => Hit::Player(player.id.clone(), player.position(), position),
            None => Hit::Empty(position),
        }
    }

    /// Feeds one event.
    ///
    /// Positions are resolved against `state`, the state on screen when the
    /// event happened; the returned reducers run against whatever state is
    /// current when they are applied.
    pub fn handle(&mut self, event: FieldEvent, state: &FieldState) -> FieldOutput {
        let mut out = FieldOutput::default();
        match event {
            FieldEvent::PointerDown { at, canvas_width } => {
                match self.player_at(state, at, canvas_width) {
                    Hit::Player(id, anchor, pointer) => {
                        out.abandoned = self.drag.press(id.clone(), anchor, pointer);
                        out.reducers.push(select("select-player", Some(id)));
                    }
                    Hit::Empty(_) if state.selected.is_some() => {
                        out.reducers.push(select("deselect", None));
                    }
                    Hit::Empty(_) | Hit::Outside => {}
                }
            }
            FieldEvent::PointerMove { at, canvas_width } => {
                let pointer = self.mapper(state.field_type).unproject(at, canvas_width);
                out.live = self.drag.move_to(pointer);
            }
            FieldEvent::PointerUp => out.reducers.extend(self.drag.release().map(commit)),
            FieldEvent::PointerLeave => out.reducers.extend(self.drag.leave().map(commit)),
            FieldEvent::DoubleClick { at, canvas_width } => {
                if self.drag.is_active() {
                    debug!("double click ignored during a drag");
                } else if let Hit::Empty(position) = self.player_at(state, at, canvas_width) {
                    out.reducers.push(Reducer::update(
                        "add-player",
                        move |s: &mut FieldState| {
                            let id = generate_player_id(&s.points);
                            s.points.push(create_player(id.clone(), position));
                            s.selected = Some(id);
                        },
                    ));
                }
            }
            FieldEvent::PickColor(index) => {
                let picked = ColorPicker::pick(index, &state.colors);
                if let (Some(color), Some(id)) = (picked, state.selected.clone()) {
                    out.reducers.push(players().lift(
                        id,
                        Reducer::update("color-player", move |p: &mut Player| p.color = color),
                    ));
                }
            }
            FieldEvent::SelectMode(value) => match ModeButtons::select(&value) {
                Ok(reducer) => out.reducers.push(reducer.lift(modes())),
                Err(err) => warn!(error = %err, "mode selection ignored"),
            },
            FieldEvent::DeletePlayer => {
                if state.selected.is_some() {
                    out.reducers.push(Reducer::update(
                        "delete-player",
                        |s: &mut FieldState| {
                            if let Some(id) = s.selected.take() {
                                s.points.retain(|p| p.id != id);
                            }
                        },
                    ));
                }
            }
            FieldEvent::Close => out.reducers.push(select("close", None)),
        }
        out
    }

    /// Border rectangles, then one marker per visible player.
    ///
    /// A dragged player is drawn at its live position.
    pub fn drawings(&self, state: &FieldState) -> Result<CanvasDescription, ViewError> {
        let mapper = self.mapper(state.field_type);
        let live = self.drag.live();
        let mut drawings = mapper.borders(&self.marker).to_vec();
        for player in &state.points {
            let position = match &live {
                Some(update) if update.id == player.id => update.position,
                _ => player.position(),
            };
            let color = palette_color(&state.colors, player.color)?;
            let selected = state.selected.as_ref() == Some(&player.id);
            drawings.extend(mapper.marker(position, color, selected, &self.marker));
        }
        Ok(CanvasDescription {
            id: self.canvas_id.clone(),
            drawings,
        })
    }

    /// Crop buttons, the canvas, and the selection tools.
    pub fn view(&self, state: &FieldState) -> Result<View, ViewError> {
        for player in &state.points {
            palette_color(&state.colors, player.color)?;
        }
        let size = self.mapper(state.field_type).display_size();
        let mut view = View::div([
            ModeButtons::view(&ModeState::all(state.field_type)),
            View::el("canvas")
                .attr("id", self.canvas_id.clone())
                .attr("width", size.width.round().to_string())
                .attr("height", size.height.round().to_string()),
        ])
        .class("field");
        if state.selected.is_some() {
            view = view.children([
                ColorPicker::view(&state.colors),
                View::el("button")
                    .class("delete-player")
                    .child(View::text("Delete player")),
                View::el("button").class("close").child(View::text("Close")),
            ]);
        }
        Ok(view)
    }
}

enum Hit {
    Outside,
    Empty(Point),
    Player(PlayerId, Point, Point),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FieldState {
        FieldState {
            colors: vec!["red".into(), "blue".into()],
            selected: None,
            field_type: FieldType::Full,
            points: vec![
                create_player(1.into(), Point::new(0.0, 0.0)),
                create_player(2.into(), Point::new(100.0, 300.0)),
            ],
        }
    }

    fn apply(state: &mut FieldState, out: FieldOutput) {
        for r in out.reducers {
            *state = r.apply(state).unwrap();
        }
    }

    fn canvas_of(editor: &FieldEditor, s: &FieldState, p: Point) -> (Point, f64) {
        let mapper = editor.mapper(s.field_type);
        (mapper.project(p).unwrap(), mapper.display_size().width)
    }

    #[test]
    fn press_selects_and_release_without_move_commits_nothing() {
        let mut editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let mut s = state();
        let (at, canvas_width) = canvas_of(&editor, &s, Point::new(100.0, 300.0));
        let out = editor.handle(FieldEvent::PointerDown { at, canvas_width }, &s);
        apply(&mut s, out);
        assert_eq!(s.selected, Some(PlayerId::from(2)));
        assert_eq!(editor.drag_phase(), DragPhase::Armed);
        assert!(editor.handle(FieldEvent::PointerUp, &s).reducers.is_empty());
        assert_eq!(editor.drag_phase(), DragPhase::Idle);
    }

    #[test]
    fn double_click_on_empty_space_adds_a_selected_player() {
        let mut editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let mut s = state();
        let (at, canvas_width) = canvas_of(&editor, &s, Point::new(-120.0, -200.0));
        let out = editor.handle(FieldEvent::DoubleClick { at, canvas_width }, &s);
        apply(&mut s, out);
        assert_eq!(s.points.len(), 3);
        assert_eq!(s.selected, Some(PlayerId::from(3)));
        let added = &s.points[2];
        assert!((added.x + 120.0).abs() < 1e-9 && (added.y + 200.0).abs() < 1e-9);
    }

    #[test]
    fn double_click_on_a_player_adds_nothing() {
        let mut editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let s = state();
        let (at, canvas_width) = canvas_of(&editor, &s, Point::new(0.0, 0.0));
        let out = editor.handle(FieldEvent::DoubleClick { at, canvas_width }, &s);
        assert!(out.reducers.is_empty());
    }

    #[test]
    fn color_needs_a_selection_and_a_valid_index() {
        let mut editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let mut s = state();
        assert!(editor.handle(FieldEvent::PickColor(1), &s).reducers.is_empty());
        s.selected = Some(1.into());
        assert!(editor.handle(FieldEvent::PickColor(5), &s).reducers.is_empty());
        let out = editor.handle(FieldEvent::PickColor(1), &s);
        apply(&mut s, out);
        assert_eq!(s.points[0].color, 1);
        assert_eq!(s.points[1].color, 0);
    }

    #[test]
    fn unknown_mode_is_ignored() {
        let mut editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let s = state();
        let out = editor.handle(FieldEvent::SelectMode("corner".into()), &s);
        assert!(out.reducers.is_empty());
    }

    #[test]
    fn selection_tools_follow_the_selection() {
        let editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let mut s = state();
        assert!(!editor.view(&s).unwrap().contains_text("Delete player"));
        s.selected = Some(2.into());
        let view = editor.view(&s).unwrap();
        assert!(view.contains_text("Delete player"));
        assert!(view.contains_text("Player color:"));
    }

    #[test]
    fn palette_miss_fails_the_view() {
        let editor = FieldEditor::new("field-canvas", &EditorConfig::default());
        let mut s = state();
        s.points[1].color = 7;
        assert_eq!(
            editor.drawings(&s),
            Err(ViewError::UnknownColor { index: 7, len: 2 })
        );
        assert!(editor.view(&s).is_err());
    }
}
