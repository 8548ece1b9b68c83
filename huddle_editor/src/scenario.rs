// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One tactic: description, field, height control and 3D preview.

use huddle_drag::drag::DragUpdate;
use huddle_field::{CanvasDescription, FieldType};
use huddle_lens::{Lens, Reducer, lens, scope};

use crate::config::EditorConfig;
use crate::description::{DescriptionEditor, DescriptionEvent, DescriptionState};
use crate::field::{FieldEditor, FieldEvent, FieldState};
use crate::height::{HeightControl, HeightEvent};
use crate::model::{Player, PlayerId, Tab, Tactic, TacticDisplay};
use crate::scene::{SceneState, scene_view};
use crate::view::{View, ViewError, fallback};

const INTRO: &str = "Small browser application to display Ultimate tactics in 3D";

/// A tactic merged with its display state.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioState {
    /// Player palette. Read only.
    pub colors: Vec<String>,
    /// Display slot of the tactic. Read only.
    pub slot: u64,
    /// Visible tab. Read only.
    pub tab: Tab,
    /// Selected player.
    pub selected: Option<PlayerId>,
    /// Whether the description editor is open.
    pub edit_description: bool,
    /// Visible crop.
    pub field_type: FieldType,
    /// Players.
    pub points: Vec<Player>,
    /// Camera elevation.
    pub height: f64,
    /// Description text.
    pub description: String,
}

impl ScenarioState {
    /// Merges a tactic with its display state.
    #[must_use]
    pub fn from_parts(colors: Vec<String>, tactic: Tactic, display: TacticDisplay) -> Self {
        Self {
            colors,
            slot: display.slot,
            tab: display.tab,
            selected: display.selected,
            edit_description: display.edit_description,
            field_type: display.field_type,
            points: tactic.points,
            height: tactic.height,
            description: tactic.description,
        }
    }

    /// Splits back into the tactic and its display state.
    #[must_use]
    pub fn into_parts(self) -> (Tactic, TacticDisplay) {
        let tactic = Tactic {
            description: self.description,
            height: self.height,
            points: self.points,
        };
        let display = TacticDisplay {
            slot: self.slot,
            tab: self.tab,
            edit_description: self.edit_description,
            selected: self.selected,
            field_type: self.field_type,
        };
        (tactic, display)
    }
}

/// Tab strip with `selected` in bold. Items carry their id in `data-id`.
#[must_use]
pub fn tab_strip(selected: Tab) -> View {
    View::el("ul").class("tabs").children(Tab::KNOWN.into_iter().map(|tab| {
        let item = View::el("li")
            .attr("data-id", tab.id().to_string())
            .child(View::text(tab.label().unwrap_or_default()));
        if tab == selected {
            item.attr("style", "font-weight: bold")
        } else {
            item
        }
    }))
}

/// Input routed to one part of a scenario.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioEvent {
    /// Field canvas and its buttons.
    Field(FieldEvent),
    /// Height buttons.
    Height(HeightEvent),
    /// Description text.
    Description(DescriptionEvent),
}

/// What one event produced.
#[derive(Debug, Default)]
pub struct ScenarioOutput {
    /// Mutations to commit, in order.
    pub reducers: Vec<Reducer<ScenarioState>>,
    /// Live position of a dragged player.
    pub live: Option<DragUpdate<PlayerId>>,
}

fn field_lens() -> impl Lens<ScenarioState, Inner = FieldState> + Clone + 'static {
    lens(
        |s: &ScenarioState| FieldState {
            colors: s.colors.clone(),
            selected: s.selected.clone(),
            field_type: s.field_type,
            points: s.points.clone(),
        },
        |s: &mut ScenarioState, f: FieldState| {
            s.selected = f.selected;
            s.field_type = f.field_type;
            s.points = f.points;
        },
    )
}

fn description_lens() -> impl Lens<ScenarioState, Inner = DescriptionState> + Clone + 'static {
    lens(
        |s: &ScenarioState| DescriptionState {
            value: s.description.clone(),
            edit: s.edit_description,
        },
        |s: &mut ScenarioState, d: DescriptionState| {
            s.description = d.value;
            s.edit_description = d.edit;
        },
    )
}

fn scene_state(s: &ScenarioState) -> SceneState {
    SceneState {
        height: s.height,
        players: s.points.clone(),
        colors: s.colors.clone(),
    }
}

/// Component instance of one tactic.
///
/// Owns the transient state of its parts (drag session, description draft);
/// everything else is read from the [`ScenarioState`] it is handed.
#[derive(Clone, Debug)]
pub struct Scenario {
    field: FieldEditor,
    height: HeightControl,
    description: DescriptionEditor,
}

impl Scenario {
    /// A scenario painting its field into `canvas_id`.
    #[must_use]
    pub fn new(canvas_id: impl Into<String>, config: &EditorConfig) -> Self {
        Self {
            field: FieldEditor::new(canvas_id, config),
            height: HeightControl::new(config.height_step, config.height_min),
            description: DescriptionEditor::new(config.debounce_ms),
        }
    }

    /// The field editor part.
    #[must_use]
    pub fn field(&self) -> &FieldEditor {
        &self.field
    }

    /// The description editor part.
    #[must_use]
    pub fn description(&self) -> &DescriptionEditor {
        &self.description
    }

    /// Routes one event to its part and lifts the resulting reducers.
    pub fn handle(&mut self, event: ScenarioEvent, state: &ScenarioState) -> ScenarioOutput {
        let mut out = ScenarioOutput::default();
        match event {
            ScenarioEvent::Field(event) => {
                let field = field_lens().get(state).map(|f| self.field.handle(event, &f));
                if let Ok(field) = field {
                    out.live = field.live;
                    out.reducers
                        .extend(field.reducers.into_iter().map(|r| r.lift(field_lens())));
                }
            }
            ScenarioEvent::Height(event) => {
                out.reducers
                    .push(self.height.handle(event).lift(scope!(ScenarioState, height)));
            }
            ScenarioEvent::Description(event) => {
                let description = description_lens().get(state);
                if let Ok(description) = description {
                    out.reducers.extend(
                        self.description
                            .handle(event, &description)
                            .map(|r| r.lift(description_lens())),
                    );
                }
            }
        }
        out
    }

    /// Canvas content, when the tab shows the field.
    pub fn drawings(&self, state: &ScenarioState) -> Option<Result<CanvasDescription, ViewError>> {
        state.tab.shows_field().then(|| {
            let field = field_lens().get(state)?;
            self.field.drawings(&field)
        })
    }

    fn field_view(&self, state: &ScenarioState) -> View {
        fallback(
            "field",
            field_lens()
                .get(state)
                .map_err(ViewError::from)
                .and_then(|f| self.field.view(&f)),
        )
    }

    fn height_view(&self, state: &ScenarioState) -> View {
        self.height.view(state.height)
    }

    fn vision_view(state: &ScenarioState) -> View {
        fallback("3D vision", scene_view(&scene_state(state)))
    }

    /// Intro, description, then the parts the tab shows.
    ///
    /// Each part fails on its own: a broken field still leaves the description
    /// and the scene on screen.
    #[must_use]
    pub fn view(&self, state: &ScenarioState) -> View {
        let description = description_lens()
            .get(state)
            .map(|d| self.description.view(&d))
            .map_err(ViewError::from);
        let view = View::div([
            View::el("p").class("intro").child(View::text(INTRO)),
            fallback("description", description),
        ])
        .class("scenario");
        match state.tab {
            Tab::Field => view.child(self.field_view(state)),
            Tab::Vision => view.children([self.height_view(state), Self::vision_view(state)]),
            Tab::Combo => view.children([
                self.field_view(state),
                self.height_view(state),
                Self::vision_view(state),
            ]),
            Tab::Other(id) => view.child(View::text(format!("Unknown tab {id}"))),
        }
    }
}
