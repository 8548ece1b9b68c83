// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The whole editor: one store, both viewers, and the paint loop.

use huddle_field::CanvasDescription;
use huddle_lens::{Flush, Reducer, Rejection, Sink, Store, StoreError, scope};
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::description::DescriptionEvent;
use crate::model::{AppState, Viewer};
use crate::persist::{PersistError, Storage, export_payload, load_initial_state, notebook_script};
use crate::redraw::{RedrawScheduler, Surface};
use crate::scenario::ScenarioEvent;
use crate::tactic_list::{ItemEvent, ListEvent, TacticList};
use crate::tactic_player::{TacticPlayer, TacticPlayerEvent};
use crate::view::{View, ViewError};

/// Help text shown by the help toggle.
pub const HELP_TEXT: &str = "Double Click on the description to edit it";

/// Any input the editor reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// The help button.
    ToggleHelp,
    /// Viewer selector, with the viewer's name.
    SelectViewer(String),
    /// Input of the single-tactic viewer.
    Player(TacticPlayerEvent),
    /// Input of the listing.
    Listing(ListEvent),
}

/// One rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// View tree for the declarative renderer.
    pub view: View,
    /// Canvas contents for the painter.
    pub canvases: Vec<CanvasDescription>,
}

/// Editor instance.
///
/// Events go through [`handle`](Self::handle): the active viewer turns them into
/// reducers, which the store applies in order before the next event is taken.
#[derive(Debug)]
pub struct App {
    config: EditorConfig,
    store: Store<AppState>,
    player: TacticPlayer,
    listing: TacticList,
    redraw: RedrawScheduler,
    rejected: Vec<Rejection>,
}

impl App {
    /// An editor over `state`.
    #[must_use]
    pub fn new(config: EditorConfig, state: AppState) -> Self {
        let mut app = Self {
            player: TacticPlayer::new(&config),
            listing: TacticList::new(&config),
            redraw: RedrawScheduler::new(config.redraw.clone()),
            store: Store::new(state),
            rejected: Vec::new(),
            config,
        };
        app.sync();
        app
    }

    /// An editor over the stored document, or the built-in state `query` selects.
    pub fn load(config: EditorConfig, storage: &mut dyn Storage, query: &str) -> Self {
        let state = load_initial_state(storage, query, &config);
        Self::new(config, state)
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Latest committed state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Number of committed transitions.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// A handle for queuing reducers from outside; applied on the next event.
    #[must_use]
    pub fn sink(&self) -> Sink<AppState> {
        self.store.sink()
    }

    /// The single-tactic viewer.
    #[must_use]
    pub fn player(&self) -> &TacticPlayer {
        &self.player
    }

    /// The listing viewer.
    #[must_use]
    pub fn listing(&self) -> &TacticList {
        &self.listing
    }

    fn sync(&mut self) {
        let state = self.store.state();
        self.player.sync(state);
        self.listing.sync(state);
    }

    fn reducers(&mut self, event: AppEvent) -> Vec<Reducer<AppState>> {
        let state = self.store.state();
        match event {
            AppEvent::ToggleHelp => vec![
                Reducer::update("toggle-help", |shown: &mut bool| *shown = !*shown)
                    .lift(scope!(AppState, show_help)),
            ],
            AppEvent::SelectViewer(name) => match name.parse::<Viewer>() {
                Ok(viewer) => vec![
                    Reducer::update("select-viewer", move |v: &mut Viewer| *v = viewer)
                        .lift(scope!(AppState, viewer)),
                ],
                Err(_) => {
                    let err = StoreError::UnknownVariant {
                        kind: "viewer",
                        value: name,
                    };
                    warn!(error = %err, "viewer selection ignored");
                    Vec::new()
                }
            },
            AppEvent::Player(event) => self.player.handle(event, state),
            AppEvent::Listing(event) => self.listing.handle(event, state),
        }
    }

    /// Applies one event and everything queued before it.
    ///
    /// Refused operations ([`StoreError::Rejected`]) are shown inline by the
    /// next [`render`](Self::render); other rejections are only logged.
    pub fn handle(&mut self, event: AppEvent) -> Flush {
        for reducer in self.reducers(event) {
            if let Err(err) = self.store.dispatch(reducer) {
                warn!(error = %err, "reducer dropped");
            }
        }
        let flush = self.store.flush();
        self.rejected = flush
            .rejected
            .iter()
            .filter(|r| matches!(r.error, StoreError::Rejected { .. }))
            .cloned()
            .collect();
        if flush.changed() {
            self.sync();
        }
        flush
    }

    /// Advances clocks: description drafts and canvas retries.
    pub fn tick(&mut self, surface: &mut dyn Surface, now_ms: u64) -> usize {
        let tick = ScenarioEvent::Description(DescriptionEvent::Tick { now_ms });
        let state = self.store.state();
        match state.viewer {
            Viewer::Player => {
                let reducers = self.player.handle(TacticPlayerEvent::Scenario(tick), state);
                debug_assert!(reducers.is_empty(), "ticks never commit");
            }
            Viewer::Listing => {
                for item in 0..state.tactics.len() {
                    let event = ListEvent {
                        item,
                        event: ItemEvent::Scenario(tick.clone()),
                    };
                    let reducers = self.listing.handle(event, state);
                    debug_assert!(reducers.is_empty(), "ticks never commit");
                }
            }
        }
        self.redraw.tick(surface, now_ms)
    }

    /// View tree and canvas contents of the current state.
    #[must_use]
    pub fn render(&self) -> Frame {
        let state = self.store.state();
        let (body, drawings): (View, Vec<Result<CanvasDescription, ViewError>>) =
            match state.viewer {
                Viewer::Player => (
                    self.player.view(state),
                    self.player.drawings(state).into_iter().collect(),
                ),
                Viewer::Listing => (self.listing.view(state), self.listing.drawings(state)),
            };
        let mut view = View::div([
            View::el("button").class("help").child(View::text("Help")),
            View::el("select").class("viewer").children([
                View::el("option").attr("value", "player").child(View::text("Player")),
                View::el("option").attr("value", "listing").child(View::text("Listing")),
            ]),
        ])
        .class("huddle");
        for rejection in &self.rejected {
            view = view.child(
                View::div([View::text(format!(
                    "Error in {}: {}",
                    rejection.label, rejection.error
                ))])
                .class("error"),
            );
        }
        if state.show_help {
            view = view.child(View::el("p").class("help-text").child(View::text(HELP_TEXT)));
        }
        let canvases = drawings
            .into_iter()
            .filter_map(|d| {
                d.map_err(|err| debug!(error = %err, "canvas skipped, field view shows the error"))
                    .ok()
            })
            .collect();
        Frame {
            view: view.child(body),
            canvases,
        }
    }

    /// Renders and hands every canvas to the painter. Returns the view tree.
    pub fn present(&mut self, surface: &mut dyn Surface, now_ms: u64) -> View {
        let Frame { view, canvases } = self.render();
        for canvas in canvases {
            self.redraw.submit(canvas, surface, now_ms);
        }
        view
    }

    /// Export payload of the current state.
    pub fn export(&self) -> Result<String, PersistError> {
        export_payload(self.store.state())
    }

    /// Inline script restoring the current state on the next load.
    pub fn notebook_script(&self) -> Result<String, PersistError> {
        notebook_script(self.store.state(), &self.config.storage_key)
    }
}
