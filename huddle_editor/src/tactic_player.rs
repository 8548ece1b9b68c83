// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One tactic at a time, with pagination over the list.

use huddle_field::CanvasDescription;
use huddle_lens::{Index, Lens, Reducer, StoreError, lens, try_lens};
use huddle_pagination::{PageRequest, Pagination};
use tracing::debug;

use crate::config::EditorConfig;
use crate::model::{AppState, Tab, Tactic, TacticDisplay};
use crate::pager::{PageAction, PageEvent, pager_view};
use crate::scenario::{Scenario, ScenarioEvent, ScenarioState, tab_strip};
use crate::view::{View, ViewError, fallback};

/// Canvas element of the single-tactic viewer.
pub const PLAYER_CANVAS_ID: &str = "field-canvas";

/// Input of the single-tactic viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum TacticPlayerEvent {
    /// Tab strip item clicked, with its raw id.
    Tab(u32),
    /// Pager button.
    Page(PageEvent),
    /// Anything inside the current tactic.
    Scenario(ScenarioEvent),
}

/// The current tactic merged with its display state.
///
/// Fails with [`StoreError::IndexOutOfRange`] when the cursor is stale.
pub fn scenario_lens() -> impl Lens<AppState, Inner = ScenarioState> + Clone + 'static {
    try_lens(
        |s: &AppState| {
            let tactic = Index::new("tactics", s.tactic_idx).get(&s.tactics)?;
            let display = Index::new("display", s.tactic_idx).get(&s.display)?;
            Ok(ScenarioState::from_parts(s.colors.clone(), tactic, display))
        },
        |s: &mut AppState, scenario: ScenarioState| {
            let (tactic, display) = scenario.into_parts();
            Index::new("tactics", s.tactic_idx).set(&mut s.tactics, tactic)?;
            Index::new("display", s.tactic_idx).set(&mut s.display, display)
        },
    )
}

/// The 0-based tactic index seen as a 1-based cursor over the list.
pub fn pagination_lens() -> impl Lens<AppState, Inner = Pagination> + Clone + 'static {
    lens(
        |s: &AppState| Pagination::new(s.tactic_idx + 1, s.tactics.len()),
        |s: &mut AppState, p: Pagination| s.tactic_idx = p.current() - 1,
    )
}

/// Applies `request` to the tactics and their display state alike.
///
/// A copy gets fresh display state. The cursor follows the request.
pub fn restructure(
    state: &mut AppState,
    label: &'static str,
    request: PageRequest,
) -> Result<(), StoreError> {
    let rejected = |err| StoreError::rejected(label, err);
    request.check(state.tactics.len()).map_err(rejected)?;
    request.check(state.display.len()).map_err(rejected)?;
    let fresh = state.fresh_display();
    let current = request
        .apply(&mut state.tactics, Tactic::clone)
        .map_err(rejected)?;
    request
        .apply(&mut state.display, |_| fresh)
        .map_err(rejected)?;
    state.tactic_idx = current - 1;
    debug!(?request, tactics = state.tactics.len(), "tactic list restructured");
    Ok(())
}

fn page_label(event: PageEvent) -> &'static str {
    match event {
        PageEvent::MovePrev => "move-prev",
        PageEvent::Prev => "prev",
        PageEvent::Next => "next",
        PageEvent::MoveNext => "move-next",
        PageEvent::Duplicate => "duplicate",
        PageEvent::Delete => "delete",
    }
}

/// Reducer for a pager button, resolved against the list as it is when applied.
fn page_reducer(event: PageEvent) -> Reducer<AppState> {
    let label = page_label(event);
    match event {
        PageEvent::Prev | PageEvent::Next => Reducer::update(label, move |p: &mut Pagination| {
            if let Some(PageAction::Goto(current)) = event.resolve(*p) {
                *p = Pagination::new(current, p.pages());
            }
        })
        .lift(pagination_lens()),
        _ => Reducer::try_update(label, move |s: &mut AppState| {
            let pagination = pagination_lens().get(s)?;
            match event.resolve(pagination) {
                Some(PageAction::Restructure(request)) => restructure(s, label, request),
                Some(PageAction::Goto(_)) | None => Ok(()),
            }
        }),
    }
}

/// Single-tactic viewer: tab strip, pager, and the current scenario.
///
/// The scenario instance belongs to the tactic on screen, identified by its
/// display slot. Moving that tactic keeps the instance; showing another tactic
/// (paging, a copy, a delete) starts a fresh one, so a drag or a draft never
/// leaks across tactics.
#[derive(Clone, Debug)]
pub struct TacticPlayer {
    config: EditorConfig,
    shown: Option<u64>,
    scenario: Scenario,
}

impl TacticPlayer {
    /// A player not yet bound to a tactic; the first [`sync`](Self::sync) binds it.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            config: config.clone(),
            shown: None,
            scenario: Scenario::new(PLAYER_CANVAS_ID, config),
        }
    }

    /// The scenario instance on screen.
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Follows the cursor of `state`.
    pub fn sync(&mut self, state: &AppState) {
        let slot = state.current_display().map(|display| display.slot);
        if slot != self.shown {
            if self.shown.is_some() {
                debug!(from = ?self.shown, to = ?slot, "scenario instance replaced");
                self.scenario = Scenario::new(PLAYER_CANVAS_ID, &self.config);
            }
            self.shown = slot;
        }
    }

    /// Feeds one event; returns the reducers to commit.
    pub fn handle(
        &mut self,
        event: TacticPlayerEvent,
        state: &AppState,
    ) -> Vec<Reducer<AppState>> {
        self.sync(state);
        match event {
            TacticPlayerEvent::Tab(id) => {
                let tab = Tab::from_id(id);
                vec![Reducer::try_update("tab", move |s: &mut AppState| {
                    Index::new("display", s.tactic_idx)
                        .modify(&mut s.display, |d: &mut TacticDisplay| d.tab = tab)
                })]
            }
            TacticPlayerEvent::Page(event) => {
                let pagination = Pagination::new(state.tactic_idx + 1, state.tactics.len());
                if event.resolve(pagination).is_some() {
                    vec![page_reducer(event)]
                } else {
                    debug!(?event, "pager press at a boundary ignored");
                    Vec::new()
                }
            }
            TacticPlayerEvent::Scenario(event) => match scenario_lens().get(state) {
                Ok(scenario) => self
                    .scenario
                    .handle(event, &scenario)
                    .reducers
                    .into_iter()
                    .map(|r| r.lift(scenario_lens()))
                    .collect(),
                Err(err) => {
                    debug!(error = %err, "scenario event without a current tactic");
                    Vec::new()
                }
            },
        }
    }

    /// Canvas content of the current tactic, when its tab shows the field.
    pub fn drawings(&self, state: &AppState) -> Option<Result<CanvasDescription, ViewError>> {
        match scenario_lens().get(state) {
            Ok(scenario) => self.scenario.drawings(&scenario),
            Err(err) => Some(Err(err.into())),
        }
    }

    fn try_view(&self, state: &AppState) -> Result<View, ViewError> {
        let scenario = scenario_lens().get(state)?;
        let pagination = pagination_lens().get(state)?;
        let body = match scenario.tab {
            Tab::Other(id) => View::text(format!("Unknown tab {id}")),
            Tab::Field | Tab::Vision | Tab::Combo => {
                View::div([pager_view(pagination), self.scenario.view(&scenario)])
            }
        };
        Ok(View::div([tab_strip(scenario.tab), body]).class("tactic-player"))
    }

    /// Tab strip, pager, and scenario, or an inline error.
    #[must_use]
    pub fn view(&self, state: &AppState) -> View {
        fallback("tactic player", self.try_view(state))
    }
}
