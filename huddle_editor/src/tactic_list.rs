// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Every tactic at once, one scenario instance per list position.

use huddle_field::CanvasDescription;
use huddle_lens::{Collection, Keyed, Lens, Reducer, StoreError, lens, scope, try_lens};
use tracing::warn;

use crate::config::EditorConfig;
use crate::model::{AppState, Tab, Tactic, TacticDisplay};
use crate::scenario::{Scenario, ScenarioEvent, ScenarioState, tab_strip};
use crate::view::{View, ViewError, fallback};

/// One entry of the listing: a tactic and its display state.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemState {
    /// Player palette. Read only.
    pub colors: Vec<String>,
    /// The tactic.
    pub tactic: Tactic,
    /// Its display state.
    pub display: TacticDisplay,
}

/// The listing's view of the root.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    /// Entries, in list order.
    pub items: Vec<ItemState>,
}

/// Input of one listing entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemEvent {
    /// Tab strip item clicked, with its raw id.
    Tab(u32),
    /// Anything inside the tactic.
    Scenario(ScenarioEvent),
}

/// An event addressed to the entry at `item` (0-based).
#[derive(Clone, Debug, PartialEq)]
pub struct ListEvent {
    /// Entry position.
    pub item: usize,
    /// What happened.
    pub event: ItemEvent,
}

/// Zips tactics with their display state. Fails if the two lists disagree.
pub fn list_lens() -> impl Lens<AppState, Inner = ListState> + Clone + 'static {
    try_lens(
        |s: &AppState| {
            if !s.is_aligned() {
                return Err(StoreError::IndexOutOfRange {
                    scope: "display",
                    index: s.tactics.len().saturating_sub(1),
                    len: s.display.len(),
                });
            }
            let items = s
                .tactics
                .iter()
                .zip(&s.display)
                .map(|(tactic, display)| ItemState {
                    colors: s.colors.clone(),
                    tactic: tactic.clone(),
                    display: display.clone(),
                })
                .collect();
            Ok(ListState { items })
        },
        |s: &mut AppState, list: ListState| {
            let (tactics, display): (Vec<_>, Vec<_>) = list
                .items
                .into_iter()
                .map(|item| (item.tactic, item.display))
                .unzip();
            s.tactics = tactics;
            s.display = display;
            Ok(())
        },
    )
}

type ItemKey = fn(&ItemState, usize) -> usize;

/// Entries keyed by position.
fn items() -> Keyed<ListState, ItemState, ItemKey> {
    let key: ItemKey = |_, index| index;
    Keyed::new(scope!(ListState, items), key)
}

fn item_scenario_lens() -> impl Lens<ItemState, Inner = ScenarioState> + Clone + 'static {
    lens(
        |item: &ItemState| {
            ScenarioState::from_parts(
                item.colors.clone(),
                item.tactic.clone(),
                item.display.clone(),
            )
        },
        |item: &mut ItemState, scenario: ScenarioState| {
            (item.tactic, item.display) = scenario.into_parts();
        },
    )
}

fn canvas_id(index: usize) -> String {
    format!("field-canvas-{index}")
}

/// Listing viewer.
///
/// Holds one [`Scenario`] per entry in a [`Collection`], so each entry keeps its
/// own drag session and description draft.
#[derive(Debug)]
pub struct TacticList {
    config: EditorConfig,
    instances: Collection<usize, Scenario>,
}

impl TacticList {
    /// An empty listing; instances appear on [`sync`](Self::sync).
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            config: config.clone(),
            instances: Collection::new(),
        }
    }

    /// Number of live scenario instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if there are no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Scenario instance of the entry at `index`.
    #[must_use]
    pub fn instance(&self, index: usize) -> Option<&Scenario> {
        self.instances.get(&index)
    }

    /// Creates and drops instances to match the tactics of `state`.
    pub fn sync(&mut self, state: &AppState) {
        let keys = list_lens().get(state).and_then(|list| items().keys(&list));
        match keys {
            Ok(keys) => {
                let config = &self.config;
                self.instances
                    .reconcile(keys, |&index| Scenario::new(canvas_id(index), config));
            }
            Err(err) => warn!(error = %err, "listing left unsynchronized"),
        }
    }

    /// Feeds one event; returns the reducers to commit.
    pub fn handle(&mut self, event: ListEvent, state: &AppState) -> Vec<Reducer<AppState>> {
        self.sync(state);
        let ListEvent { item, event } = event;
        let Some(entry) = state.tactics.get(item).zip(state.display.get(item)) else {
            warn!(item, "event for a tactic that is not listed");
            return Vec::new();
        };
        let reducers = match event {
            ItemEvent::Tab(id) => {
                let tab = Tab::from_id(id);
                vec![Reducer::update("tab", move |i: &mut ItemState| {
                    i.display.tab = tab;
                })]
            }
            ItemEvent::Scenario(event) => {
                let Some(instance) = self.instances.get_mut(&item) else {
                    return Vec::new();
                };
                let scenario = ScenarioState::from_parts(
                    state.colors.clone(),
                    entry.0.clone(),
                    entry.1.clone(),
                );
                instance
                    .handle(event, &scenario)
                    .reducers
                    .into_iter()
                    .map(|r| r.lift(item_scenario_lens()))
                    .collect()
            }
        };
        reducers
            .into_iter()
            .map(|r| items().lift(item, r).lift(list_lens()))
            .collect()
    }

    /// Canvas content of every entry whose tab shows the field.
    pub fn drawings(&self, state: &AppState) -> Vec<Result<CanvasDescription, ViewError>> {
        let Ok(list) = list_lens().get(state) else {
            return Vec::new();
        };
        list.items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let scenario = item_scenario_lens().get(&item).ok()?;
                self.instances.get(&index)?.drawings(&scenario)
            })
            .collect()
    }

    fn try_view(&self, state: &AppState) -> Result<View, ViewError> {
        let list = list_lens().get(state)?;
        let mut view = View::el("div").class("tactic-list");
        for (index, item) in list.items.into_iter().enumerate() {
            let scenario = item_scenario_lens().get(&item)?;
            let body = match self.instances.get(&index) {
                Some(instance) => instance.view(&scenario),
                None => Scenario::new(canvas_id(index), &self.config).view(&scenario),
            };
            view = view.child(
                View::div([tab_strip(scenario.tab), body])
                    .class("tactic-item")
                    .attr("data-index", index.to_string()),
            );
        }
        Ok(view)
    }

    /// Every entry, or an inline error.
    #[must_use]
    pub fn view(&self, state: &AppState) -> View {
        fallback("tactic list", self.try_view(state))
    }
}
