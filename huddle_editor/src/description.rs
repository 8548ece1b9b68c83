// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use huddle_lens::{Debounce, Latch, Reducer};

use crate::view::View;

/// Input of the description editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionState {
    /// Committed text.
    pub value: String,
    /// Whether the editor is open.
    pub edit: bool,
}

/// User action on the description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionEvent {
    /// Double click on the text: open the editor.
    Open,
    /// The text area content changed.
    Input {
        /// Full content of the text area.
        text: String,
        /// Event time.
        now_ms: u64,
    },
    /// Clock tick, lets quiet keystrokes reach the draft.
    Tick {
        /// Current time.
        now_ms: u64,
    },
    /// The save button.
    Submit,
}

/// Double-click-to-edit text with a debounced draft.
///
/// Keystrokes are coalesced by a [`Debounce`] into a [`Latch`] holding the
/// draft. The latch is primed with the committed value when the editor opens,
/// so saving without typing keeps the text. Saving samples the latch; anything
/// still inside the debounce window is flushed into it first.
#[derive(Clone, Debug)]
pub struct DescriptionEditor {
    typing: Debounce<String>,
    draft: Latch<String>,
}

impl DescriptionEditor {
    /// An editor coalescing keystrokes over `debounce_ms`.
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            typing: Debounce::new(debounce_ms),
            draft: Latch::new(),
        }
    }

    /// Draft waiting to be saved.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.draft.peek().map(String::as_str)
    }

    /// Feeds one event; returns the reducer to commit, if any.
    pub fn handle(
        &mut self,
        event: DescriptionEvent,
        state: &DescriptionState,
    ) -> Option<Reducer<DescriptionState>> {
        match event {
            DescriptionEvent::Open => {
                self.typing.cancel();
                self.draft.set(state.value.clone());
                Some(Reducer::update("open-description", |s: &mut DescriptionState| {
                    s.edit = true;
                }))
            }
            DescriptionEvent::Input { text, now_ms } => {
                self.typing.push(text, now_ms);
                None
            }
            DescriptionEvent::Tick { now_ms } => {
                if let Some(text) = self.typing.poll(now_ms) {
                    self.draft.set(text);
                }
                None
            }
            DescriptionEvent::Submit => {
                if let Some(text) = self.typing.flush() {
                    self.draft.set(text);
                }
                let draft = self.draft.trigger();
                Some(Reducer::update("save-description", move |s: &mut DescriptionState| {
                    if let Some(text) = draft {
                        s.value = text;
                    }
                    s.edit = false;
                }))
            }
        }
    }

    /// Text area and save button while editing, plain text otherwise.
    #[must_use]
    pub fn view(&self, state: &DescriptionState) -> View {
        if state.edit {
            let text = self.draft().unwrap_or(&state.value);
            View::div([
                View::el("textarea").child(View::text(text)),
                View::el("button").class("save").child(View::text("Save")),
            ])
            .class("description edit")
        } else {
            View::div([View::el("div")
                .class("view")
                .child(View::text(state.value.clone()))])
            .class("description")
        }
    }
}
