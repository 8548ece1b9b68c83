// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation and structural operations over the tactic list.

use huddle_pagination::{PageRequest, Pagination};

use crate::view::View;

/// Pager button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// Swap the current tactic with the previous one.
    MovePrev,
    /// Show the previous tactic.
    Prev,
    /// Show the next tactic.
    Next,
    /// Swap the current tactic with the next one.
    MoveNext,
    /// Insert a copy of the current tactic after it.
    Duplicate,
    /// Remove the current tactic.
    Delete,
}

/// What a pager button does to the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Only the cursor moves, to this 1-based position.
    Goto(usize),
    /// The list changes.
    Restructure(PageRequest),
}

impl PageEvent {
    /// Resolves the button against `pagination`. `None` at a boundary.
    ///
    /// Deleting is not gated here: on a single tactic the request itself fails.
    #[must_use]
    pub fn resolve(self, pagination: Pagination) -> Option<PageAction> {
        let mut cursor = pagination;
        match self {
            Self::Prev => cursor.prev_page().then(|| PageAction::Goto(cursor.current())),
            Self::Next => cursor.next_page().then(|| PageAction::Goto(cursor.current())),
            Self::MovePrev => pagination.move_prev().map(PageAction::Restructure),
            Self::MoveNext => pagination.move_next().map(PageAction::Restructure),
            Self::Duplicate => Some(PageAction::Restructure(pagination.copy_after())),
            Self::Delete => Some(PageAction::Restructure(pagination.delete())),
        }
    }
}

fn button(class: &'static str, label: &'static str, disabled: bool) -> View {
    View::el("button")
        .class(class)
        .disabled_if(disabled)
        .child(View::text(label))
}

/// Cursor, navigation buttons, and item operations.
///
/// Buttons that would be no-ops are disabled.
#[must_use]
pub fn pager_view(pagination: Pagination) -> View {
    let first = pagination.is_first();
    let last = pagination.is_last();
    let position = if pagination.pages() == 0 {
        " <none> ".to_owned()
    } else {
        format!(" {} / {} ", pagination.current(), pagination.pages())
    };
    View::div([
        View::div([
            button("move-prev", "Move Previous", first),
            button("prev", "Previous", first),
            View::el("span").class("position").child(View::text(position)),
            button("next", "Next", last),
            button("move-next", "Move Next", last),
        ]),
        View::div([
            View::text("Item operations: "),
            button("duplicate", "Duplicate", false),
            button("delete", "Delete", pagination.pages() <= 1),
        ]),
    ])
    .class("pagination")
}
