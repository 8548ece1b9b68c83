// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use huddle_field::FieldType;
use huddle_lens::{Reducer, StoreError};

use crate::view::View;

/// Input of the crop selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeState {
    /// Offered crops, in button order.
    pub modes: Vec<FieldType>,
    /// Active crop.
    pub selected: FieldType,
}

impl ModeState {
    /// Every crop offered, `selected` active.
    #[must_use]
    pub fn all(selected: FieldType) -> Self {
        Self {
            modes: FieldType::ALL.to_vec(),
            selected,
        }
    }
}

/// Exclusive selector between field crops.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeButtons;

impl ModeButtons {
    /// One button per crop; the active one is bold.
    #[must_use]
    pub fn view(state: &ModeState) -> View {
        View::div(state.modes.iter().map(|mode| {
            let name: &'static str = mode.into();
            let button = View::el("button")
                .class("mode")
                .attr("data-mode", name)
                .child(View::text(name));
            if *mode == state.selected {
                button.attr("style", "font-weight: bold")
            } else {
                button
            }
        }))
        .class("modes")
    }

    /// Reducer selecting the crop named `value`.
    ///
    /// Names no crop matches yield [`StoreError::UnknownVariant`].
    pub fn select(value: &str) -> Result<Reducer<ModeState>, StoreError> {
        let mode: FieldType = value.parse().map_err(|_| StoreError::UnknownVariant {
            kind: "field type",
            value: value.to_owned(),
        })?;
        Ok(Reducer::update("select-mode", move |s: &mut ModeState| {
            s.selected = mode;
        }))
    }
}
