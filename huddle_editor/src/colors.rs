// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::warn;

use crate::view::View;

/// Palette swatches for recoloring the selected player.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorPicker;

impl ColorPicker {
    /// Swatches, one per palette entry, tagged with their index.
    #[must_use]
    pub fn view(colors: &[String]) -> View {
        View::div([View::text("Player color:")])
            .class("color-picker")
            .children(colors.iter().enumerate().map(|(index, color)| {
                View::el("div")
                    .class("color-block")
                    .attr("data-color-index", index.to_string())
                    .attr("style", format!("background-color: {color}"))
            }))
    }

    /// Validates a swatch click against the palette.
    ///
    /// Out-of-range indices are logged and ignored.
    #[must_use]
    pub fn pick(index: usize, colors: &[String]) -> Option<usize> {
        if index < colors.len() {
            Some(index)
        } else {
            warn!(index, palette = colors.len(), "color index outside the palette");
            None
        }
    }
}
