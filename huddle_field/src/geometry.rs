// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Width of the pitch, in decimeters.
pub const FIELD_WIDTH: f64 = 380.0;
/// Length of the pitch, in decimeters.
pub const FIELD_HEIGHT: f64 = 1000.0;
/// Depth of each end zone, in decimeters.
pub const ZONE_HEIGHT: f64 = 180.0;
/// Canvas height every crop is fitted to, in pixels.
pub const DEFAULT_DISPLAY_HEIGHT: f64 = 400.0;

/// The canonical pitch in field-rectangle coordinates.
#[must_use]
pub fn field_rect() -> Rect {
    Rect::new(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT)
}

/// Converts a centered player position into field-rectangle coordinates.
#[must_use]
pub fn to_field(centered: Point) -> Point {
    Point::new(centered.x + FIELD_WIDTH / 2.0, centered.y + FIELD_HEIGHT / 2.0)
}

/// Converts field-rectangle coordinates back into a centered player position.
#[must_use]
pub fn from_field(field: Point) -> Point {
    Point::new(field.x - FIELD_WIDTH / 2.0, field.y - FIELD_HEIGHT / 2.0)
}

/// On-screen box a crop is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pixels per decimeter.
    pub scale: f64,
}

impl DisplaySize {
    /// Fits the whole pitch to a canvas `width` pixels wide.
    #[must_use]
    pub fn fit_width(width: f64) -> Self {
        Self {
            width,
            height: FIELD_HEIGHT * width / FIELD_WIDTH,
            scale: width / FIELD_WIDTH,
        }
    }

    /// Fits the whole pitch to a canvas `height` pixels tall.
    #[must_use]
    pub fn fit_height(height: f64) -> Self {
        let width = height * FIELD_WIDTH / FIELD_HEIGHT;
        Self {
            width,
            height,
            scale: width / FIELD_WIDTH,
        }
    }

    /// Canvas size as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
