// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Vec2};

use crate::drawing::{CircleShape, Drawing, RectShape};
use crate::field_type::FieldType;
use crate::geometry::{
    DEFAULT_DISPLAY_HEIGHT, DisplaySize, FIELD_HEIGHT, FIELD_WIDTH, ZONE_HEIGHT, from_field,
    to_field,
};

/// Outline width of an unselected marker, in pixels.
const MARKER_STROKE: f64 = 1.0;
/// Outline width of the selected marker, in pixels.
const SELECTED_MARKER_STROKE: f64 = 3.0;
const BORDER_COLOR: &str = "black";

/// Player marker sizing, in decimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Marker radius.
    pub radius: f64,
    /// Border line thickness.
    pub border_width: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 17.0,
            border_width: 5.0,
        }
    }
}

/// Coordinate mapping for one crop of the pitch.
///
/// `FieldMapper` is a pure value: it is rebuilt whenever the crop or the display
/// height changes and holds no other state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMapper {
    field_type: FieldType,
    view_port: Rect,
    display: DisplaySize,
}

impl FieldMapper {
    /// Creates a mapper for `field_type` at the default display height.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self::with_display_height(field_type, DEFAULT_DISPLAY_HEIGHT)
    }

    /// Creates a mapper for `field_type` shown `display_height` pixels tall.
    #[must_use]
    pub fn with_display_height(field_type: FieldType, display_height: f64) -> Self {
        Self {
            field_type,
            view_port: field_type.view_port(),
            display: field_type.display_size_for(display_height),
        }
    }

    /// Crop this mapper was built for.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Visible part of the pitch, in field-rectangle coordinates.
    #[must_use]
    pub fn view_port(&self) -> Rect {
        self.view_port
    }

    /// Canvas size and scale.
    #[must_use]
    pub fn display_size(&self) -> DisplaySize {
        self.display
    }

    /// Scales a length in decimeters to pixels.
    #[must_use]
    pub fn scaled(&self, decimeters: f64) -> f64 {
        decimeters * self.display.scale
    }

    /// Converts a field-rectangle point into canvas pixels, without bounds checks.
    #[must_use]
    pub fn field_to_canvas(&self, field: Point) -> Point {
        let local = field - self.view_port.origin();
        (local * self.display.scale).to_point()
    }

    /// Converts a canvas pixel into field-rectangle coordinates, without bounds checks.
    ///
    /// `canvas_width` is the actual pixel width of the canvas element the pointer
    /// event came from. It corrects for canvases laid out at a different size than
    /// the one requested.
    #[must_use]
    pub fn canvas_to_field(&self, canvas: Point, canvas_width: f64) -> Point {
        self.canvas_to_local(canvas, canvas_width).to_point() + self.view_port.origin().to_vec2()
    }

    /// Projects a centered player position onto the canvas.
    ///
    /// Returns `None` when the position is outside this crop.
    #[must_use]
    pub fn project(&self, player: Point) -> Option<Point> {
        let local = to_field(player) - self.view_port.origin();
        if self.contains_local(local) {
            Some((local * self.display.scale).to_point())
        } else {
            None
        }
    }

    /// Converts a pointer position into a centered player position, without bounds checks.
    ///
    /// Used for pointer moves during a drag, which may leave the canvas.
    #[must_use]
    pub fn unproject(&self, canvas: Point, canvas_width: f64) -> Point {
        from_field(self.canvas_to_field(canvas, canvas_width))
    }

    /// Converts a pointer position into a centered player position.
    ///
    /// Returns `None` for pointer positions outside the visible crop, so a press
    /// there can never resolve to a player.
    #[must_use]
    pub fn pick(&self, canvas: Point, canvas_width: f64) -> Option<Point> {
        let local = self.canvas_to_local(canvas, canvas_width);
        if self.contains_local(local) {
            Some(from_field(local.to_point() + self.view_port.origin().to_vec2()))
        } else {
            None
        }
    }

    /// Border rectangles (pitch outline, then the playing proper), scaled to this crop.
    #[must_use]
    pub fn borders(&self, style: &MarkerStyle) -> [Drawing; 2] {
        let outline = Rect::new(1.0, 1.0, FIELD_WIDTH - 1.0, FIELD_HEIGHT - 1.0);
        let proper = Rect::new(1.0, ZONE_HEIGHT, FIELD_WIDTH, FIELD_HEIGHT - ZONE_HEIGHT);
        [outline, proper].map(|r| {
            let origin = self.field_to_canvas(r.origin());
            Drawing::Rect(RectShape {
                x: origin.x,
                y: origin.y,
                width: self.scaled(r.width()),
                height: self.scaled(r.height()),
                color: String::from(BORDER_COLOR),
                stroke_width: self.scaled(style.border_width),
            })
        })
    }

    /// Marker for a player at `player`, or `None` if it is outside this crop.
    #[must_use]
    pub fn marker(
        &self,
        player: Point,
        color: &str,
        selected: bool,
        style: &MarkerStyle,
    ) -> Option<Drawing> {
        let center = self.project(player)?;
        Some(Drawing::Circle(CircleShape {
            x: center.x,
            y: center.y,
            radius: self.scaled(style.radius),
            color: String::from(color),
            stroke_width: if selected {
                SELECTED_MARKER_STROKE
            } else {
                MARKER_STROKE
            },
        }))
    }

    fn canvas_to_local(&self, canvas: Point, canvas_width: f64) -> Vec2 {
        let canvas_width = if canvas_width > 0.0 {
            canvas_width
        } else {
            self.display.width
        };
        let factor = canvas_width / self.view_port.width();
        canvas.to_vec2() / factor
    }

    fn contains_local(&self, local: Vec2) -> bool {
        (0.0..=self.view_port.width()).contains(&local.x)
            && (0.0..=self.view_port.height()).contains(&local.y)
    }
}

/// Returns the first player within `tolerance` decimeters of `position` on both axes.
///
/// Positions are centered field coordinates.
pub fn hit_test<K, I>(position: Point, tolerance: f64, players: I) -> Option<K>
where
    I: IntoIterator<Item = (K, Point)>,
{
    players.into_iter().find_map(|(key, p)| {
        ((p.x - position.x).abs() <= tolerance && (p.y - position.y).abs() <= tolerance)
            .then_some(key)
    })
}
