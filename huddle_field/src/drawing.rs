// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};

/// Stroked rectangle, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RectShape {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// CSS stroke color.
    pub color: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl RectShape {
    /// Geometry as a [`Rect`].
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Filled, outlined disc, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CircleShape {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius.
    pub radius: f64,
    /// CSS fill color.
    pub color: String,
    /// Outline width in pixels.
    pub stroke_width: f64,
}

impl CircleShape {
    /// Geometry as a [`Circle`].
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(Point::new(self.x, self.y), self.radius)
    }
}

/// One primitive of a canvas description.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Drawing {
    /// Stroked rectangle.
    Rect(RectShape),
    /// Player marker.
    Circle(CircleShape),
}

impl Drawing {
    /// Returns the circle, if this is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&CircleShape> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Rect(_) => None,
        }
    }

    /// Returns the rectangle, if this is one.
    #[must_use]
    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            Self::Rect(r) => Some(r),
            Self::Circle(_) => None,
        }
    }
}

/// Everything a painter needs to redraw one canvas element.
///
/// Drawings are painted in order, so earlier entries end up below later ones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasDescription {
    /// Id of the target canvas element.
    pub id: String,
    /// Primitives, bottom first.
    pub drawings: Vec<Drawing>,
}

impl CanvasDescription {
    /// Number of player markers in the description.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.drawings.iter().filter(|d| d.as_circle().is_some()).count()
    }
}
