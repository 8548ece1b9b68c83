// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Huddle Field: geometry of an Ultimate field and its on-screen crops.
//!
//! Player positions are stored in **centered field space**: decimeters with the
//! origin at the middle of the pitch, `x` across and `y` along its length. The
//! canonical pitch is 380 × 1000 decimeters with a 180 decimeter end zone at each
//! end. This crate maps between three spaces:
//!
//! - Centered field space (what a tactic stores).
//! - Field-rectangle space: the same decimeters with the origin at the top-left
//!   corner of the pitch ([`to_field`] / [`from_field`]).
//! - Canvas space: device pixels of the crop currently shown, as described by a
//!   [`FieldType`] and computed by a [`FieldMapper`].
//!
//! It does **not** paint anything. The mapper produces [`Drawing`] primitives that
//! an external immediate-mode painter clears and redraws on every emission.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use huddle_field::{FieldMapper, FieldType};
//!
//! let mapper = FieldMapper::new(FieldType::Middle);
//!
//! // The center of the pitch lands in the middle of the canvas.
//! let canvas = mapper.project(Point::ZERO).unwrap();
//! let size = mapper.display_size();
//! assert!((canvas.x - size.width / 2.0).abs() < 1e-9);
//! assert!((canvas.y - size.height / 2.0).abs() < 1e-9);
//!
//! // A pointer at that pixel resolves back to the center.
//! let back = mapper.pick(canvas, size.width).unwrap();
//! assert!(back.x.abs() < 1e-9 && back.y.abs() < 1e-9);
//!
//! // End-zone players are not part of the middle crop.
//! assert!(mapper.project(Point::new(0.0, -450.0)).is_none());
//! ```
//!
//! ## Scale
//!
//! Every crop is shown at the same canvas height; narrower crops get a larger
//! scale factor. Border thickness, player radius, and pointer conversion all use
//! that one factor, so a marker drawn at a position is also the marker a click at
//! that position resolves to.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drawing;
mod field_type;
mod geometry;
mod mapper;

pub use drawing::{CanvasDescription, CircleShape, Drawing, RectShape};
pub use field_type::FieldType;
pub use geometry::{
    DEFAULT_DISPLAY_HEIGHT, DisplaySize, FIELD_HEIGHT, FIELD_WIDTH, ZONE_HEIGHT, field_rect,
    from_field, to_field,
};
pub use mapper::{FieldMapper, MarkerStyle, hit_test};
