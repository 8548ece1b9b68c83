// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Huddle Drag: pointer gesture state for the field editor.
//!
//! This crate provides two small state machines that turn low-level pointer
//! events into discrete editor intents:
//!
//! - [`drag`]: press/move/release sequencing for draggable items. Moves produce
//!   live position updates for visual feedback; only the release (or the
//!   pointer leaving the surface) produces a commit.
//! - [`click`]: double-click recognition with spatial and temporal tolerance,
//!   for hosts that only deliver raw presses and releases.
//!
//! Neither machine knows how positions were obtained. Callers convert pointer
//! pixels to field coordinates first (see `huddle_field`) and hand the results in.
//!
//! ## Drag sessions
//!
//! ```rust
//! use kurbo::Point;
//! use huddle_drag::drag::{DragController, DragPhase};
//!
//! let mut drag = DragController::new();
//!
//! // Grab player 7, anchored at the origin, exactly at its center.
//! drag.press(7_u32, Point::ZERO, Point::ZERO);
//! assert_eq!(drag.phase(), DragPhase::Armed);
//!
//! // Moves are live feedback only.
//! let live = drag.move_to(Point::new(10.0, 5.0)).unwrap();
//! assert_eq!(live.position, Point::new(10.0, 5.0));
//! drag.move_to(Point::new(3.0, -2.0));
//!
//! // Release commits the last live position, once.
//! let commit = drag.release().unwrap();
//! assert_eq!((commit.id, commit.position), (7, Point::new(3.0, -2.0)));
//! assert_eq!(drag.phase(), DragPhase::Idle);
//! assert!(drag.release().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
