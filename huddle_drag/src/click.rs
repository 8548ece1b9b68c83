// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-click recognition from raw releases.
//!
//! Browsers deliver `dblclick` on their own; other hosts only report presses and
//! releases. Feed each release into [`ClickTracker::on_release`] with a
//! millisecond timestamp: two releases close enough in time and space form a
//! [`ClickKind::Double`].
//!
//! ```
//! use kurbo::Point;
//! use huddle_drag::click::{ClickKind, ClickTracker};
//!
//! let mut clicks = ClickTracker::new();
//! assert_eq!(clicks.on_release(Point::new(10.0, 10.0), 1_000), ClickKind::Single);
//! assert_eq!(clicks.on_release(Point::new(12.0, 11.0), 1_300), ClickKind::Double);
//! // The pair is consumed; a third release starts over.
//! assert_eq!(clicks.on_release(Point::new(12.0, 11.0), 1_400), ClickKind::Single);
//! ```

use kurbo::Point;

/// Longest gap between the two releases of a double click.
pub const DOUBLE_CLICK_MS: u64 = 500;
/// Largest distance between the two releases of a double click, in pixels.
pub const DOUBLE_CLICK_SLOP: f64 = 4.0;

/// Classification of a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickKind {
    /// First release, or one too far from the previous.
    Single,
    /// Second release within the time and distance tolerance.
    Double,
}

/// Recognizes double clicks.
#[derive(Clone, Copy, Debug)]
pub struct ClickTracker {
    interval_ms: u64,
    slop: f64,
    last: Option<(Point, u64)>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::with_tolerance(DOUBLE_CLICK_MS, DOUBLE_CLICK_SLOP)
    }
}

impl ClickTracker {
    /// Creates a tracker with the default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with custom tolerances.
    #[must_use]
    pub fn with_tolerance(interval_ms: u64, slop: f64) -> Self {
        Self {
            interval_ms,
            slop,
            last: None,
        }
    }

    /// Classifies a release at `position`, observed at `now_ms`.
    pub fn on_release(&mut self, position: Point, now_ms: u64) -> ClickKind {
        if let Some((prev, at)) = self.last
            && now_ms.saturating_sub(at) <= self.interval_ms
            && prev.distance(position) <= self.slop
        {
            self.last = None;
            return ClickKind::Double;
        }
        self.last = Some((position, now_ms));
        ClickKind::Single
    }

    /// Forgets the pending first click.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
