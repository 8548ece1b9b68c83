// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: turn press/move/release into live updates and a single commit.
//!
//! ## Usage
//!
//! 1) On a press that hit a draggable item, call [`DragController::press`] with the
//!    item's id, its current anchor, and the pointer position.
//! 2) On each move, call [`DragController::move_to`] and forward the returned
//!    [`DragUpdate`] to whatever paints feedback. It never touches committed state.
//! 3) On release, call [`DragController::release`]; on the pointer leaving the
//!    surface, call [`DragController::leave`]. Both end the session and return the
//!    commit, if the item was actually moved.
//!
//! All positions share one coordinate space chosen by the caller. The grab offset
//! (pointer minus anchor) is kept for the whole session so the item does not jump
//! under the pointer.

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

/// Where a [`DragController`] is in its press/move/release cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No session.
    #[default]
    Idle,
    /// Pressed on an item, not moved yet.
    Armed,
    /// At least one move since the press.
    Dragging,
}

/// Position of a dragged item.
///
/// Returned both for live feedback and for the final commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate<K> {
    /// Dragged item.
    pub id: K,
    /// New anchor position of the item.
    pub position: Point,
}

#[derive(Clone, Debug)]
struct Session<K> {
    id: K,
    grab_offset: Vec2,
    last_pos: Option<Point>,
}

/// Drag state machine for one interactive surface.
///
/// At most one session exists at a time. The session is destroyed
/// unconditionally by [`release`](Self::release) or [`leave`](Self::leave).
#[derive(Clone, Debug)]
pub struct DragController<K> {
    session: Option<Session<K>>,
}

impl<K> Default for DragController<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K: Clone + core::fmt::Debug> DragController<K> {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `id`, whose anchor is at `anchor`, grabbed at `pointer`.
    ///
    /// A press while another session is active replaces it without committing. The
    /// id of the abandoned session is returned so callers can drop its feedback.
    pub fn press(&mut self, id: K, anchor: Point, pointer: Point) -> Option<K> {
        let abandoned = self.session.take().map(|s| {
            debug!(id = ?s.id, "drag abandoned by a new press");
            s.id
        });
        debug!(id = ?id, "drag armed");
        self.session = Some(Session {
            id,
            grab_offset: pointer - anchor,
            last_pos: None,
        });
        abandoned
    }

    /// Records a pointer move and returns the live position of the dragged item.
    ///
    /// Returns `None` when no session is active.
    pub fn move_to(&mut self, pointer: Point) -> Option<DragUpdate<K>> {
        let session = self.session.as_mut()?;
        let position = pointer - session.grab_offset;
        if session.last_pos.is_none() {
            debug!(id = ?session.id, "dragging");
        }
        trace!(id = ?session.id, x = position.x, y = position.y, "drag move");
        session.last_pos = Some(position);
        Some(DragUpdate {
            id: session.id.clone(),
            position,
        })
    }

    /// Ends the session on pointer release.
    ///
    /// Returns the commit for the last live position, or `None` when nothing was
    /// being dragged or the item never moved.
    pub fn release(&mut self) -> Option<DragUpdate<K>> {
        let session = self.session.take()?;
        debug!(id = ?session.id, moved = session.last_pos.is_some(), "drag ended");
        let position = session.last_pos?;
        Some(DragUpdate {
            id: session.id,
            position,
        })
    }

    /// Ends the session because the pointer left the surface.
    ///
    /// Behaves exactly like [`release`](Self::release).
    pub fn leave(&mut self) -> Option<DragUpdate<K>> {
        self.release()
    }

    /// Live position of the dragged item, if it has moved since the press.
    #[must_use]
    pub fn live(&self) -> Option<DragUpdate<K>> {
        let session = self.session.as_ref()?;
        session.last_pos.map(|position| DragUpdate {
            id: session.id.clone(),
            position,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(Session { last_pos: None, .. }) => DragPhase::Armed,
            Some(_) => DragPhase::Dragging,
        }
    }

    /// Id of the item in the active session.
    #[must_use]
    pub fn active_id(&self) -> Option<&K> {
        self.session.as_ref().map(|s| &s.id)
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_controller_is_idle() {
        let drag = DragController::<u32>::new();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(drag.active_id().is_none());
        assert!(drag.live().is_none());
    }

    #[test]
    fn press_arms_without_live_position() {
        let mut drag = DragController::new();
        assert_eq!(drag.press(1_u32, Point::ZERO, Point::ZERO), None);
        assert_eq!(drag.phase(), DragPhase::Armed);
        assert_eq!(drag.active_id(), Some(&1));
        assert!(drag.live().is_none());
    }

    #[test]
    fn moves_are_relative_to_the_grab_offset() {
        let mut drag = DragController::new();
        // Grabbed 4 right and 2 below the anchor.
        drag.press(1_u32, Point::new(10.0, 10.0), Point::new(14.0, 12.0));

        let update = drag.move_to(Point::new(24.0, 32.0)).unwrap();
        assert_eq!(update.position, Point::new(20.0, 30.0));
        assert_eq!(drag.phase(), DragPhase::Dragging);
        assert_eq!(drag.live(), Some(update));
    }

    #[test]
    fn only_release_commits() {
        let mut drag = DragController::new();
        drag.press(9_u32, Point::ZERO, Point::ZERO);

        let mut commits = 0;
        for p in [Point::new(10.0, 5.0), Point::new(3.0, -2.0)] {
            assert!(drag.move_to(p).is_some());
        }
        if let Some(commit) = drag.release() {
            commits += 1;
            assert_eq!(commit.id, 9);
            assert_eq!(commit.position, Point::new(3.0, -2.0));
        }
        assert!(drag.release().is_none());
        assert_eq!(commits, 1);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_without_move_does_not_commit() {
        let mut drag = DragController::new();
        drag.press(1_u32, Point::ZERO, Point::ZERO);
        assert!(drag.release().is_none());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn leave_commits_like_release() {
        let mut drag = DragController::new();
        drag.press(1_u32, Point::ZERO, Point::new(1.0, 1.0));
        drag.move_to(Point::new(6.0, 6.0));
        let commit = drag.leave().unwrap();
        assert_eq!(commit.position, Point::new(5.0, 5.0));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn new_press_replaces_the_previous_session() {
        let mut drag = DragController::new();
        drag.press(1_u32, Point::ZERO, Point::ZERO);
        drag.move_to(Point::new(50.0, 50.0));

        let abandoned = drag.press(2, Point::new(100.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(abandoned, Some(1));
        assert_eq!(drag.phase(), DragPhase::Armed);

        drag.move_to(Point::new(110.0, 90.0));
        let commit = drag.release().unwrap();
        assert_eq!(commit.id, 2);
        assert_eq!(commit.position, Point::new(110.0, 90.0));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut drag = DragController::<u32>::new();
        assert!(drag.move_to(Point::new(1.0, 1.0)).is_none());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }
}
