// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delivery of canvas descriptions to a painter that may not be ready yet.

use hashbrown::HashMap;
use huddle_field::CanvasDescription;
use tracing::{error, trace};

use crate::config::RedrawConfig;

/// An immediate-mode painter owning canvas elements by id.
pub trait Surface {
    /// Returns `true` once the canvas `id` exists.
    fn is_attached(&self, id: &str) -> bool;
    /// Clears canvas `description.id` and paints the drawings in order.
    fn paint(&mut self, description: &CanvasDescription);
}

#[derive(Clone, Debug)]
struct Pending {
    op: u64,
    description: CanvasDescription,
    retries: u32,
    due_ms: u64,
}

/// Paints each emission once its canvas is attached, newest first.
///
/// Every [`submit`](Self::submit) gets an increasing operation id. An emission
/// whose canvas is missing is retried on [`tick`](Self::tick) every
/// `interval_ms`, at most `max_attempts` times. A retry is dropped as soon as a
/// newer operation has painted the same canvas.
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    config: RedrawConfig,
    next_op: u64,
    painted: HashMap<String, u64>,
    pending: Vec<Pending>,
}

impl RedrawScheduler {
    /// A scheduler with the given retry policy.
    #[must_use]
    pub fn new(config: RedrawConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Emissions waiting for their canvas.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Last operation painted on canvas `id`.
    #[must_use]
    pub fn last_painted(&self, id: &str) -> Option<u64> {
        self.painted.get(id).copied()
    }

    fn paint(&mut self, surface: &mut dyn Surface, op: u64, description: &CanvasDescription) {
        surface.paint(description);
        self.painted.insert(description.id.clone(), op);
    }

    fn is_stale(&self, op: u64, id: &str) -> bool {
        self.last_painted(id).is_some_and(|last| last >= op)
    }

    /// Paints `description` now if possible, otherwise queues a retry.
    ///
    /// Returns the operation id.
    pub fn submit(
        &mut self,
        description: CanvasDescription,
        surface: &mut dyn Surface,
        now_ms: u64,
    ) -> u64 {
        self.next_op += 1;
        let op = self.next_op;
        if surface.is_attached(&description.id) {
            self.paint(surface, op, &description);
        } else {
            trace!(op, id = %description.id, "canvas not attached, retry queued");
            self.pending.push(Pending {
                op,
                description,
                retries: 0,
                due_ms: now_ms.saturating_add(self.config.interval_ms),
            });
        }
        op
    }

    /// Runs the retries that are due. Returns how many emissions were painted.
    pub fn tick(&mut self, surface: &mut dyn Surface, now_ms: u64) -> usize {
        let mut painted = 0;
        for mut job in core::mem::take(&mut self.pending) {
            if self.is_stale(job.op, &job.description.id) {
                trace!(op = job.op, "retry superseded");
                continue;
            }
            if job.due_ms > now_ms {
                self.pending.push(job);
                continue;
            }
            if surface.is_attached(&job.description.id) {
                self.paint(surface, job.op, &job.description);
                painted += 1;
                continue;
            }
            job.retries += 1;
            if job.retries >= self.config.max_attempts {
                error!(id = %job.description.id, "Canvas element {} not present", job.description.id);
                continue;
            }
            trace!(op = job.op, retries = job.retries, "canvas still missing");
            job.due_ms = now_ms.saturating_add(self.config.interval_ms);
            self.pending.push(job);
        }
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        attached: bool,
        painted: Vec<String>,
    }

    impl Surface for FakeSurface {
        fn is_attached(&self, _: &str) -> bool {
            self.attached
        }

        fn paint(&mut self, description: &CanvasDescription) {
            self.painted.push(description.id.clone());
        }
    }

    fn canvas(id: &str) -> CanvasDescription {
        CanvasDescription {
            id: id.into(),
            drawings: Vec::new(),
        }
    }

    #[test]
    fn attached_canvas_paints_immediately() {
        let mut surface = FakeSurface {
            attached: true,
            ..FakeSurface::default()
        };
        let mut scheduler = RedrawScheduler::new(RedrawConfig::new());
        let op = scheduler.submit(canvas("a"), &mut surface, 0);
        assert_eq!(surface.painted, ["a"]);
        assert_eq!(scheduler.last_painted("a"), Some(op));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn retries_until_attached() {
        let mut surface = FakeSurface::default();
        let mut scheduler = RedrawScheduler::new(RedrawConfig::new());
        scheduler.submit(canvas("a"), &mut surface, 0);
        assert_eq!(scheduler.tick(&mut surface, 20), 0);
        assert_eq!(scheduler.tick(&mut surface, 50), 0);
        surface.attached = true;
        assert_eq!(scheduler.tick(&mut surface, 100), 1);
        assert_eq!(surface.painted, ["a"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn newer_paint_supersedes_a_retry() {
        let mut surface = FakeSurface::default();
        let mut scheduler = RedrawScheduler::new(RedrawConfig::new());
        scheduler.submit(canvas("a"), &mut surface, 0);
        surface.attached = true;
        scheduler.submit(canvas("a"), &mut surface, 10);
        assert_eq!(scheduler.tick(&mut surface, 50), 0);
        assert_eq!(surface.painted, ["a"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut surface = FakeSurface::default();
        let mut scheduler = RedrawScheduler::new(RedrawConfig {
            interval_ms: 10,
            max_attempts: 3,
        });
        scheduler.submit(canvas("a"), &mut surface, 0);
        for now in [10, 20, 30] {
            scheduler.tick(&mut surface, now);
        }
        assert_eq!(scheduler.pending(), 0);
        assert!(surface.painted.is_empty());
    }

    #[test]
    fn retries_near_the_end_of_the_clock_stay_queued() {
        let mut surface = FakeSurface::default();
        let mut scheduler = RedrawScheduler::new(RedrawConfig {
            interval_ms: 50,
            max_attempts: 3,
        });
        scheduler.submit(canvas("a"), &mut surface, u64::MAX - 10);
        assert_eq!(scheduler.tick(&mut surface, u64::MAX - 5), 0);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.tick(&mut surface, u64::MAX), 0);
        assert_eq!(scheduler.pending(), 1);
        surface.attached = true;
        assert_eq!(scheduler.tick(&mut surface, u64::MAX), 1);
        assert_eq!(surface.painted, ["a"]);
    }
}
