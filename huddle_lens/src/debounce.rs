// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::trace;

/// Coalesces a burst of values into the last one, once the burst goes quiet.
///
/// Time is passed in explicitly as milliseconds, so callers decide which clock
/// drives it. Each [`push`](Self::push) restarts the window.
///
/// ```
/// use huddle_lens::Debounce;
///
/// let mut typing = Debounce::new(250);
/// typing.push("h", 0);
/// typing.push("he", 100);
/// assert_eq!(typing.poll(300), None); // 200 ms after the last key
/// assert_eq!(typing.poll(350), Some("he"));
/// assert_eq!(typing.poll(1_000), None);
/// ```
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    window_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    /// Creates a debouncer with a quiet window of `window_ms`.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    /// Quiet window in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Records `value`, observed at `now_ms`, replacing any pending value.
    pub fn push(&mut self, value: T, now_ms: u64) {
        let deadline = now_ms.saturating_add(self.window_ms);
        trace!(deadline, "debounce restarted");
        self.pending = Some((value, deadline));
    }

    /// Emits the pending value once its window has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Emits the pending value immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    /// When the pending value will be emitted, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    /// Drops the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_ignores_the_window() {
        let mut d = Debounce::new(250);
        d.push(1, 0);
        assert_eq!(d.deadline(), Some(250));
        assert_eq!(d.flush(), Some(1));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn each_push_restarts_the_window() {
        let mut d = Debounce::new(250);
        d.push('a', 0);
        d.push('b', 200);
        assert_eq!(d.poll(250), None);
        assert_eq!(d.poll(450), Some('b'));
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut d = Debounce::new(10);
        d.push((), 0);
        d.cancel();
        assert_eq!(d.poll(100), None);
    }
}
