// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Holds the latest value until a trigger samples it.
///
/// Values set between two triggers overwrite each other; only the last one is
/// observed. A value that is never triggered has no effect.
///
/// ```
/// use huddle_lens::Latch;
///
/// let mut draft = Latch::new();
/// draft.set("first");
/// draft.set("second");
/// assert_eq!(draft.trigger(), Some("second"));
/// assert_eq!(draft.trigger(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latch<T> {
    value: Option<T>,
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Latch<T> {
    /// Creates an empty latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Takes the held value, leaving the latch empty.
    pub fn trigger(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Looks at the held value without sampling it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Drops the held value without sampling it.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Returns `true` if a value is waiting for a trigger.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_empties_the_latch() {
        let mut latch = Latch::new();
        assert!(!latch.is_primed());
        latch.set(3);
        assert!(latch.is_primed());
        assert_eq!(latch.peek(), Some(&3));
        assert_eq!(latch.trigger(), Some(3));
        assert!(!latch.is_primed());
    }

    #[test]
    fn cleared_value_is_never_observed() {
        let mut latch = Latch::new();
        latch.set("draft");
        latch.clear();
        assert!(!latch.is_primed());
        assert_eq!(latch.trigger(), None);
    }
}
