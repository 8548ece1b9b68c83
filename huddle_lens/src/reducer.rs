// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State transitions as values.

use core::fmt;

use crate::error::StoreError;
use crate::lens::Lens;

type ReduceFn<S> = Box<dyn FnOnce(&S) -> Result<S, StoreError>>;

/// A pure, labelled transition from one state to the next.
///
/// A reducer sees the latest committed state and either returns the next one or
/// fails; it never mutates its input. The label shows up in logs and in
/// [`StoreError::Rejected`].
pub struct Reducer<S> {
    label: &'static str,
    f: ReduceFn<S>,
}

impl<S> fmt::Debug for Reducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<S: 'static> Reducer<S> {
    /// Wraps a state transition.
    pub fn new(
        label: &'static str,
        f: impl FnOnce(&S) -> Result<S, StoreError> + 'static,
    ) -> Self {
        Self {
            label,
            f: Box::new(f),
        }
    }

    /// Transition that mutates a copy of the state in place.
    pub fn update(label: &'static str, f: impl FnOnce(&mut S) + 'static) -> Self
    where
        S: Clone,
    {
        Self::new(label, move |state| {
            let mut next = state.clone();
            f(&mut next);
            Ok(next)
        })
    }

    /// Like [`update`](Self::update), but the mutation may refuse.
    ///
    /// On refusal the copy is discarded, so a partial mutation is never observed.
    pub fn try_update(
        label: &'static str,
        f: impl FnOnce(&mut S) -> Result<(), StoreError> + 'static,
    ) -> Self
    where
        S: Clone,
    {
        Self::new(label, move |state| {
            let mut next = state.clone();
            f(&mut next)?;
            Ok(next)
        })
    }

    /// Label given at construction.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Runs the transition against `state`.
    pub fn apply(self, state: &S) -> Result<S, StoreError> {
        (self.f)(state)
    }

    /// Lifts this reducer through `lens`, producing a reducer of the outer state.
    ///
    /// The outer fields the lens does not cover are carried over untouched.
    pub fn lift<O, L>(self, lens: L) -> Reducer<O>
    where
        O: Clone + 'static,
        L: Lens<O, Inner = S> + 'static,
    {
        let label = self.label;
        Reducer::new(label, move |outer| {
            let inner = lens.get(outer)?;
            let next = self.apply(&inner)?;
            let mut out = outer.clone();
            lens.set(&mut out, next)?;
            Ok(out)
        })
    }
}
