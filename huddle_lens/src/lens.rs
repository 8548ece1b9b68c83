// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed get/set accessor pairs.

use core::fmt;
use core::marker::PhantomData;

use crate::error::StoreError;

/// A structural view of an `Outer` value as an [`Inner`](Lens::Inner) value.
///
/// A lens does not own anything. [`get`](Lens::get) builds the inner value from
/// the outer one; [`set`](Lens::set) writes an inner value back, preserving every
/// part of the outer value it does not cover.
///
/// Lenses are expected to round-trip: setting what was just read leaves the
/// outer value unchanged, and reading what was just set returns it. This is not
/// checked at runtime.
pub trait Lens<Outer> {
    /// The narrowed view.
    type Inner;

    /// Projects the inner value out of `outer`.
    fn get(&self, outer: &Outer) -> Result<Self::Inner, StoreError>;

    /// Writes `inner` back into `outer`.
    fn set(&self, outer: &mut Outer, inner: Self::Inner) -> Result<(), StoreError>;

    /// Reads, transforms, and writes back in one step.
    fn modify<F>(&self, outer: &mut Outer, f: F) -> Result<(), StoreError>
    where
        Self: Sized,
        F: FnOnce(&mut Self::Inner),
    {
        let mut inner = self.get(outer)?;
        f(&mut inner);
        self.set(outer, inner)
    }

    /// Focuses further through `next`.
    fn then<L>(self, next: L) -> Compose<Self, L>
    where
        Self: Sized,
        L: Lens<Self::Inner>,
    {
        Compose { outer: self, inner: next }
    }
}

impl<Outer, L: Lens<Outer> + ?Sized> Lens<Outer> for &L {
    type Inner = L::Inner;

    fn get(&self, outer: &Outer) -> Result<Self::Inner, StoreError> {
        (**self).get(outer)
    }

    fn set(&self, outer: &mut Outer, inner: Self::Inner) -> Result<(), StoreError> {
        (**self).set(outer, inner)
    }
}

/// Lens built from a pair of total functions. See [`lens`].
pub struct FnLens<O, I, G, S> {
    get: G,
    set: S,
    _marker: PhantomData<fn(&O) -> I>,
}

/// Creates a lens from total `get` and `set` functions.
pub fn lens<O, I, G, S>(get: G, set: S) -> FnLens<O, I, G, S>
where
    G: Fn(&O) -> I,
    S: Fn(&mut O, I),
{
    FnLens {
        get,
        set,
        _marker: PhantomData,
    }
}

impl<O, I, G, S> Lens<O> for FnLens<O, I, G, S>
where
    G: Fn(&O) -> I,
    S: Fn(&mut O, I),
{
    type Inner = I;

    fn get(&self, outer: &O) -> Result<I, StoreError> {
        Ok((self.get)(outer))
    }

    fn set(&self, outer: &mut O, inner: I) -> Result<(), StoreError> {
        (self.set)(outer, inner);
        Ok(())
    }
}

impl<O, I, G: Clone, S: Clone> Clone for FnLens<O, I, G, S> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O, I, G, S> fmt::Debug for FnLens<O, I, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLens").finish_non_exhaustive()
    }
}

/// Lens built from a pair of fallible functions. See [`try_lens`].
pub struct TryLens<O, I, G, S> {
    get: G,
    set: S,
    _marker: PhantomData<fn(&O) -> I>,
}

/// Creates a lens whose `get` and `set` may fail, e.g. on a malformed state.
pub fn try_lens<O, I, G, S>(get: G, set: S) -> TryLens<O, I, G, S>
where
    G: Fn(&O) -> Result<I, StoreError>,
    S: Fn(&mut O, I) -> Result<(), StoreError>,
{
    TryLens {
        get,
        set,
        _marker: PhantomData,
    }
}

impl<O, I, G, S> Lens<O> for TryLens<O, I, G, S>
where
    G: Fn(&O) -> Result<I, StoreError>,
    S: Fn(&mut O, I) -> Result<(), StoreError>,
{
    type Inner = I;

    fn get(&self, outer: &O) -> Result<I, StoreError> {
        (self.get)(outer)
    }

    fn set(&self, outer: &mut O, inner: I) -> Result<(), StoreError> {
        (self.set)(outer, inner)
    }
}

impl<O, I, G: Clone, S: Clone> Clone for TryLens<O, I, G, S> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O, I, G, S> fmt::Debug for TryLens<O, I, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryLens").finish_non_exhaustive()
    }
}

/// Two lenses applied one after the other. See [`Lens::then`].
#[derive(Clone, Debug)]
pub struct Compose<A, B> {
    outer: A,
    inner: B,
}

impl<O, A, B> Lens<O> for Compose<A, B>
where
    A: Lens<O>,
    B: Lens<A::Inner>,
{
    type Inner = B::Inner;

    fn get(&self, outer: &O) -> Result<B::Inner, StoreError> {
        self.inner.get(&self.outer.get(outer)?)
    }

    fn set(&self, outer: &mut O, inner: B::Inner) -> Result<(), StoreError> {
        let mut middle = self.outer.get(outer)?;
        self.inner.set(&mut middle, inner)?;
        self.outer.set(outer, middle)
    }
}

/// The lens that sees the whole value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T: Clone> Lens<T> for Identity {
    type Inner = T;

    fn get(&self, outer: &T) -> Result<T, StoreError> {
        Ok(outer.clone())
    }

    fn set(&self, outer: &mut T, inner: T) -> Result<(), StoreError> {
        *outer = inner;
        Ok(())
    }
}

/// Lens onto the element at a fixed 0-based index of a `Vec`.
#[derive(Clone, Copy, Debug)]
pub struct Index {
    scope: &'static str,
    index: usize,
}

impl Index {
    /// Creates a lens onto `items[index]`; `scope` names the list in errors.
    #[must_use]
    pub fn new(scope: &'static str, index: usize) -> Self {
        Self { scope, index }
    }
}

impl<T: Clone> Lens<Vec<T>> for Index {
    type Inner = T;

    fn get(&self, outer: &Vec<T>) -> Result<T, StoreError> {
        outer.get(self.index).cloned().ok_or(StoreError::IndexOutOfRange {
            scope: self.scope,
            index: self.index,
            len: outer.len(),
        })
    }

    fn set(&self, outer: &mut Vec<T>, inner: T) -> Result<(), StoreError> {
        let len = outer.len();
        let slot = outer.get_mut(self.index).ok_or(StoreError::IndexOutOfRange {
            scope: self.scope,
            index: self.index,
            len,
        })?;
        *slot = inner;
        Ok(())
    }
}
