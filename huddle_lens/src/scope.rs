// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named-field lenses.

use core::fmt;

use crate::error::StoreError;
use crate::lens::Lens;

/// Lens onto a single named field of a parent state.
///
/// Build one with the [`scope!`](crate::scope!) macro. Unlike a general lens, a
/// scope can also lend the field by reference through [`view`](Self::view) and
/// [`view_mut`](Self::view_mut).
pub struct Scope<O, I> {
    name: &'static str,
    get: fn(&O) -> &I,
    get_mut: fn(&mut O) -> &mut I,
}

impl<O, I> Scope<O, I> {
    /// Creates a scope from field accessors.
    #[must_use]
    pub const fn new(name: &'static str, get: fn(&O) -> &I, get_mut: fn(&mut O) -> &mut I) -> Self {
        Self { name, get, get_mut }
    }

    /// Name of the field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Borrows the field.
    pub fn view<'a>(&self, outer: &'a O) -> &'a I {
        (self.get)(outer)
    }

    /// Mutably borrows the field.
    pub fn view_mut<'a>(&self, outer: &'a mut O) -> &'a mut I {
        (self.get_mut)(outer)
    }
}

impl<O, I> Clone for Scope<O, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, I> Copy for Scope<O, I> {}

impl<O, I> fmt::Debug for Scope<O, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scope").field(&self.name).finish()
    }
}

impl<O, I: Clone> Lens<O> for Scope<O, I> {
    type Inner = I;

    fn get(&self, outer: &O) -> Result<I, StoreError> {
        Ok(self.view(outer).clone())
    }

    fn set(&self, outer: &mut O, inner: I) -> Result<(), StoreError> {
        *self.view_mut(outer) = inner;
        Ok(())
    }
}

/// Builds a [`Scope`] onto `field` of `Type`.
///
/// ```
/// use huddle_lens::{Lens, scope};
///
/// #[derive(Clone)]
/// struct Tactic {
///     description: String,
///     height: f64,
/// }
///
/// let height = scope!(Tactic, height);
/// let mut t = Tactic { description: "stack".into(), height: 1.0 };
/// height.set(&mut t, 1.25).unwrap();
/// assert_eq!(t.height, 1.25);
/// assert_eq!(t.description, "stack");
/// assert_eq!(height.name(), "height");
/// ```
#[macro_export]
macro_rules! scope {
    ($outer:ty, $field:ident) => {
        $crate::Scope::<$outer, _>::new(
            ::core::stringify!($field),
            |outer| &outer.$field,
            |outer| &mut outer.$field,
        )
    };
}
