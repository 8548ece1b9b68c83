// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenses onto individual items of a list, addressed by a stable key.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::error::StoreError;
use crate::lens::Lens;
use crate::reducer::Reducer;
use crate::scope::Scope;

/// A list field of `O` whose items are addressed by a key computed from each
/// item and its position.
///
/// The key function must produce distinct keys; [`keys`](Self::keys) reports a
/// [`StoreError::DuplicateKey`] otherwise. A reducer lifted through
/// [`lift`](Self::lift) can only ever change the item with its own key.
pub struct Keyed<O, T, F> {
    scope: Scope<O, Vec<T>>,
    key_fn: F,
}

impl<O, T, F: Clone> Clone for Keyed<O, T, F> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope,
            key_fn: self.key_fn.clone(),
        }
    }
}

impl<O, T, F> fmt::Debug for Keyed<O, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyed")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<O, T, K, F> Keyed<O, T, F>
where
    F: Fn(&T, usize) -> K,
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Addresses the items of `scope` by `key_fn(item, index)`.
    pub fn new(scope: Scope<O, Vec<T>>, key_fn: F) -> Self {
        Self { scope, key_fn }
    }

    /// Keys of all items, in list order.
    pub fn keys(&self, outer: &O) -> Result<Vec<K>, StoreError> {
        let items = self.scope.view(outer);
        let mut seen = HashSet::with_capacity(items.len());
        let mut keys = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let key = (self.key_fn)(item, index);
            if !seen.insert(key.clone()) {
                return Err(StoreError::DuplicateKey {
                    scope: self.scope.name(),
                    key: format!("{key:?}"),
                });
            }
            keys.push(key);
        }
        Ok(keys)
    }

    /// Position of the item with `key`.
    pub fn position(&self, outer: &O, key: &K) -> Result<usize, StoreError> {
        self.scope
            .view(outer)
            .iter()
            .enumerate()
            .position(|(index, item)| (self.key_fn)(item, index) == *key)
            .ok_or_else(|| StoreError::MissingKey {
                scope: self.scope.name(),
                key: format!("{key:?}"),
            })
    }

    /// Lens onto the single item with `key`.
    pub fn at(&self, key: K) -> KeyedLens<O, T, K, F>
    where
        F: Clone,
    {
        KeyedLens {
            keyed: self.clone(),
            key,
        }
    }

    /// Lifts a reducer of one item into a reducer of the parent.
    ///
    /// The lifted reducer fails with [`StoreError::MissingKey`] if the item is gone
    /// by the time it runs.
    pub fn lift(&self, key: K, reducer: Reducer<T>) -> Reducer<O>
    where
        O: Clone + 'static,
        T: Clone + 'static,
        K: 'static,
        F: Clone + 'static,
    {
        reducer.lift(self.at(key))
    }

    /// Builds one output per item, in list order.
    pub fn map_items<R>(
        &self,
        outer: &O,
        mut f: impl FnMut(&K, &T) -> Result<R, StoreError>,
    ) -> Result<Vec<R>, StoreError> {
        let keys = self.keys(outer)?;
        keys.iter()
            .zip(self.scope.view(outer))
            .map(|(key, item)| f(key, item))
            .collect()
    }
}

/// Lens onto one item of a [`Keyed`] list. See [`Keyed::at`].
pub struct KeyedLens<O, T, K, F> {
    keyed: Keyed<O, T, F>,
    key: K,
}

impl<O, T, K: fmt::Debug, F> fmt::Debug for KeyedLens<O, T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedLens")
            .field("keyed", &self.keyed)
            .field("key", &self.key)
            .finish()
    }
}

impl<O, T, K, F> KeyedLens<O, T, K, F> {
    /// Key this lens addresses.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<O, T, K, F> Lens<O> for KeyedLens<O, T, K, F>
where
    T: Clone,
    F: Fn(&T, usize) -> K,
    K: Eq + Hash + Clone + fmt::Debug,
{
    type Inner = T;

    fn get(&self, outer: &O) -> Result<T, StoreError> {
        let index = self.keyed.position(outer, &self.key)?;
        Ok(self.keyed.scope.view(outer)[index].clone())
    }

    fn set(&self, outer: &mut O, inner: T) -> Result<(), StoreError> {
        let index = self.keyed.position(outer, &self.key)?;
        self.keyed.scope.view_mut(outer)[index] = inner;
        Ok(())
    }
}
