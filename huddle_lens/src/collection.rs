// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of per-key component instances.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use tracing::debug;

/// Keys added and removed by one [`Collection::reconcile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled<K> {
    /// Keys that got a fresh instance, in list order.
    pub added: Vec<K>,
    /// Keys whose instance was dropped.
    pub removed: Vec<K>,
}

impl<K> Reconciled<K> {
    /// Returns `true` when the key set did not change.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Component instances addressed by a stable key, kept in list order.
///
/// Each key owns exactly one instance. [`reconcile`](Self::reconcile) brings the
/// arena in line with a new key list: instances of keys that stay are kept
/// (with whatever transient state they hold), new keys get a fresh instance,
/// and instances of vanished keys are dropped.
pub struct Collection<K, C> {
    order: Vec<K>,
    items: HashMap<K, C>,
}

impl<K: fmt::Debug, C> fmt::Debug for Collection<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("order", &self.order)
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<K, C> Default for Collection<K, C> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + fmt::Debug, C> Collection<K, C> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in list order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Instance for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&C> {
        self.items.get(key)
    }

    /// Mutable instance for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut C> {
        self.items.get_mut(key)
    }

    /// Appends an instance, or replaces the instance already under `key`.
    pub fn insert(&mut self, key: K, item: C) -> Option<C> {
        let previous = self.items.insert(key.clone(), item);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Removes the instance under `key`.
    pub fn remove(&mut self, key: &K) -> Option<C> {
        let removed = self.items.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    /// Instances in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> + '_ {
        self.order
            .iter()
            .filter_map(|k| self.items.get(k).map(|c| (k, c)))
    }

    /// Reorders, adds, and drops instances to match `keys`.
    ///
    /// `make` is called once for every key that has no instance yet. Duplicate
    /// keys in `keys` are collapsed onto their first occurrence.
    pub fn reconcile(
        &mut self,
        keys: impl IntoIterator<Item = K>,
        mut make: impl FnMut(&K) -> C,
    ) -> Reconciled<K> {
        let mut items = HashMap::with_capacity(self.items.len());
        let mut order = Vec::new();
        let mut added = Vec::new();
        for key in keys {
            if items.contains_key(&key) {
                continue;
            }
            let item = match self.items.remove(&key) {
                Some(item) => item,
                None => {
                    added.push(key.clone());
                    make(&key)
                }
            };
            items.insert(key.clone(), item);
            order.push(key);
        }
        let removed: Vec<K> = self
            .order
            .iter()
            .filter(|k| self.items.contains_key(*k))
            .cloned()
            .collect();
        self.items = items;
        self.order = order;
        let result = Reconciled { added, removed };
        if !result.is_unchanged() {
            debug!(added = ?result.added, removed = ?result.removed, "collection reconciled");
        }
        result
    }
}
