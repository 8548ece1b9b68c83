// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Failure while projecting state through a lens or applying a reducer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A keyed lens addressed an item that is not in the collection.
    #[error("{scope}: no item with key {key}")]
    MissingKey {
        /// Name of the collection.
        scope: &'static str,
        /// Debug rendering of the key.
        key: String,
    },
    /// The key function produced the same key for two items.
    #[error("{scope}: key {key} appears more than once")]
    DuplicateKey {
        /// Name of the collection.
        scope: &'static str,
        /// Debug rendering of the key.
        key: String,
    },
    /// An index lens pointed past the end of its list.
    #[error("{scope}: index {index} is out of range for {len} items")]
    IndexOutOfRange {
        /// Name of the list.
        scope: &'static str,
        /// Requested 0-based index.
        index: usize,
        /// Length of the list.
        len: usize,
    },
    /// A reducer refused to produce a new state.
    #[error("reducer `{reducer}` rejected the update: {reason}")]
    Rejected {
        /// Label of the reducer.
        reducer: &'static str,
        /// Human-readable cause.
        reason: String,
    },
    /// An enumerated value arrived that no variant matches.
    #[error("unknown {kind} `{value}`")]
    UnknownVariant {
        /// What was being decoded.
        kind: &'static str,
        /// The offending value.
        value: String,
    },
    /// The store behind a sink is gone.
    #[error("the store is no longer receiving updates")]
    Disconnected,
}

impl StoreError {
    /// Shorthand for [`StoreError::Rejected`].
    pub fn rejected(reducer: &'static str, reason: impl ToString) -> Self {
        Self::Rejected {
            reducer,
            reason: reason.to_string(),
        }
    }
}
