// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single root store and its mutation queue.

use std::sync::mpsc::{Receiver, Sender, channel};

use tracing::{trace, warn};

use crate::error::StoreError;
use crate::reducer::Reducer;

/// Owns the root state and applies queued reducers to it, one at a time.
///
/// Every component gets a [`Sink`] and sends reducers into the same queue, so
/// arrival order is the only ordering. [`flush`](Self::flush) drains the queue:
/// each reducer sees the state left by the previous one. A rejected reducer
/// leaves state and version exactly as they were.
///
/// ```
/// use huddle_lens::{Reducer, Store};
///
/// let mut store = Store::new(0_i32);
/// let sink = store.sink();
/// sink.send(Reducer::update("add", |n: &mut i32| *n += 2)).unwrap();
/// sink.send(Reducer::update("double", |n: &mut i32| *n *= 2)).unwrap();
///
/// let flush = store.flush();
/// assert_eq!(flush.applied, 2);
/// assert_eq!(*store.state(), 4);
/// assert_eq!(store.version(), 2);
/// ```
#[derive(Debug)]
pub struct Store<S> {
    state: S,
    version: u64,
    sender: Sender<Reducer<S>>,
    receiver: Receiver<Reducer<S>>,
}

/// Sending half of a [`Store`]'s queue.
#[derive(Debug)]
pub struct Sink<S> {
    sender: Sender<Reducer<S>>,
}

impl<S> Clone for Sink<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S> Sink<S> {
    /// Queues a reducer.
    pub fn send(&self, reducer: Reducer<S>) -> Result<(), StoreError> {
        self.sender
            .send(reducer)
            .map_err(|_| StoreError::Disconnected)
    }

    /// Queues every reducer in order, stopping at the first failure.
    pub fn send_all(
        &self,
        reducers: impl IntoIterator<Item = Reducer<S>>,
    ) -> Result<(), StoreError> {
        reducers.into_iter().try_for_each(|r| self.send(r))
    }
}

/// A reducer that failed during [`Store::flush`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Label of the failed reducer.
    pub label: &'static str,
    /// Why it failed.
    pub error: StoreError,
}

/// Outcome of one [`Store::flush`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flush {
    /// Number of reducers that produced a new state.
    pub applied: usize,
    /// Reducers that failed, in queue order.
    pub rejected: Vec<Rejection>,
}

impl Flush {
    /// Returns `true` when nothing was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Returns `true` when the state changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

impl<S: 'static> Store<S> {
    /// Creates a store at version 0.
    pub fn new(state: S) -> Self {
        let (sender, receiver) = channel();
        Self {
            state,
            version: 0,
            sender,
            receiver,
        }
    }

    /// Latest committed state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Number of committed transitions so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// A new sending handle for this store's queue.
    pub fn sink(&self) -> Sink<S> {
        Sink {
            sender: self.sender.clone(),
        }
    }

    /// Queues a reducer.
    pub fn dispatch(&self, reducer: Reducer<S>) -> Result<(), StoreError> {
        self.sender
            .send(reducer)
            .map_err(|_| StoreError::Disconnected)
    }

    /// Applies every queued reducer in arrival order.
    pub fn flush(&mut self) -> Flush {
        let mut flush = Flush::default();
        while let Ok(reducer) = self.receiver.try_recv() {
            let label = reducer.label();
            match reducer.apply(&self.state) {
                Ok(next) => {
                    self.state = next;
                    self.version += 1;
                    flush.applied += 1;
                    trace!(reducer = label, version = self.version, "applied");
                }
                Err(error) => {
                    warn!(reducer = label, %error, "reducer rejected, state kept");
                    flush.rejected.push(Rejection { label, error });
                }
            }
        }
        flush
    }

    /// Replaces the whole state, e.g. after loading a document.
    pub fn replace(&mut self, state: S) {
        self.state = state;
        self.version += 1;
        trace!(version = self.version, "state replaced");
    }

    /// Consumes the store, returning the state. Queued reducers are dropped.
    pub fn into_state(self) -> S {
        self.state
    }
}
