// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Huddle Lens: compose independent components over one versioned state tree.
//!
//! Components never hold references into the root state. Each one is wired with
//! a [`Lens`] that narrows the root to the part it understands, reads its input
//! through [`Lens::get`], and emits [`Reducer`]s of its own narrow state. Lifting
//! a reducer through the lens ([`Reducer::lift`]) turns it into a reducer of the
//! root that writes back through [`Lens::set`], leaving the rest of the root
//! untouched.
//!
//! - [`lens`], [`try_lens`], [`Lens::then`], [`Identity`], [`Index`]: general lenses.
//! - [`Scope`] and [`scope!`]: a lens onto one named field.
//! - [`Keyed`]: a lens onto one item of a list, by stable key; reducers lifted
//!   through it cannot reach sibling items.
//! - [`Collection`]: per-key component instances, reconciled against the keys.
//! - [`Store`] and [`Sink`]: one queue, applied strictly in arrival order. A
//!   rejected reducer changes nothing.
//! - [`Latch`] and [`Debounce`]: "last value wins" sampling and burst coalescing.
//!
//! ## Minimal example
//!
//! ```rust
//! use huddle_lens::{Reducer, Store, scope};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Root {
//!     counter: u32,
//!     title: String,
//! }
//!
//! let mut store = Store::new(Root { counter: 0, title: "huddle".into() });
//!
//! // A component that only knows about a `u32`.
//! let increment = Reducer::update("increment", |n: &mut u32| *n += 1);
//!
//! // Wired to the root through a named scope.
//! store.dispatch(increment.lift(scope!(Root, counter))).unwrap();
//! store.flush();
//!
//! assert_eq!(store.state().counter, 1);
//! assert_eq!(store.state().title, "huddle");
//! assert_eq!(store.version(), 1);
//! ```
//!
//! Logging goes through `tracing`; no subscriber is installed by this crate.

mod collection;
mod debounce;
mod error;
mod keyed;
mod latch;
mod lens;
mod reducer;
mod scope;
mod store;

pub use collection::{Collection, Reconciled};
pub use debounce::Debounce;
pub use error::StoreError;
pub use keyed::{Keyed, KeyedLens};
pub use latch::Latch;
pub use lens::{Compose, FnLens, Identity, Index, Lens, TryLens, lens, try_lens};
pub use reducer::Reducer;
pub use scope::Scope;
pub use store::{Flush, Rejection, Sink, Store};
