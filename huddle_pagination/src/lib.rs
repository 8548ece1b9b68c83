// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Huddle Pagination: an ordered list of items with a 1-based cursor.
//!
//! The crate has three layers:
//!
//! - Free list operations on `Vec<T>` ([`update_item`], [`move_item`],
//!   [`copy_item`], [`delete_item`]), all taking 1-based positions and failing
//!   with a [`ListError`] instead of panicking.
//! - [`Pagination`]: the cursor alone (`current` out of `pages`). Paging is
//!   bounded; the structural actions do not touch any list, they produce a
//!   [`PageRequest`] that the owner applies to every list that must stay
//!   index-aligned.
//! - [`PagedList`]: a cursor and its items in one value.
//!
//! ## Minimal example
//!
//! ```rust
//! use huddle_pagination::{ListError, PagedList};
//!
//! let mut list = PagedList::new(vec!["a", "b", "c"]);
//! assert_eq!(list.current(), 1);
//!
//! // Move "a" one step forward; the cursor follows it.
//! list.move_next().unwrap();
//! assert_eq!(list.items(), &["b", "a", "c"]);
//! assert_eq!(list.current(), 2);
//!
//! // Duplicate it; the cursor lands on the copy.
//! list.copy_current(|s| *s).unwrap();
//! assert_eq!(list.items(), &["b", "a", "a", "c"]);
//! assert_eq!(list.current(), 3);
//!
//! // The last remaining item can never be deleted.
//! let mut single = PagedList::new(vec!["only"]);
//! assert_eq!(single.delete_current(), Err(ListError::LastItem));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod error;
mod list;
mod ops;

pub use cursor::{PageRequest, Pagination};
pub use error::ListError;
pub use list::PagedList;
pub use ops::{copy_item, delete_item, move_item, update_item};
