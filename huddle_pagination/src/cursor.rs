// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::ListError;
use crate::ops::{copy_item, delete_item, move_item};

/// A 1-based cursor over `pages` items.
///
/// `current` is always in `1..=max(pages, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    current: usize,
    pages: usize,
}

impl Pagination {
    /// Creates a cursor, clamping `current` into range.
    #[must_use]
    pub fn new(current: usize, pages: usize) -> Self {
        Self {
            current: current.clamp(1, pages.max(1)),
            pages,
        }
    }

    /// Current 1-based position.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of items.
    #[must_use]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Returns `true` on the first item.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    /// Returns `true` on the last item.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current >= self.pages
    }

    /// Advances the cursor. Returns `false`, changing nothing, on the last item.
    pub fn next_page(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves the cursor back. Returns `false`, changing nothing, on the first item.
    pub fn prev_page(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Request to swap the current item with its predecessor.
    ///
    /// `None` on the first item.
    #[must_use]
    pub fn move_prev(&self) -> Option<PageRequest> {
        (!self.is_first()).then_some(PageRequest::Move {
            from: self.current,
            to: self.current - 1,
        })
    }

    /// Request to swap the current item with its successor.
    ///
    /// `None` on the last item.
    #[must_use]
    pub fn move_next(&self) -> Option<PageRequest> {
        (!self.is_last()).then_some(PageRequest::Move {
            from: self.current,
            to: self.current + 1,
        })
    }

    /// Request to duplicate the current item right after itself.
    #[must_use]
    pub fn copy_after(&self) -> PageRequest {
        PageRequest::Copy {
            item: self.current,
            to: self.current + 1,
        }
    }

    /// Request to delete the current item.
    ///
    /// Not gated: applying it to a single-item list fails with
    /// [`ListError::LastItem`].
    #[must_use]
    pub fn delete(&self) -> PageRequest {
        PageRequest::Delete { item: self.current }
    }
}

/// A structural change to a paged list.
///
/// Requests carry positions rather than items, so the same request can be
/// applied to several index-aligned lists and keep them aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageRequest {
    /// Move the item at `from` to `to`.
    Move {
        /// 1-based source.
        from: usize,
        /// 1-based destination.
        to: usize,
    },
    /// Insert a copy of the item at `item` so it lands at `to`.
    Copy {
        /// 1-based source.
        item: usize,
        /// 1-based destination of the copy.
        to: usize,
    },
    /// Remove the item at `item`.
    Delete {
        /// 1-based position.
        item: usize,
    },
}

impl PageRequest {
    /// Checks the request against a list of `len` items without changing anything.
    pub fn check(&self, len: usize) -> Result<(), ListError> {
        let in_range = |position: usize, limit: usize| {
            if (1..=limit).contains(&position) {
                Ok(())
            } else {
                Err(ListError::OutOfRange { position, len })
            }
        };
        match *self {
            Self::Move { from, to } => in_range(from, len).and(in_range(to, len)),
            Self::Copy { item, to } => in_range(item, len).and(in_range(to, len + 1)),
            Self::Delete { item } => {
                in_range(item, len)?;
                if len == 1 {
                    Err(ListError::LastItem)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Applies the request to `items` and returns the new 1-based cursor.
    ///
    /// The cursor follows a moved item, lands on a copy, and stays valid after a
    /// delete of the last position. `clone` is only called for [`Self::Copy`].
    pub fn apply<T>(
        &self,
        items: &mut Vec<T>,
        clone: impl FnOnce(&T) -> T,
    ) -> Result<usize, ListError> {
        match *self {
            Self::Move { from, to } => {
                move_item(items, from, to)?;
                Ok(to)
            }
            Self::Copy { item, to } => {
                copy_item(items, item, to, clone)?;
                Ok(to)
            }
            Self::Delete { item } => {
                delete_item(items, item)?;
                Ok(item.min(items.len()))
            }
        }
    }
}
