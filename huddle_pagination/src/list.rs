// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::cursor::{PageRequest, Pagination};
use crate::error::ListError;
use crate::ops::{delete_item, move_item};

/// Items together with a 1-based cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedList<T> {
    current: usize,
    pages: Vec<T>,
}

impl<T> PagedList<T> {
    /// Creates a list with the cursor on the first item.
    #[must_use]
    pub fn new(pages: Vec<T>) -> Self {
        Self { current: 1, pages }
    }

    /// Current 1-based position.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// All items, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.pages
    }

    /// Item under the cursor, or `None` for an empty list.
    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.pages.get(self.current - 1)
    }

    /// Mutable access to the item under the cursor.
    pub fn current_item_mut(&mut self) -> Option<&mut T> {
        self.pages.get_mut(self.current - 1)
    }

    /// The cursor on its own.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current, self.pages.len())
    }

    /// Advances the cursor, bounded at the last item.
    pub fn next_page(&mut self) -> bool {
        self.step(Pagination::next_page)
    }

    /// Moves the cursor back, bounded at the first item.
    pub fn prev_page(&mut self) -> bool {
        self.step(Pagination::prev_page)
    }

    /// Swaps the current item with its predecessor; the cursor follows it.
    ///
    /// No-op on the first item.
    pub fn move_prev(&mut self) -> Result<(), ListError> {
        self.move_by(self.pagination().move_prev())
    }

    /// Swaps the current item with its successor; the cursor follows it.
    ///
    /// No-op on the last item.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.move_by(self.pagination().move_next())
    }

    /// Duplicates the current item right after itself and moves the cursor onto the copy.
    pub fn copy_current(&mut self, clone: impl FnOnce(&T) -> T) -> Result<(), ListError> {
        let request = self.pagination().copy_after();
        self.apply(request, clone)
    }

    /// Deletes the current item, keeping the cursor valid.
    ///
    /// Fails with [`ListError::LastItem`] on a single-item list.
    pub fn delete_current(&mut self) -> Result<(), ListError> {
        delete_item(&mut self.pages, self.current)?;
        self.current = self.current.min(self.pages.len());
        Ok(())
    }

    /// Applies a structural request and moves the cursor as it dictates.
    pub fn apply(
        &mut self,
        request: PageRequest,
        clone: impl FnOnce(&T) -> T,
    ) -> Result<(), ListError> {
        self.current = request.apply(&mut self.pages, clone)?;
        Ok(())
    }

    /// Consumes the list, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.pages
    }

    fn move_by(&mut self, request: Option<PageRequest>) -> Result<(), ListError> {
        if let Some(PageRequest::Move { from, to }) = request {
            move_item(&mut self.pages, from, to)?;
            self.current = to;
        }
        Ok(())
    }

    fn step(&mut self, f: impl FnOnce(&mut Pagination) -> bool) -> bool {
        let mut pagination = self.pagination();
        let changed = f(&mut pagination);
        self.current = pagination.current();
        changed
    }
}
