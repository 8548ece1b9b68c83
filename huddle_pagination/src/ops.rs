// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::ListError;

/// Maps a 1-based position onto an index, checking `1..=len`.
fn index(position: usize, len: usize) -> Result<usize, ListError> {
    if (1..=len).contains(&position) {
        Ok(position - 1)
    } else {
        Err(ListError::OutOfRange { position, len })
    }
}

/// Replaces the item at 1-based `position`.
pub fn update_item<T>(items: &mut [T], position: usize, item: T) -> Result<(), ListError> {
    let i = index(position, items.len())?;
    items[i] = item;
    Ok(())
}

/// Moves the item at 1-based `from` so that it ends up at 1-based `to`.
///
/// Items in between shift by one; every other item keeps its relative order.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), ListError> {
    let len = items.len();
    let from = index(from, len)?;
    let to = index(to, len)?;
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Inserts a copy of the item at 1-based `from` so that it ends up at 1-based `to`.
///
/// `to` may be one past the end. `clone` decides how deep the copy goes.
pub fn copy_item<T>(
    items: &mut Vec<T>,
    from: usize,
    to: usize,
    clone: impl FnOnce(&T) -> T,
) -> Result<(), ListError> {
    let len = items.len();
    let from = index(from, len)?;
    if !(1..=len + 1).contains(&to) {
        return Err(ListError::OutOfRange { position: to, len });
    }
    let copy = clone(&items[from]);
    items.insert(to - 1, copy);
    Ok(())
}

/// Removes and returns the item at 1-based `position`.
///
/// Fails with [`ListError::LastItem`] rather than emptying the list.
pub fn delete_item<T>(items: &mut Vec<T>, position: usize) -> Result<T, ListError> {
    let i = index(position, items.len())?;
    if items.len() == 1 {
        return Err(ListError::LastItem);
    }
    Ok(items.remove(i))
}
