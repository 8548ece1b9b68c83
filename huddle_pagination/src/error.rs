// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Failure of a structural list operation.
///
/// The list is left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Deleting would leave the list empty.
    #[error("cannot delete the only remaining item")]
    LastItem,
    /// A 1-based position was zero or past the end.
    #[error("position {position} is out of range for {len} items")]
    OutOfRange {
        /// Requested 1-based position.
        position: usize,
        /// Number of items at the time of the request.
        len: usize,
    },
}
