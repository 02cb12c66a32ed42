// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The storage contract the ranking engine consumes.
//!
//! The engine needs exactly two read-only queries. How a backend indexes its
//! corpus is its own business; [`MemoryStorage`] is the in-process reference
//! backend used by the CLI and the tests.

mod corpus;
mod memory;

pub use corpus::*;
pub use memory::*;

use std::sync::Arc;

use crate::types::ResponseCounts;

/// Read-only access to a trained corpus.
///
/// Implementations must be safe for concurrent readers; the engine calls them
/// from whatever thread runs the query.
pub trait StorageAdapter: Send + Sync {
    /// Exact (canonical) lookup: responses observed for `query` with counts.
    ///
    /// `None` or an empty map both mean "not found".
    fn find(&self, query: &str) -> Option<ResponseCounts>;

    /// Previously seen questions that may answer `query`. May be empty.
    fn search(&self, query: &str) -> Vec<String>;
}

impl<T: StorageAdapter + ?Sized> StorageAdapter for Arc<T> {
    fn find(&self, query: &str) -> Option<ResponseCounts> {
        (**self).find(query)
    }

    fn search(&self, query: &str) -> Vec<String> {
        (**self).search(query)
    }
}

impl<T: StorageAdapter + ?Sized> StorageAdapter for &T {
    fn find(&self, query: &str) -> Option<ResponseCounts> {
        (**self).find(query)
    }

    fn search(&self, query: &str) -> Vec<String> {
        (**self).search(query)
    }
}
