//! Thread-safe receipt storage for async batch processing
//!
//! This module provides the `AsyncReceiptStore` struct, the concurrent
//! counterpart of the synchronous store. It uses `DashMap` so multiple
//! tasks can insert and look up receipts simultaneously without a global
//! lock: operations on different entries proceed in parallel, operations
//! on the same entry are serialized by DashMap's internal sharding.
//!
//! All operations take `&self`, so the store can be shared across tasks
//! behind an `Arc`.

use crate::types::{Receipt, ReceiptId};
use dashmap::DashMap;
use uuid::Uuid;

/// Thread-safe receipt store for async batch processing
///
/// Semantics match the synchronous [`ReceiptStore`]: insertion assigns a
/// fresh UUID, receipts are immutable once stored, and lookups by
/// unknown id return `None`. Lookups clone the receipt so no lock is
/// held while the caller scores it.
///
/// [`ReceiptStore`]: crate::core::ReceiptStore
#[derive(Debug)]
pub struct AsyncReceiptStore {
    /// Concurrent map of receipt id to stored receipt
    receipts: DashMap<ReceiptId, Receipt>,
}

impl AsyncReceiptStore {
    /// Create a new empty AsyncReceiptStore
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }

    /// Store a receipt under a freshly generated id (thread-safe)
    ///
    /// # Arguments
    ///
    /// * `receipt` - The receipt to store
    ///
    /// # Returns
    ///
    /// The id the receipt was stored under
    pub fn insert(&self, receipt: Receipt) -> ReceiptId {
        let id = Uuid::new_v4();
        self.receipts.insert(id, receipt);
        id
    }

    /// Get a stored receipt by id (read-only, thread-safe)
    ///
    /// The receipt is cloned to avoid holding the entry lock longer than
    /// necessary.
    ///
    /// # Returns
    ///
    /// * `Some(Receipt)` - If a receipt is stored under the id
    /// * `None` - If the id is unknown
    pub fn get(&self, id: &ReceiptId) -> Option<Receipt> {
        self.receipts.get(id).map(|entry| entry.value().clone())
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

impl Default for AsyncReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}
