//! Receipt storage for points lookup
//!
//! This module provides the ReceiptStore component that keeps accepted
//! receipts in memory, keyed by the identifier assigned at insertion.
//! The store enables the points operation: a caller that processed a
//! receipt earlier presents the id and gets the receipt scored.
//!
//! # Identifier Assignment
//!
//! Identifiers are random UUIDs (v4) generated by the store at insert
//! time. The caller never supplies an id, so collisions and overwrite
//! semantics do not arise in practice.

use crate::types::{Receipt, ReceiptId};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory receipt store
///
/// Maintains a HashMap of receipt id to receipt. Receipts are immutable
/// once stored; the store only ever inserts and reads.
pub struct ReceiptStore {
    /// Map of receipt id to stored receipt
    receipts: HashMap<ReceiptId, Receipt>,
}

impl ReceiptStore {
    /// Create a new empty receipt store
    pub fn new() -> Self {
        ReceiptStore {
            receipts: HashMap::new(),
        }
    }

    /// Store a receipt under a freshly generated id
    ///
    /// # Arguments
    ///
    /// * `receipt` - The receipt to store; ownership moves into the store
    ///
    /// # Returns
    ///
    /// The id the receipt was stored under
    pub fn insert(&mut self, receipt: Receipt) -> ReceiptId {
        let id = Uuid::new_v4();
        self.receipts.insert(id, receipt);
        id
    }

    /// Get a stored receipt by id
    ///
    /// # Returns
    ///
    /// * `Some(&Receipt)` - If a receipt is stored under the id
    /// * `None` - If the id is unknown
    pub fn get(&self, id: &ReceiptId) -> Option<&Receipt> {
        self.receipts.get(id)
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

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn sample_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Gatorade".to_string(),
                price: "2.25".to_string(),
            }],
            total: "2.25".to_string(),
        }
    }

    #[test]
    fn test_insert_and_get_receipt() {
        let mut store = ReceiptStore::new();

        let id = store.insert(sample_receipt("Target"));

        let stored = store.get(&id).expect("receipt should be stored");
        assert_eq!(stored.retailer, "Target");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let store = ReceiptStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_inserts_assign_distinct_ids() {
        let mut store = ReceiptStore::new();

        let first = store.insert(sample_receipt("Target"));
        let second = store.insert(sample_receipt("Target"));

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_stored_receipt_is_unchanged() {
        let mut store = ReceiptStore::new();
        let receipt = sample_receipt("M&M Corner Market");

        let id = store.insert(receipt.clone());

        assert_eq!(store.get(&id), Some(&receipt));
    }

    #[test]
    fn test_empty_store() {
        let store = ReceiptStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
