//! Receipt processing orchestration for async batch scoring
//!
//! This module provides the `AsyncReceiptProcessor` struct, which
//! coordinates validation, storage, and scoring through shared
//! references so it can be used concurrently from many tokio tasks.
//!
//! # Design
//!
//! Validation and scoring are pure, so the validator and rules engine
//! are owned directly and used without synchronization. Only the store
//! is shared mutable state; it is Arc-wrapped and internally
//! synchronized.
//!
//! # Architecture
//!
//! ```text
//! AsyncReceiptProcessor
//!     ├── ReceiptValidator        (pure, no shared state)
//!     ├── RulesEngine             (pure, no shared state)
//!     └── Arc<AsyncReceiptStore>  (thread-safe id-keyed storage)
//! ```

use std::sync::Arc;

use crate::core::rules::RulesEngine;
use crate::core::validator::ReceiptValidator;
use crate::types::{Receipt, ReceiptError, ReceiptId, ScoredReceipt};

use super::AsyncReceiptStore;

/// Receipt processing orchestrator for async batch scoring
///
/// All operations take `&self`; share the processor across tasks behind
/// an `Arc`. Scoring a receipt never blocks on another receipt.
pub struct AsyncReceiptProcessor {
    /// Receipt validation (pure)
    validator: ReceiptValidator,

    /// Scoring rules engine (pure)
    engine: RulesEngine,

    /// Thread-safe receipt storage shared with the caller
    store: Arc<AsyncReceiptStore>,
}

impl AsyncReceiptProcessor {
    /// Create a new AsyncReceiptProcessor
    ///
    /// # Arguments
    ///
    /// * `store` - Arc-wrapped store receipts are accepted into; the
    ///   caller can keep a clone to inspect stored receipts afterwards
    pub fn new(store: Arc<AsyncReceiptStore>) -> Self {
        Self {
            validator: ReceiptValidator::new(),
            engine: RulesEngine::new(),
            store,
        }
    }

    /// Accept and score a receipt in one step
    ///
    /// Validates the receipt, stores it under a fresh id, and computes
    /// its points total.
    ///
    /// # Returns
    ///
    /// * `Ok(ScoredReceipt)` - id and points for the accepted receipt
    /// * `Err(ReceiptError::Invalid)` - the receipt failed validation
    ///   and was not stored
    pub fn process_receipt(&self, receipt: Receipt) -> Result<ScoredReceipt, ReceiptError> {
        self.validator.validate(&receipt)?;

        let points = self.engine.calculate_points(&receipt);
        let id = self.store.insert(receipt);

        Ok(ScoredReceipt { id, points })
    }

    /// Compute the points total for a previously accepted receipt
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - the points total
    /// * `Err(ReceiptError::ReceiptNotFound)` - no receipt under that id
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptError> {
        let receipt = self
            .store
            .get(id)
            .ok_or_else(|| ReceiptError::receipt_not_found(*id))?;

        Ok(self.engine.calculate_points(&receipt))
    }
}
