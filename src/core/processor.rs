//! Receipt processing orchestration
//!
//! This module provides the ReceiptProcessor that coordinates between
//! the ReceiptValidator, the ReceiptStore, and the RulesEngine.
//!
//! The processor enforces the gating invariant of the system: a receipt
//! is only stored (and therefore only ever scored) after it holds a
//! passing verdict from the validator. Scoring itself is a pure
//! computation over the stored snapshot, so repeated points lookups for
//! the same id always return the same total.

use crate::core::receipt_store::ReceiptStore;
use crate::core::rules::RulesEngine;
use crate::core::validator::ReceiptValidator;
use crate::types::{Receipt, ReceiptError, ReceiptId, ValidationError};

/// Receipt processing engine
///
/// Owns explicitly constructed validator, rules engine, and store values;
/// there is no process-global state. Construct once at startup and drive
/// it with receipts.
pub struct ReceiptProcessor {
    validator: ReceiptValidator,
    engine: RulesEngine,
    store: ReceiptStore,
}

impl ReceiptProcessor {
    /// Create a new ReceiptProcessor
    ///
    /// Initializes an empty store alongside a validator and the full
    /// rules engine.
    pub fn new() -> Self {
        ReceiptProcessor {
            validator: ReceiptValidator::new(),
            engine: RulesEngine::new(),
            store: ReceiptStore::new(),
        }
    }

    /// Validate a receipt without storing it
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the receipt is valid
    /// * `Err(ValidationError)` - the reason it was rejected
    pub fn validate(&self, receipt: &Receipt) -> Result<(), ValidationError> {
        self.validator.validate(receipt)
    }

    /// Accept a receipt: validate, store, and return its new id
    ///
    /// # Arguments
    ///
    /// * `receipt` - The decoded receipt to accept
    ///
    /// # Returns
    ///
    /// * `Ok(ReceiptId)` - the id the receipt is now stored under
    /// * `Err(ReceiptError::Invalid)` - the receipt failed validation
    pub fn process(&mut self, receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        self.validator.validate(&receipt)?;
        Ok(self.store.insert(receipt))
    }

    /// Compute the points total for a previously accepted receipt
    ///
    /// # Arguments
    ///
    /// * `id` - The id returned by [`process`](Self::process)
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

        Ok(self.engine.calculate_points(receipt))
    }

    /// Number of receipts accepted so far
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new()
    }
}
