//! Batch scoring over tokio tasks
//!
//! This module provides the `BatchProcessor` struct, which fans a batch
//! of receipts out across tokio tasks and collects the outcomes.
//!
//! # Design
//!
//! Receipts are independent of one another: no rule observes any state
//! beyond the receipt it scores, and ids are assigned per receipt. There
//! is therefore no per-key ordering to preserve, and the processor
//! simply spawns one task per receipt; the runtime's worker pool bounds
//! the actual parallelism. Each receipt carries a caller-assigned
//! sequence number so the strategy can restore input order when writing
//! results.
//!
//! # Thread Safety
//!
//! The processor is cloneable and can be safely shared across async
//! tasks. All internal state is behind `Arc`, and the underlying store
//! is internally synchronized.

use std::sync::Arc;

use super::AsyncReceiptProcessor;
use crate::types::{Receipt, ReceiptError, ScoredReceipt};

/// Outcome of scoring a single receipt within a batch
///
/// Carries the caller-assigned sequence number so results can be put
/// back into input order after concurrent processing.
#[derive(Debug)]
pub struct ScoringOutcome {
    /// Position of the receipt in the input stream
    pub seq: u64,

    /// The result of scoring (id and points, or the rejection)
    pub result: Result<ScoredReceipt, ReceiptError>,
}

/// Concurrent batch scorer
///
/// `BatchProcessor` spawns a tokio task per receipt and awaits them all,
/// capturing per-receipt failures in the outcomes rather than aborting
/// the batch.
#[derive(Clone)]
pub struct BatchProcessor {
    /// Shared receipt processor
    ///
    /// Wrapped in Arc to enable sharing across async tasks.
    processor: Arc<AsyncReceiptProcessor>,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// # Arguments
    ///
    /// * `processor` - Arc-wrapped AsyncReceiptProcessor used by every task
    pub fn new(processor: Arc<AsyncReceiptProcessor>) -> Self {
        Self { processor }
    }

    /// Score a batch of sequenced receipts concurrently
    ///
    /// Spawns one task per receipt and waits for all of them. Outcomes
    /// may arrive in any order; callers sort by `seq` when input order
    /// matters.
    ///
    /// # Arguments
    ///
    /// * `batch` - Receipts paired with their input sequence numbers
    ///
    /// # Returns
    ///
    /// One `ScoringOutcome` per input receipt. Rejections are captured
    /// in the outcome's `result`; they never abort the batch.
    pub async fn process_batch(&self, batch: Vec<(u64, Receipt)>) -> Vec<ScoringOutcome> {
        let mut tasks = Vec::with_capacity(batch.len());
        for (seq, receipt) in batch {
            let processor = Arc::clone(&self.processor);
            tasks.push(tokio::spawn(async move {
                ScoringOutcome {
                    seq,
                    result: processor.process_receipt(receipt),
                }
            }));
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    eprintln!("Scoring task panicked: {:?}", e);
                }
            }
        }

        outcomes
    }
}
