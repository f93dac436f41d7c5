//! Processing strategy module for receipt scoring
//!
//! This module defines the Strategy pattern for complete scoring pipelines,
//! encompassing receipt reading, validation, storage, and points output.
//! This allows different processing implementations (synchronous,
//! asynchronous batch) to be selected at runtime.

use crate::cli::StrategyType;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncScoringStrategy, BatchConfig};
pub use sync::SyncScoringStrategy;

/// Processing strategy trait for complete scoring pipelines
///
/// This trait defines the interface for different scoring implementations.
/// Each strategy must be able to read receipts from a JSON-lines file,
/// run them through validation and the rules engine, and write the scores
/// to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Score receipts from the input file and write results to output
    ///
    /// This method reads receipt records from the specified JSON-lines
    /// file, processes them through the receipt engine, and writes one
    /// score record per accepted receipt, in input order.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input JSON-lines file of receipts
    /// * `output` - Mutable reference to a writer for the score records
    ///
    /// # Returns
    ///
    /// * `Ok(())` if processing completed (possibly with recoverable,
    ///   per-receipt errors reported on stderr)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O
    ///   error, etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    ///
    /// Individual receipt rejections (validation failures, malformed
    /// JSON lines) are logged to stderr and do not cause this method to
    /// return an error; processing continues with the next receipt.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// Factory selecting and instantiating the appropriate strategy
/// implementation at runtime.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncScoringStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncScoringStrategy::new(config))
        }
    }
}
