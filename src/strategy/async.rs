//! Asynchronous batch scoring strategy
//!
//! This module provides an asynchronous, multi-threaded implementation
//! of the ProcessingStrategy trait. Receipts are read in batches and
//! scored concurrently across tokio tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncScoringStrategy
//!     ├── BatchConfig              (batch_size, max_concurrent_batches)
//!     ├── AsyncReader              (batched JSON-lines reading)
//!     ├── BatchProcessor           (task fan-out per receipt)
//!     └── AsyncReceiptProcessor    (thread-safe validate/store/score)
//!         └── AsyncReceiptStore    (DashMap-backed shared storage)
//! ```
//!
//! # Ordering
//!
//! Receipts score independently, so batches run with full parallelism;
//! every receipt carries a sequence number assigned at read time and the
//! collected outcomes are sorted back into input order before the scores
//! are written.

use crate::core::r#async::{AsyncReceiptProcessor, AsyncReceiptStore, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::json_format::write_scores;
use crate::strategy::ProcessingStrategy;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how many receipts are read per batch and the number of
/// worker threads backing the scoring runtime.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of receipts per batch
    pub batch_size: usize,
    /// Maximum number of batches processing concurrently
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning on stderr.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            eprintln!(
                "Warning: Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches, default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch scoring strategy
///
/// Implements the ProcessingStrategy trait using multi-threaded batch
/// scoring. Receipts are read in batches; within a batch each receipt
/// is scored on its own tokio task over a shared thread-safe store.
///
/// # Configuration
///
/// The strategy accepts a BatchConfig with:
/// - `batch_size`: receipts per read batch (default: 1000)
/// - `max_concurrent_batches`: worker threads (default: CPU cores)
#[derive(Debug, Clone)]
pub struct AsyncScoringStrategy {
    /// Batch processing configuration
    config: BatchConfig,
}

impl AsyncScoringStrategy {
    /// Create a new AsyncScoringStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncScoringStrategy {
    /// Score receipts from the input file and write results to output
    ///
    /// This method implements the complete asynchronous pipeline:
    /// 1. Creates thread-safe components (store, processor, batcher)
    /// 2. Creates a tokio multi-threaded runtime
    /// 3. Reads receipts in batches, tagging each with a sequence number
    /// 4. Scores each batch concurrently and collects the outcomes
    /// 5. Sorts outcomes back into input order
    /// 6. Writes accepted scores; rejections go to stderr
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, runtime construction failure) are
    /// returned immediately. Individual receipt rejections are logged to
    /// stderr and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        // Create tokio runtime for async execution
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            // Create thread-safe scoring components
            let store = Arc::new(AsyncReceiptStore::new());
            let processor = Arc::new(AsyncReceiptProcessor::new(Arc::clone(&store)));
            let batcher = BatchProcessor::new(processor);

            // Open the receipt file
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            let mut reader = AsyncReader::new(tokio::io::BufReader::new(file));

            // Read and score batch by batch; sequence numbers restore
            // input order at the end
            let mut outcomes = Vec::new();
            let mut seq: u64 = 0;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                let sequenced: Vec<_> = batch
                    .into_iter()
                    .map(|receipt| {
                        let tagged = (seq, receipt);
                        seq += 1;
                        tagged
                    })
                    .collect();

                outcomes.extend(batcher.process_batch(sequenced).await);
            }

            outcomes.sort_by_key(|outcome| outcome.seq);

            let mut scores = Vec::new();
            for outcome in outcomes {
                match outcome.result {
                    Ok(score) => scores.push(score),
                    Err(e) => eprintln!("Receipt rejected: {}", e),
                }
            }

            write_scores(&scores, output)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary receipt file for testing
    fn create_temp_jsonl(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const CORNER_MARKET_RECEIPT: &str = r#"{"retailer":"M&M Corner Market","purchaseDate":"2022-03-20","purchaseTime":"14:33","items":[{"shortDescription":"Gatorade","price":"2.25"}],"total":"9.00"}"#;
    const TARGET_RECEIPT: &str = r#"{"retailer":"Target","purchaseDate":"2022-03-20","purchaseTime":"13:01","items":[{"shortDescription":"Gatorade","price":"2.26"}],"total":"2.26"}"#;

    fn output_points(output: &[u8]) -> Vec<u64> {
        String::from_utf8(output.to_vec())
            .unwrap()
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["points"].as_u64().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_async_strategy_scores_valid_receipt() {
        let file = create_temp_jsonl(&format!("{}\n", CORNER_MARKET_RECEIPT));

        let strategy = AsyncScoringStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert_eq!(output_points(&output), vec![99]);
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncScoringStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.jsonl"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_async_strategy_restores_input_order_across_batches() {
        // Batch size of 2 forces several batches; the output must still
        // follow input order despite concurrent scoring.
        let content = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            CORNER_MARKET_RECEIPT,
            TARGET_RECEIPT,
            CORNER_MARKET_RECEIPT,
            TARGET_RECEIPT,
            CORNER_MARKET_RECEIPT
        );
        let file = create_temp_jsonl(&content);

        let config = BatchConfig::new(2, num_cpus::get());
        let strategy = AsyncScoringStrategy::new(config);
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();
        assert_eq!(output_points(&output), vec![99, 6, 99, 6, 99]);
    }

    #[test]
    fn test_async_strategy_skips_invalid_receipts() {
        let content = format!(
            "{}\n{}\n{}\n",
            CORNER_MARKET_RECEIPT,
            r#"{"retailer":"Target","purchaseDate":"2022-03-20","purchaseTime":"13:01","items":[],"total":"1.00"}"#,
            TARGET_RECEIPT
        );
        let file = create_temp_jsonl(&content);

        let strategy = AsyncScoringStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert_eq!(output_points(&output), vec![99, 6]);
    }

    #[test]
    fn test_async_strategy_empty_input_produces_empty_output() {
        let file = create_temp_jsonl("");

        let strategy = AsyncScoringStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn test_batch_config_zero_values_fall_back() {
        let config = BatchConfig::new(0, 0);
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.max_concurrent_batches, num_cpus::get());
    }

    #[test]
    fn test_batch_config_custom_values() {
        let config = BatchConfig::new(200, 4);
        assert_eq!(config.batch_size, 200);
        assert_eq!(config.max_concurrent_batches, 4);
    }
}
