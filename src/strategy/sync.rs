//! Synchronous scoring strategy
//!
//! This module provides a synchronous, single-threaded implementation of
//! the ProcessingStrategy trait. It orchestrates scoring by coordinating
//! between the SyncReader (for JSON-lines input) and ReceiptProcessor
//! (for validation, storage, and scoring).
//!
//! # Design
//!
//! The SyncScoringStrategy focuses on orchestration, delegating:
//! - Receipt decoding to `SyncReader` (iterator interface)
//! - Validation and scoring to `ReceiptProcessor` (business logic)
//! - Score output to `json_format::write_scores` (format handling)
//!
//! # Memory Efficiency
//!
//! Receipts stream through one at a time; only the accepted receipts
//! (held by the store for points lookup) and their score records stay
//! in memory.

use crate::core::ReceiptProcessor;
use crate::io::json_format::write_scores;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::ScoredReceipt;
use std::io::Write;
use std::path::Path;

/// Synchronous scoring strategy
///
/// Implements the ProcessingStrategy trait using single-threaded,
/// streaming processing. Scores appear in the output in input order.
///
/// # Thread Safety
///
/// While this strategy is single-threaded, it implements Send + Sync to
/// be compatible with the ProcessingStrategy trait, allowing it to be
/// used in multi-threaded contexts if needed.
#[derive(Debug, Clone, Copy)]
pub struct SyncScoringStrategy;

impl ProcessingStrategy for SyncScoringStrategy {
    /// Score receipts from the input file and write results to output
    ///
    /// This method orchestrates the complete synchronous pipeline:
    /// 1. Creates a SyncReader to stream receipts from the file
    /// 2. Creates a ReceiptProcessor for validation, storage, scoring
    /// 3. Processes each receipt, collecting accepted scores in order
    /// 4. Writes score records using json_format::write_scores
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors) are returned
    /// immediately. Individual receipt rejections are logged to stderr
    /// and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let mut processor = ReceiptProcessor::new();

        let reader = SyncReader::new(input_path)?;

        let mut scores = Vec::new();
        for result in reader {
            match result {
                Ok(receipt) => match processor.process(receipt) {
                    Ok(id) => match processor.points(&id) {
                        Ok(points) => scores.push(ScoredReceipt { id, points }),
                        Err(e) => eprintln!("Scoring error: {}", e),
                    },
                    Err(e) => {
                        // Rejected receipt: report and keep going
                        eprintln!("Receipt rejected: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Input error: {}", e);
                }
            }
        }

        write_scores(&scores, output)?;

        Ok(())
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
    fn test_sync_strategy_scores_valid_receipt() {
        let file = create_temp_jsonl(&format!("{}\n", CORNER_MARKET_RECEIPT));

        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert_eq!(output_points(&output), vec![99]);
    }

    #[test]
    fn test_sync_strategy_preserves_input_order() {
        let content = format!(
            "{}\n{}\n",
            CORNER_MARKET_RECEIPT,
            // Target: 6 retailer points only
            r#"{"retailer":"Target","purchaseDate":"2022-03-20","purchaseTime":"13:01","items":[{"shortDescription":"Gatorade","price":"2.26"}],"total":"2.26"}"#
        );
        let file = create_temp_jsonl(&content);

        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();
        assert_eq!(output_points(&output), vec![99, 6]);
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.jsonl"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_sync_strategy_skips_invalid_receipt() {
        let content = format!(
            "{}\n{}\n{}\n",
            CORNER_MARKET_RECEIPT,
            r#"{"retailer":"Target","total":"10"}"#,
            CORNER_MARKET_RECEIPT
        );
        let file = create_temp_jsonl(&content);

        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        // The rejected receipt produces no score record
        assert_eq!(output_points(&output), vec![99, 99]);
    }

    #[test]
    fn test_sync_strategy_skips_malformed_line() {
        let content = format!("not json at all\n{}\n", CORNER_MARKET_RECEIPT);
        let file = create_temp_jsonl(&content);

        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert_eq!(output_points(&output), vec![99]);
    }

    #[test]
    fn test_sync_strategy_empty_input_produces_empty_output() {
        let file = create_temp_jsonl("");

        let strategy = SyncScoringStrategy;
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncScoringStrategy>();
    }
}
