//! Asynchronous receipt reader with batch interface
//!
//! Provides batched reading of receipts from a JSON-lines source.
//! Supports efficient async batch processing without loading the whole
//! file into memory.
//!
//! # Design
//!
//! The AsyncReader wraps any `AsyncBufRead` source (typically a
//! `tokio::io::BufReader` over a `tokio::fs::File`) and reads line by
//! line, delegating decoding to the json_format module.
//!
//! # Architecture
//!
//! ```text
//! JSON-lines source → AsyncReader → batches of Receipts
//!                         ↓
//!                  json_format module
//!                   (parse_receipt)
//! ```

use crate::io::json_format::parse_receipt;
use crate::types::Receipt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Asynchronous JSON-lines receipt reader
///
/// Provides a batch reading interface over receipt records while
/// keeping constant memory usage per record.
pub struct AsyncReader<R: AsyncBufRead + Unpin> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> AsyncReader<R> {
    /// Create a new AsyncReader from an async buffered reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async buffered reader providing JSON-lines data
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Read a batch of receipts
    ///
    /// Reads up to `batch_size` receipts from the source. Blank lines
    /// are skipped; malformed lines are logged to stderr and skipped.
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Maximum number of receipts to read
    ///
    /// # Returns
    ///
    /// A vector of successfully decoded receipts. Returns an empty
    /// vector when the end of the source is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<Receipt> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_receipt(&line) {
                        Ok(receipt) => batch.push(receipt),
                        Err(e) => eprintln!("Receipt decode error: {}", e),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Read error: {}", e);
                    break;
                }
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    const GATORADE_RECEIPT: &str = r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[{"shortDescription":"Gatorade","price":"2.25"}],"total":"2.25"}"#;

    fn reader_over(content: &str) -> AsyncReader<BufReader<&[u8]>> {
        AsyncReader::new(BufReader::new(content.as_bytes()))
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let content = format!("{0}\n{0}\n{0}\n", GATORADE_RECEIPT);
        let mut reader = reader_over(&content);

        let batch = reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].retailer, "Target");

        let batch = reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);

        let batch = reader.read_batch(2).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_source() {
        let mut reader = reader_over("");

        let batch = reader.read_batch(10).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_record() {
        let content = format!("not json\n{}\n", GATORADE_RECEIPT);
        let mut reader = reader_over(&content);

        // The malformed line is logged to stderr and skipped
        let batch = reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].retailer, "Target");
    }

    #[tokio::test]
    async fn test_async_reader_skips_blank_lines() {
        let content = format!("\n{}\n   \n{}\n", GATORADE_RECEIPT, GATORADE_RECEIPT);
        let mut reader = reader_over(&content);

        let batch = reader.read_batch(10).await;
        assert_eq!(batch.len(), 2);
    }

    #[tokio::test]
    async fn test_async_reader_batch_size_larger_than_records() {
        let content = format!("{}\n", GATORADE_RECEIPT);
        let mut reader = reader_over(&content);

        let batch = reader.read_batch(100).await;
        assert_eq!(batch.len(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_multiple_batches() {
        let content = format!("{0}\n{0}\n{0}\n{0}\n{0}\n", GATORADE_RECEIPT);
        let mut reader = reader_over(&content);

        assert_eq!(reader.read_batch(2).await.len(), 2);
        assert_eq!(reader.read_batch(2).await.len(), 2);
        assert_eq!(reader.read_batch(2).await.len(), 1);
        assert!(reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_defaults_missing_fields() {
        let mut reader = reader_over("{\"retailer\":\"Target\"}\n");

        let batch = reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert!(batch[0].total.is_empty());
    }
}
