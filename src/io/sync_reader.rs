//! Synchronous receipt reader with iterator interface
//!
//! Provides a streaming iterator over receipts from a JSON-lines file
//! (one receipt document per line). Delegates decoding to the
//! json_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Receipt, String>` per input line. Blank lines are skipped.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual decode errors are yielded as Err variants with their
//!   line number, and iteration continues with the next line
//!
//! # Memory Efficiency
//!
//! The reader streams line by line; memory usage is O(1) per record,
//! not O(file_size).

use crate::io::json_format::parse_receipt;
use crate::types::Receipt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Synchronous JSON-lines receipt reader
///
/// Provides an iterator interface over receipt records while keeping
/// constant memory usage.
#[derive(Debug)]
pub struct SyncReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the receipt file and prepares it for streaming iteration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON-lines receipt file
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<Receipt, String>;

    /// Get the next receipt from the file
    ///
    /// Skips blank lines. Decode failures and read failures are yielded
    /// with their line number so a caller can report and continue.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Receipt))` - Successfully decoded receipt
    /// * `Some(Err(String))` - Decode or read error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_num += 1;

            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    return Some(
                        parse_receipt(&line).map_err(|e| format!("Line {}: {}", self.line_num, e)),
                    )
                }
                Err(e) => {
                    return Some(Err(format!(
                        "Line {}: read error: {}",
                        self.line_num, e
                    )))
                }
            }
        }
    }
}
