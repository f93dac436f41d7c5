//! JSON format handling for receipt input and score output
//!
//! This module centralizes the wire format concerns, providing:
//! - Receipt decoding from a single JSON document
//! - Score output serialization as JSON lines
//!
//! All functions are pure (no I/O beyond the provided writer) for easy
//! testing. Errors at this boundary are plain strings with enough
//! context for CLI diagnostics; typed errors live in the core.

use crate::types::{Receipt, ScoredReceipt};
use std::io::Write;

/// Parse one receipt from its JSON representation
///
/// Fields absent from the document decode to empty values; deciding
/// whether those are acceptable is the validator's job, not the
/// decoder's.
///
/// # Arguments
///
/// * `input` - A JSON object describing one receipt
///
/// # Returns
///
/// * `Ok(Receipt)` - Successfully decoded receipt
/// * `Err(String)` - Description of the decode failure
pub fn parse_receipt(input: &str) -> Result<Receipt, String> {
    serde_json::from_str(input).map_err(|e| format!("JSON parse error: {}", e))
}

/// Write scored receipts as JSON lines
///
/// Emits one `{"id": ..., "points": ...}` object per line, in the order
/// given. Callers are expected to pass scores in input order for
/// deterministic output.
///
/// # Arguments
///
/// * `scores` - Slice of scored receipts to write
/// * `output` - Mutable reference to a writer for the JSON lines
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if serialization or a write failed
pub fn write_scores(scores: &[ScoredReceipt], output: &mut dyn Write) -> Result<(), String> {
    for score in scores {
        let line = serde_json::to_string(score)
            .map_err(|e| format!("Failed to serialize score record: {}", e))?;
        writeln!(output, "{}", line).map_err(|e| format!("Failed to write score record: {}", e))?;
    }

    output
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
