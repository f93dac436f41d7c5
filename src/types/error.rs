//! Error types for the Receipt Points Engine
//!
//! This module defines all error types that can occur while validating,
//! storing, and scoring receipts. Errors are designed to be descriptive
//! and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: a receipt fails its structural or format checks
//! - **Lookup Errors**: points requested for an unknown receipt id
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **JSON Parsing Errors**: malformed receipt documents

use crate::types::ReceiptId;
use thiserror::Error;

/// Reason a receipt was rejected by the validator
///
/// Exactly two kinds of rejection exist: structural problems (a required
/// field is absent or the item list is empty) and format problems (a
/// present field does not match its pattern or does not parse). The
/// `Display` implementation is the human-readable reason surfaced to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty
    ///
    /// Structural rejection. Item-level fields carry an indexed path such
    /// as `items[2].price`.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Path of the missing field
        field: String,
    },

    /// The item list is empty
    ///
    /// Structural rejection; a receipt must contain at least one item.
    #[error("receipt contains no items")]
    NoItems,

    /// A present field fails its pattern or parse check
    ///
    /// Format rejection. The offending value is echoed back for
    /// diagnostics.
    #[error("field '{field}' has malformed value '{value}'")]
    InvalidFormat {
        /// Path of the malformed field
        field: String,
        /// The value that failed the check
        value: String,
    },
}

impl ValidationError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this rejection is structural (missing data) as opposed to
    /// a format failure of present data
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingField { .. } | ValidationError::NoItems
        )
    }
}

/// Main error type for receipt processing
///
/// This enum represents all errors the processing pipeline can surface.
/// Validation rejections are recoverable (the receipt is skipped and
/// processing continues); I/O failures are fatal to a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReceiptError {
    /// The receipt failed validation
    ///
    /// Recoverable: the receipt is rejected, processing continues with
    /// the next one.
    #[error("The receipt is invalid: {0}")]
    Invalid(#[from] ValidationError),

    /// No receipt is stored under the requested id
    ///
    /// Recoverable; maps to the caller's not-found handling.
    #[error("No receipt found for id {id}")]
    ReceiptNotFound {
        /// The id that was not found
        id: ReceiptId,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// Typically fatal (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A receipt document could not be parsed as JSON
    ///
    /// Recoverable: the malformed record is skipped and processing
    /// continues with the next record.
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl ReceiptError {
    /// Create a ReceiptNotFound error
    pub fn receipt_not_found(id: ReceiptId) -> Self {
        ReceiptError::ReceiptNotFound { id }
    }

    /// Create a ParseError
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        ReceiptError::ParseError {
            line,
            message: message.into(),
        }
    }
}

// Conversion from io::Error to ReceiptError
impl From<std::io::Error> for ReceiptError {
    fn from(error: std::io::Error) -> Self {
        ReceiptError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReceiptError
impl From<serde_json::Error> for ReceiptError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 when no position is available
        let line = match error.line() {
            0 => None,
            l => Some(l as u64),
        };

        ReceiptError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}
