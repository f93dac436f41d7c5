//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `receipt`: Receipt wire types, identifiers, and scored output records
//! - `error`: Error types for validation and processing

pub mod error;
pub mod receipt;

pub use error::{ReceiptError, ValidationError};
pub use receipt::{Item, Receipt, ReceiptId, ScoredReceipt};
