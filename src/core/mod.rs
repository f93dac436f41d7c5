//! Core business logic module
//!
//! This module contains the core receipt processing components:
//! - `format` - Field format predicates (date, time, price, names)
//! - `validator` - Receipt validation verdicts
//! - `rules` - The scoring rules and the engine that sums them
//! - `receipt_store` - In-memory id-keyed receipt storage
//! - `processor` - Orchestration: validate, store, score
//! - `async` - Thread-safe implementations for concurrent batch scoring

pub mod r#async;
pub mod format;
pub mod processor;
pub mod receipt_store;
pub mod rules;
pub mod validator;

pub use format::FormatValidators;
pub use processor::ReceiptProcessor;
pub use r#async::{AsyncReceiptProcessor, AsyncReceiptStore, BatchProcessor};
pub use receipt_store::ReceiptStore;
pub use rules::{RulesEngine, ScoringRule};
pub use validator::ReceiptValidator;
