//! Receipt Points Engine Library
//! # Overview
//!
//! This library validates purchase receipts and scores them against a fixed
//! set of reward points rules, with both a sync and an async batch strategy
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Receipt, Item, errors, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::format`] - Field format predicates
//!   - [`core::validator`] - Receipt validation verdicts
//!   - [`core::rules`] - The scoring rules and their engine
//!   - [`core::receipt_store`] - Id-keyed in-memory receipt storage
//!   - [`core::processor`] - Validate/store/score orchestration
//! - [`io`] - JSON-lines reading and score output
//! - [`strategy`] - Pluggable sync/async processing pipelines
//!
//! # Scoring Rules
//!
//! The engine applies seven independent rules and sums their contributions:
//!
//! - **Retailer name**: one point per alphanumeric character
//! - **Round dollar**: 50 points if the total has no cents
//! - **Quarter total**: 25 points if the total is a multiple of 0.25
//! - **Item pairs**: 5 points for every two items
//! - **Description length**: per-item bonus of `ceil(price * 0.2)` when the
//!   trimmed description length is divisible by 3
//! - **Odd day**: 6 points if the purchase day of month is odd
//! - **Afternoon hour**: 10 points if the purchase hour is exactly 14
//!
//! # Validation
//!
//! A receipt is accepted only if every field is present and well formed:
//! dates are real calendar dates (`YYYY-MM-DD`), times are 24-hour clock
//! times (`HH:MM`), money amounts have exactly two decimal places, and the
//! retailer/description strings stay within their allowed character sets.
//! Accepted receipts are stored under a fresh UUID for later points lookup.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{ReceiptProcessor, ReceiptStore, ReceiptValidator, RulesEngine};
pub use io::write_scores;
pub use types::{Item, Receipt, ReceiptError, ReceiptId, ScoredReceipt, ValidationError};
