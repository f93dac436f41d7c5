//! Asynchronous implementations of core components
//!
//! This module provides thread-safe, concurrent implementations of the
//! receipt processing components for batch scoring.
//!
//! # Architecture
//!
//! The async implementations mirror the synchronous versions but use
//! concurrent data structures and shared-reference APIs:
//!
//! - **AsyncReceiptStore**: thread-safe receipt storage using DashMap
//! - **AsyncReceiptProcessor**: validates, stores, and scores through
//!   `&self`, safe to share across tasks via `Arc`
//! - **BatchProcessor**: fans a batch of receipts out over tokio tasks
//!
//! # Thread Safety
//!
//! Validation and scoring are pure and need no synchronization; only the
//! shared store is mutable, and DashMap gives it fine-grained per-entry
//! locking with no global lock.

pub mod batch_processor;
pub mod processor;
pub mod receipt_store;

pub use batch_processor::BatchProcessor;
pub use processor::AsyncReceiptProcessor;
pub use receipt_store::AsyncReceiptStore;
