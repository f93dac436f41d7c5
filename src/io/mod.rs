//! I/O module
//!
//! Handles receipt decoding and score output.
//!
//! # Components
//!
//! - `json_format` - JSON wire format handling (receipt decoding, score serialization)
//! - `sync_reader` - Synchronous JSON-lines reader with iterator interface
//! - `async_reader` - Asynchronous JSON-lines reader with batch reading interface

pub mod async_reader;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use json_format::{parse_receipt, write_scores};
pub use sync_reader::SyncReader;
