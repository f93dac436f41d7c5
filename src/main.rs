//! Receipt Points Engine CLI
//!
//! Command-line interface for scoring purchase receipts from JSON-lines files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- receipts.jsonl > scores.jsonl
//! cargo run -- --strategy sync receipts.jsonl > scores.jsonl
//! cargo run -- --strategy async receipts.jsonl > scores.jsonl
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 receipts.jsonl > scores.jsonl
//! ```
//!
//! The program reads one receipt JSON document per input line, validates and
//! scores each through the rules engine using the selected processing
//! strategy, and writes one `{"id": ..., "points": ...}` record per accepted
//! receipt to stdout, in input order. Rejected receipts are reported on
//! stderr and skipped.
//!
//! # Processing Strategies
//!
//! - **sync**: Streaming single-threaded scoring
//! - **async**: Batched scoring across a multi-threaded runtime (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use receipt_points_engine::cli;
use receipt_points_engine::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Score receipts using the selected strategy
    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
