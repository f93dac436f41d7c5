use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Score purchase receipts against the reward points rules
#[derive(Parser, Debug)]
#[command(name = "points-engine")]
#[command(about = "Score purchase receipts against the reward points rules", long_about = None)]
pub struct CliArgs {
    /// Input file path containing one receipt JSON document per line
    #[arg(value_name = "INPUT", help = "Path to the input JSON-lines receipt file")]
    pub input_file: PathBuf,

    /// Processing strategy to use for scoring receipts
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of receipts per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of receipts per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent batches (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches processing concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies for receipt scoring
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Constructs a BatchConfig using the CLI arguments if provided, or
    /// falls back to default values. Invalid (zero) values are replaced
    /// by defaults with a warning on stderr.
    ///
    /// # Returns
    ///
    /// A `BatchConfig` with values from CLI arguments or defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            // At least one custom value provided, create custom config
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            // No custom values, use all defaults
            BatchConfig::default()
        }
    }
}
