use std::path::PathBuf;
use thiserror::Error;

use super::input::DEFAULT_BASE_SEED;

/// Distribution label carried on every result row. The harness only generates
/// uniform random datasets.
pub const DISTRIBUTION: &str = "Random";

/// Default path of the append-only result store.
pub const DEFAULT_OUTPUT_PATH: &str = "sort_results.csv";

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A sort routine left its input unsorted. This signals a logic bug in the
    /// algorithm implementation, not a transient fault, so the sweep is
    /// aborted rather than retried.
    #[error("{algorithm} left a size-{size} dataset unsorted (repetition {repetition})")]
    CorrectnessViolation {
        algorithm: String,
        size: usize,
        repetition: u32,
    },

    #[error("result store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Explicit configuration for one benchmark invocation. Passed into the runner
/// and sink rather than read from globals.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Dataset sizes, swept in the given order.
    pub sizes: Vec<usize>,
    /// Timed trials per size.
    pub repetitions: u32,
    /// Combined with size and repetition to derive each dataset seed.
    pub base_seed: u64,
    /// Path of the append-only CSV result store.
    pub output_path: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 50_000, 200_000],
            repetitions: 3,
            base_seed: DEFAULT_BASE_SEED,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// One timed trial, as persisted to the result store.
///
/// `average_ms` starts unset and is back-filled into every row of a
/// (algorithm, size) bucket once all repetitions of that size complete; rows of
/// a bucket cut short by an abort keep it unset.
#[derive(Clone, Debug)]
pub struct ResultRow {
    pub algorithm: String,
    pub size: usize,
    pub distribution: &'static str,
    /// 1-based repetition index.
    pub repetition: u32,
    pub time_ms: f64,
    pub average_ms: Option<f64>,
    /// Shared by all rows of one invocation.
    pub timestamp: String,
}
