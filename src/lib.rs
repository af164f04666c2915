// Micro-benchmark harness for classic in-place sorting algorithms.
//
// Datasets are derived deterministically from (size, repetition, base seed),
// so timings taken in separate processes remain comparable; each timed run is
// validated and appended to an append-only CSV store.

pub mod benchmark;
pub mod sort;

pub use benchmark::input::{generate, DEFAULT_BASE_SEED};
pub use benchmark::runner::BenchmarkRunner;
pub use benchmark::sink::CsvSink;
pub use benchmark::types::{BenchError, BenchmarkConfig, ResultRow};
pub use benchmark::verification::is_sorted;
pub use sort::{algorithm_ids, resolve, AlgorithmSpec, ALGORITHMS};
