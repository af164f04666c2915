pub mod input;
pub mod reporting;
pub mod runner;
pub mod sink;
pub mod types;
pub mod verification;

pub use input::{generate, DEFAULT_BASE_SEED};
pub use reporting::{format_csv_row, print_summary};
pub use runner::BenchmarkRunner;
pub use sink::{CsvSink, CSV_HEADER};
pub use types::{BenchError, BenchmarkConfig, ResultRow, DISTRIBUTION};
pub use verification::is_sorted;
