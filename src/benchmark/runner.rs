use super::input;
use super::sink::CsvSink;
use super::types::{BenchError, BenchmarkConfig, ResultRow, DISTRIBUTION};
use super::verification::is_sorted;
use crate::sort::{self, AlgorithmSpec};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Drives a size/repetition sweep for one algorithm: generates datasets, times
/// each sort, validates the postcondition, back-fills per-size averages, and
/// hands the accumulated rows to the sink in every terminal state.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    sink: CsvSink,
    cancel: Arc<AtomicBool>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig, sink: CsvSink, cancel: Arc<AtomicBool>) -> Self {
        Self {
            config,
            sink,
            cancel,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Resolves `id` against the registry and runs the sweep. An unknown id
    /// fails before any dataset is generated or timed.
    pub fn run_id(&self, id: &str) -> Result<Vec<ResultRow>, BenchError> {
        let algorithm =
            sort::resolve(id).ok_or_else(|| BenchError::UnknownAlgorithm(id.to_string()))?;
        self.run(algorithm)
    }

    /// Runs the full sweep. Whatever rows exist when the sweep ends — normal
    /// completion, correctness abort, or cancellation — reach the sink before
    /// this returns; a sweep error takes precedence over a flush error.
    pub fn run(&self, algorithm: &AlgorithmSpec) -> Result<Vec<ResultRow>, BenchError> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let mut rows = Vec::new();

        self.print_header(algorithm);
        let sweep = self.sweep(algorithm, &timestamp, &mut rows);
        let flush = self.sink.append(&rows);

        sweep?;
        flush?;
        Ok(rows)
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    fn print_header(&self, algorithm: &AlgorithmSpec) {
        println!("=== BENCHMARK: {} ===", algorithm.name);
        println!("Sizes: {:?}", self.config.sizes);
        println!("Repetitions per size: {}", self.config.repetitions);
        println!("Distribution: {}\n", DISTRIBUTION);
    }

    fn sweep(
        &self,
        algorithm: &AlgorithmSpec,
        timestamp: &str,
        rows: &mut Vec<ResultRow>,
    ) -> Result<(), BenchError> {
        'sizes: for &size in &self.config.sizes {
            println!("-> Size: {}", size);
            let bucket_start = rows.len();

            for repetition in 1..=self.config.repetitions {
                if self.cancelled() {
                    println!("\n[interrupted] flushing partial results...");
                    break 'sizes;
                }

                let mut data = input::generate(size, repetition, self.config.base_seed);

                let start = Instant::now();
                (algorithm.sort)(&mut data);
                let time_ms = start.elapsed().as_secs_f64() * 1000.0;

                if !is_sorted(&data) {
                    return Err(BenchError::CorrectnessViolation {
                        algorithm: algorithm.name.to_string(),
                        size,
                        repetition,
                    });
                }

                println!("   Repetition {}: {:.3} ms", repetition, time_ms);
                rows.push(ResultRow {
                    algorithm: algorithm.name.to_string(),
                    size,
                    distribution: DISTRIBUTION,
                    repetition,
                    time_ms,
                    average_ms: None,
                    timestamp: timestamp.to_string(),
                });
            }

            // Average only a completed bucket; rows of a bucket cut short by
            // cancellation keep their average unset.
            let bucket = &mut rows[bucket_start..];
            if bucket.len() == self.config.repetitions as usize {
                let mean = bucket.iter().map(|r| r.time_ms).sum::<f64>() / bucket.len() as f64;
                for row in bucket.iter_mut() {
                    row.average_ms = Some(mean);
                }
                println!("   Average: {:.3} ms\n", mean);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::input::{generate, DEFAULT_BASE_SEED};
    use tempfile::TempDir;

    fn runner(dir: &TempDir, sizes: Vec<usize>, repetitions: u32) -> BenchmarkRunner {
        let path = dir.path().join("results.csv");
        let config = BenchmarkConfig {
            sizes,
            repetitions,
            base_seed: DEFAULT_BASE_SEED,
            output_path: path.clone(),
        };
        BenchmarkRunner::new(config, CsvSink::new(path), Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = runner(&dir, vec![10], 1).run_id("bogo").unwrap_err();
        assert!(matches!(err, BenchError::UnknownAlgorithm(id) if id == "bogo"));
    }

    #[test]
    fn sweep_emits_one_row_per_repetition() {
        let dir = TempDir::new().unwrap();
        let rows = runner(&dir, vec![10, 20], 3).run_id("insertion").unwrap();

        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows.iter().map(|r| (r.size, r.repetition)).collect::<Vec<_>>(),
            vec![(10, 1), (10, 2), (10, 3), (20, 1), (20, 2), (20, 3)]
        );
        assert!(rows.iter().all(|r| r.algorithm == "Insertion Sort"));
        assert!(rows.iter().all(|r| r.time_ms >= 0.0));
        // One invocation, one timestamp.
        assert!(rows.iter().all(|r| r.timestamp == rows[0].timestamp));
    }

    #[test]
    fn average_is_backfilled_into_every_bucket_row() {
        let dir = TempDir::new().unwrap();
        let rows = runner(&dir, vec![50], 3).run_id("merge").unwrap();

        let mean = rows.iter().map(|r| r.time_ms).sum::<f64>() / rows.len() as f64;
        for row in &rows {
            let avg = row.average_ms.expect("completed bucket must be averaged");
            assert!((avg - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn single_repetition_average_equals_its_own_time() {
        let dir = TempDir::new().unwrap();
        let rows = runner(&dir, vec![0, 1, 5], 1).run_id("insertion").unwrap();

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.average_ms, Some(row.time_ms));
        }

        // Size 5, repetition 1 comes from seed 2025 + 5*10 + 1 = 2075; the
        // benchmark must have left exactly its ascending permutation behind.
        let mut expected = generate(5, 1, DEFAULT_BASE_SEED);
        expected.sort();
        let mut data = generate(5, 1, DEFAULT_BASE_SEED);
        crate::sort::insertion::sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn cancelled_runner_emits_no_rows_but_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let config = BenchmarkConfig {
            sizes: vec![100],
            repetitions: 3,
            base_seed: DEFAULT_BASE_SEED,
            output_path: path.clone(),
        };
        let cancel = Arc::new(AtomicBool::new(true));
        let runner = BenchmarkRunner::new(config, CsvSink::new(&path), cancel);

        let rows = runner.run_id("quick").unwrap();
        assert!(rows.is_empty());
        // Zero rows means the sink never touched the filesystem.
        assert!(!path.exists());
    }

    #[test]
    fn completed_sweep_is_flushed_to_the_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let config = BenchmarkConfig {
            sizes: vec![10],
            repetitions: 2,
            base_seed: DEFAULT_BASE_SEED,
            output_path: path.clone(),
        };
        let runner = BenchmarkRunner::new(
            config,
            CsvSink::new(&path),
            Arc::new(AtomicBool::new(false)),
        );

        runner.run_id("heap").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3); // header + 2 rows
    }
}
