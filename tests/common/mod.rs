#![allow(dead_code)]

use sortbench::{BenchmarkConfig, BenchmarkRunner, CsvSink, DEFAULT_BASE_SEED};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub fn runner_for(path: &Path, sizes: Vec<usize>, repetitions: u32) -> BenchmarkRunner {
    let config = BenchmarkConfig {
        sizes,
        repetitions,
        base_seed: DEFAULT_BASE_SEED,
        output_path: path.to_path_buf(),
    };
    BenchmarkRunner::new(
        config,
        CsvSink::new(path),
        Arc::new(AtomicBool::new(false)),
    )
}

pub fn store_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("result store should exist")
        .lines()
        .map(str::to_string)
        .collect()
}
