use clap::Parser;
use sortbench::benchmark::{print_summary, DEFAULT_BASE_SEED};
use sortbench::benchmark::types::DEFAULT_OUTPUT_PATH;
use sortbench::{sort, BenchmarkConfig, BenchmarkRunner, CsvSink};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "sortbench", about = "Benchmark one classic sorting algorithm over reproducible random datasets")]
struct SortbenchArgs {
    /// Algorithm to benchmark: insertion | selection | bubble | merge | heap | quick
    algorithm: String,

    /// Comma-separated dataset sizes, swept in order
    #[arg(long, value_delimiter = ',', default_value = "100,50000,200000")]
    sizes: Vec<usize>,

    /// Timed repetitions per size
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    reps: u32,

    /// Path of the append-only CSV result store
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Base seed combined with size and repetition to derive dataset seeds
    #[arg(long, default_value_t = DEFAULT_BASE_SEED)]
    seed: u64,
}

fn main() -> ExitCode {
    let args = SortbenchArgs::parse();

    let Some(algorithm) = sort::resolve(&args.algorithm) else {
        eprintln!("Unknown algorithm: {}", args.algorithm);
        eprintln!("Valid algorithms: {}", sort::algorithm_ids().join(" | "));
        return ExitCode::from(2);
    };

    // Ctrl-C stops issuing repetitions; rows gathered so far still reach the
    // store.
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        if let Err(e) = ctrlc::set_handler(move || cancel.store(true, Ordering::SeqCst)) {
            eprintln!("Warning: could not install Ctrl-C handler: {}", e);
        }
    }

    let output_path = args.output.clone();
    let config = BenchmarkConfig {
        sizes: args.sizes,
        repetitions: args.reps,
        base_seed: args.seed,
        output_path: args.output,
    };
    let sink = CsvSink::new(output_path.clone());
    let runner = BenchmarkRunner::new(config, sink, cancel);

    match runner.run(algorithm) {
        Ok(rows) => {
            print_summary(&rows);
            if rows.is_empty() {
                println!("No results to save.");
            } else {
                println!("Results appended to {}.", output_path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
