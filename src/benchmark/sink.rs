use super::reporting::format_csv_row;
use super::types::{BenchError, ResultRow};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header line of the result store, in column order.
pub const CSV_HEADER: &str = "algorithm,size,distribution,repetition,time_ms,average_ms,timestamp";

/// Append-only CSV result store. Prior content is never rewritten or
/// reordered; independent invocations accumulate into the same file.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `rows`, writing the header first iff the store file does not
    /// exist yet. A call with zero rows performs no I/O at all.
    pub fn append(&self, rows: &[ResultRow]) -> Result<(), BenchError> {
        if rows.is_empty() {
            return Ok(());
        }
        let write_header = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if write_header {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        for row in rows {
            writeln!(file, "{}", format_csv_row(row))?;
        }
        Ok(())
    }
}
