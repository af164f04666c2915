use super::types::ResultRow;

/// One CSV data line in store column order. Durations carry exactly three
/// fraction digits; an unset average is an empty field.
pub fn format_csv_row(row: &ResultRow) -> String {
    let average = row
        .average_ms
        .map(|avg| format!("{:.3}", avg))
        .unwrap_or_default();
    format!(
        "{},{},{},{},{:.3},{},{}",
        row.algorithm,
        row.size,
        row.distribution,
        row.repetition,
        row.time_ms,
        average,
        row.timestamp
    )
}

/// Prints the per-size summary table for a completed (or partial) sweep.
pub fn print_summary(rows: &[ResultRow]) {
    if rows.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(76));
    println!("Benchmark Results Summary");
    println!("{}", "=".repeat(76));
    println!(
        "{:<20} {:<10} {:<14} {:<6} {:<12} {:<12}",
        "Algorithm", "Size", "Distribution", "Reps", "Avg (ms)", "Best (ms)"
    );
    println!("{}", "-".repeat(76));

    // Sizes in first-seen order; one line per bucket.
    let mut seen: Vec<usize> = Vec::new();
    for row in rows {
        if !seen.contains(&row.size) {
            seen.push(row.size);
        }
    }
    for size in seen {
        let bucket: Vec<&ResultRow> = rows.iter().filter(|r| r.size == size).collect();
        let best = bucket
            .iter()
            .map(|r| r.time_ms)
            .fold(f64::INFINITY, f64::min);
        let average = match bucket[0].average_ms {
            Some(avg) => format!("{:.3}", avg),
            None => "incomplete".to_string(),
        };
        println!(
            "{:<20} {:<10} {:<14} {:<6} {:<12} {:<12.3}",
            bucket[0].algorithm,
            size,
            bucket[0].distribution,
            bucket.len(),
            average,
            best
        );
    }
    println!("{}", "=".repeat(76));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::types::DISTRIBUTION;

    fn row(time_ms: f64, average_ms: Option<f64>) -> ResultRow {
        ResultRow {
            algorithm: "Heap Sort".to_string(),
            size: 100,
            distribution: DISTRIBUTION,
            repetition: 1,
            time_ms,
            average_ms,
            timestamp: "2026-01-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn durations_carry_three_fraction_digits() {
        let line = format_csv_row(&row(0.1234, Some(12.0)));
        assert_eq!(line, "Heap Sort,100,Random,1,0.123,12.000,2026-01-01 12:00:00");
    }

    #[test]
    fn pending_average_is_empty_field() {
        let line = format_csv_row(&row(1.0, None));
        assert_eq!(line, "Heap Sort,100,Random,1,1.000,,2026-01-01 12:00:00");
    }

    #[test]
    fn average_rounds_not_truncates() {
        let line = format_csv_row(&row(2.0006, Some(2.0006)));
        assert!(line.contains("2.001,2.001,"));
    }
}
