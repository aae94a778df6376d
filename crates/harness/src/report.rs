//! Result reporting.
//!
//! This module turns per-pattern medians into output. It provides:
//! 1. **Text:** The human-readable header and one aligned line per pattern.
//! 2. **CSV:** The `CSV_OUTPUT:` block consumed by downstream comparison tooling.
//! 3. **JSON:** The same report as a serialized document.
//! 4. **Parsing:** Recovery of the CSV rows from captured output.
//!
//! The text layout, the `CSV_OUTPUT:` marker, the `Pattern,Time_ms` header and
//! the row order are a contract with external tooling and must not change.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::BenchConfig;
use crate::pattern::Pattern;
use crate::store::Record;

/// Marker line that precedes the CSV block.
pub const CSV_MARKER: &str = "CSV_OUTPUT:";

/// Column header of the CSV block.
pub const CSV_HEADER: &str = "Pattern,Time_ms";

/// Median time of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternResult {
    /// Pattern that was measured.
    pub pattern: Pattern,
    /// Median of the measured passes, in milliseconds.
    pub median_ms: f64,
}

/// Everything printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// First line of the text output.
    pub title: String,
    /// Number of records in the array.
    pub elements: usize,
    /// Size of one record in bytes.
    pub record_bytes: usize,
    /// Records between visited offsets.
    pub stride: usize,
    /// Timed passes per pattern.
    pub measured_passes: usize,
    /// Per-pattern medians, in run order.
    pub results: Vec<PatternResult>,
}

impl Report {
    /// Creates an empty report describing the workload in `config`.
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            title: config.title.clone(),
            elements: config.elements,
            record_bytes: Record::SIZE,
            stride: config.stride,
            measured_passes: config.measured_passes,
            results: Vec::new(),
        }
    }

    /// Appends one pattern's result.
    pub fn push(&mut self, result: PatternResult) {
        self.results.push(result);
    }

    /// Size of the record array in MiB.
    pub fn size_mib(&self) -> f64 {
        (self.elements * self.record_bytes) as f64 / (1024.0 * 1024.0)
    }

    /// Renders the full standard-output report.
    ///
    /// ```text
    /// Memory Access Pattern Benchmark (Rust)
    /// Array size: 4194304 elements (128.0 MiB)
    /// Accessing every 8th element, 10 iterations
    ///
    ///   Sequential:    12.34 ms
    ///   ...
    ///
    /// CSV_OUTPUT:
    /// Pattern,Time_ms
    /// Sequential,12.34
    /// ...
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(
            out,
            "Array size: {} elements ({:.1} MiB)",
            self.elements,
            self.size_mib()
        );
        let _ = writeln!(
            out,
            "Accessing every {} element, {} iterations",
            ordinal(self.stride),
            self.measured_passes
        );
        out.push('\n');

        for result in &self.results {
            let _ = writeln!(out, "{:>12}: {:>8.2} ms", result.pattern.name(), result.median_ms);
        }

        out.push('\n');
        let _ = writeln!(out, "{CSV_MARKER}");
        out.push_str(&self.render_csv());
        out
    }

    /// Renders only the CSV block: header plus one row per result.
    pub fn render_csv(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{CSV_HEADER}");
        for result in &self.results {
            let _ = writeln!(out, "{},{:.2}", result.pattern.name(), result.median_ms);
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates any serializer failure.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Extracts `(pattern, time)` rows from the block following [`CSV_MARKER`].
///
/// Mirrors the downstream reader: everything before the marker is ignored, the
/// header line is skipped, and lines that are blank, lack a comma, or carry an
/// unparseable time are dropped.
pub fn parse_csv_output(text: &str) -> Vec<(String, f64)> {
    text.lines()
        .skip_while(|line| !line.contains(CSV_MARKER))
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != CSV_HEADER)
        .filter_map(|line| {
            let (name, time) = line.split_once(',')?;
            let time = time.trim().parse::<f64>().ok()?;
            Some((name.trim().to_string(), time))
        })
        .collect()
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, …
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
