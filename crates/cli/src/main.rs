//! Memory access-pattern benchmark CLI.
//!
//! This binary is the process entry point for the harness. It performs:
//! 1. **Run:** Build the record array once and measure each access pattern in turn.
//! 2. **Report:** Print the text report and `CSV_OUTPUT:` block (or JSON) to stdout.
//! 3. **Exit:** Status 0 on success, 1 on allocation or output failure, 2 on an invalid configuration.
//!
//! Every flag is optional; with none the reference workload runs all five patterns.
//! Diagnostics go to stderr so stdout carries only the report.

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use accessbench_core::{BenchConfig, BenchError, Harness, Pattern};

#[derive(Parser, Debug)]
#[command(
    name = "accessbench",
    author,
    version,
    about = "Measure how hardware prefetchers respond to array access orderings",
    long_about = "Walks a record array in five orders (Sequential, Backward, Interleaved, Bouncing, \
                  Random) and reports the median time of the timed passes for each. By default the \
                  array is 128 MiB, every 8th record is visited and each pattern gets 10 timed \
                  passes; --elements and --iterations change those numbers.\n\n\
                  Examples:\n  accessbench\n  accessbench --pattern random --pattern sequential\n  \
                  accessbench --format json --log-level info"
)]
struct Cli {
    /// Pattern to run; repeat to run several. Defaults to all five in report order.
    #[arg(short, long = "pattern", value_parser = parse_pattern)]
    patterns: Vec<Pattern>,

    /// Number of records in the array.
    #[arg(long)]
    elements: Option<usize>,

    /// Untimed passes per pattern.
    #[arg(long)]
    warmup: Option<usize>,

    /// Timed passes per pattern.
    #[arg(long)]
    iterations: Option<usize>,

    /// Seed for the array contents.
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for the Random pattern's permutation.
    #[arg(long)]
    shuffle_seed: Option<u64>,

    /// Output format for stdout.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Diagnostic verbosity on stderr (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text report with the CSV_OUTPUT block.
    Text,
    /// JSON document.
    Json,
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    s.parse::<Pattern>().map_err(|e| e.to_string())
}

impl Cli {
    /// Applies the explicit flags on top of the reference configuration.
    fn config(&self) -> BenchConfig {
        let mut config = BenchConfig::default();
        if let Some(elements) = self.elements {
            config.elements = elements;
        }
        if let Some(warmup) = self.warmup {
            config.warmup_passes = warmup;
        }
        if let Some(iterations) = self.iterations {
            config.measured_passes = iterations;
        }
        if let Some(seed) = self.seed {
            config.data_seed = seed;
        }
        if let Some(seed) = self.shuffle_seed {
            config.shuffle_seed = seed;
        }
        config
    }

    fn patterns(&self) -> Vec<Pattern> {
        if self.patterns.is_empty() {
            Pattern::ALL.to_vec()
        } else {
            self.patterns.clone()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}

/// Installs a stderr `fmt` subscriber filtered at `level`.
///
/// An unparseable level falls back to `warn`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the harness, runs the selected patterns and writes the report.
fn run(cli: &Cli) -> Result<(), BenchError> {
    let mut harness = Harness::new(cli.config())?;
    let report = harness.run(&cli.patterns());

    let rendered = match cli.format {
        Format::Text => report.render_text(),
        Format::Json => report
            .render_json()
            .map(|json| json + "\n")
            .map_err(|e| BenchError::Output(e.to_string()))?,
    };

    write_report(&mut io::stdout().lock(), &rendered)
}

/// Writes `rendered` to `out` and flushes it.
fn write_report<W: Write>(out: &mut W, rendered: &str) -> Result<(), BenchError> {
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| BenchError::Output(e.to_string()))
}
