use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use classdist_compare::{ClassMap, CompareConfig, ComparisonReport};
use classdist_io::{OutputName, run_comparison};

#[derive(Parser)]
#[command(name = "classdist")]
#[command(about = "Average Manhattan and banded DTW distances between labeled time-series classes")]
#[command(version)]
struct Cli {
    /// Directory holding the input matrix
    #[arg(long)]
    data_dir: PathBuf,

    /// Input file name inside --data-dir
    #[arg(long, default_value = "ECG200_TRAIN.txt")]
    input_name: String,

    /// Output directory (created if missing)
    #[arg(long)]
    output_dir: PathBuf,

    /// Output table file name inside --output-dir
    #[arg(long, default_value = "timeseries_output.txt")]
    output_name: String,

    /// Sakoe-Chiba band width, repeatable; "inf" disables the band
    #[arg(
        long = "band",
        value_name = "WIDTH",
        default_values = ["0", "10", "25", "inf"],
        allow_negative_numbers = true
    )]
    bands: Vec<String>,

    /// Class mapping as NAME=LABEL, repeatable; order sets the row order
    #[arg(long = "class", value_name = "NAME=LABEL", default_values = ["abnormal=-1", "normal=1"])]
    classes: Vec<String>,

    /// Evaluate series pairs in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct RunOutput {
    input: PathBuf,
    output: PathBuf,
    n_rows: usize,
    n_unmapped: usize,
    series_len: usize,
    bands: Vec<String>,
    pairs: Vec<PairOutput>,
}

/// Non-finite averages serialize as `null`.
#[derive(Serialize)]
struct PairOutput {
    pair: String,
    n_pairs: usize,
    n_skipped: usize,
    manhattan: f64,
    dtw: Vec<f64>,
}

fn pair_outputs(report: &ComparisonReport) -> Vec<PairOutput> {
    report
        .pairs
        .iter()
        .map(|p| PairOutput {
            pair: p.label(),
            n_pairs: p.n_pairs,
            n_skipped: p.n_skipped,
            manhattan: p.averages.manhattan(),
            dtw: p.averages.dtw().to_vec(),
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    // Validate every setting before touching the filesystem.
    let classes = ClassMap::parse(&cli.classes).context("invalid --class mapping")?;
    let config = CompareConfig::parse(&cli.bands)
        .context("invalid --band list")?
        .with_parallel(cli.parallel);
    let output_name = OutputName::new(cli.output_name).context("invalid --output-name")?;

    let input = cli.data_dir.join(&cli.input_name);
    let run = run_comparison(&input, &classes, &config, &cli.output_dir, output_name)
        .with_context(|| format!("comparison of {} failed", input.display()))?;

    let output = RunOutput {
        input,
        output: run.output,
        n_rows: run.n_rows,
        n_unmapped: run.n_unmapped,
        series_len: run.series_len,
        bands: run.report.bands.iter().map(ToString::to_string).collect(),
        pairs: pair_outputs(&run.report),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
