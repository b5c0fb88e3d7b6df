//! vacsim: sweep the on/off-server queue over a parameter grid.
//!
//! Reads a JSON sweep configuration, runs every combination the configured
//! number of times, and writes `results.json` and `results.csv` to the output
//! directory.  A missing or malformed configuration falls back to the
//! built-in defaults.  Logs go to stdout and, with thread names, to
//! `simulation.log`.
//!
//! ```text
//! vacsim --config config/config.json --out-dir output --log-level debug
//! RUST_LOG=vq_engine=trace vacsim        # every event of every run
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use vq_core::SweepConfig;
use vq_engine::Metric;
use vq_output::{CsvWriter, JsonWriter, OutputWriter};
use vq_stats::ConfidenceLevel;
use vq_sweep::{CombinationResult, SweepDriver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "vacsim")]
#[command(version, about = "On/off-server queue simulator", long_about = None)]
struct Cli {
    /// Path to the JSON sweep configuration
    #[arg(short, long, default_value = "config/config.json")]
    config: PathBuf,

    /// Directory for results.json and results.csv
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log file, written alongside stdout
    #[arg(long, default_value = "simulation.log")]
    log_file: PathBuf,
}

fn init_logging(level: &str, log_file: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(file_layer(log_file)?)
        .with(filter)
        .init();
    Ok(())
}

/// Plain-text sink for `path`; every line carries the emitting thread's name.
fn file_layer<S>(path: &Path) -> Result<impl Layer<S>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .with_target(true))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_file)?;

    // 1. Configuration.
    let config = SweepConfig::load(&cli.config);
    let driver = SweepDriver::new(config).context("invalid sweep configuration")?;
    info!(
        config       = %cli.config.display(),
        combinations = driver.combinations().len(),
        "configuration ready"
    );

    // 2. Sweep.
    let t0 = Instant::now();
    let results = driver.run()?;
    let elapsed = t0.elapsed();

    // 3. Output.
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let mut json = JsonWriter::new(&cli.out_dir)?;
    let mut csv = CsvWriter::new(&cli.out_dir)?;
    for writer in [&mut json as &mut dyn OutputWriter, &mut csv] {
        writer.write_results(&results)?;
        writer.finish()?;
    }
    info!(
        json = %json.path().display(),
        csv  = %csv.path().display(),
        "results written"
    );

    // 4. Summary.
    println!("Sweep complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    print_table(&results);
    Ok(())
}

fn print_table(results: &[CombinationResult]) {
    println!(
        "{:<8} {:<8} {:<8} {:<4} {:>12} {:>12} {:>25}",
        "mi", "lam", "rho", "srv", "system_time", "real", "95% CI"
    );
    println!("{}", "-".repeat(83));
    for r in results {
        let fmt_opt = |v: Option<f64>| v.map(|x| format!("{x:.4}")).unwrap_or_else(|| "-".into());
        let ci = r
            .interval(Metric::MeanSystemTime, ConfidenceLevel::P95)
            .map(|c| format!("[{:.4}, {:.4}]", c.low, c.high))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<8} {:<8.3} {:<8.3} {:<4} {:>12} {:>12} {:>25}",
            r.params.mi,
            r.params.lam,
            r.rho(),
            r.params.servers,
            fmt_opt(r.means.get(Metric::MeanSystemTime)),
            fmt_opt(r.theoretical.get(Metric::MeanSystemTime)),
            ci,
        );
    }
}
