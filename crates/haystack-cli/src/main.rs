//! Benchmark driver: model selection, environment loading, sweep invocation.

mod providers;
mod sink;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use haystack_core::{run_sweep, HaystackConfig};
use tracing::info;

/// Needle-in-a-haystack context retrieval benchmark.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Model to benchmark; omit to pick interactively.
    #[arg(long)]
    model: Option<String>,

    /// Trials per tier (falls back to the RUNS env var, then 10).
    #[arg(long)]
    runs: Option<u32>,

    /// Directory for per-model CSV results.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let runs = args
        .runs
        .or_else(|| std::env::var("RUNS").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(10);

    let model_name = match args.model {
        Some(name) => name,
        None => choose_model()?,
    };

    let provider = providers::build(&model_name)?;
    info!(model = %model_name, runs, "starting sweep");

    let config = HaystackConfig::default();
    let mut sink = sink::CsvSink::new(&args.data_dir);
    let points = run_sweep(provider.as_ref(), &config, runs, &mut sink).await?;

    info!(
        tiers = points.len(),
        data_dir = %args.data_dir.display(),
        "sweep complete"
    );
    Ok(())
}

/// Numbered stdin picker over every adapter's catalog.
fn choose_model() -> Result<String> {
    let catalog = providers::catalog();
    eprintln!("Pick a model:");
    for (index, (vendor, spec)) in catalog.iter().enumerate() {
        eprintln!(
            "  {:>2}. {} ({}, {} tokens)",
            index + 1,
            spec.name,
            vendor,
            spec.max_tokens
        );
    }
    eprint!("> ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let choice: usize = line.trim().parse().context("expected a model number")?;
    let (_, spec) = choice
        .checked_sub(1)
        .and_then(|i| catalog.get(i))
        .context("model number out of range")?;
    Ok(spec.name.to_string())
}
