//! Precision/recall CLI: evaluate every run in a relevance judgment file.

use anyhow::{Context, Result};
use clap::Parser;
use ireval::{
    eval::RelevanceAccumulator,
    judgments::load_judgments,
    Config, OutputFormat,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "precision-recall")]
#[command(about = "Compute precision and recall per retrieval run from relevance judgments")]
struct Args {
    /// Judgment file (default: input.judgments_path from config).
    #[arg(short, long)]
    judgments: Option<PathBuf>,

    /// Size of every run's ground-truth relevant set (default: 100).
    #[arg(long)]
    total_relevant: Option<u32>,

    /// Retrieved documents between trend snapshots (default: 10).
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Also emit the precision/recall trend over retrieved documents.
    #[arg(short, long)]
    trend: bool,

    /// Output format (default: output.format from config).
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.log_level.as_str())
    ).init();

    let path = args
        .judgments
        .unwrap_or_else(|| config.judgments_path().to_path_buf());
    let total_relevant = args
        .total_relevant
        .unwrap_or(config.evaluation.total_relevant);
    let snapshot_interval = args
        .snapshot_interval
        .unwrap_or(config.evaluation.snapshot_interval);
    let format = args.format.unwrap_or(config.output.format);
    let decimals = config.output.decimals;

    if total_relevant == 0 {
        anyhow::bail!("--total-relevant must be greater than 0");
    }

    let (records, source) = load_judgments(&path, &config.input.comment_prefix)
        .with_context(|| format!("Failed to load judgments from {}", path.display()))?;
    if records.is_empty() {
        anyhow::bail!("No judgment records in {}", path.display());
    }

    let mut accumulator = RelevanceAccumulator::new(total_relevant)
        .with_snapshot_interval(snapshot_interval)
        .context("Invalid --snapshot-interval")?;
    accumulator.accumulate(&records)?;

    let report = accumulator
        .summarize()?
        .with_source(source)
        .stamped();

    log::info!(
        "Evaluated {} runs over {} records (total relevant per run: {})",
        report.runs.len(),
        report.total_records,
        total_relevant
    );
    for run in &report.runs {
        log::debug!("{}", run.describe(decimals));
    }

    if !args.trend {
        print!("{}", report.render(format, decimals)?);
        return Ok(());
    }

    let chart = report.trend_chart();
    match format {
        OutputFormat::Json => {
            let combined = serde_json::json!({ "report": report, "trend": chart });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        _ => {
            print!("{}", report.render(format, decimals)?);
            println!();
            print!("{}", chart.render(format, decimals)?);
        }
    }

    Ok(())
}
