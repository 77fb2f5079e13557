//! Monte Carlo CLI: emit the squared-error chart of the PageRank approximations.

use anyhow::Result;
use clap::Parser;
use ireval::{
    montecarlo::{SquaredErrorTable, SAMPLE_RATIOS},
    Config, OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "montecarlo")]
#[command(about = "Squared error of Monte Carlo PageRank methods against sample ratio")]
struct Args {
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

    let table = SquaredErrorTable::measured();
    for ratio in SAMPLE_RATIOS {
        if let Some((method, error)) = table.best_method(ratio) {
            log::info!("N={}: lowest error {:e} from {}", ratio, error, method.label());
        }
    }

    let format = args.format.unwrap_or(config.output.format);
    print!("{}", table.chart().render(format, config.output.decimals)?);

    Ok(())
}
