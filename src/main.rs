use anyhow::Context;
use cabinetkit::{init_logging, load_job, run_job};
use clap::Parser;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser, Debug)]
#[command(name = "cabinetkit")]
#[command(about = "Cut lists and material estimates for frameless kitchen cabinets")]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    /// Job file (JSON) with cabinets, materials and settings
    job: PathBuf,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let job = load_job(&cli.job)?;
    let base_dir = cli.job.parent().unwrap_or_else(|| Path::new("."));
    let output = run_job(&job, base_dir)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize the report")?;
    println!("{json}");

    Ok(())
}
