//! trec-tally CLI
//!
//! Prints the aggregate P10, P20, P30 and MAP of a `trec_eval` report, then
//! the per-query MAP win/loss count against the baseline run.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use trec_tally::{baseline::Baseline, config::Config, scanner::scan_file};

/// trec-tally - compare a trec_eval report against the baseline run
#[derive(Parser)]
#[command(name = "trec-tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the trec_eval report (defaults to the configured path, `tmpout`)
    report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(report) = cli.report {
        config = config.with_report(report);
    }

    let summary = scan_file(&config.report.path, &Baseline::default()).with_context(|| {
        format!(
            "Failed to scan report '{}'",
            config.report.path.display()
        )
    })?;

    print!("{}", summary);

    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.init();
}
