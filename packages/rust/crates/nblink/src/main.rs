//! nblink CLI: add "Open in Colab" links to every notebook under a root.
//!
//! Logging: set `RUST_LOG=nblink=debug` (or `warn`) to adjust stderr logs.
//! Exit status: 0 on success, 1 if any notebook failed, 2 on bad configuration.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nblink::{BatchReport, LinkInjector, TracingReporter, run_batch};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "nblink=debug,nblink_io=debug"
        } else {
            "nblink=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match run(&cli) {
        Ok(report) => {
            println!("{}", report.summary_line());
            if report.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<BatchReport> {
    let injector = LinkInjector::new(cli.injector_config()).context("invalid configuration")?;
    let config = cli.batch_config();
    config.validate().context("invalid configuration")?;

    let mut reporter = TracingReporter;
    Ok(run_batch(&injector, &config, &mut reporter))
}
