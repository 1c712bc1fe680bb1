mod args;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sheet2csv::{Config, convert_workbook};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::new(&cli.output, &cli.delimiter).context("invalid arguments")?;
    let written = convert_workbook(&cli.workbook, &config)
        .with_context(|| format!("converting {}", cli.workbook.display()))?;
    info!(files = written.len(), "done");
    Ok(())
}
