mod cli;
mod config;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use mset_io::report::{render_ascii_histogram, write_histogram_file, write_summary_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::run::RunInputs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    config.apply_cli(&cli);

    let inputs = RunInputs {
        universe: cli.universe.clone(),
        list1: cli.list1.clone(),
        list2: cli.list2.clone(),
    };
    let output = run::run(&inputs, &config.simulation)?;

    print!("{}", output.summary.render());
    if config.output.print_histogram {
        println!();
        print!("{}", render_ascii_histogram(&output.histogram));
    }

    if let Some(path) = &config.output.summary {
        write_summary_file(&output.summary, path)
            .with_context(|| format!("writing summary {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }
    if let Some(path) = &config.output.histogram {
        write_histogram_file(&output.histogram, path)
            .with_context(|| format!("writing histogram {}", path.display()))?;
        info!(path = %path.display(), "histogram written");
    }

    Ok(())
}
