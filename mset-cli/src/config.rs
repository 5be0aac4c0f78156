//! TOML configuration file, merged with command-line flags.
//!
//! ```toml
//! [simulation]
//! trials = 50000
//! seed = 42
//! shards = 4
//!
//! [output]
//! summary = "summary.tsv"
//! histogram = "histogram.tsv"
//! print_histogram = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mset_stats::SimulationConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Summary TSV destination.
    pub summary: Option<PathBuf>,
    /// Histogram TSV destination.
    pub histogram: Option<PathBuf>,
    /// Print the ASCII histogram to stdout.
    pub print_histogram: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary: None,
            histogram: None,
            print_histogram: true,
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay the flags that were given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(trials) = cli.trials {
            self.simulation.trials = trials;
        }
        if cli.seed.is_some() {
            self.simulation.seed = cli.seed;
        }
        if let Some(shards) = cli.shards {
            self.simulation.shards = shards;
        }
        if cli.output.is_some() {
            self.output.summary = cli.output.clone();
        }
        if cli.hist_output.is_some() {
            self.output.histogram = cli.hist_output.clone();
        }
        if cli.no_hist {
            self.output.print_histogram = false;
        }
    }
}
