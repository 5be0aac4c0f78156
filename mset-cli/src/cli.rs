use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mset")]
#[command(about = "Monte Carlo significance test for the overlap of two identifier lists")]
#[command(version)]
pub struct Cli {
    /// Universe identifiers, one per line
    #[arg(short, long, value_name = "FILE")]
    pub universe: PathBuf,

    /// First identifier list
    #[arg(long, value_name = "FILE")]
    pub list1: PathBuf,

    /// Second identifier list
    #[arg(long, value_name = "FILE")]
    pub list2: PathBuf,

    /// TOML configuration file; command-line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of null trials
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Fixed seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of independent shards to split the trials across
    #[arg(short = 'j', long)]
    pub shards: Option<usize>,

    /// Write the run summary as TSV
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the null histogram as TSV
    #[arg(long, value_name = "FILE")]
    pub hist_output: Option<PathBuf>,

    /// Do not print the ASCII histogram
    #[arg(long)]
    pub no_hist: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from([
            "mset", "-u", "u.txt", "--list1", "a.txt", "--list2", "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.universe, PathBuf::from("u.txt"));
        assert!(cli.trials.is_none());
        assert!(!cli.no_hist);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "mset", "-u", "u.txt", "--list1", "a.txt", "--list2", "b.txt", "-t", "500", "-s",
            "9", "-j", "4", "--no-hist",
        ])
        .unwrap();
        assert_eq!(cli.trials, Some(500));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.shards, Some(4));
        assert!(cli.no_hist);
    }

    #[test]
    fn lists_are_required() {
        assert!(Cli::try_parse_from(["mset", "-u", "u.txt"]).is_err());
    }
}
