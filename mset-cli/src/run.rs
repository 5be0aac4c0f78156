//! One significance run: ingest, count the observed overlap, simulate the null.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use mset_core::{SortedIndices, Summarizable};
use mset_io::{read_gene_list, IndexedList, RunSummary, Universe};
use mset_stats::{
    build_histogram, count_intersection, run_trials_parallel, Histogram, Seed, SimulationConfig,
};
use tracing::info;

/// Input files of a run.
#[derive(Debug, Clone)]
pub struct RunInputs {
    pub universe: PathBuf,
    pub list1: PathBuf,
    pub list2: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub summary: RunSummary,
    pub histogram: Histogram,
}

pub fn run(inputs: &RunInputs, sim: &SimulationConfig) -> Result<RunOutput> {
    sim.validate()?;

    let universe_ids = read_gene_list(&inputs.universe)
        .with_context(|| format!("reading universe {}", inputs.universe.display()))?;
    let universe = Universe::from_gene_list(universe_ids)
        .with_context(|| format!("building universe from {}", inputs.universe.display()))?;

    let list1 = index_list(&universe, &inputs.list1)?;
    let list2 = index_list(&universe, &inputs.list2)?;

    let observed = count_intersection(list1.indices(), list2.indices());
    let (n1, n2, size) = (list1.len(), list2.len(), universe.size());
    info!(universe = size, n1, n2, observed, "observed overlap");

    let seed = sim.seed_policy().resolve();
    let start = Instant::now();
    let results = run_trials_parallel(n1, n2, size, sim.trials, sim.shards, Seed::Fixed(seed))?;
    let histogram = build_histogram(&results);
    info!(
        trials = results.len(),
        shards = sim.shards,
        seed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        histogram = %histogram.summary(),
        "null distribution complete"
    );

    let summary = RunSummary {
        universe_size: size,
        list1_size: n1,
        list2_size: n2,
        list1_missing: list1.missing.len(),
        list2_missing: list2.missing.len(),
        observed_overlap: observed,
        trials: histogram.total_trials(),
        seed,
        null_mean: histogram.mean(),
    };
    Ok(RunOutput { summary, histogram })
}

fn index_list(universe: &Universe, path: &Path) -> Result<IndexedList> {
    let list = read_gene_list(path).with_context(|| format!("reading list {}", path.display()))?;
    Ok(universe.index(&list))
}
