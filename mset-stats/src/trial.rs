//! Null-distribution trials.
//!
//! A trial draws two independent sorted samples of fixed sizes from the same
//! universe and records the size of their intersection. [`TrialRunner`] owns
//! both sample buffers and the generator, so a run of any length performs a
//! single allocation per buffer; each trial overwrites the buffers in place.
//!
//! - [`run_trials`] — sequential run with one generator
//! - [`run_trials_parallel`] — sharded run, one runner per shard

use std::time::{Duration, Instant};

use mset_core::{MsetError, Result};
use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::intersect::count_intersection;
use crate::rng::{rng_from_seed, shard_seed, Seed};
use crate::sample::{check_range, fill_sorted};

/// How many trials run between deadline checks in [`TrialRunner::run_until`].
const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// Reusable state for a sequence of trials with fixed sizes.
///
/// # Example
///
/// ```
/// use mset_stats::rng::Seed;
/// use mset_stats::trial::TrialRunner;
///
/// let mut runner = TrialRunner::new(3, 3, 10, Seed::Fixed(42)).unwrap();
/// let results = runner.run(100).unwrap();
/// assert_eq!(results.len(), 100);
/// assert!(results.iter().all(|&r| r <= 3));
/// ```
#[derive(Debug, Clone)]
pub struct TrialRunner {
    universe: u32,
    sample_a: Vec<u32>,
    sample_b: Vec<u32>,
    seed: u64,
    rng: SmallRng,
}

impl TrialRunner {
    /// Create a runner drawing samples of sizes `n1` and `n2` from
    /// `[0, universe)`.
    ///
    /// # Errors
    ///
    /// Returns [`MsetError::InvalidRange`] if either size exceeds the universe
    /// or the universe exceeds the `u32` index range.
    pub fn new(n1: usize, n2: usize, universe: usize, seed: Seed) -> Result<Self> {
        Self::with_resolved_seed(n1, n2, universe, seed.resolve())
    }

    fn with_resolved_seed(n1: usize, n2: usize, universe: usize, seed: u64) -> Result<Self> {
        check_range(n1, universe)?;
        check_range(n2, universe)?;

        let mut sample_a = Vec::new();
        sample_a.try_reserve_exact(n1)?;
        sample_a.resize(n1, 0);
        let mut sample_b = Vec::new();
        sample_b.try_reserve_exact(n2)?;
        sample_b.resize(n2, 0);

        Ok(Self {
            universe: universe as u32,
            sample_a,
            sample_b,
            seed,
            rng: rng_from_seed(seed),
        })
    }

    /// Size of the first sample.
    pub fn n1(&self) -> usize {
        self.sample_a.len()
    }

    /// Size of the second sample.
    pub fn n2(&self) -> usize {
        self.sample_b.len()
    }

    /// Universe size.
    pub fn universe(&self) -> usize {
        self.universe as usize
    }

    /// The concrete seed this runner's generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The two samples drawn by the most recent trial.
    ///
    /// Both are all zeros before the first trial.
    pub fn last_samples(&self) -> (&[u32], &[u32]) {
        (&self.sample_a, &self.sample_b)
    }

    /// Run one trial and return the intersection size.
    #[inline]
    pub fn trial(&mut self) -> usize {
        fill_sorted(&mut self.sample_a, self.universe, &mut self.rng);
        fill_sorted(&mut self.sample_b, self.universe, &mut self.rng);
        count_intersection(&self.sample_a, &self.sample_b)
    }

    /// Run `num_trials` trials and collect their intersection sizes.
    ///
    /// # Errors
    ///
    /// Returns [`MsetError::ResourceExhaustion`] if the result vector cannot
    /// be allocated.
    pub fn run(&mut self, num_trials: usize) -> Result<Vec<usize>> {
        let mut out = Vec::new();
        self.run_into(num_trials, &mut out)?;
        Ok(out)
    }

    /// Append `num_trials` results to `out`.
    pub fn run_into(&mut self, num_trials: usize, out: &mut Vec<usize>) -> Result<()> {
        out.try_reserve(num_trials)?;
        for _ in 0..num_trials {
            out.push(self.trial());
        }
        Ok(())
    }

    /// Run up to `num_trials` trials, stopping early once `deadline` passes.
    ///
    /// The returned sequence holds every trial that completed; it is shorter
    /// than `num_trials` only when the deadline cut the run short.
    pub fn run_until(&mut self, num_trials: usize, deadline: Instant) -> Result<Vec<usize>> {
        let mut out = Vec::new();
        out.try_reserve(num_trials)?;
        while out.len() < num_trials {
            if Instant::now() >= deadline {
                warn!(
                    completed = out.len(),
                    requested = num_trials,
                    "deadline reached, returning partial trial results"
                );
                break;
            }
            let batch = DEADLINE_CHECK_INTERVAL.min(num_trials - out.len());
            for _ in 0..batch {
                out.push(self.trial());
            }
        }
        Ok(out)
    }

    /// Like [`run_until`](Self::run_until) with a budget relative to now.
    pub fn run_for(&mut self, num_trials: usize, budget: Duration) -> Result<Vec<usize>> {
        self.run_until(num_trials, Instant::now() + budget)
    }
}

/// Run `num_trials` sequential trials with samples of sizes `n1` and `n2`
/// drawn from `[0, universe)`.
///
/// Only the sizes matter: every trial draws fresh samples.
///
/// # Errors
///
/// Returns [`MsetError::InvalidRange`] if `n1` or `n2` exceeds `universe`.
///
/// # Example
///
/// ```
/// use mset_stats::rng::Seed;
/// use mset_stats::trial::run_trials;
///
/// let a = run_trials(3, 3, 10, 5, Seed::Fixed(99)).unwrap();
/// let b = run_trials(3, 3, 10, 5, Seed::Fixed(99)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn run_trials(
    n1: usize,
    n2: usize,
    universe: usize,
    num_trials: usize,
    seed: Seed,
) -> Result<Vec<usize>> {
    let start = Instant::now();
    let mut runner = TrialRunner::new(n1, n2, universe, seed)?;
    debug!(n1, n2, universe, num_trials, seed = runner.seed(), "starting trials");
    let results = runner.run(num_trials)?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "trials finished");
    Ok(results)
}

/// Run `num_trials` trials split across `shards` independent runners.
///
/// Shard `i` gets its own buffers and a generator seeded from the resolved
/// base seed mixed with `i`. Results are concatenated in shard order, so a
/// fixed seed and shard count always give the same sequence, whether or not
/// the `parallel` feature is enabled. With `parallel`, shards run on the
/// rayon pool.
///
/// # Errors
///
/// Returns [`MsetError::InvalidInput`] if `shards` is zero, or
/// [`MsetError::InvalidRange`] under the same conditions as [`run_trials`].
pub fn run_trials_parallel(
    n1: usize,
    n2: usize,
    universe: usize,
    num_trials: usize,
    shards: usize,
    seed: Seed,
) -> Result<Vec<usize>> {
    if shards == 0 {
        return Err(MsetError::InvalidInput(
            "run_trials_parallel: shards must be > 0".into(),
        ));
    }
    check_range(n1, universe)?;
    check_range(n2, universe)?;

    let start = Instant::now();
    let base = seed.resolve();
    let sizes = shard_sizes(num_trials, shards);
    debug!(n1, n2, universe, num_trials, shards, seed = base, "starting sharded trials");

    let run_shard = |(i, &n): (usize, &usize)| -> Result<Vec<usize>> {
        TrialRunner::with_resolved_seed(n1, n2, universe, shard_seed(base, i))?.run(n)
    };

    #[cfg(feature = "parallel")]
    let parts: Vec<Result<Vec<usize>>> = {
        use rayon::prelude::*;
        sizes.par_iter().enumerate().map(run_shard).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let parts: Vec<Result<Vec<usize>>> = sizes.iter().enumerate().map(run_shard).collect();

    let mut results = Vec::new();
    results.try_reserve_exact(num_trials)?;
    for part in parts {
        results.extend(part?);
    }
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "sharded trials finished");
    Ok(results)
}

/// Split `num_trials` into `shards` contiguous counts differing by at most one.
pub fn shard_sizes(num_trials: usize, shards: usize) -> Vec<usize> {
    if shards == 0 {
        return Vec::new();
    }
    let base = num_trials / shards;
    let extra = num_trials % shards;
    (0..shards)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
