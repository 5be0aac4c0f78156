//! Empirical probability mass functions over intersection sizes.
//!
//! A [`Histogram`] is built in two passes: occurrences of each intersection
//! size are tallied, then every tally is divided by the number of trials.
//! Bins iterate in ascending size order.
//!
//! An empty trial sequence yields an empty histogram (no bins, zero trials)
//! rather than an error, since nothing can be normalized.

use std::collections::BTreeMap;

use mset_core::Summarizable;

/// Probability mass per observed intersection size.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    masses: BTreeMap<usize, f64>,
    total_trials: usize,
}

impl Histogram {
    /// Probability mass of `size`, or 0.0 if it was never observed.
    pub fn mass(&self, size: usize) -> f64 {
        self.masses.get(&size).copied().unwrap_or(0.0)
    }

    /// `(size, mass)` pairs in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.masses.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of distinct intersection sizes observed.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Number of trials the histogram was built from.
    pub fn total_trials(&self) -> usize {
        self.total_trials
    }

    /// Smallest observed intersection size.
    pub fn min_size(&self) -> Option<usize> {
        self.masses.keys().next().copied()
    }

    /// Largest observed intersection size.
    pub fn max_size(&self) -> Option<usize> {
        self.masses.keys().next_back().copied()
    }

    /// Mean intersection size, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().map(|(k, p)| k as f64 * p).sum())
    }

    /// Sum of all masses: 1.0 (within rounding) unless empty.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }
}

impl Summarizable for Histogram {
    fn summary(&self) -> String {
        match (self.min_size(), self.max_size(), self.mean()) {
            (Some(lo), Some(hi), Some(mean)) => format!(
                "trials={}, bins={}, range=[{}, {}], mean={:.4}",
                self.total_trials,
                self.len(),
                lo,
                hi,
                mean,
            ),
            _ => "trials=0, bins=0".to_string(),
        }
    }
}

/// Incremental tally of intersection sizes.
///
/// Shards of a parallel run can each tally their own results and
/// [`merge`](Self::merge) them before normalizing.
#[derive(Debug, Clone, Default)]
pub struct HistogramBuilder {
    counts: BTreeMap<usize, usize>,
    total: usize,
}

impl HistogramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trial result.
    pub fn record(&mut self, size: usize) {
        *self.counts.entry(size).or_insert(0) += 1;
        self.total += 1;
    }

    /// Record a sequence of trial results.
    pub fn extend<I: IntoIterator<Item = usize>>(&mut self, results: I) {
        for size in results {
            self.record(size);
        }
    }

    /// Fold another builder's tallies into this one.
    pub fn merge(&mut self, other: HistogramBuilder) {
        for (size, count) in other.counts {
            *self.counts.entry(size).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Number of results recorded so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Raw occurrence count for `size`.
    pub fn count(&self, size: usize) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// Normalize the tallies into a [`Histogram`].
    pub fn finish(self) -> Histogram {
        let total = self.total;
        let masses = if total == 0 {
            BTreeMap::new()
        } else {
            let denom = total as f64;
            self.counts
                .into_iter()
                .map(|(size, count)| (size, count as f64 / denom))
                .collect()
        };
        Histogram {
            masses,
            total_trials: total,
        }
    }
}

/// Build the empirical mass function of a sequence of trial results.
///
/// # Example
///
/// ```
/// use mset_stats::histogram::build_histogram;
///
/// let hist = build_histogram(&[0, 1, 1, 2]);
/// assert_eq!(hist.mass(1), 0.5);
/// assert_eq!(hist.mass(0), 0.25);
/// assert_eq!(hist.total_trials(), 4);
/// ```
pub fn build_histogram(results: &[usize]) -> Histogram {
    let mut builder = HistogramBuilder::new();
    builder.extend(results.iter().copied());
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Seed;
    use crate::trial::run_trials;

    #[test]
    fn empty_input_gives_empty_histogram() {
        let hist = build_histogram(&[]);
        assert!(hist.is_empty());
        assert_eq!(hist.total_trials(), 0);
        assert_eq!(hist.total_mass(), 0.0);
        assert_eq!(hist.mean(), None);
        assert_eq!(hist.min_size(), None);
        assert_eq!(hist.summary(), "trials=0, bins=0");
    }

    #[test]
    fn masses_and_order() {
        let hist = build_histogram(&[3, 1, 3, 3, 0]);
        let bins: Vec<(usize, f64)> = hist.iter().collect();
        assert_eq!(bins, vec![(0, 0.2), (1, 0.2), (3, 0.6)]);
        assert_eq!(hist.mass(2), 0.0);
        assert_eq!(hist.min_size(), Some(0));
        assert_eq!(hist.max_size(), Some(3));
        assert!((hist.mean().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_value() {
        let hist = build_histogram(&[4; 10]);
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.mass(4), 1.0);
    }

    #[test]
    fn merge_matches_concatenation() {
        let left = [0, 1, 2, 2];
        let right = [2, 3, 3];
        let mut a = HistogramBuilder::new();
        a.extend(left);
        let mut b = HistogramBuilder::new();
        b.extend(right);
        a.merge(b);
        assert_eq!(a.total(), 7);
        assert_eq!(a.count(2), 3);

        let all: Vec<usize> = left.iter().chain(right.iter()).copied().collect();
        assert_eq!(a.finish(), build_histogram(&all));
    }

    #[test]
    fn summary_line() {
        let hist = build_histogram(&[1, 2]);
        assert_eq!(hist.summary(), "trials=2, bins=2, range=[1, 2], mean=1.5000");
    }

    #[test]
    fn simulated_histogram_is_normalized_and_bounded() {
        let (n1, n2, universe) = (8, 5, 30);
        let results = run_trials(n1, n2, universe, 5_000, Seed::Fixed(21)).unwrap();
        let hist = build_histogram(&results);
        assert!((hist.total_mass() - 1.0).abs() < 1e-9);
        assert!(hist.iter().all(|(k, p)| k <= n1.min(n2) && (0.0..=1.0).contains(&p)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn masses_sum_to_one(results in proptest::collection::vec(0usize..50, 1..500)) {
                let hist = build_histogram(&results);
                prop_assert!((hist.total_mass() - 1.0).abs() < 1e-9);
                prop_assert_eq!(hist.total_trials(), results.len());
            }

            #[test]
            fn order_does_not_matter(mut results in proptest::collection::vec(0usize..20, 0..200)) {
                let forward = build_histogram(&results);
                results.reverse();
                prop_assert_eq!(forward, build_histogram(&results));
            }
        }
    }
}
