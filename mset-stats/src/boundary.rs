//! Adapters from caller-supplied integer collections to kernel sequences.
//!
//! Bindings and other callers hand over plain signed integers. These helpers
//! validate every element against the `u32` index range, copy into an owned
//! buffer, and sort and deduplicate so the result satisfies the intersection
//! counter's precondition.

use mset_core::{MsetError, Result};
use rand::Rng;

use crate::intersect::count_intersection;
use crate::sample::{check_range, fill_sorted};

/// Convert caller values into a sorted, duplicate-free index sequence.
///
/// # Errors
///
/// Returns [`MsetError::InvalidRange`] if any value is negative or larger than
/// `u32::MAX`.
///
/// # Example
///
/// ```
/// use mset_stats::boundary::indices_from_values;
///
/// assert_eq!(indices_from_values(&[3, 1, 3, 2]).unwrap(), vec![1, 2, 3]);
/// assert!(indices_from_values(&[1, -1]).is_err());
/// ```
pub fn indices_from_values(values: &[i64]) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    out.try_reserve_exact(values.len())?;
    for (pos, &v) in values.iter().enumerate() {
        let idx = u32::try_from(v).map_err(|_| {
            MsetError::InvalidRange(format!(
                "value {} at position {} is outside [0, {}]",
                v,
                pos,
                u32::MAX,
            ))
        })?;
        out.push(idx);
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

/// Intersection size of two caller collections after normalization.
///
/// Order and repeats in the inputs do not matter.
pub fn intersection_size_of_values(a: &[i64], b: &[i64]) -> Result<usize> {
    let a = indices_from_values(a)?;
    let b = indices_from_values(b)?;
    Ok(count_intersection(&a, &b))
}

/// Run one null trial sized by two caller collections.
///
/// Only the *lengths* of `a` and `b` are used: each side is replaced by a
/// fresh uniform sample of the same length from `[0, universe)`, and the size
/// of their intersection is returned. The contents of `a` and `b` never
/// influence the result. Repeated values count toward the length.
///
/// # Errors
///
/// Returns [`MsetError::InvalidRange`] if either length exceeds `universe`,
/// or `universe` is negative or too large.
pub fn trial_from_values<R: Rng + ?Sized>(
    a: &[i64],
    b: &[i64],
    universe: i64,
    rng: &mut R,
) -> Result<usize> {
    let universe = usize::try_from(universe).map_err(|_| {
        MsetError::InvalidRange(format!("universe size {} is negative", universe))
    })?;
    check_range(a.len(), universe)?;
    check_range(b.len(), universe)?;

    let mut sample_a = vec![0u32; a.len()];
    let mut sample_b = vec![0u32; b.len()];
    fill_sorted(&mut sample_a, universe as u32, rng);
    fill_sorted(&mut sample_b, universe as u32, rng);
    Ok(count_intersection(&sample_a, &sample_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng_from_seed;

    fn check(a: &[i64], b: &[i64], expected: usize) {
        assert_eq!(
            intersection_size_of_values(a, b).unwrap(),
            expected,
            "{:?} ∩ {:?}",
            a,
            b
        );
    }

    #[test]
    fn normalized_intersection_sizes() {
        check(&[1, 2, 3], &[2, 3, 4], 2);
        check(&[1, 2, 3], &[4, 5, 6], 0);
        check(&[1, 2, 3], &[1, 2, 3], 3);
        check(&[1, 2, 3], &[3, 2, 1], 3);
        check(&[1, 2, 3], &[1, 2, 2], 2);
        check(&[1, 2, 3], &[1, 1, 1], 1);
        check(&[1, 2, 3], &[1, 1, 1, 2, 2, 2, 3, 3, 3], 3);
        check(&[1, 1, 1, 2, 2, 2, 3, 3, 3], &[1, 2, 3], 3);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            indices_from_values(&[-5]).unwrap_err(),
            MsetError::InvalidRange(_)
        ));
        assert!(matches!(
            indices_from_values(&[u32::MAX as i64 + 1]).unwrap_err(),
            MsetError::InvalidRange(_)
        ));
        assert_eq!(indices_from_values(&[u32::MAX as i64]).unwrap(), vec![u32::MAX]);
    }

    fn mean_trial(a: &[i64], b: &[i64], universe: i64, seed: u64) -> f64 {
        let mut rng = rng_from_seed(seed);
        let n = 20_000;
        let total: usize = (0..n)
            .map(|_| trial_from_values(a, b, universe, &mut rng).unwrap())
            .sum();
        total as f64 / n as f64
    }

    #[test]
    fn trial_uses_lengths_only() {
        // Mean overlap is n1 * n2 / U regardless of the values supplied.
        let m = mean_trial(&[1, 2, 3], &[2, 3, 4], 4, 31);
        assert!((2.0..=3.0).contains(&m), "mean {}", m);
        let m = mean_trial(&[1, 2, 3], &[4, 5, 6], 6, 32);
        assert!((1.0..=2.0).contains(&m), "mean {}", m);
        let m = mean_trial(&[1, 2, 3], &[1, 2, 2], 3, 33);
        assert_eq!(m, 3.0);
        let m = mean_trial(&[1, 2, 3], &[3, 2, 1], 3, 34);
        assert_eq!(m, 3.0);
    }

    #[test]
    fn trial_rejects_lengths_beyond_universe() {
        let mut rng = rng_from_seed(35);
        let long = [1, 1, 1, 2, 2, 2, 3, 3, 3];
        assert!(matches!(
            trial_from_values(&[1, 2, 3], &long, 3, &mut rng).unwrap_err(),
            MsetError::InvalidRange(_)
        ));
        assert!(matches!(
            trial_from_values(&[], &[], -1, &mut rng).unwrap_err(),
            MsetError::InvalidRange(_)
        ));
    }
}
