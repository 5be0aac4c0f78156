//! Uniform sampling without replacement into sorted buffers.
//!
//! A k-subset of `[0, U)` is built one order statistic at a time: at step `i`
//! a candidate is drawn from `[0, U - 1 - i]` and merged into the `i` values
//! already placed, bumping the candidate past every placed value that is not
//! larger than it. The buffer is sorted and duplicate-free after every step,
//! so the finished sample never needs a separate sort.
//!
//! Cost is O(k²) in the worst case because of the insertion shift, with no
//! allocation beyond the output buffer.

use mset_core::{MsetError, Result};
use rand::Rng;

/// Largest universe whose indices fit in a `u32` sample element.
pub const MAX_UNIVERSE: usize = u32::MAX as usize;

/// Validate a (sample size, universe size) pair.
pub(crate) fn check_range(k: usize, universe: usize) -> Result<()> {
    if universe > MAX_UNIVERSE {
        return Err(MsetError::InvalidRange(format!(
            "universe size {} exceeds the maximum of {}",
            universe, MAX_UNIVERSE,
        )));
    }
    if k > universe {
        return Err(MsetError::InvalidRange(format!(
            "sample size {} exceeds universe size {}",
            k, universe,
        )));
    }
    Ok(())
}

/// Overwrite `buf` with a uniformly random subset of `[0, universe)` of size
/// `buf.len()`, in strictly ascending order.
///
/// Every one of the C(U, k) subsets is equally likely. Whatever `buf` held
/// before the call is discarded.
///
/// # Errors
///
/// Returns [`MsetError::InvalidRange`] if `buf.len() > universe` or the
/// universe does not fit the `u32` index type. `buf` is left untouched.
///
/// # Example
///
/// ```
/// use mset_stats::rng::rng_from_seed;
/// use mset_stats::sample::overwrite_with_sample;
///
/// let mut rng = rng_from_seed(42);
/// let mut buf = vec![0u32; 4];
/// overwrite_with_sample(&mut buf, 10, &mut rng).unwrap();
/// assert!(buf.windows(2).all(|w| w[0] < w[1]));
/// assert!(buf.iter().all(|&x| x < 10));
/// ```
pub fn overwrite_with_sample<R: Rng + ?Sized>(
    buf: &mut [u32],
    universe: usize,
    rng: &mut R,
) -> Result<()> {
    let k = buf.len();
    check_range(k, universe)?;
    fill_sorted(buf, universe as u32, rng);
    Ok(())
}

/// Draw a fresh, owned sorted sample of size `k` from `[0, universe)`.
///
/// # Errors
///
/// Same conditions as [`overwrite_with_sample`].
///
/// # Example
///
/// ```
/// use mset_stats::rng::rng_from_seed;
/// use mset_stats::sample::sample;
///
/// let mut rng = rng_from_seed(7);
/// let s = sample(3, 3, &mut rng).unwrap();
/// assert_eq!(s, vec![0, 1, 2]);
/// ```
pub fn sample<R: Rng + ?Sized>(k: usize, universe: usize, rng: &mut R) -> Result<Vec<u32>> {
    check_range(k, universe)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(k)?;
    buf.resize(k, 0);
    fill_sorted(&mut buf, universe as u32, rng);
    Ok(buf)
}

/// Insertion kernel. Caller guarantees `buf.len() <= universe`.
#[inline]
pub(crate) fn fill_sorted<R: Rng + ?Sized>(buf: &mut [u32], universe: u32, rng: &mut R) {
    let k = buf.len();
    for i in 0..k {
        // Range shrinks by one for each value already placed.
        let mut val = rng.random_range(0..universe - i as u32);
        let mut j = 0;
        while j < i {
            if buf[j] > val {
                buf.copy_within(j..i, j + 1);
                break;
            }
            val += 1;
            j += 1;
        }
        buf[j] = val;
    }
}
