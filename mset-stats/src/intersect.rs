//! Intersection size of sorted, duplicate-free index sequences.

use mset_core::{MsetError, Result};

/// Count the elements common to `a` and `b` without materializing them.
///
/// Both inputs must be strictly ascending. The precondition is checked with
/// `debug_assert!` only; use [`checked_count_intersection`] for untrusted
/// input.
///
/// Runs in O(|a| + |b|) time and O(1) space.
///
/// # Example
///
/// ```
/// use mset_stats::intersect::count_intersection;
///
/// assert_eq!(count_intersection(&[2, 5, 9], &[5, 9, 20]), 2);
/// ```
pub fn count_intersection(a: &[u32], b: &[u32]) -> usize {
    debug_assert!(is_sorted_distinct(a), "left input not sorted and distinct");
    debug_assert!(is_sorted_distinct(b), "right input not sorted and distinct");

    let (mut i, mut j) = (0, 0);
    let mut count = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Like [`count_intersection`], but validates both inputs first.
///
/// # Errors
///
/// Returns [`MsetError::InvalidInput`] naming the side and position of the
/// first out-of-order or repeated element.
pub fn checked_count_intersection(a: &[u32], b: &[u32]) -> Result<usize> {
    check_sorted_distinct(a, "left")?;
    check_sorted_distinct(b, "right")?;
    Ok(count_intersection(a, b))
}

/// Whether `values` is strictly ascending.
pub fn is_sorted_distinct(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

fn check_sorted_distinct(values: &[u32], side: &str) -> Result<()> {
    if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
        return Err(MsetError::InvalidInput(format!(
            "count_intersection: {} input is not sorted and distinct at position {} ({} then {})",
            side,
            pos + 1,
            values[pos],
            values[pos + 1],
        )));
    }
    Ok(())
}
