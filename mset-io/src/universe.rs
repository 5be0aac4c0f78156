//! Mapping identifiers to universe indices.
//!
//! The universe assigns index `i` to its `i`-th identifier in sorted order.
//! Because [`GeneList`]s are sorted too, indexing a list is a single merge
//! walk that emits indices already in ascending order.

use std::cmp::Ordering;

use mset_core::{MsetError, Result, SortedIndices};
use mset_stats::sample::MAX_UNIVERSE;
use tracing::warn;

use crate::gene_list::GeneList;

/// The population every sampled set is drawn from.
#[derive(Debug, Clone)]
pub struct Universe {
    ids: GeneList,
}

/// A list expressed as universe indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexedList {
    /// Indices of identifiers found in the universe, strictly ascending.
    pub indices: Vec<u32>,
    /// Identifiers absent from the universe, in sorted order.
    pub missing: Vec<String>,
}

impl SortedIndices for IndexedList {
    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl Universe {
    /// Build a universe from a normalized identifier list.
    ///
    /// # Errors
    ///
    /// Returns [`MsetError::InvalidInput`] if the list is empty and
    /// [`MsetError::InvalidRange`] if it has more identifiers than the index
    /// type can address.
    pub fn from_gene_list(ids: GeneList) -> Result<Self> {
        if ids.is_empty() {
            return Err(MsetError::InvalidInput(
                "universe: identifier list is empty".into(),
            ));
        }
        if ids.len() > MAX_UNIVERSE {
            return Err(MsetError::InvalidRange(format!(
                "universe: {} identifiers exceed the maximum of {}",
                ids.len(),
                MAX_UNIVERSE,
            )));
        }
        Ok(Self { ids })
    }

    /// Number of identifiers (U).
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Index of a normalized identifier.
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.ids
            .ids()
            .binary_search_by(|probe| probe.as_str().cmp(id))
            .ok()
            .map(|i| i as u32)
    }

    /// Identifier at `index`.
    pub fn id_at(&self, index: u32) -> Option<&str> {
        self.ids.ids().get(index as usize).map(String::as_str)
    }

    /// Map every identifier in `list` to its universe index.
    ///
    /// Identifiers not in the universe are reported in
    /// [`IndexedList::missing`] and logged at `warn` level.
    ///
    /// # Example
    ///
    /// ```
    /// use mset_io::gene_list::GeneList;
    /// use mset_io::universe::Universe;
    ///
    /// let universe = Universe::from_gene_list(GeneList::parse_str("a\nb\nc\nd")).unwrap();
    /// let indexed = universe.index(&GeneList::parse_str("d\nb\nz"));
    /// assert_eq!(indexed.indices, vec![1, 3]);
    /// assert_eq!(indexed.missing, vec!["Z".to_string()]);
    /// ```
    pub fn index(&self, list: &GeneList) -> IndexedList {
        let universe = self.ids.ids();
        let wanted = list.ids();
        let mut out = IndexedList {
            indices: Vec::with_capacity(wanted.len().min(universe.len())),
            missing: Vec::new(),
        };

        let (mut i, mut j) = (0, 0);
        while j < wanted.len() {
            if i == universe.len() {
                out.missing.extend(wanted[j..].iter().cloned());
                break;
            }
            match universe[i].cmp(&wanted[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => {
                    out.missing.push(wanted[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    out.indices.push(i as u32);
                    i += 1;
                    j += 1;
                }
            }
        }

        if !out.missing.is_empty() {
            warn!(
                missing = out.missing.len(),
                kept = out.indices.len(),
                "identifiers not found in universe were dropped"
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mset_stats::intersect::is_sorted_distinct;

    fn universe(text: &str) -> Universe {
        Universe::from_gene_list(GeneList::parse_str(text)).unwrap()
    }

    #[test]
    fn empty_universe_rejected() {
        let err = Universe::from_gene_list(GeneList::default()).unwrap_err();
        assert!(matches!(err, MsetError::InvalidInput(_)));
    }

    #[test]
    fn indices_follow_sorted_order() {
        let u = universe("gamma\nalpha\nbeta");
        assert_eq!(u.size(), 3);
        assert_eq!(u.index_of("ALPHA"), Some(0));
        assert_eq!(u.index_of("GAMMA"), Some(2));
        assert_eq!(u.index_of("DELTA"), None);
        assert_eq!(u.id_at(1), Some("BETA"));
        assert_eq!(u.id_at(3), None);
    }

    #[test]
    fn index_is_sorted_and_reports_missing() {
        let u = universe("g1\ng2\ng3\ng4\ng5\ng6");
        let indexed = u.index(&GeneList::parse_str("g6\ng0\ng2\ng9\ng4"));
        assert_eq!(indexed.indices, vec![1, 3, 5]);
        assert_eq!(indexed.missing, vec!["G0".to_string(), "G9".to_string()]);
        assert!(is_sorted_distinct(&indexed.indices));
        assert_eq!(SortedIndices::len(&indexed), 3);
    }

    #[test]
    fn index_matches_lookup() {
        let u = universe("a\nb\nc\nd\ne\nf\ng");
        let list = GeneList::parse_str("c\ng\na\nq");
        let indexed = u.index(&list);
        let expected: Vec<u32> = list.ids().iter().filter_map(|id| u.index_of(id)).collect();
        assert_eq!(indexed.indices, expected);
    }

    #[test]
    fn empty_list_indexes_to_nothing() {
        let u = universe("a\nb");
        let indexed = u.index(&GeneList::default());
        assert!(indexed.indices.is_empty());
        assert!(indexed.missing.is_empty());
    }
}
