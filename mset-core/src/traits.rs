//! Core trait definitions shared across the MSET crates.

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

/// A collection of sorted, distinct indices into a universe.
///
/// Observed sets produced by ingestion implement this so they can be fed
/// straight to the intersection counter.
pub trait SortedIndices {
    /// The indices, strictly ascending.
    fn indices(&self) -> &[u32];

    /// Number of indices.
    fn len(&self) -> usize {
        self.indices().len()
    }

    /// Whether there are no indices.
    fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }
}
