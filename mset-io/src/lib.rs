//! Ingestion and reporting around the MSET kernel.
//!
//! - **Identifier lists** — [`gene_list`] reads and normalizes one-per-line files
//! - **Universe indexing** — [`universe`] maps identifiers to kernel indices
//! - **Reports** — [`report`] writes histograms and run summaries

pub mod gene_list;
pub mod report;
pub mod universe;

pub use gene_list::{read_gene_list, GeneList};
pub use report::{render_ascii_histogram, RunSummary};
pub use universe::{IndexedList, Universe};
