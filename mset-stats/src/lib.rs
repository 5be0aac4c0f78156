//! Monte Carlo kernel for set-overlap significance testing.
//!
//! Given a universe of `U` indices and two set sizes, the kernel builds the
//! null distribution of their intersection size by repeatedly drawing random
//! sets and counting the overlap:
//!
//! - **Sampling** — [`sample::sample`] draws a sorted k-subset without replacement
//! - **Intersection** — [`intersect::count_intersection`] counts common elements in linear time
//! - **Trials** — [`trial::run_trials`] and [`trial::TrialRunner`] repeat draws with reused buffers
//! - **Histograms** — [`histogram::build_histogram`] turns trial results into a mass function
//! - **Boundary** — [`boundary`] converts caller-supplied integers into kernel sequences

pub mod boundary;
pub mod config;
pub mod histogram;
pub mod intersect;
pub mod rng;
pub mod sample;
pub mod trial;

pub use config::SimulationConfig;
pub use histogram::{build_histogram, Histogram, HistogramBuilder};
pub use intersect::count_intersection;
pub use rng::Seed;
pub use sample::{overwrite_with_sample, sample};
pub use trial::{run_trials, run_trials_parallel, TrialRunner};
