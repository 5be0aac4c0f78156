//! Shared primitives for the MSET set-overlap toolkit.
//!
//! `mset-core` provides the foundation that the other MSET crates build on:
//!
//! - **Error types** — [`MsetError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] and [`SortedIndices`]

pub mod error;
pub mod traits;

pub use error::{MsetError, Result};
pub use traits::*;
