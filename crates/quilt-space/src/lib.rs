//! N-dimensional box spaces and grid storage for Quilt.
//!
//! This crate defines [`Space`] — an axis-aligned box in ℤⁿ with per-axis
//! [`EdgeBehavior`] — along with dense and sparse value storage keyed by its
//! coordinates and the [`GridRead`] trait that model learning reads samples
//! through.
//!
//! # Canonical ordering
//!
//! [`Space::iter`] enumerates cells with the first axis varying slowest and
//! the last axis fastest. This order is a public contract:
//! [`DenseGrid::from_values`] consumes flat sequences in it, and
//! [`Space::canonical_rank`] / [`Space::coord_at`] form a bijection between
//! in-range coordinates and `[0, cell_count)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod edge;
pub mod error;
pub mod grid;
pub mod space;
pub mod sparse;

pub use dense::DenseGrid;
pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::GridRead;
pub use space::{CoordIter, Space};
pub use sparse::SparseGrid;
