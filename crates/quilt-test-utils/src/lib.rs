//! Test utilities for Quilt development.
//!
//! Canonical sample tilings shared by integration tests and benches, so
//! scenarios reference one fixture instead of re-building grids inline.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{checkerboard_2d, cycle_periodic_1d, stripes_1d, uniform_1d};
