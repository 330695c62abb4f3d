//! Benchmark crate for Quilt.
//!
//! Holds no library code of its own — see the `benches/` directory for the
//! criterion micro-benchmarks covering space operations and full solver
//! runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]
