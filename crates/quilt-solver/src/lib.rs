//! Observe/propagate engine for Quilt.
//!
//! A [`Solver`] pairs an output [`Space`](quilt_space::Space) with an
//! [`AdjacencyModel`](quilt_model::AdjacencyModel) and runs the wave
//! function collapse loop: pick the lowest-entropy undecided cell, collapse
//! it to one tile by weighted random choice, then propagate the banned
//! alternatives to neighbors until quiescence or contradiction.
//!
//! Runs are single-threaded and synchronous; the injected
//! [`rand::Rng`] is the only source of non-determinism, so a seeded RNG
//! reproduces a run bit-for-bit.
//!
//! Contradiction is not an error: every run returns a [`SolveReport`]
//! carrying the terminal wave, and a failed run's wave shows exactly where
//! the possibilities ran out.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod metrics;
pub mod solver;
pub mod support;

pub use cell::WaveCell;
pub use error::SolverError;
pub use metrics::SolveMetrics;
pub use solver::{SolveOptions, SolveReport, Solver, Verdict};
pub use support::SupportCounts;
