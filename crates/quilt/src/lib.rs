//! Quilt: N-dimensional wave function collapse.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Quilt sub-crates. For most users, adding `quilt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quilt::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Learn alternation from a six-cell example.
//! let sample_space = Space::bounded(&[6]).unwrap();
//! let sample =
//!     DenseGrid::from_values(sample_space, vec!['a', 'b', 'a', 'b', 'a', 'b']).unwrap();
//! let model = AdjacencyModel::from_sample(&sample).unwrap();
//!
//! // Synthesize ten cells of it.
//! let solver = Solver::new(Space::bounded(&[10]).unwrap(), &model).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let report = solver.run(&mut rng).unwrap();
//!
//! assert!(report.is_complete());
//! let tiles = report.tiles().unwrap();
//! for pair in tiles.values().windows(2) {
//!     assert_ne!(pair[0], pair[1]);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quilt-core` | [`Coord`](types::Coord), the [`Tile`](types::Tile) trait, core errors |
//! | [`space`] | `quilt-space` | Box spaces, edge behavior, dense/sparse grids |
//! | [`model`] | `quilt-model` | Adjacency rules, direction sets, weights, models |
//! | [`solver`] | `quilt-solver` | The observe/propagate engine and its reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the tile identity trait (`quilt-core`).
pub use quilt_core as types;

/// Box spaces and grid storage (`quilt-space`).
///
/// Provides [`space::Space`], per-axis [`space::EdgeBehavior`], the
/// [`space::GridRead`] seam, and dense/sparse storage.
pub use quilt_space as space;

/// Adjacency models (`quilt-model`).
///
/// Learn a [`model::AdjacencyModel`] from an example with
/// [`model::AdjacencyModel::from_sample`], or assemble one from explicit
/// rules and counts with [`model::AdjacencyModel::from_parts`].
pub use quilt_model as model;

/// The observe/propagate engine (`quilt-solver`).
///
/// [`solver::Solver`] runs the collapse loop and returns a
/// [`solver::SolveReport`] with the terminal wave, verdict, and metrics.
pub use quilt_solver as solver;

/// Common imports for typical Quilt usage.
///
/// ```rust
/// use quilt::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use quilt_core::{Coord, CoordError, Tile};

    // Space and storage
    pub use quilt_space::{DenseGrid, EdgeBehavior, GridRead, Space, SpaceError, SparseGrid};

    // Model
    pub use quilt_model::{AdjacencyModel, AdjacencyRule, DirectionSet, ModelError, TileWeight};

    // Solver
    pub use quilt_solver::{
        SolveMetrics, SolveOptions, SolveReport, Solver, SolverError, Verdict, WaveCell,
    };
}
