//! Error types for solver construction and execution.

use quilt_core::CoordError;
use quilt_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from [`Solver`](crate::Solver) construction or a run.
///
/// Note that contradiction — a cell running out of possibilities — is *not*
/// represented here. It is an expected outcome, reported as
/// [`Verdict::Contradiction`](crate::Verdict) together with the partial wave.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The model and the output space disagree on dimensionality.
    DimensionMismatch {
        /// Dimension count of the model.
        model: usize,
        /// Dimension count of the output space.
        output: usize,
    },
    /// A ban was issued for a tile not among a cell's possibilities.
    /// Indicates an internal invariant violation.
    UnknownTile {
        /// Debug rendering of the offending tile.
        tile: String,
    },
    /// A weighted pick was attempted over zero total weight.
    /// Indicates an internal invariant violation.
    ZeroTotalWeight,
    /// A space operation failed during the run.
    Space(SpaceError),
    /// A coordinate operation failed during the run.
    Coord(CoordError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { model, output } => {
                write!(
                    f,
                    "model is {model}D but output space is {output}D"
                )
            }
            Self::UnknownTile { tile } => {
                write!(f, "ban of tile {tile} not among the cell's possibilities")
            }
            Self::ZeroTotalWeight => write!(f, "weighted pick over zero total weight"),
            Self::Space(err) => write!(f, "space error: {err}"),
            Self::Coord(err) => write!(f, "coordinate error: {err}"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            Self::Coord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for SolverError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}

impl From<CoordError> for SolverError {
    fn from(err: CoordError) -> Self {
        Self::Coord(err)
    }
}
