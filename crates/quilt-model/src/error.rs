//! Error types for adjacency model construction.

use quilt_core::{Coord, CoordError};
use quilt_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from building an [`AdjacencyModel`](crate::AdjacencyModel).
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// The sample (or explicit tile counts) contained no tiles.
    EmptySample,
    /// An explicit rule's direction has the wrong number of dimensions.
    DimensionMismatch {
        /// Dimension count of the model's space.
        expected: usize,
        /// Dimension count of the offending direction.
        actual: usize,
    },
    /// An explicit rule's direction is zero or outside the direction set.
    InvalidDirection {
        /// The offending direction offset.
        direction: Coord,
    },
    /// An explicit rule names a tile with no occurrence count.
    MissingWeight {
        /// Debug rendering of the offending tile.
        tile: String,
    },
    /// A coordinate operation failed while scanning the sample.
    Coord(CoordError),
    /// A space operation failed while deriving the direction set.
    Space(SpaceError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "sample contains no tiles"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "rule direction dimension mismatch: expected {expected}D, got {actual}D"
                )
            }
            Self::InvalidDirection { direction } => {
                write!(f, "rule direction {direction} is not a valid adjacency offset")
            }
            Self::MissingWeight { tile } => {
                write!(f, "rule references tile {tile} with no occurrence count")
            }
            Self::Coord(err) => write!(f, "coordinate error: {err}"),
            Self::Space(err) => write!(f, "space error: {err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coord(err) => Some(err),
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoordError> for ModelError {
    fn from(err: CoordError) -> Self {
        Self::Coord(err)
    }
}

impl From<SpaceError> for ModelError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}
