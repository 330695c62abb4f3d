//! Error types for space construction and spatial queries.

use quilt_core::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from space construction or grid storage.
#[derive(Clone, Debug, PartialEq)]
pub enum SpaceError {
    /// A coordinate or axis list has the wrong number of dimensions.
    DimensionMismatch {
        /// Dimension count the space expects.
        expected: usize,
        /// Dimension count actually supplied.
        actual: usize,
    },
    /// An axis lower bound exceeds its upper bound.
    RangeInverted {
        /// Index of the offending axis.
        axis: usize,
        /// Lower bound along that axis.
        min: i32,
        /// Upper bound along that axis.
        max: i32,
    },
    /// An axis range does not fit in `i32`.
    RangeTooLarge {
        /// Index of the offending axis.
        axis: usize,
    },
    /// The total cell count overflows `usize`.
    CellCountOverflow,
    /// A flat value sequence has the wrong number of elements.
    LengthMismatch {
        /// Cell count of the target space.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid region.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}D, got {actual}D")
            }
            Self::RangeInverted { axis, min, max } => {
                write!(f, "axis {axis} range inverted: min {min} > max {max}")
            }
            Self::RangeTooLarge { axis } => {
                write!(f, "axis {axis} range exceeds i32")
            }
            Self::CellCountOverflow => write!(f, "total cell count overflows usize"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for SpaceError {}
