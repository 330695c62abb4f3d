//! Error types for core coordinate operations.

use std::error::Error;
use std::fmt;

/// Errors from componentwise [`Coord`](crate::Coord) arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordError {
    /// The two operands have different dimension counts.
    DimensionMismatch {
        /// Dimension count of the left operand.
        left: usize,
        /// Dimension count of the right operand.
        right: usize,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left}D vs {right}D")
            }
        }
    }
}

impl Error for CoordError {}
