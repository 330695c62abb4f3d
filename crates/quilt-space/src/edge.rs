//! Per-axis edge (boundary) behavior.

/// How a space treats coordinates beyond an axis boundary.
///
/// Each axis of a [`Space`](crate::Space) carries its own behavior, so a
/// single space can be periodic along one axis and bounded along another
/// (a cylinder, in two dimensions).
///
/// # Examples
///
/// ```
/// use quilt_core::Coord;
/// use quilt_space::{EdgeBehavior, Space};
///
/// let ring = Space::periodic(&[4]).unwrap();
/// assert!(ring.in_bounds(&Coord::from([7])));
/// assert_eq!(ring.wrap(&Coord::from([7])).unwrap(), Coord::from([3]));
///
/// let line = Space::bounded(&[4]).unwrap();
/// assert!(!line.in_bounds(&Coord::from([7])));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range coordinates along this axis fall outside the space.
    Absorb,
    /// The axis is periodic: coordinates wrap modulo the axis range.
    Wrap,
}
