//! The [`GridRead`] trait: read-only access to values keyed by coordinates.

use crate::space::Space;
use quilt_core::Coord;

/// Read-only view of a value collection laid over a [`Space`].
///
/// This is the seam between storage and consumers that only look at samples:
/// model learning reads example tilings through it, so dense and sparse
/// grids are interchangeable as inputs.
///
/// `get` returns `None` for coordinates with no value — out of bounds for
/// dense storage, unset for sparse storage.
pub trait GridRead<V> {
    /// The space this collection is keyed by.
    fn space(&self) -> &Space;

    /// The value at a canonical coordinate, if present.
    fn get(&self, coord: &Coord) -> Option<&V>;
}
