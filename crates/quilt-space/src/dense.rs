//! Dense grid storage: one value per cell, flat and contiguous.

use crate::error::SpaceError;
use crate::grid::GridRead;
use crate::space::Space;
use quilt_core::Coord;

/// Dense storage of exactly `space.cell_count()` values in canonical order.
///
/// Values live in a flat `Vec` indexed by [`Space::canonical_rank`], so
/// access by rank is O(1) and access by coordinate is O(ndim). Deep copy is
/// `Clone`.
///
/// Coordinate access is strict: `get` expects canonical (in-range)
/// coordinates. Callers working with periodic offsets wrap first via
/// [`Space::wrap`].
///
/// # Examples
///
/// ```
/// use quilt_core::Coord;
/// use quilt_space::{DenseGrid, Space};
///
/// let space = Space::bounded(&[2, 2]).unwrap();
/// let grid = DenseGrid::from_values(space, vec!['a', 'b', 'c', 'd']).unwrap();
/// assert_eq!(grid.get(&Coord::from([1, 0])), Some(&'c'));
/// assert_eq!(grid.get(&Coord::from([2, 0])), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid<V> {
    space: Space,
    values: Vec<V>,
}

impl<V> DenseGrid<V> {
    /// A grid with every cell set to `V::default()`.
    pub fn new_default(space: Space) -> Self
    where
        V: Default,
    {
        Self::from_fn(space, |_| V::default())
    }

    /// A grid with every cell set to a clone of `value`.
    pub fn filled(space: Space, value: V) -> Self
    where
        V: Clone,
    {
        let values = vec![value; space.cell_count()];
        Self { space, values }
    }

    /// A grid filled by evaluating `f` at every cell, in canonical order.
    pub fn from_fn(space: Space, mut f: impl FnMut(&Coord) -> V) -> Self {
        let values: Vec<V> = space.iter().map(|coord| f(&coord)).collect();
        Self { space, values }
    }

    /// A grid built from a flat sequence in canonical enumeration order.
    ///
    /// # Errors
    ///
    /// [`SpaceError::LengthMismatch`] unless `values.len() == space.cell_count()`.
    pub fn from_values(space: Space, values: Vec<V>) -> Result<Self, SpaceError> {
        if values.len() != space.cell_count() {
            return Err(SpaceError::LengthMismatch {
                expected: space.cell_count(),
                actual: values.len(),
            });
        }
        Ok(Self { space, values })
    }

    /// The space this grid is keyed by.
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// The value at a canonical coordinate, or `None` when out of range.
    pub fn get(&self, coord: &Coord) -> Option<&V> {
        let rank = self.space.canonical_rank(coord)?;
        self.values.get(rank)
    }

    /// Mutable access to the value at a canonical coordinate.
    pub fn get_mut(&mut self, coord: &Coord) -> Option<&mut V> {
        let rank = self.space.canonical_rank(coord)?;
        self.values.get_mut(rank)
    }

    /// The value at a canonical rank.
    pub fn get_rank(&self, rank: usize) -> Option<&V> {
        self.values.get(rank)
    }

    /// Mutable access to the value at a canonical rank.
    pub fn get_rank_mut(&mut self, rank: usize) -> Option<&mut V> {
        self.values.get_mut(rank)
    }

    /// All values in canonical order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate over `(coordinate, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &V)> + '_ {
        self.space.iter().zip(self.values.iter())
    }
}

impl<V> GridRead<V> for DenseGrid<V> {
    fn space(&self) -> &Space {
        &self.space
    }

    fn get(&self, coord: &Coord) -> Option<&V> {
        DenseGrid::get(self, coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeBehavior;

    fn c(components: &[i32]) -> Coord {
        Coord::from(components)
    }

    #[test]
    fn from_values_in_enumeration_order() {
        let space = Space::bounded(&[2, 3]).unwrap();
        let grid = DenseGrid::from_values(space, (0..6).collect()).unwrap();
        assert_eq!(grid.get(&c(&[0, 0])), Some(&0));
        assert_eq!(grid.get(&c(&[0, 2])), Some(&2));
        assert_eq!(grid.get(&c(&[1, 1])), Some(&4));
    }

    #[test]
    fn from_values_rejects_wrong_length() {
        let space = Space::bounded(&[2, 3]).unwrap();
        let err = DenseGrid::from_values(space, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            SpaceError::LengthMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_fn_sees_coordinates() {
        let space = Space::bounded(&[3]).unwrap();
        let grid = DenseGrid::from_fn(space, |coord| coord[0] * 10);
        assert_eq!(grid.values(), &[0, 10, 20]);
    }

    #[test]
    fn filled_and_default() {
        let space = Space::bounded(&[2, 2]).unwrap();
        let grid = DenseGrid::filled(space.clone(), 7u8);
        assert_eq!(grid.values(), &[7, 7, 7, 7]);

        let grid: DenseGrid<u8> = DenseGrid::new_default(space);
        assert_eq!(grid.values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let space = Space::bounded(&[2]).unwrap();
        let mut grid = DenseGrid::filled(space, 0);
        *grid.get_mut(&c(&[1])).unwrap() = 9;
        assert_eq!(grid.values(), &[0, 9]);
    }

    #[test]
    fn get_is_strict_about_bounds() {
        let space = Space::new(c(&[0]), c(&[2]), [EdgeBehavior::Wrap]).unwrap();
        let grid = DenseGrid::from_values(space, vec!['a', 'b', 'c']).unwrap();
        // Periodic axis, but access is by canonical coordinate only.
        assert_eq!(grid.get(&c(&[3])), None);
        assert_eq!(grid.get(&c(&[-1])), None);
        assert_eq!(grid.get(&c(&[2])), Some(&'c'));
    }

    #[test]
    fn deep_copy_is_independent() {
        let space = Space::bounded(&[2]).unwrap();
        let mut original = DenseGrid::filled(space, 1);
        let copy = original.clone();
        *original.get_mut(&c(&[0])).unwrap() = 5;
        assert_eq!(copy.values(), &[1, 1]);
    }

    #[test]
    fn iter_pairs_coords_with_values() {
        let space = Space::bounded(&[2, 2]).unwrap();
        let grid = DenseGrid::from_values(space, vec![10, 11, 12, 13]).unwrap();
        let pairs: Vec<(Coord, i32)> = grid.iter().map(|(c, &v)| (c, v)).collect();
        assert_eq!(pairs[0], (c(&[0, 0]), 10));
        assert_eq!(pairs[3], (c(&[1, 1]), 13));
    }
}
