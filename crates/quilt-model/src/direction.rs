//! The set of adjacency offsets derived from a space.

use indexmap::IndexMap;
use quilt_core::Coord;
use quilt_space::{Space, SpaceError};

/// The non-zero adjacency offsets of a space, in canonical order.
///
/// Derived by clamping each axis of the source space to `[-1, +1]` — or to
/// the degenerate `[0, 0]` when the axis has only one cell — while keeping
/// its edge behavior. The zero offset is excluded: it is never an adjacency.
///
/// Offsets are cached with an O(1) reverse index, and each offset's negation
/// is addressable by position: canonical enumeration of a componentwise
/// symmetric box is reversed by negation, so the opposite of offset `i` is
/// offset `len - 1 - i`.
#[derive(Clone, Debug)]
pub struct DirectionSet {
    space: Space,
    offsets: Vec<Coord>,
    index: IndexMap<Coord, usize>,
}

impl DirectionSet {
    /// Derive the direction set of `space`.
    ///
    /// # Errors
    ///
    /// Propagates [`SpaceError`] from constructing the underlying offset box
    /// (possible only for extreme dimension counts).
    pub fn from_space(space: &Space) -> Result<Self, SpaceError> {
        let min: Coord = (0..space.ndim())
            .map(|d| if space.range(d) > 1 { -1 } else { 0 })
            .collect();
        let max: Coord = (0..space.ndim())
            .map(|d| if space.range(d) > 1 { 1 } else { 0 })
            .collect();
        let offset_space = Space::new(min, max, space.edges().iter().copied())?;

        let mut offsets = Vec::with_capacity(offset_space.cell_count().saturating_sub(1));
        let mut index = IndexMap::new();
        for coord in offset_space.iter() {
            if coord.is_zero() {
                continue;
            }
            index.insert(coord.clone(), offsets.len());
            offsets.push(coord);
        }

        Ok(Self {
            space: offset_space,
            offsets,
            index,
        })
    }

    /// The underlying offset box (bounds `[-1, +1]` per live axis).
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Number of spatial dimensions.
    pub fn ndim(&self) -> usize {
        self.space.ndim()
    }

    /// Number of non-zero offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True when the space is fully degenerate (no adjacencies at all).
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offset at position `i`.
    pub fn offset(&self, i: usize) -> &Coord {
        &self.offsets[i]
    }

    /// Position of the negation of the offset at position `i`.
    pub fn opposite(&self, i: usize) -> usize {
        self.offsets.len() - 1 - i
    }

    /// Position of `offset`, or `None` when it is zero or not a member.
    pub fn index_of(&self, offset: &Coord) -> Option<usize> {
        self.index.get(offset).copied()
    }

    /// Iterate over the offsets in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.offsets.iter()
    }
}
