//! Per-(cell, tile) enablement counters.

use smallvec::SmallVec;

/// How many neighbor tiles currently support one tile at one cell, broken
/// down by direction.
///
/// The counter at position `i` — positions follow the model's
/// [`DirectionSet`](quilt_model::DirectionSet) — counts the distinct tiles
/// that, placed in the neighbor cell opposite direction `i`, would permit
/// this tile here. A tile stays locally possible only while every counter
/// is positive.
///
/// Stored as a flat `SmallVec<[i32; 8]>`: the eight offsets of a 2-D model
/// fit inline, higher dimensionalities spill to the heap.
///
/// Counters may go negative: once a cell is exhausted its counters are
/// never consulted again, so propagation does not guard against underflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportCounts {
    counts: SmallVec<[i32; 8]>,
}

impl SupportCounts {
    /// All-zero counters for `len` directions.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            counts: SmallVec::from_elem(0, len),
        }
    }

    /// Number of direction slots.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when there are no direction slots (fully degenerate space).
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The counter for direction position `i`.
    pub fn get(&self, i: usize) -> i32 {
        self.counts[i]
    }

    /// Bump the counter for direction position `i` (model construction).
    pub(crate) fn increment(&mut self, i: usize) {
        self.counts[i] += 1;
    }

    /// Drop the counter for direction position `i` by one, reporting whether
    /// the tile is still possible along that direction.
    pub(crate) fn decrement(&mut self, i: usize) -> bool {
        self.counts[i] -= 1;
        self.counts[i] > 0
    }
}
