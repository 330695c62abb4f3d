//! The [`Space`] box-space type: bounds, wrapping, flat indexing, iteration.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use quilt_core::Coord;
use smallvec::SmallVec;

/// An axis-aligned box in ℤⁿ with per-axis [`EdgeBehavior`].
///
/// Immutable once constructed. Ranges, row-major strides, and the total cell
/// count are derived at construction time and memoized, so bounds tests,
/// wrapping, and flat indexing are all O(ndim).
///
/// # Examples
///
/// ```
/// use quilt_core::Coord;
/// use quilt_space::{EdgeBehavior, Space};
///
/// // A 4x3 box, periodic along the second axis.
/// let space = Space::new(
///     Coord::from([0, 0]),
///     Coord::from([3, 2]),
///     [EdgeBehavior::Absorb, EdgeBehavior::Wrap],
/// )
/// .unwrap();
///
/// assert_eq!(space.cell_count(), 12);
/// assert!(space.in_bounds(&Coord::from([3, -7])));
/// assert_eq!(space.wrap(&Coord::from([3, -7])).unwrap(), Coord::from([3, 2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    min: Coord,
    max: Coord,
    edges: SmallVec<[EdgeBehavior; 4]>,
    ranges: SmallVec<[i32; 4]>,
    strides: SmallVec<[usize; 4]>,
    cell_count: usize,
}

impl Space {
    /// Create a space from per-axis bounds (both inclusive) and edge behavior.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::DimensionMismatch`] when the lengths of `min`, `max`,
    ///   and `edges` disagree.
    /// - [`SpaceError::RangeInverted`] when some `min[d] > max[d]`.
    /// - [`SpaceError::RangeTooLarge`] when an axis range exceeds `i32`.
    /// - [`SpaceError::CellCountOverflow`] when the cell count overflows.
    pub fn new(
        min: Coord,
        max: Coord,
        edges: impl IntoIterator<Item = EdgeBehavior>,
    ) -> Result<Self, SpaceError> {
        let edges: SmallVec<[EdgeBehavior; 4]> = edges.into_iter().collect();
        if min.ndim() != max.ndim() {
            return Err(SpaceError::DimensionMismatch {
                expected: min.ndim(),
                actual: max.ndim(),
            });
        }
        if edges.len() != min.ndim() {
            return Err(SpaceError::DimensionMismatch {
                expected: min.ndim(),
                actual: edges.len(),
            });
        }

        let ndim = min.ndim();
        let mut ranges: SmallVec<[i32; 4]> = SmallVec::with_capacity(ndim);
        for d in 0..ndim {
            let (lo, hi) = (min[d], max[d]);
            if lo > hi {
                return Err(SpaceError::RangeInverted {
                    axis: d,
                    min: lo,
                    max: hi,
                });
            }
            let range = i64::from(hi) - i64::from(lo) + 1;
            if range > i64::from(i32::MAX) {
                return Err(SpaceError::RangeTooLarge { axis: d });
            }
            ranges.push(range as i32);
        }

        // Row-major strides: last axis innermost. Overflow-checked product.
        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, ndim);
        let mut cell_count: usize = 1;
        for d in (0..ndim).rev() {
            strides[d] = cell_count;
            cell_count = cell_count
                .checked_mul(ranges[d] as usize)
                .ok_or(SpaceError::CellCountOverflow)?;
        }

        Ok(Self {
            min,
            max,
            edges,
            ranges,
            strides,
            cell_count,
        })
    }

    /// A non-periodic box from the origin: axis `d` spans `[0, extents[d] - 1]`.
    pub fn bounded(extents: &[i32]) -> Result<Self, SpaceError> {
        Self::from_extents(extents, EdgeBehavior::Absorb)
    }

    /// A fully periodic box from the origin: axis `d` spans `[0, extents[d] - 1]`
    /// and wraps.
    pub fn periodic(extents: &[i32]) -> Result<Self, SpaceError> {
        Self::from_extents(extents, EdgeBehavior::Wrap)
    }

    fn from_extents(extents: &[i32], edge: EdgeBehavior) -> Result<Self, SpaceError> {
        let min = Coord::zero(extents.len());
        let max: Coord = extents.iter().map(|&e| e - 1).collect();
        let edges = std::iter::repeat(edge).take(extents.len());
        Self::new(min, max, edges)
    }

    /// Number of spatial dimensions.
    pub fn ndim(&self) -> usize {
        self.min.ndim()
    }

    /// Total number of cells in the space.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Per-axis lower bounds (inclusive).
    pub fn min(&self) -> &Coord {
        &self.min
    }

    /// Per-axis upper bounds (inclusive).
    pub fn max(&self) -> &Coord {
        &self.max
    }

    /// Number of distinct values along axis `d`.
    pub fn range(&self, d: usize) -> i32 {
        self.ranges[d]
    }

    /// Edge behavior along axis `d`.
    pub fn edge(&self, d: usize) -> EdgeBehavior {
        self.edges[d]
    }

    /// Edge behavior of every axis, in axis order.
    pub fn edges(&self) -> &[EdgeBehavior] {
        &self.edges
    }

    /// True when every axis wraps.
    pub fn is_fully_periodic(&self) -> bool {
        self.edges.iter().all(|&e| e == EdgeBehavior::Wrap)
    }

    /// True iff `coord` has matching dimensionality and every
    /// [`Absorb`](EdgeBehavior::Absorb) axis satisfies
    /// `min[d] <= coord[d] <= max[d]`. Periodic axes accept any integer.
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        if coord.ndim() != self.ndim() {
            return false;
        }
        (0..self.ndim()).all(|d| match self.edges[d] {
            EdgeBehavior::Wrap => true,
            EdgeBehavior::Absorb => self.min[d] <= coord[d] && coord[d] <= self.max[d],
        })
    }

    /// Canonicalize `coord`: each periodic axis wraps into `[min[d], max[d]]`
    /// via mathematical modulo (`rem_euclid`, always non-negative offset);
    /// non-periodic axes pass through unchanged.
    ///
    /// Callers needing a bounds guarantee on non-periodic axes test
    /// [`in_bounds`](Self::in_bounds) separately.
    ///
    /// # Errors
    ///
    /// [`SpaceError::DimensionMismatch`] when `coord` has the wrong arity.
    pub fn wrap(&self, coord: &Coord) -> Result<Coord, SpaceError> {
        if coord.ndim() != self.ndim() {
            return Err(SpaceError::DimensionMismatch {
                expected: self.ndim(),
                actual: coord.ndim(),
            });
        }
        Ok((0..self.ndim())
            .map(|d| match self.edges[d] {
                EdgeBehavior::Wrap => (coord[d] - self.min[d]).rem_euclid(self.ranges[d]) + self.min[d],
                EdgeBehavior::Absorb => coord[d],
            })
            .collect())
    }

    /// Position of an in-range coordinate in the canonical ordering.
    ///
    /// Returns `None` when the arity disagrees or any component lies outside
    /// `[min[d], max[d]]` — wrap periodic coordinates first.
    pub fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        if coord.ndim() != self.ndim() {
            return None;
        }
        let mut rank = 0usize;
        for d in 0..self.ndim() {
            let offset = coord[d].checked_sub(self.min[d])?;
            if offset < 0 || offset >= self.ranges[d] {
                return None;
            }
            rank += offset as usize * self.strides[d];
        }
        Some(rank)
    }

    /// The coordinate at position `rank` in the canonical ordering, or
    /// `None` when `rank >= cell_count`.
    pub fn coord_at(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count {
            return None;
        }
        let mut remainder = rank;
        Some(
            (0..self.ndim())
                .map(|d| {
                    let q = remainder / self.strides[d];
                    remainder %= self.strides[d];
                    self.min[d] + q as i32
                })
                .collect(),
        )
    }

    /// Enumerate all cells in canonical order: first axis slowest, last axis
    /// fastest. Pure and restartable.
    pub fn iter(&self) -> CoordIter<'_> {
        CoordIter {
            space: self,
            next: if self.cell_count > 0 {
                Some(self.min.clone())
            } else {
                None
            },
        }
    }

    /// All cells in canonical order, materialized.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        self.iter().collect()
    }

    /// Human-readable description of the per-axis bounds, for error reports.
    pub(crate) fn describe_bounds(&self) -> String {
        (0..self.ndim())
            .map(|d| format!("[{}, {}]", self.min[d], self.max[d]))
            .collect::<Vec<_>>()
            .join(" x ")
    }
}

/// Iterator over the cells of a [`Space`] in canonical order.
///
/// Returned by [`Space::iter`].
#[derive(Clone, Debug)]
pub struct CoordIter<'a> {
    space: &'a Space,
    next: Option<Coord>,
}

impl Iterator for CoordIter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next.take()?;
        // Odometer increment: bump the last axis, carrying leftward.
        let mut components: SmallVec<[i32; 4]> = SmallVec::from_slice(current.components());
        for d in (0..self.space.ndim()).rev() {
            if components[d] < self.space.max[d] {
                components[d] += 1;
                self.next = Some(components.into_iter().collect());
                return Some(current);
            }
            components[d] = self.space.min[d];
        }
        // Carried past the first axis: enumeration is complete.
        Some(current)
    }
}
