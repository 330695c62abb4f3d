//! Reusable sample tilings.
//!
//! Each fixture is a small, fully-characterized input whose learned rules
//! are easy to reason about:
//!
//! - [`stripes_1d`] — strict `a`/`b` alternation on a bounded line.
//! - [`uniform_1d`] — one tile everywhere (zero-entropy model).
//! - [`cycle_periodic_1d`] — a tile cycle on a ring, seam included.
//! - [`checkerboard_2d`] — the 2x2 checker expanded to any size.

use quilt_space::{DenseGrid, Space};

/// A bounded line of alternating `'a'`/`'b'` tiles, starting with `'a'`.
///
/// # Panics
///
/// Panics when `len == 0` (fixtures are test-only).
pub fn stripes_1d(len: i32) -> DenseGrid<char> {
    let space = Space::bounded(&[len]).expect("fixture space");
    DenseGrid::from_fn(space, |coord| if coord[0] % 2 == 0 { 'a' } else { 'b' })
}

/// A bounded line holding `tile` everywhere.
///
/// # Panics
///
/// Panics when `len == 0`.
pub fn uniform_1d(len: i32, tile: char) -> DenseGrid<char> {
    let space = Space::bounded(&[len]).expect("fixture space");
    DenseGrid::filled(space, tile)
}

/// A periodic ring holding `tiles` in order; the seam pair
/// `(last, first)` is an adjacency.
///
/// # Panics
///
/// Panics when `tiles` is empty.
pub fn cycle_periodic_1d(tiles: &[char]) -> DenseGrid<char> {
    let space = Space::periodic(&[tiles.len() as i32]).expect("fixture space");
    DenseGrid::from_values(space, tiles.to_vec()).expect("fixture values")
}

/// A bounded `rows x cols` checkerboard of `'a'`/`'b'` with `'a'` at the
/// origin.
///
/// # Panics
///
/// Panics when either extent is zero.
pub fn checkerboard_2d(rows: i32, cols: i32) -> DenseGrid<char> {
    let space = Space::bounded(&[rows, cols]).expect("fixture space");
    DenseGrid::from_fn(space, |coord| {
        if (coord[0] + coord[1]) % 2 == 0 {
            'a'
        } else {
            'b'
        }
    })
}
