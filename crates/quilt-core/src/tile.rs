//! The [`Tile`] identity trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Identity contract for the opaque values placed into cells.
///
/// Tiles are compared by structural equality and hashed by value — never by
/// reference identity. Rule sets, weight tables, and per-cell possibility
/// maps all key on tile hash+equality, so both must be stable and
/// consistent.
///
/// Blanket-implemented for every type meeting the bounds; `char`, integer
/// IDs, and small enums are typical choices.
pub trait Tile: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Tile for T {}
