//! The tile capability traits.
//!
//! The engines in `tilegrid-queries` and `tilegrid-paths` never own tiles.
//! They observe a host-owned grid through [`TileGrid`], which hands out
//! optional references to values implementing [`Tile`]. Both traits are
//! object-free seams: the algorithms are generic over the concrete types
//! and never downcast.

use crate::geom::{Point, Range};

/// A grid cell's tile: integer identity plus movement attributes.
pub trait Tile {
    /// Column coordinate.
    fn x(&self) -> i32;

    /// Row coordinate.
    fn y(&self) -> i32;

    /// Whether the tile can be entered at all.
    fn is_walkable(&self) -> bool;

    /// Cost multiplier for entering the tile. Must be ≥ 1.
    fn weight(&self) -> f32;

    /// Position as a [`Point`].
    #[inline]
    fn pos(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

/// A fixed-size rectangular arrangement of optional tiles, addressed by
/// (row = y, column = x).
///
/// The grid is externally owned and mutable; the engines only read a
/// snapshot of it and are never notified of later edits. Callers rebuild
/// any derived structure (such as a path map) after a walkability or
/// weight change.
pub trait TileGrid {
    /// The concrete tile type.
    type Tile: Tile;

    /// The bounding rectangle of the grid.
    fn bounds(&self) -> Range;

    /// The tile at `p`, or `None` if the cell is empty or out of bounds.
    fn tile(&self, p: Point) -> Option<&Self::Tile>;

    /// Whether `p` lies within the grid bounds.
    #[inline]
    fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether the cell at `p` holds a walkable tile.
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_walkable)
    }
}

impl<G: TileGrid> TileGrid for &G {
    type Tile = G::Tile;

    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn tile(&self, p: Point) -> Option<&Self::Tile> {
        (**self).tile(p)
    }
}
